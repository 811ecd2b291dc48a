//! Tooltip styling.

use m3_core::{Color, Edges, TextStyle, UiError, UiResult};
use serde::{Deserialize, Serialize};

use crate::validate;

/// Plain tooltips carry one line of body text; rich tooltips add a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TooltipVariant {
    /// Body text only.
    #[default]
    Plain,
    /// Title above body text.
    Rich,
}

impl TryFrom<u32> for TooltipVariant {
    type Error = UiError;

    fn try_from(code: u32) -> UiResult<Self> {
        match code {
            1 => Ok(Self::Plain),
            2 => Ok(Self::Rich),
            _ => Err(UiError::Range("unknown tooltip variant")),
        }
    }
}

/// Tooltip style.
///
/// Plain tooltips draw with `text_style`; rich tooltips use `title_style`
/// and `body_style`. A zero maximum means unbounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipStyle {
    /// Variant.
    pub variant: TooltipVariant,
    /// Insets around the content.
    pub padding: Edges,
    /// Minimum width.
    pub min_width: f32,
    /// Minimum height.
    pub min_height: f32,
    /// Maximum width, 0 for none.
    pub max_width: f32,
    /// Maximum height, 0 for none.
    pub max_height: f32,
    /// Corner radius of the container.
    pub corner_radius: f32,
    /// Gap between the anchor and the tooltip.
    pub anchor_gap: f32,
    /// Gap between title and body.
    pub title_body_spacing: f32,
    /// Plain tooltip text.
    pub text_style: TextStyle,
    /// Rich tooltip title.
    pub title_style: TextStyle,
    /// Rich tooltip body.
    pub body_style: TextStyle,
    /// Container fill.
    pub background_color: Color,
}

impl TooltipStyle {
    /// Default gap to the anchor.
    pub const DEFAULT_ANCHOR_GAP: f32 = 4.0;
    /// Default title to body gap.
    pub const DEFAULT_TITLE_BODY_SPACING: f32 = 4.0;

    /// Dark single-line tooltip.
    #[must_use]
    pub fn plain() -> Self {
        let text_style = TextStyle {
            size_px: 12,
            weight: 400,
            color: Color::rgb(0.957, 0.937, 0.957),
            ..TextStyle::default()
        };
        Self {
            variant: TooltipVariant::Plain,
            padding: Edges::symmetric(8.0, 4.0),
            min_width: 0.0,
            min_height: 24.0,
            max_width: 0.0,
            max_height: 0.0,
            corner_radius: 4.0,
            anchor_gap: Self::DEFAULT_ANCHOR_GAP,
            title_body_spacing: Self::DEFAULT_TITLE_BODY_SPACING,
            title_style: text_style.clone(),
            body_style: text_style.clone(),
            text_style,
            background_color: Color::rgb(0.192, 0.188, 0.2),
        }
    }

    /// Light tooltip with a title and body.
    #[must_use]
    pub fn rich() -> Self {
        let on_surface = Color::rgb(0.114, 0.106, 0.125);
        let body_style = TextStyle {
            size_px: 14,
            weight: 400,
            color: on_surface,
            ..TextStyle::default()
        };
        Self {
            variant: TooltipVariant::Rich,
            padding: Edges::symmetric(12.0, 8.0),
            min_width: 0.0,
            min_height: 40.0,
            max_width: 0.0,
            max_height: 0.0,
            corner_radius: 8.0,
            anchor_gap: Self::DEFAULT_ANCHOR_GAP,
            title_body_spacing: Self::DEFAULT_TITLE_BODY_SPACING,
            title_style: TextStyle {
                weight: 500,
                ..body_style.clone()
            },
            text_style: body_style.clone(),
            body_style,
            background_color: Color::WHITE,
        }
    }

    /// Text styles the variant draws with, in font creation order.
    #[must_use]
    pub fn active_text_styles(&self) -> Vec<&TextStyle> {
        match self.variant {
            TooltipVariant::Plain => vec![&self.text_style],
            TooltipVariant::Rich => vec![&self.title_style, &self.body_style],
        }
    }

    /// Checks dimensions, padding, the variant's text styles and the fill.
    ///
    /// # Errors
    ///
    /// `Range` for negative values or a maximum below its minimum;
    /// `InvalidArgument` for a missing family when one is required.
    pub fn validate(&self, require_family: bool) -> UiResult<()> {
        validate::non_negative(&[
            (self.min_width, "tooltip min width"),
            (self.min_height, "tooltip min height"),
            (self.max_width, "tooltip max width"),
            (self.max_height, "tooltip max height"),
            (self.corner_radius, "tooltip corner radius"),
            (self.anchor_gap, "tooltip anchor gap"),
            (self.title_body_spacing, "tooltip title spacing"),
        ])?;
        if self.max_width > 0.0 && self.max_width < self.min_width {
            return Err(UiError::Range("tooltip max width below min width"));
        }
        if self.max_height > 0.0 && self.max_height < self.min_height {
            return Err(UiError::Range("tooltip max height below min height"));
        }
        self.padding.validate()?;
        for style in self.active_text_styles() {
            style.validate(require_family)?;
        }
        self.background_color.validate()
    }
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self::plain()
    }
}
