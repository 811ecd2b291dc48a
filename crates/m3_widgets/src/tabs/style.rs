//! Tab row styling.

use m3_core::{Color, Easing, Edges, TextStyle, UiError, UiResult};
use serde::{Deserialize, Serialize};

use crate::validate;

/// How the row distributes its width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabMode {
    /// Available width is split evenly between tabs.
    #[default]
    Fixed,
    /// Each tab is sized to its label and the row scrolls horizontally.
    Scrollable,
}

impl TryFrom<u32> for TabMode {
    type Error = UiError;

    fn try_from(code: u32) -> UiResult<Self> {
        match code {
            1 => Ok(Self::Fixed),
            2 => Ok(Self::Scrollable),
            _ => Err(UiError::Range("unknown tab mode")),
        }
    }
}

/// Tab row style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabRowStyle {
    /// Layout mode.
    pub mode: TabMode,
    /// Insets around the row.
    pub padding: Edges,
    /// Gap between tabs.
    pub spacing: f32,
    /// Minimum tab width.
    pub min_width: f32,
    /// Minimum tab height.
    pub min_height: f32,
    /// Horizontal padding around a label.
    pub padding_x: f32,
    /// Vertical padding around a label.
    pub padding_y: f32,
    /// Indicator bar thickness. Zero hides the indicator.
    pub indicator_thickness: f32,
    /// Indicator corner radius.
    pub indicator_corner: f32,
    /// Indicator animation duration in seconds.
    pub indicator_anim_duration: f32,
    /// Indicator animation easing.
    pub indicator_anim_easing: Easing,
    /// Label text style; its color is used for unselected tabs.
    pub text_style: TextStyle,
    /// Label color of the selected tab.
    pub selected_text_color: Color,
    /// Indicator color.
    pub indicator_color: Color,
    /// Row background. Transparent skips the fill.
    pub background_color: Color,
    /// Label color while disabled.
    pub disabled_text_color: Color,
    /// Indicator color while disabled.
    pub disabled_indicator_color: Color,
}

impl TabRowStyle {
    /// Default minimum tab width.
    pub const DEFAULT_MIN_WIDTH: f32 = 90.0;
    /// Default minimum tab height.
    pub const DEFAULT_MIN_HEIGHT: f32 = 48.0;
    /// Default horizontal label padding.
    pub const DEFAULT_PADDING_X: f32 = 16.0;
    /// Default vertical label padding.
    pub const DEFAULT_PADDING_Y: f32 = 12.0;
    /// Default indicator thickness.
    pub const DEFAULT_INDICATOR_THICKNESS: f32 = 2.0;
    /// Default indicator animation duration.
    pub const DEFAULT_INDICATOR_DURATION: f32 = 0.2;
    /// Alpha multiplier for disabled colors.
    pub const DISABLED_ALPHA: f32 = 0.38;

    /// Default style for a scrollable row.
    #[must_use]
    pub fn scrollable() -> Self {
        Self {
            mode: TabMode::Scrollable,
            ..Self::default()
        }
    }

    /// Checks every numeric field, the text style and every color.
    ///
    /// Layout and paint pass `require_family = false`; constructors and
    /// `set_style` pass `true` since they create a font from the style.
    ///
    /// # Errors
    ///
    /// `Range` for negative numerics or bad colors, `InvalidArgument` for a
    /// missing family when one is required.
    pub fn validate(&self, require_family: bool) -> UiResult<()> {
        validate::non_negative(&[
            (self.spacing, "tab spacing is negative"),
            (self.min_width, "tab min width is negative"),
            (self.min_height, "tab min height is negative"),
            (self.padding_x, "tab horizontal padding is negative"),
            (self.padding_y, "tab vertical padding is negative"),
            (self.indicator_thickness, "indicator thickness is negative"),
            (self.indicator_corner, "indicator corner is negative"),
            (self.indicator_anim_duration, "indicator duration is negative"),
        ])?;
        self.padding.validate()?;
        self.text_style.validate(require_family)?;
        validate::colors(&[
            self.selected_text_color,
            self.indicator_color,
            self.background_color,
            self.disabled_text_color,
            self.disabled_indicator_color,
        ])
    }
}

impl Default for TabRowStyle {
    fn default() -> Self {
        let text_style = TextStyle::default();
        let indicator_color = Color::BLACK;
        Self {
            mode: TabMode::Fixed,
            padding: Edges::ZERO,
            spacing: 0.0,
            min_width: Self::DEFAULT_MIN_WIDTH,
            min_height: Self::DEFAULT_MIN_HEIGHT,
            padding_x: Self::DEFAULT_PADDING_X,
            padding_y: Self::DEFAULT_PADDING_Y,
            indicator_thickness: Self::DEFAULT_INDICATOR_THICKNESS,
            indicator_corner: 0.0,
            indicator_anim_duration: Self::DEFAULT_INDICATOR_DURATION,
            indicator_anim_easing: Easing::Out,
            disabled_text_color: text_style.color.scale_alpha(Self::DISABLED_ALPHA),
            text_style,
            selected_text_color: Color::BLACK,
            indicator_color,
            background_color: Color::TRANSPARENT,
            disabled_indicator_color: indicator_color.scale_alpha(Self::DISABLED_ALPHA),
        }
    }
}
