//! Segmented button styling.

use m3_core::{Color, Edges, TextStyle, UiError, UiResult};
use serde::{Deserialize, Serialize};

use crate::validate;

/// How many segments may be selected at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// At most one segment.
    #[default]
    Single,
    /// Any subset of segments.
    Multi,
}

impl TryFrom<u32> for SelectionMode {
    type Error = UiError;

    fn try_from(code: u32) -> UiResult<Self> {
        match code {
            1 => Ok(Self::Single),
            2 => Ok(Self::Multi),
            _ => Err(UiError::Range("unknown selection mode")),
        }
    }
}

/// Segmented button style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentedStyle {
    /// Insets around the group.
    pub padding: Edges,
    /// Gap between segments.
    pub spacing: f32,
    /// Minimum segment width (measure only).
    pub min_width: f32,
    /// Minimum segment height.
    pub min_height: f32,
    /// Horizontal padding around a label.
    pub padding_x: f32,
    /// Vertical padding around a label.
    pub padding_y: f32,
    /// Outline stroke width. Zero draws no outline.
    pub outline_width: f32,
    /// Corner radius of the outer segments.
    pub corner_radius: f32,
    /// Label text style; its color is used for unselected segments.
    pub text_style: TextStyle,
    /// Segment fill.
    pub background_color: Color,
    /// Outline color.
    pub outline_color: Color,
    /// Fill of selected segments.
    pub selected_background_color: Color,
    /// Label color of selected segments.
    pub selected_text_color: Color,
    /// Fill while disabled.
    pub disabled_background_color: Color,
    /// Outline while disabled.
    pub disabled_outline_color: Color,
    /// Label color while disabled.
    pub disabled_text_color: Color,
    /// Fill of selected segments while disabled.
    pub disabled_selected_background_color: Color,
    /// Label color of selected segments while disabled.
    pub disabled_selected_text_color: Color,
}

impl SegmentedStyle {
    /// Alpha multiplier for disabled fills and outlines.
    pub const DISABLED_FILL_ALPHA: f32 = 0.12;
    /// Alpha multiplier for disabled labels.
    pub const DISABLED_TEXT_ALPHA: f32 = 0.38;

    /// Checks every numeric field, the text style and every color.
    ///
    /// # Errors
    ///
    /// `Range` for negative numerics or bad colors, `InvalidArgument` for a
    /// missing family when one is required.
    pub fn validate(&self, require_family: bool) -> UiResult<()> {
        validate::non_negative(&[
            (self.spacing, "segment spacing is negative"),
            (self.min_width, "segment min width is negative"),
            (self.min_height, "segment min height is negative"),
            (self.padding_x, "segment horizontal padding is negative"),
            (self.padding_y, "segment vertical padding is negative"),
            (self.outline_width, "outline width is negative"),
            (self.corner_radius, "corner radius is negative"),
        ])?;
        self.padding.validate()?;
        self.text_style.validate(require_family)?;
        validate::colors(&[
            self.background_color,
            self.outline_color,
            self.selected_background_color,
            self.selected_text_color,
            self.disabled_background_color,
            self.disabled_outline_color,
            self.disabled_text_color,
            self.disabled_selected_background_color,
            self.disabled_selected_text_color,
        ])
    }

    /// Fill, outline and label colors for one segment.
    #[must_use]
    pub fn segment_colors(&self, selected: bool, disabled: bool) -> SegmentColors {
        match (disabled, selected) {
            (false, false) => SegmentColors {
                background: self.background_color,
                outline: self.outline_color,
                text: self.text_style.color,
            },
            (false, true) => SegmentColors {
                background: self.selected_background_color,
                outline: self.outline_color,
                text: self.selected_text_color,
            },
            (true, false) => SegmentColors {
                background: self.disabled_background_color,
                outline: self.disabled_outline_color,
                text: self.disabled_text_color,
            },
            (true, true) => SegmentColors {
                background: self.disabled_selected_background_color,
                outline: self.disabled_outline_color,
                text: self.disabled_selected_text_color,
            },
        }
    }
}

impl Default for SegmentedStyle {
    fn default() -> Self {
        let text_style = TextStyle::default();
        let background_color = Color::TRANSPARENT;
        let outline_color = Color::rgb(0.44, 0.44, 0.44);
        let selected_background_color = Color::rgb(0.26, 0.52, 0.96);
        let selected_text_color = Color::WHITE;
        Self {
            padding: Edges::ZERO,
            spacing: 0.0,
            min_width: 64.0,
            min_height: 32.0,
            padding_x: 12.0,
            padding_y: 8.0,
            outline_width: 1.0,
            corner_radius: 4.0,
            disabled_background_color: background_color.scale_alpha(Self::DISABLED_FILL_ALPHA),
            disabled_outline_color: outline_color.scale_alpha(Self::DISABLED_FILL_ALPHA),
            disabled_text_color: text_style.color.scale_alpha(Self::DISABLED_TEXT_ALPHA),
            disabled_selected_background_color: selected_background_color
                .scale_alpha(Self::DISABLED_FILL_ALPHA),
            disabled_selected_text_color: selected_text_color
                .scale_alpha(Self::DISABLED_TEXT_ALPHA),
            text_style,
            background_color,
            outline_color,
            selected_background_color,
            selected_text_color,
        }
    }
}

/// Resolved colors for a single segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentColors {
    /// Inner fill.
    pub background: Color,
    /// Outline stroke.
    pub outline: Color,
    /// Label.
    pub text: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let style = SegmentedStyle::default();
        assert_eq!(style.min_width, 64.0);
        assert_eq!(style.min_height, 32.0);
        assert_eq!(style.outline_width, 1.0);
        assert!((style.disabled_outline_color.a - 0.12).abs() < 0.0001);
        assert!((style.disabled_selected_text_color.a - 0.38).abs() < 0.0001);
        assert_eq!(style.disabled_background_color.a, 0.0);
        assert!(style.validate(false).is_ok());
    }

    #[test]
    fn test_validate() {
        let style = SegmentedStyle {
            outline_width: -1.0,
            ..SegmentedStyle::default()
        };
        assert_eq!(style.validate(false), Err(UiError::Range("outline width is negative")));

        let style = SegmentedStyle {
            disabled_selected_text_color: Color::rgba(-0.1, 0.0, 0.0, 1.0),
            ..SegmentedStyle::default()
        };
        assert!(matches!(style.validate(false), Err(UiError::Range(_))));
        assert!(matches!(
            SegmentedStyle::default().validate(true),
            Err(UiError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_segment_colors() {
        let style = SegmentedStyle::default();
        let selected = style.segment_colors(true, false);
        assert_eq!(selected.background, style.selected_background_color);
        assert_eq!(selected.text, Color::WHITE);

        let disabled = style.segment_colors(true, true);
        assert_eq!(disabled.outline, style.disabled_outline_color);
        assert_eq!(disabled.text, style.disabled_selected_text_color);
    }

    #[test]
    fn test_mode_codes() {
        assert_eq!(SelectionMode::try_from(1), Ok(SelectionMode::Single));
        assert!(SelectionMode::try_from(3).is_err());
    }
}
