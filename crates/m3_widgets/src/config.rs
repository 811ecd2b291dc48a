//! TOML style sheets.
//!
//! ```toml
//! font_family = "Roboto"
//!
//! [tabs]
//! mode = "scrollable"
//! spacing = 8.0
//!
//! [segmented.selected_background_color]
//! r = 0.2
//! g = 0.4
//! b = 0.9
//! ```
//!
//! Every table is optional. Missing fields keep their widget defaults; for
//! `[tooltip]` those are the plain tooltip defaults even when
//! `variant = "rich"`.

use std::fs;
use std::path::Path;

use m3_core::{TextStyle, UiError, UiResult};
use serde::{Deserialize, Serialize};

use crate::badge::BadgeStyle;
use crate::segmented::SegmentedStyle;
use crate::tabs::TabRowStyle;
use crate::tooltip::TooltipStyle;

/// Styles for every widget kind, loaded together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSheet {
    /// Family given to every text style that does not name its own.
    pub font_family: Option<String>,
    /// Tab row style.
    pub tabs: TabRowStyle,
    /// Segmented buttons style.
    pub segmented: SegmentedStyle,
    /// Badge style.
    pub badge: BadgeStyle,
    /// Tooltip style.
    pub tooltip: TooltipStyle,
    /// Plain text style.
    pub text: TextStyle,
}

impl StyleSheet {
    /// Parses a style sheet and checks every style in it.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` when the TOML does not parse; validation errors of
    /// the individual styles otherwise.
    pub fn from_toml_str(source: &str) -> UiResult<Self> {
        let mut sheet: Self =
            toml::from_str(source).map_err(|err| UiError::InvalidConfig(err.to_string()))?;
        sheet.apply_font_family();
        sheet.validate()?;
        Ok(sheet)
    }

    /// Reads and parses a style sheet file.
    ///
    /// # Errors
    ///
    /// `Io` when the file cannot be read; see [`StyleSheet::from_toml_str`].
    pub fn load<P: AsRef<Path>>(path: P) -> UiResult<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)
            .map_err(|err| UiError::Io(format!("{}: {}", path.display(), err)))?;
        let sheet = Self::from_toml_str(&source)?;
        tracing::debug!("loaded style sheet from {}", path.display());
        Ok(sheet)
    }

    /// Serializes the sheet back to TOML.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if a value cannot be represented.
    pub fn to_toml_string(&self) -> UiResult<String> {
        toml::to_string(self).map_err(|err| UiError::InvalidConfig(err.to_string()))
    }

    /// Checks every style. Font families are not required here; widget
    /// constructors enforce that.
    ///
    /// # Errors
    ///
    /// The first style validation failure.
    pub fn validate(&self) -> UiResult<()> {
        self.tabs.validate(false)?;
        self.segmented.validate(false)?;
        self.badge.validate()?;
        self.tooltip.validate(false)?;
        self.text.validate(false)
    }

    fn apply_font_family(&mut self) {
        let Some(family) = self.font_family.as_deref() else {
            return;
        };
        for style in [
            &mut self.tabs.text_style,
            &mut self.segmented.text_style,
            &mut self.badge.text_style,
            &mut self.tooltip.text_style,
            &mut self.tooltip.title_style,
            &mut self.tooltip.body_style,
            &mut self.text,
        ] {
            if style.family.is_none() {
                style.family = Some(family.to_owned());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabs::TabMode;
    use crate::tooltip::TooltipVariant;
    use m3_core::Color;

    #[test]
    fn test_empty_sheet_is_default() {
        let sheet = StyleSheet::from_toml_str("").unwrap();
        assert_eq!(sheet, StyleSheet::default());
    }

    #[test]
    fn test_partial_sheet() {
        let sheet = StyleSheet::from_toml_str(
            r#"
            font_family = "Roboto"

            [tabs]
            mode = "scrollable"
            spacing = 8.0

            [tabs.text_style]
            family = "Inter"

            [segmented.selected_background_color]
            r = 0.2
            g = 0.4
            b = 0.9
            "#,
        )
        .unwrap();

        assert_eq!(sheet.tabs.mode, TabMode::Scrollable);
        assert_eq!(sheet.tabs.spacing, 8.0);
        assert_eq!(sheet.tabs.min_height, TabRowStyle::default().min_height);
        assert_eq!(sheet.tabs.text_style.family.as_deref(), Some("Inter"));
        assert_eq!(sheet.badge.text_style.family.as_deref(), Some("Roboto"));
        assert_eq!(
            sheet.segmented.selected_background_color,
            Color::rgb(0.2, 0.4, 0.9)
        );
    }

    #[test]
    fn test_tooltip_table() {
        let sheet = StyleSheet::from_toml_str(
            r#"
            font_family = "Roboto"

            [tooltip]
            variant = "rich"
            anchor_gap = 6.0
            "#,
        )
        .unwrap();

        assert_eq!(sheet.tooltip.variant, TooltipVariant::Rich);
        assert_eq!(sheet.tooltip.anchor_gap, 6.0);
        assert_eq!(sheet.tooltip.body_style.family.as_deref(), Some("Roboto"));
        assert_eq!(sheet.tooltip.title_style.family.as_deref(), Some("Roboto"));

        let result = StyleSheet::from_toml_str("[tooltip]\nmin_width = 50.0\nmax_width = 10.0");
        assert!(matches!(result, Err(UiError::Range(_))));
    }

    #[test]
    fn test_parse_failure_is_invalid_config() {
        let result = StyleSheet::from_toml_str("[tabs\nmode = 1");
        assert!(matches!(result, Err(UiError::InvalidConfig(_))));

        let result = StyleSheet::from_toml_str("[tabs]\nmode = \"sideways\"");
        assert!(matches!(result, Err(UiError::InvalidConfig(_))));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let result = StyleSheet::from_toml_str("[tabs]\nspacing = -1.0");
        assert!(matches!(result, Err(UiError::Range(_))));

        let result = StyleSheet::from_toml_str("[badge]\nheight = 0.0");
        assert!(matches!(result, Err(UiError::InvalidArgument(_))));
    }

    #[test]
    fn test_missing_file_is_io() {
        let result = StyleSheet::load("/nonexistent/m3/style.toml");
        assert!(matches!(result, Err(UiError::Io(_))));
    }

    #[test]
    fn test_sheet_round_trips_through_toml() {
        let mut sheet = StyleSheet::default();
        sheet.tabs.mode = TabMode::Scrollable;
        let text = sheet.to_toml_string().unwrap();
        assert_eq!(StyleSheet::from_toml_str(&text).unwrap(), sheet);
    }
}
