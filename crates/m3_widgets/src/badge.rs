//! Notification badge: a dot, or a pill with a short label.

use m3_core::{
    Color, InputEvent, MeasureSpec, OwnedFont, PaintBackend, Rect, SemanticRole, Semantics, Size,
    TextBackend, TextMetrics, TextStyle, UiError, UiResult, Widget, WidgetFlags,
};
use serde::{Deserialize, Serialize};

use crate::metrics;

/// Badge style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BadgeStyle {
    /// Pill or dot fill. Transparent hides the badge.
    pub background_color: Color,
    /// Label color.
    pub text_color: Color,
    /// Label font.
    pub text_style: TextStyle,
    /// Diameter of an unlabelled badge.
    pub dot_diameter: f32,
    /// Minimum width of a labelled badge.
    pub min_width: f32,
    /// Height of a labelled badge.
    pub height: f32,
    /// Horizontal padding around the label.
    pub padding_x: f32,
}

impl BadgeStyle {
    /// Checks dimensions, text style and colors.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a non-positive dot, width or height, or a
    /// negative padding; `Range` for a bad text style or color.
    pub fn validate(&self) -> UiResult<()> {
        if self.dot_diameter <= 0.0 || self.min_width <= 0.0 || self.height <= 0.0 {
            return Err(UiError::InvalidArgument("badge dimensions must be positive"));
        }
        if self.padding_x < 0.0 {
            return Err(UiError::InvalidArgument("badge padding is negative"));
        }
        self.text_style.validate(false)?;
        self.background_color.validate()?;
        self.text_color.validate()
    }
}

impl Default for BadgeStyle {
    fn default() -> Self {
        Self {
            background_color: Color::rgb(0.698, 0.149, 0.118),
            text_color: Color::WHITE,
            text_style: TextStyle {
                size_px: 11,
                weight: 500,
                ..TextStyle::default()
            },
            dot_diameter: 6.0,
            min_width: 16.0,
            height: 16.0,
            padding_x: 4.0,
        }
    }
}

/// Anchor corner a badge is centred on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeCorner {
    /// Top-left.
    TopLeft,
    /// Top-right.
    #[default]
    TopRight,
    /// Bottom-right.
    BottomRight,
    /// Bottom-left.
    BottomLeft,
}

impl TryFrom<u32> for BadgeCorner {
    type Error = UiError;

    fn try_from(code: u32) -> UiResult<Self> {
        match code {
            0 => Ok(Self::TopLeft),
            1 => Ok(Self::TopRight),
            2 => Ok(Self::BottomRight),
            3 => Ok(Self::BottomLeft),
            _ => Err(UiError::Range("unknown badge corner")),
        }
    }
}

/// Where a badge sits on the widget it decorates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BadgePlacement {
    /// Anchor corner.
    pub corner: BadgeCorner,
    /// Horizontal offset of the badge centre from the corner.
    pub offset_x: f32,
    /// Vertical offset of the badge centre from the corner.
    pub offset_y: f32,
}

impl BadgePlacement {
    /// Badge on an icon: centred on the top-right corner.
    pub const ICON: Self = Self {
        corner: BadgeCorner::TopRight,
        offset_x: 0.0,
        offset_y: 0.0,
    };

    /// Badge on a navigation item: centred on the top-right corner.
    pub const NAVIGATION: Self = Self::ICON;

    /// Bounds of a badge of `size` centred on the chosen corner of
    /// `anchor`, shifted by the offsets.
    ///
    /// # Errors
    ///
    /// `Range` for a negative anchor or size.
    pub fn bounds(&self, anchor: Rect, size: Size) -> UiResult<Rect> {
        anchor.validate()?;
        if size.width < 0.0 || size.height < 0.0 {
            return Err(UiError::Range("badge size is negative"));
        }
        let (x, y) = match self.corner {
            BadgeCorner::TopLeft => (anchor.x, anchor.y),
            BadgeCorner::TopRight => (anchor.right(), anchor.y),
            BadgeCorner::BottomRight => (anchor.right(), anchor.bottom()),
            BadgeCorner::BottomLeft => (anchor.x, anchor.bottom()),
        };
        let center_x = x + self.offset_x;
        let center_y = y + self.offset_y;
        Ok(Rect::new(
            center_x - size.width * 0.5,
            center_y - size.height * 0.5,
            size.width,
            size.height,
        ))
    }
}

/// Badge widget. A badge without a label is drawn as a dot and holds no
/// font.
pub struct Badge<'a, B: TextBackend> {
    backend: B,
    style: BadgeStyle,
    label: Option<&'a str>,
    font: OwnedFont,
    line: TextMetrics,
    bounds: Rect,
    flags: WidgetFlags,
}

impl<'a, B: TextBackend> Badge<'a, B> {
    /// Creates a badge. A font is created only for a labelled badge.
    ///
    /// # Errors
    ///
    /// Style validation or font failures.
    pub fn new(backend: B, style: BadgeStyle, label: Option<&'a str>) -> UiResult<Self> {
        style.validate()?;
        let mut badge = Self {
            backend,
            style,
            label: None,
            font: OwnedFont::default(),
            line: TextMetrics::default(),
            bounds: Rect::ZERO,
            flags: WidgetFlags::NONE,
        };
        badge.set_label(label)?;
        Ok(badge)
    }

    /// Replaces the label, creating the font on first use.
    ///
    /// # Errors
    ///
    /// Font failures. The previous label stays in place.
    pub fn set_label(&mut self, label: Option<&'a str>) -> UiResult<()> {
        if label.is_some() && !self.font.is_live() {
            let (font, line) = self.load_font(&self.style)?;
            self.font = font;
            self.line = line;
        }
        self.label = label;
        Ok(())
    }

    /// Current label.
    #[must_use]
    pub fn label(&self) -> Option<&'a str> {
        self.label
    }

    /// Replaces the style, swapping the font if one is held.
    ///
    /// # Errors
    ///
    /// Style validation or font failures. On failure nothing changes.
    pub fn set_style(&mut self, style: BadgeStyle) -> UiResult<()> {
        style.validate()?;
        if self.font.is_live() {
            let (font, line) = self.load_font(&style)?;
            self.font.replace(font, &self.backend)?;
            self.line = line;
        }
        self.style = style;
        Ok(())
    }

    /// Current style.
    #[must_use]
    pub fn style(&self) -> &BadgeStyle {
        &self.style
    }

    /// Measures the badge and lays it out on a corner of `anchor`.
    ///
    /// # Errors
    ///
    /// Measurement failures; `Range` for a negative anchor.
    pub fn place(&mut self, anchor: Rect, placement: BadgePlacement) -> UiResult<Rect> {
        let size = self.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified)?;
        let bounds = placement.bounds(anchor, size)?;
        self.layout(bounds)?;
        Ok(bounds)
    }

    /// Creates a font for `style` along with its line metrics.
    fn load_font(&self, style: &BadgeStyle) -> UiResult<(OwnedFont, TextMetrics)> {
        let mut font = OwnedFont::create(&self.backend, &style.text_style)?;
        match self.backend.measure_text(font.handle()?, "") {
            Ok(line) => Ok((font, line)),
            Err(err) => {
                if let Err(cleanup) = font.release(&self.backend) {
                    tracing::warn!("discarding badge font failed: {}", cleanup);
                }
                Err(err)
            }
        }
    }

    fn label_width(&self) -> UiResult<f32> {
        match self.label {
            Some(label) if self.font.is_live() => {
                Ok(self.backend.measure_text(self.font.handle()?, label)?.width)
            }
            _ => Ok(0.0),
        }
    }
}

impl<'a, B: TextBackend> Widget for Badge<'a, B> {
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> UiResult<Size> {
        width.validate()?;
        height.validate()?;
        let natural = if self.label.is_some() {
            Size::new(
                metrics::padded(self.label_width()?, self.style.padding_x, self.style.min_width),
                self.style.height,
            )
        } else {
            Size::new(self.style.dot_diameter, self.style.dot_diameter)
        };

        // Only exact constraints override a badge; it never shrinks.
        let resolve = |spec: MeasureSpec, natural: f32| match spec {
            MeasureSpec::Exactly(size) => size,
            MeasureSpec::AtMost(_) | MeasureSpec::Unspecified => natural,
        };
        Ok(Size::new(
            resolve(width, natural.width),
            resolve(height, natural.height),
        ))
    }

    fn layout(&mut self, bounds: Rect) -> UiResult<()> {
        bounds.validate()?;
        self.bounds = bounds;
        Ok(())
    }

    fn paint(&mut self, painter: &mut dyn PaintBackend) -> UiResult<()> {
        if !self.style.background_color.is_visible() {
            return Ok(());
        }
        painter.draw_rect(
            self.bounds,
            self.style.background_color,
            self.bounds.height * 0.5,
        )?;

        let Some(label) = self.label else {
            return Ok(());
        };
        if !self.font.is_live() || !self.style.text_color.is_visible() {
            return Ok(());
        }
        let text = TextMetrics {
            width: self.label_width()?,
            ..self.line
        };
        let (x, y) = metrics::centered_text(self.bounds, text);
        painter.draw_text(self.font.handle()?, label, x, y, self.style.text_color)
    }

    fn handle_event(&mut self, _event: &InputEvent) -> UiResult<bool> {
        Ok(false)
    }

    fn semantics(&self) -> Semantics {
        Semantics {
            role: SemanticRole::Text,
            label: self.label.map(str::to_owned),
            hint: Some("Badge".to_owned()),
            ..Semantics::default()
        }
    }

    fn destroy(&mut self) -> UiResult<()> {
        self.font.release(&self.backend)
    }

    fn flags(&self) -> WidgetFlags {
        self.flags
    }

    fn set_flags(&mut self, flags: WidgetFlags) {
        self.flags = flags;
    }
}

impl<'a, B: TextBackend> Drop for Badge<'a, B> {
    fn drop(&mut self) {
        if let Err(err) = self.font.release(&self.backend) {
            tracing::warn!("badge font release failed: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use m3_core::{MonospaceTextBackend, PaintRecorder};

    #[test]
    fn test_dot_badge() {
        let backend = MonospaceTextBackend::new();
        let mut badge = Badge::new(&backend, BadgeStyle::default(), None).unwrap();
        assert_eq!(backend.live_fonts(), 0);

        let size = badge
            .measure(MeasureSpec::Unspecified, MeasureSpec::AtMost(2.0))
            .unwrap();
        assert_eq!(size, Size::new(6.0, 6.0));

        badge.layout(Rect::new(0.0, 0.0, 6.0, 6.0)).unwrap();
        let mut recorder = PaintRecorder::new();
        badge.paint(&mut recorder).unwrap();
        assert_eq!(recorder.rects().count(), 1);
        assert_eq!(recorder.texts().count(), 0);
        assert_eq!(badge.semantics().hint.as_deref(), Some("Badge"));
    }

    #[test]
    fn test_labelled_badge() {
        let backend = MonospaceTextBackend::new();
        let mut badge = Badge::new(&backend, BadgeStyle::default(), Some("999+")).unwrap();
        assert_eq!(backend.live_fonts(), 1);

        // 4 glyphs * 5.5 + 2 * 4 padding
        let size = badge
            .measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified)
            .unwrap();
        assert!((size.width - 30.0).abs() < 0.001);
        assert_eq!(size.height, 16.0);

        badge.layout(Rect::new(0.0, 0.0, 30.0, 16.0)).unwrap();
        let mut recorder = PaintRecorder::new();
        badge.paint(&mut recorder).unwrap();
        let rects: Vec<_> = recorder.rects().collect();
        assert_eq!(rects[0].2, 8.0);
        assert_eq!(recorder.texts().next().map(|t| t.0), Some("999+"));

        drop(badge);
        assert_eq!(backend.live_fonts(), 0);
    }

    #[test]
    fn test_corner_placement() {
        let anchor = Rect::new(10.0, 20.0, 24.0, 24.0);
        let size = Size::new(16.0, 16.0);

        let top_right = BadgePlacement::ICON.bounds(anchor, size).unwrap();
        assert_eq!(top_right, Rect::new(26.0, 12.0, 16.0, 16.0));

        let bottom_left = BadgePlacement {
            corner: BadgeCorner::BottomLeft,
            offset_x: 2.0,
            offset_y: -2.0,
        };
        assert_eq!(
            bottom_left.bounds(anchor, size).unwrap(),
            Rect::new(4.0, 34.0, 16.0, 16.0)
        );

        let negative = Rect::new(0.0, 0.0, -1.0, 4.0);
        assert!(matches!(
            BadgePlacement::NAVIGATION.bounds(negative, size),
            Err(UiError::Range(_))
        ));
        assert_eq!(BadgeCorner::try_from(2), Ok(BadgeCorner::BottomRight));
        assert!(matches!(BadgeCorner::try_from(4), Err(UiError::Range(_))));
    }

    #[test]
    fn test_place_on_icon() {
        let backend = MonospaceTextBackend::new();
        let mut badge = Badge::new(&backend, BadgeStyle::default(), None).unwrap();
        let placement = BadgePlacement {
            corner: BadgeCorner::TopLeft,
            ..BadgePlacement::ICON
        };
        let bounds = badge.place(Rect::new(0.0, 0.0, 24.0, 24.0), placement).unwrap();
        assert_eq!(bounds, Rect::new(-3.0, -3.0, 6.0, 6.0));

        let mut recorder = PaintRecorder::new();
        badge.paint(&mut recorder).unwrap();
        assert_eq!(recorder.rects().next().map(|r| r.0), Some(bounds));
    }

    #[test]
    fn test_invalid_style() {
        let style = BadgeStyle {
            height: 0.0,
            ..BadgeStyle::default()
        };
        let backend = MonospaceTextBackend::new();
        assert!(matches!(
            Badge::new(&backend, style, None),
            Err(UiError::InvalidArgument(_))
        ));
    }
}
