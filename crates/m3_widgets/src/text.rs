//! Plain text label.

use m3_core::{
    InputEvent, MeasureSpec, OwnedFont, PaintBackend, Rect, SemanticRole, Semantics, Size,
    TextBackend, TextMetrics, TextStyle, UiResult, Widget, WidgetFlags,
};

/// A single line of borrowed text drawn at its baseline.
///
/// Metrics are measured lazily and cached until the text or style changes.
pub struct Text<'a, B: TextBackend> {
    backend: B,
    style: TextStyle,
    text: &'a str,
    font: OwnedFont,
    metrics: Option<TextMetrics>,
    bounds: Rect,
    flags: WidgetFlags,
}

impl<'a, B: TextBackend> Text<'a, B> {
    /// Creates a label.
    ///
    /// # Errors
    ///
    /// Style validation (a family is required) or font creation failures.
    pub fn new(backend: B, style: TextStyle, text: &'a str) -> UiResult<Self> {
        style.validate(true)?;
        let font = OwnedFont::create(&backend, &style)?;
        Ok(Self {
            backend,
            style,
            text,
            font,
            metrics: None,
            bounds: Rect::ZERO,
            flags: WidgetFlags::NONE,
        })
    }

    /// Replaces the text.
    pub fn set_text(&mut self, text: &'a str) {
        self.text = text;
        self.metrics = None;
    }

    /// Current text.
    #[must_use]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Replaces the style and its font. On failure nothing changes.
    ///
    /// # Errors
    ///
    /// Style validation or font failures.
    pub fn set_style(&mut self, style: TextStyle) -> UiResult<()> {
        style.validate(true)?;
        let font = OwnedFont::create(&self.backend, &style)?;
        self.font.replace(font, &self.backend)?;
        self.style = style;
        self.metrics = None;
        Ok(())
    }

    /// Metrics of the current text, measured on first use.
    ///
    /// # Errors
    ///
    /// Measurement failures, or `State` after `destroy`.
    pub fn metrics(&mut self) -> UiResult<TextMetrics> {
        if let Some(metrics) = self.metrics {
            return Ok(metrics);
        }
        let metrics = self.backend.measure_text(self.font.handle()?, self.text)?;
        self.metrics = Some(metrics);
        Ok(metrics)
    }
}

impl<'a, B: TextBackend> Widget for Text<'a, B> {
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> UiResult<Size> {
        width.validate()?;
        height.validate()?;
        let metrics = self.metrics()?;
        Ok(Size::new(
            width.resolve(metrics.width),
            height.resolve(metrics.height),
        ))
    }

    fn layout(&mut self, bounds: Rect) -> UiResult<()> {
        bounds.validate()?;
        self.bounds = bounds;
        Ok(())
    }

    fn paint(&mut self, painter: &mut dyn PaintBackend) -> UiResult<()> {
        let metrics = self.metrics()?;
        painter.draw_text(
            self.font.handle()?,
            self.text,
            self.bounds.x,
            self.bounds.y + metrics.baseline,
            self.style.color,
        )
    }

    fn handle_event(&mut self, _event: &InputEvent) -> UiResult<bool> {
        Ok(false)
    }

    fn semantics(&self) -> Semantics {
        Semantics {
            role: SemanticRole::Text,
            label: Some(self.text.to_owned()),
            ..Semantics::default()
        }
    }

    fn destroy(&mut self) -> UiResult<()> {
        let released = self.font.release(&self.backend);
        self.text = "";
        self.metrics = None;
        released
    }

    fn flags(&self) -> WidgetFlags {
        self.flags
    }

    fn set_flags(&mut self, flags: WidgetFlags) {
        self.flags = flags;
    }
}

impl<'a, B: TextBackend> Drop for Text<'a, B> {
    fn drop(&mut self) {
        if let Err(err) = self.font.release(&self.backend) {
            tracing::warn!("text font release failed: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use m3_core::{MonospaceTextBackend, PaintRecorder, UiError};

    #[test]
    fn test_measure_and_paint() {
        let backend = MonospaceTextBackend::new();
        let mut text = Text::new(&backend, TextStyle::with_family("Mono"), "Hello").unwrap();

        let size = text
            .measure(MeasureSpec::AtMost(20.0), MeasureSpec::Unspecified)
            .unwrap();
        assert_eq!(size.width, 20.0);
        assert!((size.height - 16.8).abs() < 0.001);

        text.layout(Rect::new(5.0, 10.0, 100.0, 20.0)).unwrap();
        let mut recorder = PaintRecorder::new();
        text.paint(&mut recorder).unwrap();
        let drawn: Vec<_> = recorder.texts().collect();
        assert_eq!(drawn, vec![("Hello", 5.0, 24.0, TextStyle::default().color)]);
    }

    #[test]
    fn test_set_text_invalidates_metrics() {
        let backend = MonospaceTextBackend::new();
        let mut text = Text::new(&backend, TextStyle::with_family("Mono"), "ab").unwrap();
        assert_eq!(text.metrics().unwrap().width, 14.0);

        text.set_text("abcd");
        assert_eq!(text.metrics().unwrap().width, 28.0);
        assert_eq!(text.semantics().label.as_deref(), Some("abcd"));
        assert_eq!(text.semantics().role, SemanticRole::Text);
    }

    #[test]
    fn test_destroy_then_paint_fails() {
        let backend = MonospaceTextBackend::new();
        let mut text = Text::new(&backend, TextStyle::with_family("Mono"), "x").unwrap();
        text.destroy().unwrap();
        assert_eq!(backend.live_fonts(), 0);

        let mut recorder = PaintRecorder::new();
        assert!(matches!(text.paint(&mut recorder), Err(UiError::State(_))));
    }
}
