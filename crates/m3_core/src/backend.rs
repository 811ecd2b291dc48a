//! Backend capabilities consumed by widgets.
//!
//! Widgets never talk to a font rasterizer or a GPU directly. They go through
//! two narrow traits:
//!
//! - [`TextBackend`] creates fonts and measures strings.
//! - [`PaintBackend`] fills rectangles and draws strings.
//!
//! Every method has a default body that fails with `Unsupported`, so a
//! backend that only implements part of a trait reports the missing
//! capability instead of silently doing nothing.

use std::collections::HashMap;
use std::rc::Rc;

use parking_lot::Mutex;

use crate::color::Color;
use crate::error::{UiError, UiResult};
use crate::geometry::Rect;
use crate::text::{FontHandle, TextMetrics, TextStyle};

/// Font creation and text measurement.
pub trait TextBackend {
    /// Creates a font for the style.
    ///
    /// # Errors
    ///
    /// `Unsupported` unless overridden; otherwise backend specific.
    fn create_font(&self, _style: &TextStyle) -> UiResult<FontHandle> {
        Err(UiError::Unsupported("text backend cannot create fonts"))
    }

    /// Destroys a font created by this backend.
    ///
    /// # Errors
    ///
    /// `Unsupported` unless overridden; otherwise backend specific.
    fn destroy_font(&self, _font: FontHandle) -> UiResult<()> {
        Err(UiError::Unsupported("text backend cannot destroy fonts"))
    }

    /// Measures `text` set in `font`. An empty string yields the line metrics.
    ///
    /// # Errors
    ///
    /// `Unsupported` unless overridden; otherwise backend specific.
    fn measure_text(&self, _font: FontHandle, _text: &str) -> UiResult<TextMetrics> {
        Err(UiError::Unsupported("text backend cannot measure text"))
    }
}

impl<T: TextBackend + ?Sized> TextBackend for &T {
    fn create_font(&self, style: &TextStyle) -> UiResult<FontHandle> {
        (**self).create_font(style)
    }

    fn destroy_font(&self, font: FontHandle) -> UiResult<()> {
        (**self).destroy_font(font)
    }

    fn measure_text(&self, font: FontHandle, text: &str) -> UiResult<TextMetrics> {
        (**self).measure_text(font, text)
    }
}

impl<T: TextBackend + ?Sized> TextBackend for Rc<T> {
    fn create_font(&self, style: &TextStyle) -> UiResult<FontHandle> {
        (**self).create_font(style)
    }

    fn destroy_font(&self, font: FontHandle) -> UiResult<()> {
        (**self).destroy_font(font)
    }

    fn measure_text(&self, font: FontHandle, text: &str) -> UiResult<TextMetrics> {
        (**self).measure_text(font, text)
    }
}

/// 2-D drawing surface.
pub trait PaintBackend {
    /// Fills a rectangle, rounding corners by `corner_radius`.
    ///
    /// # Errors
    ///
    /// `Unsupported` unless overridden; otherwise backend specific.
    fn draw_rect(&mut self, _rect: Rect, _color: Color, _corner_radius: f32) -> UiResult<()> {
        Err(UiError::Unsupported("paint backend cannot draw rectangles"))
    }

    /// Draws `text` with its baseline at `(x, y)`.
    ///
    /// # Errors
    ///
    /// `Unsupported` unless overridden; otherwise backend specific.
    fn draw_text(
        &mut self,
        _font: FontHandle,
        _text: &str,
        _x: f32,
        _y: f32,
        _color: Color,
    ) -> UiResult<()> {
        Err(UiError::Unsupported("paint backend cannot draw text"))
    }
}

/// A text backend bound to one font.
///
/// Layout code only ever measures with the widget's own font, so it takes
/// this pair instead of threading both through every call.
pub struct TextMeasurer<'m, B: ?Sized> {
    backend: &'m B,
    font: FontHandle,
}

impl<'m, B: TextBackend + ?Sized> TextMeasurer<'m, B> {
    /// Binds `font` to `backend`.
    #[must_use]
    pub fn new(backend: &'m B, font: FontHandle) -> Self {
        Self { backend, font }
    }

    /// Measures a label.
    ///
    /// # Errors
    ///
    /// Propagates the backend failure.
    pub fn measure(&self, text: &str) -> UiResult<TextMetrics> {
        self.backend.measure_text(self.font, text)
    }

    /// The bound font.
    #[must_use]
    pub fn font(&self) -> FontHandle {
        self.font
    }
}

/// Deterministic text backend with fixed-advance glyphs.
///
/// Every glyph advances half the font size, lines are 1.2 × size tall and
/// the baseline sits one size below the top. Good enough for headless hosts,
/// demos and benchmarks.
#[derive(Debug, Default)]
pub struct MonospaceTextBackend {
    fonts: Mutex<FontTable>,
}

#[derive(Debug, Default)]
struct FontTable {
    next_id: u32,
    live: HashMap<u32, f32>,
}

impl MonospaceTextBackend {
    /// Creates an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fonts created and not yet destroyed.
    #[must_use]
    pub fn live_fonts(&self) -> usize {
        self.fonts.lock().live.len()
    }
}

impl TextBackend for MonospaceTextBackend {
    fn create_font(&self, style: &TextStyle) -> UiResult<FontHandle> {
        style.validate(false)?;
        let mut table = self.fonts.lock();
        table.next_id = table.next_id.wrapping_add(1);
        let id = table.next_id;
        #[allow(clippy::cast_precision_loss)]
        let size = style.size_px as f32;
        table.live.insert(id, size);
        tracing::debug!("monospace font created: id={} size={}", id, style.size_px);
        Ok(FontHandle::new(id, 1))
    }

    fn destroy_font(&self, font: FontHandle) -> UiResult<()> {
        match self.fonts.lock().live.remove(&font.id) {
            Some(_) => Ok(()),
            None => Err(UiError::State("unknown font handle")),
        }
    }

    fn measure_text(&self, font: FontHandle, text: &str) -> UiResult<TextMetrics> {
        let size = *self
            .fonts
            .lock()
            .live
            .get(&font.id)
            .ok_or(UiError::State("unknown font handle"))?;
        #[allow(clippy::cast_precision_loss)]
        let glyphs = text.chars().count() as f32;
        Ok(TextMetrics {
            width: glyphs * size * 0.5,
            height: size * 1.2,
            baseline: size,
        })
    }
}
