//! Text style, metrics and font ownership.

use serde::{Deserialize, Serialize};

use crate::backend::TextBackend;
use crate::color::Color;
use crate::error::{UiError, UiResult};

/// Font style descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    /// Font family name. Widgets that create fonts require one.
    pub family: Option<String>,
    /// Font size in pixels.
    pub size_px: i32,
    /// Font weight (100..=900).
    pub weight: i32,
    /// Italic face.
    pub italic: bool,
    /// Text color.
    pub color: Color,
}

impl TextStyle {
    /// Default size in pixels.
    pub const DEFAULT_SIZE_PX: i32 = 14;
    /// Regular weight.
    pub const DEFAULT_WEIGHT: i32 = 400;

    /// Creates a style for the given family with default metrics.
    #[must_use]
    pub fn with_family(family: impl Into<String>) -> Self {
        Self {
            family: Some(family.into()),
            ..Self::default()
        }
    }

    /// Checks family, size, weight and color.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when a family is required but missing, `Range` for
    /// a non-positive size, a weight outside 100..=900 or a bad color.
    pub fn validate(&self, require_family: bool) -> UiResult<()> {
        if require_family && self.family.is_none() {
            return Err(UiError::InvalidArgument("text style needs a font family"));
        }
        if self.size_px <= 0 {
            return Err(UiError::Range("font size must be positive"));
        }
        if !(100..=900).contains(&self.weight) {
            return Err(UiError::Range("font weight must be within 100..=900"));
        }
        self.color.validate()
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            family: None,
            size_px: Self::DEFAULT_SIZE_PX,
            weight: Self::DEFAULT_WEIGHT,
            italic: false,
            color: Color::BLACK,
        }
    }
}

/// Measured extent of a run of text.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextMetrics {
    /// Advance width.
    pub width: f32,
    /// Line height.
    pub height: f32,
    /// Distance from the top of the line to the baseline.
    pub baseline: f32,
}

/// Opaque font handle issued by a text backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FontHandle {
    /// Slot id.
    pub id: u32,
    /// Slot generation.
    pub generation: u32,
}

impl FontHandle {
    /// Creates a handle.
    #[must_use]
    pub const fn new(id: u32, generation: u32) -> Self {
        Self { id, generation }
    }
}

/// A font handle the holder is responsible for destroying.
///
/// `release` destroys the font at most once; after that the wrapper is empty
/// and every further release is a no-op.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct OwnedFont {
    handle: Option<FontHandle>,
}

impl OwnedFont {
    /// Creates a font through the backend and takes ownership of it.
    ///
    /// # Errors
    ///
    /// Propagates the backend failure.
    pub fn create<B: TextBackend + ?Sized>(backend: &B, style: &TextStyle) -> UiResult<Self> {
        let handle = backend.create_font(style)?;
        Ok(Self { handle: Some(handle) })
    }

    /// Takes ownership of an existing handle.
    #[must_use]
    pub const fn adopt(handle: FontHandle) -> Self {
        Self { handle: Some(handle) }
    }

    /// Returns the live handle.
    ///
    /// # Errors
    ///
    /// Returns `State` once the font has been released.
    pub fn handle(&self) -> UiResult<FontHandle> {
        self.handle.ok_or(UiError::State("font already released"))
    }

    /// Returns true while a font is held.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.handle.is_some()
    }

    /// Swaps in `next` after destroying the currently held font.
    ///
    /// Swap-or-fail: if the held font cannot be destroyed, `next` is
    /// destroyed instead and the held font stays in place.
    ///
    /// # Errors
    ///
    /// Propagates the failure from destroying the held font.
    pub fn replace<B: TextBackend + ?Sized>(&mut self, mut next: Self, backend: &B) -> UiResult<()> {
        if let Some(current) = self.handle {
            if let Err(err) = backend.destroy_font(current) {
                if let Err(cleanup) = next.release(backend) {
                    tracing::warn!("discarding replacement font failed: {}", cleanup);
                }
                return Err(err);
            }
        }
        self.handle = next.handle.take();
        Ok(())
    }

    /// Destroys the font if one is held.
    ///
    /// # Errors
    ///
    /// Propagates the backend failure. The handle is forgotten either way.
    pub fn release<B: TextBackend + ?Sized>(&mut self, backend: &B) -> UiResult<()> {
        match self.handle.take() {
            Some(handle) => backend.destroy_font(handle),
            None => Ok(()),
        }
    }
}
