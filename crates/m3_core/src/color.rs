//! RGBA colour with per-channel validation.

use serde::{Deserialize, Serialize};

use crate::error::{UiError, UiResult};

/// RGBA color, each channel in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Color {
    /// Transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    /// Solid black.
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from RGB values (0-1) with full alpha.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Returns a new color with different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }

    /// Returns a new color with alpha multiplied by `factor`.
    ///
    /// Used to derive the disabled variants of a style.
    #[must_use]
    pub fn scale_alpha(self, factor: f32) -> Self {
        self.with_alpha(self.a * factor)
    }

    /// Linearly interpolates between two colors.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::rgba(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }

    /// Returns true if the color paints anything.
    #[must_use]
    pub fn is_visible(self) -> bool {
        self.a > 0.0
    }

    /// Rejects channels outside `0.0..=1.0` (NaN included).
    ///
    /// # Errors
    ///
    /// Returns `Range` for the first offending channel.
    pub fn validate(self) -> UiResult<()> {
        let in_unit = |c: f32| (0.0..=1.0).contains(&c);
        if in_unit(self.r) && in_unit(self.g) && in_unit(self.b) && in_unit(self.a) {
            Ok(())
        } else {
            Err(UiError::Range("color channel outside 0..=1"))
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}
