//! Geometry primitives shared by layout, paint and hit-testing.

use serde::{Deserialize, Serialize};

use crate::error::{UiError, UiResult};

/// A rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// X position (left edge).
    pub x: f32,
    /// Y position (top edge).
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// A zero-sized rect at the origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Returns the right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Returns the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns true if the point is inside the rectangle.
    #[must_use]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Returns true if either dimension is zero or negative.
    ///
    /// Widgets that have never been laid out carry degenerate bounds.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Shrinks the rectangle by per-side insets.
    ///
    /// # Errors
    ///
    /// Returns `Range` if the insets consume more than the available extent.
    pub fn inset(&self, edges: Edges) -> UiResult<Self> {
        let width = self.width - edges.horizontal();
        let height = self.height - edges.vertical();
        if width < 0.0 || height < 0.0 {
            return Err(UiError::Range("insets exceed rectangle extent"));
        }
        Ok(Self::new(self.x + edges.left, self.y + edges.top, width, height))
    }

    /// Shrinks the rectangle uniformly on every side.
    ///
    /// # Errors
    ///
    /// Returns `Range` if the inset consumes more than the available extent.
    pub fn shrink(&self, amount: f32) -> UiResult<Self> {
        self.inset(Edges::all(amount))
    }

    /// Rejects negative dimensions.
    ///
    /// # Errors
    ///
    /// Returns `Range` if the width or height is negative.
    pub fn validate(&self) -> UiResult<()> {
        if self.width < 0.0 || self.height < 0.0 {
            return Err(UiError::Range("rectangle has negative extent"));
        }
        Ok(())
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Size {
    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Per-side insets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Edges {
    /// Left inset.
    pub left: f32,
    /// Top inset.
    pub top: f32,
    /// Right inset.
    pub right: f32,
    /// Bottom inset.
    pub bottom: f32,
}

impl Edges {
    /// No insets.
    pub const ZERO: Self = Self::all(0.0);

    /// Same inset on every side.
    #[must_use]
    pub const fn all(value: f32) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    /// Horizontal and vertical insets.
    #[must_use]
    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            left: horizontal,
            top: vertical,
            right: horizontal,
            bottom: vertical,
        }
    }

    /// Sum of left and right.
    #[must_use]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Sum of top and bottom.
    #[must_use]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Rejects negative insets.
    ///
    /// # Errors
    ///
    /// Returns `Range` if any side is negative.
    pub fn validate(&self) -> UiResult<()> {
        if self.left < 0.0 || self.top < 0.0 || self.right < 0.0 || self.bottom < 0.0 {
            return Err(UiError::Range("edge insets must be non-negative"));
        }
        Ok(())
    }
}

/// Size constraint handed to `measure` for one axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum MeasureSpec {
    /// Take the content size.
    #[default]
    Unspecified,
    /// Take exactly this size.
    Exactly(f32),
    /// Take the content size, capped at this size.
    AtMost(f32),
}

impl MeasureSpec {
    /// Rejects negative sizes.
    ///
    /// # Errors
    ///
    /// Returns `Range` if an `Exactly` or `AtMost` size is negative.
    pub fn validate(self) -> UiResult<()> {
        match self {
            Self::Unspecified => Ok(()),
            Self::Exactly(size) | Self::AtMost(size) if size < 0.0 => {
                Err(UiError::Range("measure size must be non-negative"))
            }
            Self::Exactly(_) | Self::AtMost(_) => Ok(()),
        }
    }

    /// Resolves a measured content extent against this constraint.
    #[must_use]
    pub fn resolve(self, content: f32) -> f32 {
        match self {
            Self::Unspecified => content,
            Self::Exactly(size) => size,
            Self::AtMost(size) => content.min(size),
        }
    }
}
