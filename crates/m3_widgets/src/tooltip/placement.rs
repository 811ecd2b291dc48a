//! Tooltip geometry.
//!
//! Pure functions: content metrics in, size out; size and anchor in,
//! bounds inside the overlay out. A tooltip that does not fit on its
//! preferred side flips to the opposite side when that one has room, or
//! to whichever side has more room when neither does. The result is then
//! clamped into the overlay.

use m3_core::{Rect, Size, TextMetrics, UiError, UiResult};

use super::style::{TooltipStyle, TooltipVariant};

/// What a tooltip points at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TooltipAnchor {
    /// A widget's bounds.
    Rect(Rect),
    /// A single point, such as a pointer position.
    Point(f32, f32),
}

impl TooltipAnchor {
    /// The anchor as a rectangle; points become zero-sized rects.
    ///
    /// # Errors
    ///
    /// `Range` for a rectangle with negative extent.
    pub fn rect(self) -> UiResult<Rect> {
        match self {
            Self::Rect(rect) => {
                rect.validate()?;
                Ok(rect)
            }
            Self::Point(x, y) => Ok(Rect::new(x, y, 0.0, 0.0)),
        }
    }
}

/// Side of the anchor the tooltip opens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TooltipDirection {
    /// Above.
    #[default]
    Up,
    /// Below.
    Down,
    /// To the left.
    Left,
    /// To the right.
    Right,
}

impl TooltipDirection {
    /// True for up and down.
    #[must_use]
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }
}

impl TryFrom<u32> for TooltipDirection {
    type Error = UiError;

    fn try_from(code: u32) -> UiResult<Self> {
        match code {
            0 => Ok(Self::Up),
            1 => Ok(Self::Down),
            2 => Ok(Self::Left),
            3 => Ok(Self::Right),
            _ => Err(UiError::Range("unknown tooltip direction")),
        }
    }
}

/// Alignment along the anchor edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TooltipAlign {
    /// Leading edges line up.
    Start,
    /// Centred on the anchor.
    #[default]
    Center,
    /// Trailing edges line up.
    End,
}

impl TryFrom<u32> for TooltipAlign {
    type Error = UiError;

    fn try_from(code: u32) -> UiResult<Self> {
        match code {
            0 => Ok(Self::Start),
            1 => Ok(Self::Center),
            2 => Ok(Self::End),
            _ => Err(UiError::Range("unknown tooltip alignment")),
        }
    }
}

/// Preferred side and alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TooltipPlacement {
    /// Preferred side.
    pub direction: TooltipDirection,
    /// Alignment along the anchor edge.
    pub align: TooltipAlign,
}

impl TooltipPlacement {
    /// Creates a placement.
    #[must_use]
    pub const fn new(direction: TooltipDirection, align: TooltipAlign) -> Self {
        Self { direction, align }
    }
}

/// Measured text of a tooltip. `None` means the part is absent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TooltipContent {
    /// Title metrics (rich only).
    pub title: Option<TextMetrics>,
    /// Body metrics.
    pub body: Option<TextMetrics>,
}

impl TooltipContent {
    /// Checks metrics and that the variant has something to show.
    ///
    /// # Errors
    ///
    /// `Range` for negative metrics; `InvalidArgument` for a plain tooltip
    /// without a body, or a rich one with neither title nor body.
    pub fn validate(&self, variant: TooltipVariant) -> UiResult<()> {
        for metrics in self.title.iter().chain(self.body.iter()) {
            if metrics.width < 0.0 || metrics.height < 0.0 || metrics.baseline < 0.0 {
                return Err(UiError::Range("tooltip text metrics are negative"));
            }
        }
        let empty = match variant {
            TooltipVariant::Plain => self.body.is_none(),
            TooltipVariant::Rich => self.title.is_none() && self.body.is_none(),
        };
        if empty {
            return Err(UiError::InvalidArgument("tooltip has no text"));
        }
        Ok(())
    }
}

/// Content plus padding, floored at the minimums and capped at the
/// maximums.
///
/// # Errors
///
/// Style or content validation failures.
pub fn content_size(style: &TooltipStyle, content: &TooltipContent) -> UiResult<Size> {
    style.validate(false)?;
    content.validate(style.variant)?;

    let (mut width, mut height) = (0.0f32, 0.0f32);
    match style.variant {
        TooltipVariant::Plain => {
            if let Some(body) = content.body {
                width = body.width;
                height = body.height;
            }
        }
        TooltipVariant::Rich => {
            if let Some(title) = content.title {
                width = title.width;
                height = title.height;
            }
            if let Some(body) = content.body {
                width = width.max(body.width);
                if content.title.is_some() {
                    height += style.title_body_spacing;
                }
                height += body.height;
            }
        }
    }

    width += style.padding.horizontal();
    height += style.padding.vertical();
    if style.min_width > 0.0 {
        width = width.max(style.min_width);
    }
    if style.min_height > 0.0 {
        height = height.max(style.min_height);
    }
    if style.max_width > 0.0 {
        width = width.min(style.max_width);
    }
    if style.max_height > 0.0 {
        height = height.min(style.max_height);
    }
    Ok(Size::new(width, height))
}

/// True if the tooltip opens forward (down or right) along one axis.
fn opens_forward(extent: f32, before: f32, after: f32, prefer_forward: bool) -> bool {
    let (preferred, other) = if prefer_forward {
        (after, before)
    } else {
        (before, after)
    };
    let keep = extent <= preferred || (extent > other && preferred >= other);
    keep == prefer_forward
}

/// Offset of a span of `extent` aligned against an anchor span.
fn aligned(start: f32, span: f32, extent: f32, align: TooltipAlign) -> f32 {
    match align {
        TooltipAlign::Start => start,
        TooltipAlign::Center => start + (span - extent) * 0.5,
        TooltipAlign::End => start + span - extent,
    }
}

/// Positions a tooltip of `size` next to `anchor` inside `overlay`.
///
/// The size is first capped to the overlay. Returns the bounds and the
/// side actually used.
///
/// # Errors
///
/// Style validation; `Range` for a negative overlay, anchor or size.
pub fn compute_bounds(
    style: &TooltipStyle,
    anchor: TooltipAnchor,
    placement: TooltipPlacement,
    overlay: Rect,
    size: Size,
) -> UiResult<(Rect, TooltipDirection)> {
    style.validate(false)?;
    let anchor = anchor.rect()?;
    overlay.validate()?;
    if size.width < 0.0 || size.height < 0.0 {
        return Err(UiError::Range("tooltip size is negative"));
    }

    let width = size.width.min(overlay.width);
    let height = size.height.min(overlay.height);
    let gap = style.anchor_gap;

    let (x, y, direction) = if placement.direction.is_vertical() {
        let before = anchor.y - overlay.y;
        let after = overlay.bottom() - anchor.bottom();
        let down = opens_forward(
            height,
            before,
            after,
            placement.direction == TooltipDirection::Down,
        );
        let x = aligned(anchor.x, anchor.width, width, placement.align);
        if down {
            (x, anchor.bottom() + gap, TooltipDirection::Down)
        } else {
            (x, anchor.y - height - gap, TooltipDirection::Up)
        }
    } else {
        let before = anchor.x - overlay.x;
        let after = overlay.right() - anchor.right();
        let right = opens_forward(
            width,
            before,
            after,
            placement.direction == TooltipDirection::Right,
        );
        let y = aligned(anchor.y, anchor.height, height, placement.align);
        if right {
            (anchor.right() + gap, y, TooltipDirection::Right)
        } else {
            (anchor.x - width - gap, y, TooltipDirection::Left)
        }
    };

    let x = x.max(overlay.x).min(overlay.right() - width);
    let y = y.max(overlay.y).min(overlay.bottom() - height);
    Ok((Rect::new(x, y, width, height), direction))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(width: f32, height: f32) -> TextMetrics {
        TextMetrics {
            width,
            height,
            baseline: height * 0.8,
        }
    }

    const OVERLAY: Rect = Rect::new(0.0, 0.0, 400.0, 300.0);

    #[test]
    fn test_plain_content_size() {
        let style = TooltipStyle::plain();
        let content = TooltipContent {
            title: None,
            body: Some(line(60.0, 10.0)),
        };
        // 60 + 16 wide; 10 + 8 tall floored at 24.
        assert_eq!(content_size(&style, &content).unwrap(), Size::new(76.0, 24.0));

        let capped = TooltipStyle {
            max_width: 50.0,
            ..TooltipStyle::plain()
        };
        assert_eq!(content_size(&capped, &content).unwrap().width, 50.0);
    }

    #[test]
    fn test_rich_content_stacks_title_and_body() {
        let style = TooltipStyle::rich();
        let content = TooltipContent {
            title: Some(line(80.0, 20.0)),
            body: Some(line(120.0, 16.0)),
        };
        // Widest line plus 24; 20 + 4 + 16 + 16.
        assert_eq!(content_size(&style, &content).unwrap(), Size::new(144.0, 56.0));

        let title_only = TooltipContent {
            title: Some(line(80.0, 20.0)),
            body: None,
        };
        assert_eq!(content_size(&style, &title_only).unwrap(), Size::new(104.0, 40.0));
    }

    #[test]
    fn test_missing_text_is_invalid() {
        let plain_title_only = TooltipContent {
            title: Some(line(10.0, 10.0)),
            body: None,
        };
        assert!(matches!(
            content_size(&TooltipStyle::plain(), &plain_title_only),
            Err(UiError::InvalidArgument(_))
        ));
        assert!(matches!(
            content_size(&TooltipStyle::rich(), &TooltipContent::default()),
            Err(UiError::InvalidArgument(_))
        ));

        let negative = TooltipContent {
            title: None,
            body: Some(line(-1.0, 10.0)),
        };
        assert!(matches!(
            content_size(&TooltipStyle::plain(), &negative),
            Err(UiError::Range(_))
        ));
    }

    #[test]
    fn test_prefers_requested_side() {
        let style = TooltipStyle::plain();
        let anchor = TooltipAnchor::Rect(Rect::new(100.0, 100.0, 40.0, 20.0));
        let placement = TooltipPlacement::new(TooltipDirection::Down, TooltipAlign::Center);

        let (bounds, direction) =
            compute_bounds(&style, anchor, placement, OVERLAY, Size::new(60.0, 24.0)).unwrap();
        assert_eq!(direction, TooltipDirection::Down);
        assert_eq!(bounds, Rect::new(90.0, 124.0, 60.0, 24.0));

        let up = TooltipPlacement::new(TooltipDirection::Up, TooltipAlign::Start);
        let (bounds, direction) =
            compute_bounds(&style, anchor, up, OVERLAY, Size::new(60.0, 24.0)).unwrap();
        assert_eq!(direction, TooltipDirection::Up);
        assert_eq!(bounds, Rect::new(100.0, 72.0, 60.0, 24.0));
    }

    #[test]
    fn test_flips_when_preferred_side_is_short() {
        let style = TooltipStyle::plain();
        // 10 px above the anchor, 270 px below.
        let anchor = TooltipAnchor::Rect(Rect::new(100.0, 10.0, 40.0, 20.0));
        let up = TooltipPlacement::new(TooltipDirection::Up, TooltipAlign::End);

        let (bounds, direction) =
            compute_bounds(&style, anchor, up, OVERLAY, Size::new(60.0, 24.0)).unwrap();
        assert_eq!(direction, TooltipDirection::Down);
        assert_eq!(bounds, Rect::new(80.0, 34.0, 60.0, 24.0));

        // Near the right edge a right-opening tooltip flips left.
        let anchor = TooltipAnchor::Point(390.0, 150.0);
        let right = TooltipPlacement::new(TooltipDirection::Right, TooltipAlign::Center);
        let (bounds, direction) =
            compute_bounds(&style, anchor, right, OVERLAY, Size::new(60.0, 24.0)).unwrap();
        assert_eq!(direction, TooltipDirection::Left);
        assert_eq!(bounds, Rect::new(326.0, 138.0, 60.0, 24.0));
    }

    #[test]
    fn test_neither_side_fits_picks_larger_and_clamps() {
        let style = TooltipStyle::plain();
        let overlay = Rect::new(0.0, 0.0, 400.0, 100.0);
        let anchor = TooltipAnchor::Rect(Rect::new(10.0, 30.0, 40.0, 20.0));
        let down = TooltipPlacement::new(TooltipDirection::Down, TooltipAlign::Center);

        // 30 above, 50 below: stays down, then clamps into the overlay.
        let (bounds, direction) =
            compute_bounds(&style, anchor, down, overlay, Size::new(500.0, 60.0)).unwrap();
        assert_eq!(direction, TooltipDirection::Down);
        assert_eq!(bounds, Rect::new(0.0, 40.0, 400.0, 60.0));

        let anchor = TooltipAnchor::Rect(Rect::new(10.0, 60.0, 40.0, 20.0));
        let (_, direction) =
            compute_bounds(&style, anchor, down, overlay, Size::new(50.0, 70.0)).unwrap();
        assert_eq!(direction, TooltipDirection::Up);
    }

    #[test]
    fn test_rejects_negative_geometry() {
        let style = TooltipStyle::plain();
        let placement = TooltipPlacement::default();
        let anchor = TooltipAnchor::Rect(Rect::new(0.0, 0.0, -1.0, 10.0));
        assert!(matches!(
            compute_bounds(&style, anchor, placement, OVERLAY, Size::ZERO),
            Err(UiError::Range(_))
        ));

        let anchor = TooltipAnchor::Point(10.0, 10.0);
        assert!(matches!(
            compute_bounds(&style, anchor, placement, OVERLAY, Size::new(-5.0, 5.0)),
            Err(UiError::Range(_))
        ));
        assert!(matches!(TooltipDirection::try_from(4), Err(UiError::Range(_))));
        assert_eq!(TooltipAlign::try_from(2), Ok(TooltipAlign::End));
    }
}
