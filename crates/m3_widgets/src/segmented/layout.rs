//! Segment geometry.
//!
//! Segments always split the available width evenly; there is no scrolling
//! variant.

use m3_core::{Rect, Size, TextBackend, TextMeasurer, UiError, UiResult};

use super::style::SegmentedStyle;
use crate::item::Item;
use crate::metrics::{self, Band};

/// Result of one layout pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SegmentedLayout {
    /// Left edge of the first segment.
    pub start_x: f32,
    /// Top edge of the segment band.
    pub start_y: f32,
    /// Width of every segment.
    pub segment_width: f32,
    /// Height of every segment.
    pub segment_height: f32,
    /// Gap between segments.
    pub spacing: f32,
    /// Total width of segments and gaps.
    pub content_width: f32,
    /// Height of the band.
    pub content_height: f32,
}

/// Natural size of the group including its padding edges.
///
/// # Errors
///
/// `Range` for an invalid style; measurement failures.
pub fn measure_content<B: TextBackend + ?Sized>(
    measurer: &TextMeasurer<'_, B>,
    style: &SegmentedStyle,
    items: &[Item<'_>],
) -> UiResult<Size> {
    style.validate(false)?;
    let extents = metrics::label_extents(measurer, items)?;
    let segment_width = metrics::padded(extents.width, style.padding_x, style.min_width);
    let segment_height = metrics::padded(extents.height, style.padding_y, style.min_height);
    Ok(Size::new(
        metrics::run_length(segment_width, style.spacing, items.len()) + style.padding.horizontal(),
        segment_height + style.padding.vertical(),
    ))
}

/// Lays the segments out inside `bounds`.
///
/// # Errors
///
/// `Range` for an invalid style or bounds, padding larger than the bounds,
/// spacing that does not fit, or a band with no height. Measurement
/// failures propagate.
pub fn compute_layout<B: TextBackend + ?Sized>(
    measurer: &TextMeasurer<'_, B>,
    style: &SegmentedStyle,
    items: &[Item<'_>],
    bounds: Rect,
) -> UiResult<SegmentedLayout> {
    style.validate(false)?;
    bounds.validate()?;

    let available = bounds.inset(style.padding)?;
    let extents = metrics::label_extents(measurer, items)?;

    let natural = metrics::padded(extents.height, style.padding_y, style.min_height);
    let Band { start_y, height } =
        metrics::fit_band(natural, available.y, available.height, items.len())?;
    let segment_width = metrics::even_width(available.width, style.spacing, items.len())?;

    Ok(SegmentedLayout {
        start_x: available.x,
        start_y,
        segment_width,
        segment_height: height,
        spacing: style.spacing,
        content_width: metrics::run_length(segment_width, style.spacing, items.len()),
        content_height: height,
    })
}

/// Rectangle of segment `index`.
///
/// # Errors
///
/// `Range` for negative geometry.
pub fn segment_rect(layout: &SegmentedLayout, index: usize) -> UiResult<Rect> {
    if layout.segment_width < 0.0 || layout.segment_height < 0.0 {
        return Err(UiError::Range("segment rectangle is negative"));
    }
    #[allow(clippy::cast_precision_loss)]
    let offset = (layout.segment_width + layout.spacing) * index as f32;
    Ok(Rect::new(
        layout.start_x + offset,
        layout.start_y,
        layout.segment_width,
        layout.segment_height,
    ))
}

/// Index of the segment under `(x, y)`, if any. Edges are inclusive.
///
/// # Errors
///
/// `Range` for a degenerate stride.
pub fn hit_test(layout: &SegmentedLayout, count: usize, x: f32, y: f32) -> UiResult<Option<usize>> {
    if count == 0 {
        return Ok(None);
    }
    if x < layout.start_x || x > layout.start_x + layout.content_width {
        return Ok(None);
    }
    if y < layout.start_y || y > layout.start_y + layout.segment_height {
        return Ok(None);
    }
    metrics::uniform_hit(x - layout.start_x, layout.segment_width, layout.spacing, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use m3_core::{Edges, MonospaceTextBackend, OwnedFont, TextStyle};

    #[test]
    fn test_layout_and_hit() {
        let backend = MonospaceTextBackend::new();
        let font = OwnedFont::create(&backend, &TextStyle::with_family("Mono")).unwrap();
        let measurer = TextMeasurer::new(&backend, font.handle().unwrap());

        let items = [Item::new("Day"), Item::new("Week")];
        let style = SegmentedStyle {
            spacing: 4.0,
            padding_y: 7.0,
            padding: Edges::all(2.0),
            ..SegmentedStyle::default()
        };
        let layout =
            compute_layout(&measurer, &style, &items, Rect::new(0.0, 0.0, 208.0, 44.0)).unwrap();

        assert_eq!(layout.segment_width, 100.0);
        assert_eq!(layout.content_width, 204.0);
        // 32 tall band centred in the 40 px between the padding
        assert_eq!(layout.start_y, 6.0);

        assert_eq!(hit_test(&layout, 2, 2.0, 10.0), Ok(Some(0)));
        assert_eq!(hit_test(&layout, 2, 104.0, 10.0), Ok(None));
        assert_eq!(hit_test(&layout, 2, 106.0, 10.0), Ok(Some(1)));
        assert_eq!(hit_test(&layout, 2, 106.0, 39.0), Ok(None));
        assert_eq!(hit_test(&layout, 0, 10.0, 10.0), Ok(None));

        let second = segment_rect(&layout, 1).unwrap();
        assert_eq!(second, Rect::new(106.0, 6.0, 100.0, 32.0));
    }

    #[test]
    fn test_measure_content() {
        let backend = MonospaceTextBackend::new();
        let font = OwnedFont::create(&backend, &TextStyle::with_family("Mono")).unwrap();
        let measurer = TextMeasurer::new(&backend, font.handle().unwrap());

        // "Monthly" is 49 wide, + 24 padding = 73 > 64 minimum
        let items = [Item::new("Day"), Item::new("Monthly")];
        let size = measure_content(&measurer, &SegmentedStyle::default(), &items).unwrap();
        assert!((size.width - 146.0).abs() < 0.001);
        assert!((size.height - 32.8).abs() < 0.001);
    }
}
