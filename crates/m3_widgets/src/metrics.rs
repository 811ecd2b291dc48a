//! Row geometry shared by the tab row and segmented buttons.
//!
//! Both widgets lay their items out in a single horizontal band. The pieces
//! here are pure: they take measurements and numbers and return numbers.

use m3_core::{Rect, TextBackend, TextMeasurer, TextMetrics, UiError, UiResult};

use crate::item::Item;

/// Largest label extents across a set of items.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LabelExtents {
    /// Widest label.
    pub width: f32,
    /// Tallest label.
    pub height: f32,
    /// Deepest baseline.
    pub baseline: f32,
}

/// Measures every non-blank label once and keeps the maxima.
///
/// # Errors
///
/// Propagates measurement failures.
pub fn label_extents<B: TextBackend + ?Sized>(
    measurer: &TextMeasurer<'_, B>,
    items: &[Item<'_>],
) -> UiResult<LabelExtents> {
    let mut extents = LabelExtents::default();
    for item in items.iter().filter(|item| !item.is_blank()) {
        let metrics = measurer.measure(item.label)?;
        extents.width = extents.width.max(metrics.width);
        extents.height = extents.height.max(metrics.height);
        extents.baseline = extents.baseline.max(metrics.baseline);
    }
    Ok(extents)
}

/// Measures one label, blank labels measuring zero.
///
/// # Errors
///
/// Propagates measurement failures.
pub fn label_metrics<B: TextBackend + ?Sized>(
    measurer: &TextMeasurer<'_, B>,
    item: &Item<'_>,
) -> UiResult<TextMetrics> {
    if item.is_blank() {
        return Ok(TextMetrics::default());
    }
    measurer.measure(item.label)
}

/// `content + 2 * padding`, floored at `minimum`.
#[must_use]
pub fn padded(content: f32, padding: f32, minimum: f32) -> f32 {
    (content + padding * 2.0).max(minimum)
}

/// Width of `count` items of `item_width` separated by `spacing`.
#[must_use]
pub fn run_length(item_width: f32, spacing: f32, count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = count as f32;
    item_width * n + spacing * (n - 1.0)
}

/// Splits `available` evenly between `count` items after spacing.
///
/// # Errors
///
/// `Range` when the spacing alone does not fit.
pub fn even_width(available: f32, spacing: f32, count: usize) -> UiResult<f32> {
    if count == 0 {
        return Ok(0.0);
    }
    #[allow(clippy::cast_precision_loss)]
    let n = count as f32;
    let total_spacing = spacing * (n - 1.0);
    if available < total_spacing {
        return Err(UiError::Range("bounds too narrow for item spacing"));
    }
    let width = (available - total_spacing) / n;
    if width < 0.0 {
        return Err(UiError::Range("item width is negative"));
    }
    Ok(width)
}

/// Vertical placement of the item band inside the content area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    /// Top of the band.
    pub start_y: f32,
    /// Band height.
    pub height: f32,
}

/// Fits a band of `natural` height into `available` height starting at `top`.
///
/// The band is clipped to the available height when taller, and centred
/// when shorter.
///
/// # Errors
///
/// `Range` for a non-positive natural height, or when there are items but
/// no vertical room.
pub fn fit_band(natural: f32, top: f32, available: f32, count: usize) -> UiResult<Band> {
    if natural <= 0.0 {
        return Err(UiError::Range("item height must be positive"));
    }
    if count > 0 && available <= 0.0 {
        return Err(UiError::Range("no vertical room for items"));
    }
    let height = if natural > available && available > 0.0 {
        available
    } else {
        natural
    };
    let slack = if available > height {
        (available - height) * 0.5
    } else {
        0.0
    };
    Ok(Band {
        start_y: top + slack,
        height,
    })
}

/// Hit-tests a row of `count` equal items.
///
/// `pos` is measured from the start of the row. A point exactly on the
/// trailing edge of an item still hits it; points inside a spacing gap miss.
///
/// # Errors
///
/// `Range` for a non-positive stride.
pub fn uniform_hit(pos: f32, item_width: f32, spacing: f32, count: usize) -> UiResult<Option<usize>> {
    let stride = item_width + spacing;
    if stride <= 0.0 {
        return Err(UiError::Range("hit-test stride must be positive"));
    }
    if pos < 0.0 {
        return Ok(None);
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = (pos / stride) as usize;
    if index >= count {
        return Ok(None);
    }
    #[allow(clippy::cast_precision_loss)]
    let item_start = index as f32 * stride;
    if pos > item_start + item_width {
        return Ok(None);
    }
    Ok(Some(index))
}

/// Baseline origin that centres `metrics` inside `rect`.
#[must_use]
pub fn centered_text(rect: Rect, metrics: TextMetrics) -> (f32, f32) {
    let x = rect.x + (rect.width - metrics.width) * 0.5;
    let y = rect.y + (rect.height - metrics.height) * 0.5 + metrics.baseline;
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use m3_core::{MonospaceTextBackend, OwnedFont, TextStyle};

    #[test]
    fn test_label_extents_skip_blank() {
        let backend = MonospaceTextBackend::new();
        let font = OwnedFont::create(&backend, &TextStyle::default()).unwrap();
        let measurer = TextMeasurer::new(&backend, font.handle().unwrap());

        let items = [Item::new("Home"), Item::new(""), Item::new("Library")];
        let extents = label_extents(&measurer, &items).unwrap();
        assert!((extents.width - 49.0).abs() < 0.001);
        assert!((extents.height - 16.8).abs() < 0.001);

        let none = label_extents(&measurer, &[]).unwrap();
        assert_eq!(none, LabelExtents::default());
    }

    #[test]
    fn test_even_width() {
        let width = even_width(320.0, 0.0, 3).unwrap();
        assert!((width - 106.666_67).abs() < 0.001);

        assert!((even_width(100.0, 10.0, 3).unwrap() - 26.666_67).abs() < 0.001);
        assert!(matches!(even_width(15.0, 10.0, 3), Err(UiError::Range(_))));
        assert_eq!(even_width(0.0, 10.0, 0), Ok(0.0));
    }

    #[test]
    fn test_run_length() {
        assert_eq!(run_length(50.0, 8.0, 0), 0.0);
        assert_eq!(run_length(50.0, 8.0, 1), 50.0);
        assert_eq!(run_length(50.0, 8.0, 3), 166.0);
    }

    #[test]
    fn test_fit_band() {
        let band = fit_band(48.0, 0.0, 60.0, 3).unwrap();
        assert_eq!(band, Band { start_y: 6.0, height: 48.0 });

        let clipped = fit_band(48.0, 10.0, 30.0, 3).unwrap();
        assert_eq!(clipped, Band { start_y: 10.0, height: 30.0 });

        assert!(fit_band(48.0, 0.0, 0.0, 3).is_err());
        assert!(fit_band(48.0, 0.0, 0.0, 0).is_ok());
        assert!(fit_band(0.0, 0.0, 60.0, 3).is_err());
    }

    #[test]
    fn test_uniform_hit_edges() {
        // Items 100 wide, gaps of 10: [0,100] [110,210] [220,320]
        assert_eq!(uniform_hit(0.0, 100.0, 10.0, 3), Ok(Some(0)));
        assert_eq!(uniform_hit(100.0, 100.0, 10.0, 3), Ok(Some(0)));
        assert_eq!(uniform_hit(105.0, 100.0, 10.0, 3), Ok(None));
        assert_eq!(uniform_hit(110.0, 100.0, 10.0, 3), Ok(Some(1)));
        assert_eq!(uniform_hit(330.0, 100.0, 10.0, 3), Ok(None));
        assert!(uniform_hit(5.0, 0.0, 0.0, 3).is_err());
    }

    #[test]
    fn test_centered_text() {
        let metrics = TextMetrics {
            width: 20.0,
            height: 10.0,
            baseline: 8.0,
        };
        let (x, y) = centered_text(Rect::new(0.0, 0.0, 100.0, 40.0), metrics);
        assert_eq!((x, y), (40.0, 23.0));
    }
}
