//! Tab row geometry.
//!
//! Everything here is a pure function of (style, items, measurements,
//! bounds). The row widget caches what it needs from [`TabLayout`] after
//! each pass; nothing in this module touches widget state.
//!
//! ```text
//!   bounds ┌──────────────────────────────────────────────┐
//!          │ padding                                      │
//!          │   start_x                                    │
//!          │   ├─ tab ─┤ spacing ├─ tab ─┤ ... (- scroll) │
//!          │   start_y + tab_height                       │
//!          └──────────────────────────────────────────────┘
//! ```

use m3_core::{Rect, Size, TextBackend, TextMeasurer, UiError, UiResult};

use super::style::{TabMode, TabRowStyle};
use crate::item::Item;
use crate::metrics::{self, Band};

/// Result of one layout pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TabLayout {
    /// Layout mode the pass ran in.
    pub mode: TabMode,
    /// Left edge of the first tab, before scrolling.
    pub start_x: f32,
    /// Top edge of the tab band.
    pub start_y: f32,
    /// Uniform tab width (fixed mode only, zero otherwise).
    pub tab_width: f32,
    /// Tab band height.
    pub tab_height: f32,
    /// Gap between tabs.
    pub spacing: f32,
    /// Total width of all tabs and gaps.
    pub content_width: f32,
    /// Height of the tab band.
    pub content_height: f32,
    /// Width inside the padding.
    pub available_width: f32,
    /// Height inside the padding.
    pub available_height: f32,
}

impl TabLayout {
    /// Placeholder layout used before the first real pass.
    ///
    /// The band is `min_height` tall at the origin and nothing else has
    /// extent, which is enough to snap the indicator on construction.
    #[must_use]
    pub fn unplaced(style: &TabRowStyle) -> Self {
        Self {
            mode: style.mode,
            tab_height: style.min_height,
            content_height: style.min_height,
            spacing: style.spacing,
            ..Self::default()
        }
    }

    /// Largest admissible scroll offset.
    #[must_use]
    pub fn max_scroll(&self) -> f32 {
        (self.content_width - self.available_width).max(0.0)
    }
}

/// Width of one tab in scrollable mode: label plus horizontal padding,
/// floored at the minimum width.
///
/// # Errors
///
/// Propagates measurement failures.
pub fn item_width<B: TextBackend + ?Sized>(
    measurer: &TextMeasurer<'_, B>,
    style: &TabRowStyle,
    item: &Item<'_>,
) -> UiResult<f32> {
    let label = metrics::label_metrics(measurer, item)?;
    Ok(metrics::padded(label.width, style.padding_x, style.min_width))
}

/// Sum of scrollable tab widths and the gaps between them.
fn scrollable_run<B: TextBackend + ?Sized>(
    measurer: &TextMeasurer<'_, B>,
    style: &TabRowStyle,
    items: &[Item<'_>],
) -> UiResult<f32> {
    let mut total = 0.0;
    for (i, item) in items.iter().enumerate() {
        total += item_width(measurer, style, item)?;
        if i + 1 < items.len() {
            total += style.spacing;
        }
    }
    Ok(total)
}

/// Offset of tab `index` from the start of the row in scrollable mode.
fn scrollable_offset<B: TextBackend + ?Sized>(
    measurer: &TextMeasurer<'_, B>,
    style: &TabRowStyle,
    items: &[Item<'_>],
    index: usize,
) -> UiResult<f32> {
    let mut offset = 0.0;
    for item in &items[..index] {
        offset += item_width(measurer, style, item)? + style.spacing;
    }
    Ok(offset)
}

/// Natural size of the row including its padding edges.
///
/// Fixed rows size every tab to the widest label; scrollable rows size each
/// tab to its own label.
///
/// # Errors
///
/// `Range` for an invalid style, or measurement failures.
pub fn measure_content<B: TextBackend + ?Sized>(
    measurer: &TextMeasurer<'_, B>,
    style: &TabRowStyle,
    items: &[Item<'_>],
) -> UiResult<Size> {
    style.validate(false)?;
    let extents = metrics::label_extents(measurer, items)?;
    let tab_height = metrics::padded(extents.height, style.padding_y, style.min_height);

    let content_width = match style.mode {
        TabMode::Fixed => {
            let tab_width = metrics::padded(extents.width, style.padding_x, style.min_width);
            metrics::run_length(tab_width, style.spacing, items.len())
        }
        TabMode::Scrollable => scrollable_run(measurer, style, items)?,
    };

    Ok(Size::new(
        content_width + style.padding.horizontal(),
        tab_height + style.padding.vertical(),
    ))
}

/// Lays the row out inside `bounds`.
///
/// # Errors
///
/// `Range` when the style or bounds are invalid, when the padding exceeds
/// the bounds, when fixed-mode spacing does not fit, or when the tab band
/// has no height. Measurement failures propagate.
pub fn compute_layout<B: TextBackend + ?Sized>(
    measurer: &TextMeasurer<'_, B>,
    style: &TabRowStyle,
    items: &[Item<'_>],
    bounds: Rect,
) -> UiResult<TabLayout> {
    style.validate(false)?;
    bounds.validate()?;

    let available = bounds.inset(style.padding)?;
    let extents = metrics::label_extents(measurer, items)?;

    let natural = metrics::padded(extents.height, style.padding_y, style.min_height);
    let Band { start_y, height } =
        metrics::fit_band(natural, available.y, available.height, items.len())?;

    let (tab_width, content_width) = match style.mode {
        TabMode::Fixed => {
            let width = metrics::even_width(available.width, style.spacing, items.len())?;
            (width, metrics::run_length(width, style.spacing, items.len()))
        }
        TabMode::Scrollable => (0.0, scrollable_run(measurer, style, items)?),
    };
    if content_width < 0.0 {
        return Err(UiError::Range("tab content width is negative"));
    }

    Ok(TabLayout {
        mode: style.mode,
        start_x: available.x,
        start_y,
        tab_width,
        tab_height: height,
        spacing: style.spacing,
        content_width,
        content_height: height,
        available_width: available.width,
        available_height: available.height,
    })
}

/// Clamps a scroll offset into `[0, max_scroll]`.
///
/// Fixed rows never scroll, so the result there is always zero.
///
/// # Errors
///
/// `Range` for a negative offset. Only excess positive offsets are clamped.
pub fn clamp_scroll(layout: &TabLayout, offset: f32) -> UiResult<f32> {
    if offset.is_nan() || offset < 0.0 {
        return Err(UiError::Range("scroll offset is negative"));
    }
    match layout.mode {
        TabMode::Fixed => Ok(0.0),
        TabMode::Scrollable => Ok(offset.min(layout.max_scroll())),
    }
}

/// Indicator position and width for `selected`, relative to `start_x`
/// and ignoring scroll.
///
/// # Errors
///
/// `Range` for an out-of-range index or negative geometry. Measurement
/// failures propagate (scrollable mode).
pub fn indicator_target<B: TextBackend + ?Sized>(
    measurer: &TextMeasurer<'_, B>,
    style: &TabRowStyle,
    items: &[Item<'_>],
    layout: &TabLayout,
    selected: Option<usize>,
) -> UiResult<(f32, f32)> {
    let Some(index) = selected else {
        return Ok((0.0, 0.0));
    };
    if index >= items.len() {
        return Err(UiError::Range("selected index out of range"));
    }

    let (pos, width) = match layout.mode {
        TabMode::Fixed => {
            #[allow(clippy::cast_precision_loss)]
            let pos = (layout.tab_width + layout.spacing) * index as f32;
            (pos, layout.tab_width)
        }
        TabMode::Scrollable => (
            scrollable_offset(measurer, style, items, index)?,
            item_width(measurer, style, &items[index])?,
        ),
    };
    if pos < 0.0 || width < 0.0 {
        return Err(UiError::Range("indicator geometry is negative"));
    }
    Ok((pos, width))
}

/// Screen rectangle of tab `index` after scrolling.
///
/// # Errors
///
/// `Range` for an out-of-range index or negative geometry. Measurement
/// failures propagate (scrollable mode).
pub fn item_rect<B: TextBackend + ?Sized>(
    measurer: &TextMeasurer<'_, B>,
    style: &TabRowStyle,
    items: &[Item<'_>],
    layout: &TabLayout,
    index: usize,
    scroll: f32,
) -> UiResult<Rect> {
    if index >= items.len() {
        return Err(UiError::Range("tab index out of range"));
    }

    let (x, width) = match layout.mode {
        TabMode::Fixed => {
            #[allow(clippy::cast_precision_loss)]
            let offset = (layout.tab_width + layout.spacing) * index as f32;
            (layout.start_x + offset, layout.tab_width)
        }
        TabMode::Scrollable => (
            layout.start_x + scrollable_offset(measurer, style, items, index)? - scroll,
            item_width(measurer, style, &items[index])?,
        ),
    };
    if width < 0.0 || layout.tab_height < 0.0 {
        return Err(UiError::Range("tab rectangle is negative"));
    }
    Ok(Rect::new(x, layout.start_y, width, layout.tab_height))
}

/// Index of the tab under `(x, y)`, if any.
///
/// Both edges of a tab are inclusive; points inside a spacing gap miss.
///
/// # Errors
///
/// `Range` for a degenerate fixed-mode stride. Measurement failures
/// propagate (scrollable mode).
pub fn hit_test<B: TextBackend + ?Sized>(
    measurer: &TextMeasurer<'_, B>,
    style: &TabRowStyle,
    items: &[Item<'_>],
    layout: &TabLayout,
    x: f32,
    y: f32,
    scroll: f32,
) -> UiResult<Option<usize>> {
    if items.is_empty() {
        return Ok(None);
    }
    if y < layout.start_y || y > layout.start_y + layout.tab_height {
        return Ok(None);
    }

    match layout.mode {
        TabMode::Fixed => {
            if x < layout.start_x || x > layout.start_x + layout.content_width {
                return Ok(None);
            }
            metrics::uniform_hit(x - layout.start_x, layout.tab_width, layout.spacing, items.len())
        }
        TabMode::Scrollable => {
            let mut pos = x - layout.start_x + scroll;
            if pos < 0.0 || pos > layout.content_width {
                return Ok(None);
            }
            for (i, item) in items.iter().enumerate() {
                let width = item_width(measurer, style, item)?;
                if pos <= width {
                    return Ok(Some(i));
                }
                pos -= width;
                if i + 1 < items.len() {
                    if pos <= layout.spacing {
                        return Ok(None);
                    }
                    pos -= layout.spacing;
                }
            }
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use m3_core::{Edges, MonospaceTextBackend, OwnedFont, TextStyle};

    fn with_measurer(test: impl FnOnce(&TextMeasurer<'_, MonospaceTextBackend>)) {
        let backend = MonospaceTextBackend::new();
        let font = OwnedFont::create(&backend, &TextStyle::with_family("Mono")).unwrap();
        let measurer = TextMeasurer::new(&backend, font.handle().unwrap());
        test(&measurer);
    }

    fn scrollable_style() -> TabRowStyle {
        TabRowStyle {
            min_width: 0.0,
            spacing: 8.0,
            ..TabRowStyle::scrollable()
        }
    }

    #[test]
    fn test_fixed_layout_even_split() {
        with_measurer(|m| {
            let items = [Item::new(""), Item::new(""), Item::new("")];
            let style = TabRowStyle::default();
            let layout =
                compute_layout(m, &style, &items, Rect::new(0.0, 0.0, 320.0, 60.0)).unwrap();

            assert!((layout.tab_width - 106.666_67).abs() < 0.001);
            assert!((layout.content_width - 320.0).abs() < 0.001);
            // 48 tall band centred in 60
            assert_eq!(layout.tab_height, 48.0);
            assert_eq!(layout.start_y, 6.0);
        });
    }

    #[test]
    fn test_fixed_layout_additivity() {
        with_measurer(|m| {
            let items = [Item::new("A"), Item::new("B"), Item::new("C"), Item::new("D")];
            for spacing in [0.0, 4.0, 12.5] {
                let style = TabRowStyle {
                    spacing,
                    ..TabRowStyle::default()
                };
                let layout =
                    compute_layout(m, &style, &items, Rect::new(0.0, 0.0, 400.0, 48.0)).unwrap();
                let expected = layout.tab_width * 4.0 + spacing * 3.0;
                assert!((layout.content_width - expected).abs() < 0.001);
            }
        });
    }

    #[test]
    fn test_layout_range_errors() {
        with_measurer(|m| {
            let items = [Item::new("A"), Item::new("B"), Item::new("C")];
            let style = TabRowStyle {
                spacing: 100.0,
                ..TabRowStyle::default()
            };
            let narrow = compute_layout(m, &style, &items, Rect::new(0.0, 0.0, 150.0, 48.0));
            assert!(matches!(narrow, Err(UiError::Range(_))));

            let padded = TabRowStyle {
                padding: Edges::all(40.0),
                ..TabRowStyle::default()
            };
            let squeezed = compute_layout(m, &padded, &items, Rect::new(0.0, 0.0, 60.0, 60.0));
            assert!(matches!(squeezed, Err(UiError::Range(_))));

            let flat = compute_layout(m, &TabRowStyle::default(), &items, Rect::ZERO);
            assert!(matches!(flat, Err(UiError::Range(_))));
        });
    }

    #[test]
    fn test_layout_clips_tall_band() {
        with_measurer(|m| {
            let items = [Item::new("Home")];
            let layout = compute_layout(
                m,
                &TabRowStyle::default(),
                &items,
                Rect::new(0.0, 10.0, 200.0, 30.0),
            )
            .unwrap();
            assert_eq!(layout.tab_height, 30.0);
            assert_eq!(layout.start_y, 10.0);
        });
    }

    #[test]
    fn test_scrollable_layout_and_measure() {
        with_measurer(|m| {
            // "Home" = 28 + 32, "Library" = 49 + 32
            let items = [Item::new("Home"), Item::new("Library")];
            let style = scrollable_style();
            let layout =
                compute_layout(m, &style, &items, Rect::new(0.0, 0.0, 100.0, 48.0)).unwrap();
            assert!((layout.content_width - 149.0).abs() < 0.001);
            assert!((layout.max_scroll() - 49.0).abs() < 0.001);

            let size = measure_content(m, &style, &items).unwrap();
            assert!((size.width - 149.0).abs() < 0.001);
            assert_eq!(size.height, 48.0);
        });
    }

    #[test]
    fn test_measure_fixed_uses_widest_label() {
        with_measurer(|m| {
            let items = [Item::new("Home"), Item::new("Library")];
            let style = TabRowStyle {
                min_width: 0.0,
                spacing: 10.0,
                padding: Edges::symmetric(4.0, 2.0),
                ..TabRowStyle::default()
            };
            let size = measure_content(m, &style, &items).unwrap();
            assert!((size.width - (81.0 * 2.0 + 10.0 + 8.0)).abs() < 0.001);
            assert_eq!(size.height, 52.0);
        });
    }

    #[test]
    fn test_clamp_scroll() {
        let layout = TabLayout {
            mode: TabMode::Scrollable,
            content_width: 500.0,
            available_width: 120.0,
            ..TabLayout::default()
        };
        assert_eq!(clamp_scroll(&layout, 1000.0), Ok(380.0));
        assert_eq!(clamp_scroll(&layout, 200.0), Ok(200.0));
        assert!(matches!(clamp_scroll(&layout, -5.0), Err(UiError::Range(_))));

        let once = clamp_scroll(&layout, 1000.0).unwrap();
        assert_eq!(clamp_scroll(&layout, once), Ok(once));

        let fixed = TabLayout {
            mode: TabMode::Fixed,
            ..layout
        };
        assert_eq!(clamp_scroll(&fixed, 50.0), Ok(0.0));
    }

    #[test]
    fn test_indicator_target() {
        with_measurer(|m| {
            let items = [Item::new("Home"), Item::new("Library"), Item::new("X")];
            let style = scrollable_style();
            let layout =
                compute_layout(m, &style, &items, Rect::new(0.0, 0.0, 100.0, 48.0)).unwrap();

            assert_eq!(indicator_target(m, &style, &items, &layout, None), Ok((0.0, 0.0)));
            let (pos, width) = indicator_target(m, &style, &items, &layout, Some(1)).unwrap();
            assert!((pos - 68.0).abs() < 0.001);
            assert!((width - 81.0).abs() < 0.001);
            assert!(indicator_target(m, &style, &items, &layout, Some(3)).is_err());

            let fixed = TabRowStyle::default();
            let layout =
                compute_layout(m, &fixed, &items, Rect::new(0.0, 0.0, 300.0, 48.0)).unwrap();
            assert_eq!(
                indicator_target(m, &fixed, &items, &layout, Some(2)),
                Ok((200.0, 100.0))
            );
        });
    }

    #[test]
    fn test_item_rect_applies_scroll() {
        with_measurer(|m| {
            let items = [Item::new("Home"), Item::new("Library")];
            let style = scrollable_style();
            let layout =
                compute_layout(m, &style, &items, Rect::new(10.0, 0.0, 100.0, 48.0)).unwrap();
            let rect = item_rect(m, &style, &items, &layout, 1, 20.0).unwrap();
            assert!((rect.x - (10.0 + 68.0 - 20.0)).abs() < 0.001);
            assert!((rect.width - 81.0).abs() < 0.001);
            assert!(item_rect(m, &style, &items, &layout, 2, 0.0).is_err());
        });
    }

    #[test]
    fn test_hit_test_scrollable_walk() {
        with_measurer(|m| {
            // [0,60] gap (60,68] [68,149]
            let items = [Item::new("Home"), Item::new("Library")];
            let style = scrollable_style();
            let layout =
                compute_layout(m, &style, &items, Rect::new(0.0, 0.0, 100.0, 48.0)).unwrap();
            let hit = |x: f32, scroll: f32| hit_test(m, &style, &items, &layout, x, 10.0, scroll);

            assert_eq!(hit(0.0, 0.0), Ok(Some(0)));
            assert_eq!(hit(60.0, 0.0), Ok(Some(0)));
            assert_eq!(hit(64.0, 0.0), Ok(None));
            assert_eq!(hit(70.0, 0.0), Ok(Some(1)));
            assert_eq!(hit(40.0, 30.0), Ok(Some(1)));
            assert_eq!(hit(-1.0, 0.0), Ok(None));
            assert_eq!(hit_test(m, &style, &items, &layout, 10.0, 49.0, 0.0), Ok(None));
        });
    }

    #[test]
    fn test_hit_test_fixed_closed_edge() {
        with_measurer(|m| {
            let items = [Item::new("A"), Item::new("B"), Item::new("C")];
            let style = TabRowStyle {
                spacing: 10.0,
                ..TabRowStyle::default()
            };
            let layout =
                compute_layout(m, &style, &items, Rect::new(0.0, 0.0, 320.0, 48.0)).unwrap();
            assert_eq!(layout.tab_width, 100.0);

            let hit = |x: f32| hit_test(m, &style, &items, &layout, x, 24.0, 0.0);
            assert_eq!(hit(100.0), Ok(Some(0)));
            assert_eq!(hit(105.0), Ok(None));
            assert_eq!(hit(320.0), Ok(Some(2)));
            assert_eq!(hit(321.0), Ok(None));
            assert_eq!(hit_test(m, &style, &[], &layout, 10.0, 24.0, 0.0), Ok(None));
        });
    }
}
