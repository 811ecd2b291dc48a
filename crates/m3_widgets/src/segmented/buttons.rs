//! The segmented buttons widget.

use m3_core::{
    InputEvent, MeasureSpec, OwnedFont, PaintBackend, PointerEvent, Rect, SemanticFlags,
    SemanticRole, Semantics, Size, TextBackend, TextMeasurer, UiError, UiResult, Widget,
    WidgetFlags,
};

use super::layout::{self, SegmentedLayout};
use super::style::{SegmentedStyle, SelectionMode};
use crate::item::Item;
use crate::metrics;
use crate::validate;

/// Selection callback. Receives the segment and its new selected state; an
/// error rolls the change back.
pub type SegmentSelectCallback<'a> = Box<dyn FnMut(usize, bool) -> UiResult<()> + 'a>;

/// Where the selection lives.
///
/// Multi-select flags belong to the caller. The widget flips them in place
/// and never resizes the slice; it must hold one flag per item.
#[derive(Debug)]
pub enum SegmentedSelection<'a> {
    /// One optional selected segment.
    Single(Option<usize>),
    /// One flag per segment, borrowed from the caller.
    Multi(&'a mut [bool]),
}

impl SegmentedSelection<'_> {
    /// Selection mode this storage implies.
    #[must_use]
    pub fn mode(&self) -> SelectionMode {
        match self {
            Self::Single(_) => SelectionMode::Single,
            Self::Multi(_) => SelectionMode::Multi,
        }
    }

    fn validate(&self, count: usize) -> UiResult<()> {
        match self {
            Self::Single(selected) => validate::selection(*selected, count),
            Self::Multi(states) => validate::states(states, count),
        }
    }

    fn is_selected(&self, index: usize) -> bool {
        match self {
            Self::Single(selected) => *selected == Some(index),
            Self::Multi(states) => states.get(index).copied().unwrap_or(false),
        }
    }
}

/// A row of connected toggle segments.
pub struct SegmentedButtons<'a, B: TextBackend> {
    backend: B,
    style: SegmentedStyle,
    items: &'a [Item<'a>],
    selection: SegmentedSelection<'a>,
    font: OwnedFont,
    flags: WidgetFlags,
    pressed: Option<usize>,
    bounds: Rect,
    on_select: Option<SegmentSelectCallback<'a>>,
}

impl<'a, B: TextBackend> SegmentedButtons<'a, B> {
    /// Creates the group.
    ///
    /// # Errors
    ///
    /// Style validation (a font family is required), a selection that does
    /// not match the items, or font creation failures.
    pub fn new(
        backend: B,
        style: SegmentedStyle,
        items: &'a [Item<'a>],
        selection: SegmentedSelection<'a>,
    ) -> UiResult<Self> {
        style.validate(true)?;
        selection.validate(items.len())?;

        let font = OwnedFont::create(&backend, &style.text_style)?;
        tracing::debug!(
            "segmented group created with {} items ({:?})",
            items.len(),
            selection.mode()
        );
        Ok(Self {
            backend,
            style,
            items,
            selection,
            font,
            flags: WidgetFlags::from_bits(WidgetFlags::FOCUSABLE),
            pressed: None,
            bounds: Rect::ZERO,
            on_select: None,
        })
    }

    /// Selection mode.
    #[must_use]
    pub fn mode(&self) -> SelectionMode {
        self.selection.mode()
    }

    /// Replaces the items.
    ///
    /// A single selection or press that no longer fits is cleared. In
    /// multi mode the flag slice cannot grow, so the count must not change;
    /// use [`SegmentedButtons::set_items_with_states`] for that.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the multi-select flags no longer match.
    pub fn set_items(&mut self, items: &'a [Item<'a>]) -> UiResult<()> {
        if let SegmentedSelection::Multi(states) = &self.selection {
            validate::states(states, items.len())?;
        }
        self.items = items;
        if let SegmentedSelection::Single(selected) = &mut self.selection {
            if selected.is_some_and(|index| index >= items.len()) {
                *selected = None;
            }
        }
        if self.pressed.is_some_and(|index| index >= items.len()) {
            self.pressed = None;
        }
        Ok(())
    }

    /// Replaces the items together with their multi-select flags.
    ///
    /// # Errors
    ///
    /// `State` in single mode, `InvalidArgument` if the lengths differ.
    pub fn set_items_with_states(
        &mut self,
        items: &'a [Item<'a>],
        states: &'a mut [bool],
    ) -> UiResult<()> {
        if self.mode() != SelectionMode::Multi {
            return Err(UiError::State("selection flags need multi mode"));
        }
        validate::states(states, items.len())?;
        self.items = items;
        self.selection = SegmentedSelection::Multi(states);
        if self.pressed.is_some_and(|index| index >= items.len()) {
            self.pressed = None;
        }
        Ok(())
    }

    /// Replaces the style and its font. On failure nothing changes.
    ///
    /// # Errors
    ///
    /// Style validation or font failures.
    pub fn set_style(&mut self, style: SegmentedStyle) -> UiResult<()> {
        style.validate(true)?;
        let font = OwnedFont::create(&self.backend, &style.text_style)?;
        self.font.replace(font, &self.backend)?;
        self.style = style;
        Ok(())
    }

    /// Sets the selected segment in single mode.
    ///
    /// # Errors
    ///
    /// `State` in multi mode, `Range` for an out-of-range index.
    pub fn set_selected_index(&mut self, selected: Option<usize>) -> UiResult<()> {
        let count = self.items.len();
        match &mut self.selection {
            SegmentedSelection::Single(current) => {
                validate::selection(selected, count)?;
                *current = selected;
                Ok(())
            }
            SegmentedSelection::Multi(_) => Err(UiError::State("selected index needs single mode")),
        }
    }

    /// Selected segment in single mode.
    ///
    /// # Errors
    ///
    /// `State` in multi mode.
    pub fn selected_index(&self) -> UiResult<Option<usize>> {
        match &self.selection {
            SegmentedSelection::Single(selected) => Ok(*selected),
            SegmentedSelection::Multi(_) => Err(UiError::State("selected index needs single mode")),
        }
    }

    /// Sets one flag in multi mode.
    ///
    /// # Errors
    ///
    /// `State` in single mode, `Range` for an out-of-range index.
    pub fn set_selected_state(&mut self, index: usize, selected: bool) -> UiResult<()> {
        let count = self.items.len();
        match &mut self.selection {
            SegmentedSelection::Multi(states) => {
                if index >= count {
                    return Err(UiError::Range("segment index out of range"));
                }
                validate::states(states, count)?;
                states[index] = selected;
                Ok(())
            }
            SegmentedSelection::Single(_) => Err(UiError::State("selection flags need multi mode")),
        }
    }

    /// Reads one flag in multi mode.
    ///
    /// # Errors
    ///
    /// `State` in single mode, `Range` for an out-of-range index.
    pub fn selected_state(&self, index: usize) -> UiResult<bool> {
        match &self.selection {
            SegmentedSelection::Multi(states) => {
                if index >= self.items.len() {
                    return Err(UiError::Range("segment index out of range"));
                }
                validate::states(states, self.items.len())?;
                Ok(states[index])
            }
            SegmentedSelection::Single(_) => Err(UiError::State("selection flags need multi mode")),
        }
    }

    /// Segment under an unreleased press.
    #[must_use]
    pub fn pressed(&self) -> Option<usize> {
        self.pressed
    }

    /// Installs or clears the selection callback.
    pub fn set_on_select(&mut self, on_select: Option<SegmentSelectCallback<'a>>) {
        self.on_select = on_select;
    }

    /// Enables or disables the group.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.flags.assign(WidgetFlags::DISABLED, disabled);
    }

    /// Current style.
    #[must_use]
    pub fn style(&self) -> &SegmentedStyle {
        &self.style
    }

    /// Bounds from the last layout.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Borrowed items.
    #[must_use]
    pub fn items(&self) -> &'a [Item<'a>] {
        self.items
    }

    fn measurer(&self) -> UiResult<TextMeasurer<'_, B>> {
        Ok(TextMeasurer::new(&self.backend, self.font.handle()?))
    }

    fn current_layout(&self) -> UiResult<SegmentedLayout> {
        layout::compute_layout(&self.measurer()?, &self.style, self.items, self.bounds)
    }

    fn hit(&self, pointer: &PointerEvent) -> UiResult<Option<usize>> {
        let layout = self.current_layout()?;
        #[allow(clippy::cast_precision_loss)]
        let (x, y) = (pointer.x as f32, pointer.y as f32);
        layout::hit_test(&layout, self.items.len(), x, y)
    }

    fn on_pointer_down(&mut self, pointer: &PointerEvent) -> UiResult<bool> {
        let index = self.hit(pointer)?;
        if self.pressed.is_some() {
            return Err(UiError::State("pointer pressed twice without release"));
        }
        let Some(index) = index else {
            return Ok(false);
        };
        self.pressed = Some(index);
        Ok(true)
    }

    fn on_pointer_up(&mut self, pointer: &PointerEvent) -> UiResult<bool> {
        let index = self.hit(pointer)?;
        let Some(pressed) = self.pressed else {
            return Ok(false);
        };

        let committed = if index == Some(pressed) {
            self.commit(pressed)
        } else {
            Ok(())
        };
        self.pressed = None;
        committed.map(|()| true)
    }

    /// Applies the toggle for `index` and notifies the callback. A callback
    /// error restores the previous selection.
    fn commit(&mut self, index: usize) -> UiResult<()> {
        let (previous, selected) = match &mut self.selection {
            SegmentedSelection::Single(current) => {
                let previous = *current;
                *current = Some(index);
                (Rollback::Index(previous), true)
            }
            SegmentedSelection::Multi(states) => {
                let flag = states
                    .get_mut(index)
                    .ok_or(UiError::Range("segment index out of range"))?;
                let previous = *flag;
                *flag = !previous;
                (Rollback::Flag(previous), !previous)
            }
        };

        let notified = match self.on_select.as_mut() {
            Some(on_select) => on_select(index, selected),
            None => Ok(()),
        };
        if let Err(err) = notified {
            tracing::warn!("segment {} rejected by callback: {}", index, err);
            match (&mut self.selection, previous) {
                (SegmentedSelection::Single(current), Rollback::Index(previous)) => {
                    *current = previous;
                }
                (SegmentedSelection::Multi(states), Rollback::Flag(previous)) => {
                    states[index] = previous;
                }
                _ => {}
            }
            return Err(err);
        }

        tracing::debug!("segment {} set to {}", index, selected);
        Ok(())
    }
}

/// What to restore when a callback rejects a commit.
#[derive(Debug, Clone, Copy)]
enum Rollback {
    Index(Option<usize>),
    Flag(bool),
}

impl<'a, B: TextBackend> Widget for SegmentedButtons<'a, B> {
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> UiResult<Size> {
        width.validate()?;
        height.validate()?;
        let content = layout::measure_content(&self.measurer()?, &self.style, self.items)?;
        Ok(Size::new(
            width.resolve(content.width),
            height.resolve(content.height),
        ))
    }

    fn layout(&mut self, bounds: Rect) -> UiResult<()> {
        bounds.validate()?;
        self.bounds = bounds;
        Ok(())
    }

    fn paint(&mut self, painter: &mut dyn PaintBackend) -> UiResult<()> {
        let layout = self.current_layout()?;
        if self.items.is_empty() {
            return Ok(());
        }

        let style = &self.style;
        let outline = style.outline_width;
        let disabled = self.flags.has(WidgetFlags::DISABLED);
        let last = self.items.len() - 1;
        let measurer = self.measurer()?;

        for (index, item) in self.items.iter().enumerate() {
            let segment = layout::segment_rect(&layout, index)?;
            let corner = if index == 0 || index == last {
                style.corner_radius
            } else {
                0.0
            };
            let colors = style.segment_colors(self.selection.is_selected(index), disabled);

            let (inner, inner_corner) = if outline > 0.0 {
                painter.draw_rect(segment, colors.outline, corner)?;
                (segment.shrink(outline)?, (corner - outline).max(0.0))
            } else {
                (segment, corner)
            };
            if colors.background.is_visible() {
                painter.draw_rect(inner, colors.background, inner_corner)?;
            }

            if item.is_blank() {
                continue;
            }
            let text = measurer.measure(item.label)?;
            let (x, y) = metrics::centered_text(segment, text);
            painter.draw_text(measurer.font(), item.label, x, y, colors.text)?;
        }
        Ok(())
    }

    fn handle_event(&mut self, event: &InputEvent) -> UiResult<bool> {
        if self.flags.has(WidgetFlags::DISABLED) {
            return Ok(false);
        }
        if !matches!(event, InputEvent::PointerDown(_) | InputEvent::PointerUp(_)) {
            return Ok(false);
        }
        self.selection.validate(self.items.len())?;

        match event {
            InputEvent::PointerDown(pointer) => self.on_pointer_down(pointer),
            InputEvent::PointerUp(pointer) => self.on_pointer_up(pointer),
            _ => Ok(false),
        }
    }

    fn semantics(&self) -> Semantics {
        Semantics {
            role: SemanticRole::None,
            flags: SemanticFlags::from_widget(self.flags),
            ..Semantics::default()
        }
    }

    fn destroy(&mut self) -> UiResult<()> {
        let released = self.font.release(&self.backend);
        self.items = &[];
        self.selection = match self.selection {
            SegmentedSelection::Single(_) => SegmentedSelection::Single(None),
            SegmentedSelection::Multi(_) => SegmentedSelection::Multi(&mut []),
        };
        self.pressed = None;
        self.bounds = Rect::ZERO;
        self.on_select = None;
        released
    }

    fn flags(&self) -> WidgetFlags {
        self.flags
    }

    fn set_flags(&mut self, flags: WidgetFlags) {
        self.flags = flags;
    }
}

impl<'a, B: TextBackend> Drop for SegmentedButtons<'a, B> {
    fn drop(&mut self) {
        if let Err(err) = self.font.release(&self.backend) {
            tracing::warn!("segmented font release failed: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use m3_core::{MonospaceTextBackend, PaintRecorder, TextStyle};

    fn style() -> SegmentedStyle {
        SegmentedStyle {
            text_style: TextStyle::with_family("Mono"),
            ..SegmentedStyle::default()
        }
    }

    static ITEMS: [Item<'static>; 3] = [Item::new("Day"), Item::new("Week"), Item::new("Month")];

    #[test]
    fn test_single_click_selects() {
        let backend = MonospaceTextBackend::new();
        let mut group =
            SegmentedButtons::new(&backend, style(), &ITEMS, SegmentedSelection::Single(None))
                .unwrap();
        group.layout(Rect::new(0.0, 0.0, 300.0, 32.0)).unwrap();

        assert!(group.handle_event(&InputEvent::down(150, 16)).unwrap());
        assert!(group.handle_event(&InputEvent::up(150, 16)).unwrap());
        assert_eq!(group.selected_index(), Ok(Some(1)));
        assert!(matches!(group.selected_state(0), Err(UiError::State(_))));
    }

    #[test]
    fn test_multi_length_mismatch_rejected() {
        let backend = MonospaceTextBackend::new();
        let mut flags = [false, true];
        let result = SegmentedButtons::new(
            &backend,
            style(),
            &ITEMS,
            SegmentedSelection::Multi(&mut flags),
        );
        assert!(matches!(result, Err(UiError::InvalidArgument(_))));
    }

    #[test]
    fn test_mode_guards() {
        let backend = MonospaceTextBackend::new();
        let mut flags = [false, false, false];
        let mut group = SegmentedButtons::new(
            &backend,
            style(),
            &ITEMS,
            SegmentedSelection::Multi(&mut flags),
        )
        .unwrap();

        assert_eq!(group.mode(), SelectionMode::Multi);
        assert!(matches!(group.set_selected_index(Some(0)), Err(UiError::State(_))));
        assert!(matches!(group.set_selected_state(3, true), Err(UiError::Range(_))));
        group.set_selected_state(2, true).unwrap();
        assert_eq!(group.selected_state(2), Ok(true));
        assert!(matches!(group.set_items(&ITEMS[..2]), Err(UiError::InvalidArgument(_))));
    }

    #[test]
    fn test_paint_outline_and_corners() {
        let backend = MonospaceTextBackend::new();
        let mut group = SegmentedButtons::new(
            &backend,
            style(),
            &ITEMS,
            SegmentedSelection::Single(Some(0)),
        )
        .unwrap();
        group.layout(Rect::new(0.0, 0.0, 300.0, 32.0)).unwrap();

        let mut recorder = PaintRecorder::new();
        group.paint(&mut recorder).unwrap();

        // Outline for each segment, fill only for the selected one.
        let rects: Vec<_> = recorder.rects().collect();
        assert_eq!(rects.len(), 4);
        assert_eq!(rects[0], (Rect::new(0.0, 0.0, 100.0, 32.0), style().outline_color, 4.0));
        assert_eq!(
            rects[1],
            (Rect::new(1.0, 1.0, 98.0, 30.0), style().selected_background_color, 3.0)
        );
        assert_eq!(rects[2].2, 0.0);
        assert_eq!(rects[3].2, 4.0);
        assert_eq!(recorder.texts().count(), 3);
    }

    #[test]
    fn test_drop_releases_font() {
        let backend = MonospaceTextBackend::new();
        let group =
            SegmentedButtons::new(&backend, style(), &ITEMS, SegmentedSelection::Single(None))
                .unwrap();
        assert_eq!(backend.live_fonts(), 1);
        drop(group);
        assert_eq!(backend.live_fonts(), 0);
    }
}
