//! The tab row widget.

use m3_core::{
    AnimationChannel, Easing, InputEvent, MeasureSpec, OwnedFont, PaintBackend, PointerEvent,
    Rect, SemanticFlags, SemanticRole, Semantics, Size, TextBackend, TextMeasurer,
    TimingAnimation, UiError, UiResult, Widget, WidgetFlags,
};

use super::layout::{self, TabLayout};
use super::style::{TabMode, TabRowStyle};
use crate::item::Item;
use crate::metrics;
use crate::validate;

/// Selection callback. Receives the newly selected index; an error rolls
/// the selection back.
pub type TabSelectCallback<'a> = Box<dyn FnMut(usize) -> UiResult<()> + 'a>;

/// Single-select row of tabs with an animated indicator bar.
///
/// The row borrows its items for `'a` and owns one font created from
/// `style.text_style`. The indicator is tracked by two animation channels,
/// one for its position and one for its width; hosts advance them with
/// [`TabRow::step`].
pub struct TabRow<'a, B: TextBackend, A: AnimationChannel = TimingAnimation> {
    backend: B,
    style: TabRowStyle,
    items: &'a [Item<'a>],
    font: OwnedFont,
    flags: WidgetFlags,
    selected: Option<usize>,
    pressed: Option<usize>,
    bounds: Rect,
    scroll: f32,
    content_width: f32,
    pos_anim: A,
    width_anim: A,
    indicator_pos: f32,
    indicator_width: f32,
    on_select: Option<TabSelectCallback<'a>>,
}

impl<'a, B: TextBackend, A: AnimationChannel + Default> TabRow<'a, B, A> {
    /// Creates a row with default animation channels.
    ///
    /// # Errors
    ///
    /// Style validation (a font family is required), an out-of-range
    /// selection, or font creation failures.
    pub fn new(
        backend: B,
        style: TabRowStyle,
        items: &'a [Item<'a>],
        selected: Option<usize>,
    ) -> UiResult<Self> {
        Self::with_animators(backend, style, items, selected, A::default(), A::default())
    }
}

impl<'a, B: TextBackend, A: AnimationChannel> TabRow<'a, B, A> {
    /// Creates a row driving the given position and width channels.
    ///
    /// The indicator is snapped to the initial selection before returning.
    ///
    /// # Errors
    ///
    /// Same as [`TabRow::new`], plus animation failures from the snap.
    pub fn with_animators(
        backend: B,
        style: TabRowStyle,
        items: &'a [Item<'a>],
        selected: Option<usize>,
        pos_anim: A,
        width_anim: A,
    ) -> UiResult<Self> {
        style.validate(true)?;
        validate::selection(selected, items.len())?;

        let font = OwnedFont::create(&backend, &style.text_style)?;
        let mut row = Self {
            backend,
            style,
            items,
            font,
            flags: WidgetFlags::from_bits(WidgetFlags::FOCUSABLE),
            selected,
            pressed: None,
            bounds: Rect::ZERO,
            scroll: 0.0,
            content_width: 0.0,
            pos_anim,
            width_anim,
            indicator_pos: 0.0,
            indicator_width: 0.0,
            on_select: None,
        };

        let unplaced = TabLayout::unplaced(&row.style);
        row.sync_indicator(&unplaced, false)?;
        tracing::debug!("tab row created with {} items", row.items.len());
        Ok(row)
    }

    /// Replaces the items. A selection or press that no longer fits is
    /// cleared.
    ///
    /// A row that has been laid out re-clamps its scroll offset and snaps
    /// the indicator to the surviving selection.
    ///
    /// # Errors
    ///
    /// Layout, measurement or animation failures. The previous items,
    /// selection and press are restored.
    pub fn set_items(&mut self, items: &'a [Item<'a>]) -> UiResult<()> {
        let previous = (self.items, self.selected, self.pressed);
        self.items = items;
        self.selected = self.selected.filter(|&index| index < items.len());
        self.pressed = self.pressed.filter(|&index| index < items.len());
        if self.bounds.is_degenerate() {
            return Ok(());
        }

        if let Err(err) = self.resnap() {
            (self.items, self.selected, self.pressed) = previous;
            if let Err(resync) = self.resnap() {
                tracing::warn!("indicator resync after item rollback failed: {}", resync);
            }
            return Err(err);
        }
        Ok(())
    }

    /// Replaces the style and its font.
    ///
    /// On failure the previous style and font stay in place.
    ///
    /// # Errors
    ///
    /// Style validation or font failures.
    pub fn set_style(&mut self, style: TabRowStyle) -> UiResult<()> {
        style.validate(true)?;
        let font = OwnedFont::create(&self.backend, &style.text_style)?;
        self.font.replace(font, &self.backend)?;
        self.style = style;
        Ok(())
    }

    /// Selects a tab, or clears the selection with `None`.
    ///
    /// Once the row has real bounds the indicator animates to the new tab.
    ///
    /// # Errors
    ///
    /// `Range` for an out-of-range index; layout or animation failures.
    /// On failure the previous selection and indicator stay in place.
    pub fn set_selected(&mut self, selected: Option<usize>) -> UiResult<()> {
        validate::selection(selected, self.items.len())?;
        if self.bounds.is_degenerate() {
            self.selected = selected;
            return Ok(());
        }

        let layout = self.current_layout()?;
        let previous = self.selected;
        self.selected = selected;
        if let Err(err) = self.sync_indicator(&layout, true) {
            self.roll_back(previous, &layout);
            return Err(err);
        }
        Ok(())
    }

    /// Selected tab.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Tab under an unreleased press.
    #[must_use]
    pub fn pressed(&self) -> Option<usize> {
        self.pressed
    }

    /// Sets the horizontal scroll offset, clamped to the content.
    ///
    /// Fixed rows always stay at zero.
    ///
    /// # Errors
    ///
    /// `Range` for a negative offset; layout failures.
    pub fn set_scroll(&mut self, offset: f32) -> UiResult<()> {
        if offset.is_nan() || offset < 0.0 {
            return Err(UiError::Range("scroll offset is negative"));
        }
        if self.style.mode != TabMode::Scrollable {
            self.scroll = 0.0;
            return Ok(());
        }
        let layout = self.current_layout()?;
        self.scroll = layout::clamp_scroll(&layout, offset)?;
        self.content_width = layout.content_width;
        tracing::debug!("tab row scrolled to {}", self.scroll);
        Ok(())
    }

    /// Current scroll offset.
    #[must_use]
    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    /// Content width cached by the last layout or paint.
    #[must_use]
    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    /// Installs or clears the selection callback.
    pub fn set_on_select(&mut self, on_select: Option<TabSelectCallback<'a>>) {
        self.on_select = on_select;
    }

    /// Advances both indicator channels. Returns true if either moved.
    ///
    /// # Errors
    ///
    /// `Range` for a negative `dt`; animation failures.
    #[allow(clippy::float_cmp)]
    pub fn step(&mut self, dt: f32) -> UiResult<bool> {
        if dt.is_nan() || dt < 0.0 {
            return Err(UiError::Range("animation step must be non-negative"));
        }

        let mut changed = false;
        if !self.pos_anim.is_idle() {
            let step = self.pos_anim.step(dt)?;
            if step.value != self.indicator_pos {
                self.indicator_pos = step.value;
                changed = true;
            }
        }
        if !self.width_anim.is_idle() {
            let step = self.width_anim.step(dt)?;
            if step.value != self.indicator_width {
                self.indicator_width = step.value;
                changed = true;
            }
        }
        Ok(changed)
    }

    /// Indicator `(position, width)` relative to the first tab.
    #[must_use]
    pub fn indicator(&self) -> (f32, f32) {
        (self.indicator_pos, self.indicator_width)
    }

    /// Enables or disables the row.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.flags.assign(WidgetFlags::DISABLED, disabled);
    }

    /// Current style.
    #[must_use]
    pub fn style(&self) -> &TabRowStyle {
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

    fn current_layout(&self) -> UiResult<TabLayout> {
        layout::compute_layout(&self.measurer()?, &self.style, self.items, self.bounds)
    }

    /// Points both channels at the current selection and re-samples them.
    ///
    /// The cached indicator is written only after both samples succeed. A
    /// failure can leave one channel started; callers undo that by snapping
    /// back onto the state they keep.
    fn sync_indicator(&mut self, layout: &TabLayout, animate: bool) -> UiResult<()> {
        let (target_pos, target_width) = layout::indicator_target(
            &self.measurer()?,
            &self.style,
            self.items,
            layout,
            self.selected,
        )?;

        if animate {
            let duration = self.style.indicator_anim_duration;
            let easing = self.style.indicator_anim_easing;
            self.pos_anim
                .start_timing(self.indicator_pos, target_pos, duration, easing)?;
            self.width_anim
                .start_timing(self.indicator_width, target_width, duration, easing)?;
        } else {
            self.pos_anim
                .start_timing(target_pos, target_pos, 0.0, Easing::Linear)?;
            self.width_anim
                .start_timing(target_width, target_width, 0.0, Easing::Linear)?;
        }

        let pos = self.pos_anim.value()?;
        let width = self.width_anim.value()?;
        self.indicator_pos = pos;
        self.indicator_width = width;
        Ok(())
    }

    fn on_scroll(&mut self, pointer: &PointerEvent) -> UiResult<bool> {
        if self.style.mode != TabMode::Scrollable || pointer.scroll_x == 0 {
            return Ok(false);
        }
        #[allow(clippy::cast_precision_loss)]
        let delta = pointer.scroll_x as f32;
        self.set_scroll(self.scroll + delta)?;
        Ok(true)
    }

    /// Lays out against the current bounds, re-clamps the scroll offset and
    /// snaps the indicator.
    fn resnap(&mut self) -> UiResult<()> {
        let layout = self.current_layout()?;
        let scroll = layout::clamp_scroll(&layout, self.scroll)?;
        self.sync_indicator(&layout, false)?;
        self.scroll = scroll;
        self.content_width = layout.content_width;
        Ok(())
    }

    /// Restores `previous` and snaps both channels back onto it, so a
    /// channel started by a failed sync stops short of the rejected tab.
    ///
    /// If a channel refuses even the snap, both are idled; the indicator
    /// then holds its last committed value.
    fn roll_back(&mut self, previous: Option<usize>, layout: &TabLayout) {
        self.selected = previous;
        if let Err(resync) = self.sync_indicator(layout, false) {
            tracing::warn!("indicator resync after rollback failed: {}", resync);
            self.pos_anim.reset();
            self.width_anim.reset();
        }
    }

    fn hit(&mut self, pointer: &PointerEvent) -> UiResult<(TabLayout, Option<usize>)> {
        let layout = self.current_layout()?;
        self.scroll = layout::clamp_scroll(&layout, self.scroll)?;

        #[allow(clippy::cast_precision_loss)]
        let (x, y) = (pointer.x as f32, pointer.y as f32);
        let index = layout::hit_test(
            &self.measurer()?,
            &self.style,
            self.items,
            &layout,
            x,
            y,
            self.scroll,
        )?;
        Ok((layout, index))
    }

    fn on_pointer_down(&mut self, pointer: &PointerEvent) -> UiResult<bool> {
        let (_, index) = self.hit(pointer)?;
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
        let (layout, index) = self.hit(pointer)?;
        let Some(pressed) = self.pressed else {
            return Ok(false);
        };

        let committed = if index == Some(pressed) {
            self.commit(pressed, &layout)
        } else {
            Ok(())
        };
        self.pressed = None;
        committed.map(|()| true)
    }

    /// Selects `index`, animates the indicator and notifies the callback.
    /// Any failure restores the previous selection.
    fn commit(&mut self, index: usize, layout: &TabLayout) -> UiResult<()> {
        let previous = self.selected;
        self.selected = Some(index);
        if let Err(err) = self.sync_indicator(layout, true) {
            self.roll_back(previous, layout);
            return Err(err);
        }

        let notified = match self.on_select.as_mut() {
            Some(on_select) => on_select(index),
            None => Ok(()),
        };
        if let Err(err) = notified {
            tracing::warn!("tab {} rejected by callback: {}", index, err);
            self.roll_back(previous, layout);
            return Err(err);
        }

        tracing::debug!("tab {} selected", index);
        Ok(())
    }
}

impl<'a, B: TextBackend, A: AnimationChannel> Widget for TabRow<'a, B, A> {
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
        let layout = layout::compute_layout(&self.measurer()?, &self.style, self.items, bounds)?;
        let scroll = layout::clamp_scroll(&layout, self.scroll)?;
        if let Err(err) = self.sync_indicator(&layout, false) {
            if !self.bounds.is_degenerate() {
                if let Err(resync) = self.resnap() {
                    tracing::warn!("indicator resync after layout failure: {}", resync);
                }
            }
            return Err(err);
        }

        self.bounds = bounds;
        self.content_width = layout.content_width;
        self.scroll = scroll;
        Ok(())
    }

    fn paint(&mut self, painter: &mut dyn PaintBackend) -> UiResult<()> {
        let layout = self.current_layout()?;
        let scroll = layout::clamp_scroll(&layout, self.scroll)?;
        self.scroll = scroll;
        self.content_width = layout.content_width;

        let style = &self.style;
        let disabled = self.flags.has(WidgetFlags::DISABLED);

        if style.background_color.is_visible() {
            painter.draw_rect(self.bounds, style.background_color, 0.0)?;
        }

        if self.selected.is_some() && style.indicator_thickness > 0.0 {
            let bar = Rect::new(
                layout.start_x + self.indicator_pos - scroll,
                layout.start_y + layout.tab_height - style.indicator_thickness,
                self.indicator_width,
                style.indicator_thickness,
            );
            let color = if disabled {
                style.disabled_indicator_color
            } else {
                style.indicator_color
            };
            painter.draw_rect(bar, color, style.indicator_corner)?;
        }

        let measurer = self.measurer()?;
        for (index, item) in self.items.iter().enumerate() {
            let rect = layout::item_rect(&measurer, style, self.items, &layout, index, scroll)?;
            if item.is_blank() {
                continue;
            }
            let text = measurer.measure(item.label)?;
            let (x, y) = metrics::centered_text(rect, text);
            let color = if disabled {
                style.disabled_text_color
            } else if self.selected == Some(index) {
                style.selected_text_color
            } else {
                style.text_style.color
            };
            painter.draw_text(measurer.font(), item.label, x, y, color)?;
        }
        Ok(())
    }

    fn handle_event(&mut self, event: &InputEvent) -> UiResult<bool> {
        if self.flags.has(WidgetFlags::DISABLED) {
            return Ok(false);
        }
        match event {
            InputEvent::Scroll(pointer) => self.on_scroll(pointer),
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
        self.selected = None;
        self.pressed = None;
        self.bounds = Rect::ZERO;
        self.scroll = 0.0;
        self.content_width = 0.0;
        self.indicator_pos = 0.0;
        self.indicator_width = 0.0;
        self.pos_anim.reset();
        self.width_anim.reset();
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

impl<'a, B: TextBackend, A: AnimationChannel> Drop for TabRow<'a, B, A> {
    fn drop(&mut self) {
        if let Err(err) = self.font.release(&self.backend) {
            tracing::warn!("tab row font release failed: {}", err);
        }
    }
}
