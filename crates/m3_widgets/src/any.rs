//! Closed set of toolkit widgets behind one type.
//!
//! Hosts that keep heterogeneous widgets in a list can store `AnyWidget`
//! instead of boxing trait objects.

use m3_core::{
    AnimationChannel, InputEvent, MeasureSpec, PaintBackend, Rect, Semantics, Size, TextBackend,
    TimingAnimation, UiResult, Widget, WidgetFlags,
};

use crate::badge::Badge;
use crate::segmented::SegmentedButtons;
use crate::tabs::TabRow;
use crate::text::Text;
use crate::tooltip::Tooltip;

/// One of the toolkit widgets.
pub enum AnyWidget<'a, B: TextBackend, A: AnimationChannel = TimingAnimation> {
    /// Tab row.
    Tabs(TabRow<'a, B, A>),
    /// Segmented buttons.
    Segmented(SegmentedButtons<'a, B>),
    /// Text label.
    Text(Text<'a, B>),
    /// Badge.
    Badge(Badge<'a, B>),
    /// Tooltip.
    Tooltip(Tooltip<'a, B>),
}

macro_rules! dispatch {
    ($self:expr, $w:ident => $body:expr) => {
        match $self {
            AnyWidget::Tabs($w) => $body,
            AnyWidget::Segmented($w) => $body,
            AnyWidget::Text($w) => $body,
            AnyWidget::Badge($w) => $body,
            AnyWidget::Tooltip($w) => $body,
        }
    };
}

impl<'a, B: TextBackend, A: AnimationChannel> AnyWidget<'a, B, A> {
    /// Short name of the wrapped widget kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Tabs(_) => "tabs",
            Self::Segmented(_) => "segmented",
            Self::Text(_) => "text",
            Self::Badge(_) => "badge",
            Self::Tooltip(_) => "tooltip",
        }
    }

    /// Advances animations. Only tab rows animate.
    ///
    /// # Errors
    ///
    /// Animation failures from the tab row.
    pub fn step(&mut self, dt: f32) -> UiResult<bool> {
        match self {
            Self::Tabs(tabs) => tabs.step(dt),
            _ => Ok(false),
        }
    }
}

impl<'a, B: TextBackend, A: AnimationChannel> Widget for AnyWidget<'a, B, A> {
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> UiResult<Size> {
        dispatch!(self, w => w.measure(width, height))
    }

    fn layout(&mut self, bounds: Rect) -> UiResult<()> {
        dispatch!(self, w => w.layout(bounds))
    }

    fn paint(&mut self, painter: &mut dyn PaintBackend) -> UiResult<()> {
        dispatch!(self, w => w.paint(painter))
    }

    fn handle_event(&mut self, event: &InputEvent) -> UiResult<bool> {
        dispatch!(self, w => w.handle_event(event))
    }

    fn semantics(&self) -> Semantics {
        dispatch!(self, w => w.semantics())
    }

    fn destroy(&mut self) -> UiResult<()> {
        dispatch!(self, w => w.destroy())
    }

    fn flags(&self) -> WidgetFlags {
        dispatch!(self, w => w.flags())
    }

    fn set_flags(&mut self, flags: WidgetFlags) {
        dispatch!(self, w => w.set_flags(flags));
    }
}

impl<'a, B: TextBackend, A: AnimationChannel> From<TabRow<'a, B, A>> for AnyWidget<'a, B, A> {
    fn from(widget: TabRow<'a, B, A>) -> Self {
        Self::Tabs(widget)
    }
}

impl<'a, B: TextBackend, A: AnimationChannel> From<SegmentedButtons<'a, B>>
    for AnyWidget<'a, B, A>
{
    fn from(widget: SegmentedButtons<'a, B>) -> Self {
        Self::Segmented(widget)
    }
}

impl<'a, B: TextBackend, A: AnimationChannel> From<Text<'a, B>> for AnyWidget<'a, B, A> {
    fn from(widget: Text<'a, B>) -> Self {
        Self::Text(widget)
    }
}

impl<'a, B: TextBackend, A: AnimationChannel> From<Badge<'a, B>> for AnyWidget<'a, B, A> {
    fn from(widget: Badge<'a, B>) -> Self {
        Self::Badge(widget)
    }
}

impl<'a, B: TextBackend, A: AnimationChannel> From<Tooltip<'a, B>> for AnyWidget<'a, B, A> {
    fn from(widget: Tooltip<'a, B>) -> Self {
        Self::Tooltip(widget)
    }
}
