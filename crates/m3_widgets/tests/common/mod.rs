//! Shared fixtures for widget integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use m3_core::{
    AnimationChannel, AnimationStep, Easing, FontHandle, MonospaceTextBackend, TextBackend,
    TextMetrics, TextStyle, TimingAnimation, UiError, UiResult,
};
use m3_widgets::{SegmentedStyle, TabRowStyle};

/// Monospace backend whose calls can be made to fail on demand.
#[derive(Debug, Default)]
pub struct FlakyTextBackend {
    inner: MonospaceTextBackend,
    pub fail_create: Cell<bool>,
    pub fail_destroy: Cell<bool>,
    pub fail_measure: Cell<bool>,
}

impl FlakyTextBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live_fonts(&self) -> usize {
        self.inner.live_fonts()
    }
}

impl TextBackend for FlakyTextBackend {
    fn create_font(&self, style: &TextStyle) -> UiResult<FontHandle> {
        if self.fail_create.get() {
            return Err(UiError::Io("font create failed".to_string()));
        }
        self.inner.create_font(style)
    }

    fn destroy_font(&self, font: FontHandle) -> UiResult<()> {
        if self.fail_destroy.get() {
            return Err(UiError::Io("font destroy failed".to_string()));
        }
        self.inner.destroy_font(font)
    }

    fn measure_text(&self, font: FontHandle, text: &str) -> UiResult<TextMetrics> {
        if self.fail_measure.get() {
            return Err(UiError::Io("measure failed".to_string()));
        }
        self.inner.measure_text(font, text)
    }
}

/// Timing channel that refuses to start while its shared switch is on.
#[derive(Debug, Default)]
pub struct SwitchedAnimation {
    inner: TimingAnimation,
    fail_start: Rc<Cell<bool>>,
}

impl SwitchedAnimation {
    pub fn new(fail_start: Rc<Cell<bool>>) -> Self {
        Self {
            inner: TimingAnimation::new(),
            fail_start,
        }
    }
}

impl AnimationChannel for SwitchedAnimation {
    fn start_timing(&mut self, from: f32, to: f32, duration: f32, easing: Easing) -> UiResult<()> {
        if self.fail_start.get() {
            return Err(UiError::Unknown("animation start refused".to_string()));
        }
        self.inner.start_timing(from, to, duration, easing)
    }

    fn step(&mut self, dt: f32) -> UiResult<AnimationStep> {
        self.inner.step(dt)
    }

    fn value(&self) -> UiResult<f32> {
        self.inner.value()
    }

    fn is_idle(&self) -> bool {
        self.inner.is_idle()
    }

    fn reset(&mut self) {
        self.inner.reset();
    }
}

pub fn tab_style() -> TabRowStyle {
    TabRowStyle {
        text_style: TextStyle::with_family("Mono"),
        ..TabRowStyle::default()
    }
}

pub fn scrollable_tab_style() -> TabRowStyle {
    TabRowStyle {
        min_width: 0.0,
        spacing: 8.0,
        text_style: TextStyle::with_family("Mono"),
        ..TabRowStyle::scrollable()
    }
}

pub fn segmented_style() -> SegmentedStyle {
    SegmentedStyle {
        text_style: TextStyle::with_family("Mono"),
        ..SegmentedStyle::default()
    }
}

/// Shared log of callback invocations.
pub type CallLog<T> = Rc<RefCell<Vec<T>>>;

pub fn call_log<T>() -> CallLog<T> {
    Rc::new(RefCell::new(Vec::new()))
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 0.01
}
