//! Timed value animation.
//!
//! A channel tweens one scalar from a start value to a target over a fixed
//! duration. Hosts advance channels with `step(dt)`; widgets sample them
//! with `value()`.

use serde::{Deserialize, Serialize};

use crate::error::{UiError, UiResult};

/// Easing curve applied to normalized progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Quadratic acceleration.
    In,
    /// Quadratic deceleration.
    #[default]
    Out,
    /// Accelerate then decelerate.
    InOut,
}

impl Easing {
    /// Applies the easing function to a t value (clamped to 0-1).
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::In => t * t,
            Self::Out => {
                let inv = 1.0 - t;
                1.0 - inv * inv
            }
            Self::InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * 0.5
                }
            }
        }
    }
}

impl TryFrom<u32> for Easing {
    type Error = UiError;

    fn try_from(code: u32) -> UiResult<Self> {
        match code {
            0 => Ok(Self::Linear),
            1 => Ok(Self::In),
            2 => Ok(Self::Out),
            3 => Ok(Self::InOut),
            _ => Err(UiError::Range("unknown easing code")),
        }
    }
}

/// Result of advancing a channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationStep {
    /// Value after the step.
    pub value: f32,
    /// True once the target has been reached.
    pub finished: bool,
}

/// A single animated scalar driven by an external clock.
pub trait AnimationChannel {
    /// Starts a transition from `from` to `to`.
    ///
    /// A zero duration lands on `to` immediately.
    ///
    /// # Errors
    ///
    /// `Range` for a negative duration.
    fn start_timing(&mut self, from: f32, to: f32, duration: f32, easing: Easing) -> UiResult<()>;

    /// Advances the channel by `dt` seconds.
    ///
    /// # Errors
    ///
    /// `Range` for a negative `dt`, `State` if nothing was ever started.
    fn step(&mut self, dt: f32) -> UiResult<AnimationStep>;

    /// Samples the current value.
    ///
    /// # Errors
    ///
    /// Implementation specific.
    fn value(&self) -> UiResult<f32>;

    /// True if no transition has been started since creation or `reset`.
    fn is_idle(&self) -> bool;

    /// Stops any transition and returns to the idle state at zero.
    fn reset(&mut self);
}

/// Interpolating channel: `value = from + (to - from) * ease(elapsed / duration)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimingAnimation {
    /// Transition start value.
    from: f32,
    /// Transition target value.
    to: f32,
    /// Total duration (seconds).
    duration: f32,
    /// Time spent so far, clamped to `duration`.
    elapsed: f32,
    /// Easing function.
    easing: Easing,
    /// Last sampled value.
    current: f32,
    /// A transition has been started.
    started: bool,
    /// The transition has not reached its target yet.
    running: bool,
}

impl TimingAnimation {
    /// Creates an idle channel at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a transition is in flight.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Freezes the channel at its current value.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Target of the current transition.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }
}

impl AnimationChannel for TimingAnimation {
    fn start_timing(&mut self, from: f32, to: f32, duration: f32, easing: Easing) -> UiResult<()> {
        if duration < 0.0 {
            return Err(UiError::Range("animation duration must be non-negative"));
        }

        self.from = from;
        self.to = to;
        self.duration = duration;
        self.elapsed = 0.0;
        self.easing = easing;
        self.started = true;

        if duration == 0.0 {
            self.current = to;
            self.running = false;
        } else {
            self.current = from;
            self.running = true;
        }
        Ok(())
    }

    fn step(&mut self, dt: f32) -> UiResult<AnimationStep> {
        if dt < 0.0 {
            return Err(UiError::Range("animation step must be non-negative"));
        }
        if !self.started {
            return Err(UiError::State("animation channel was never started"));
        }
        if !self.running {
            return Ok(AnimationStep {
                value: self.current,
                finished: true,
            });
        }

        self.elapsed = (self.elapsed + dt).min(self.duration);
        let finished = self.elapsed >= self.duration;

        let eased = self.easing.apply(self.elapsed / self.duration);
        self.current = self.from + (self.to - self.from) * eased;

        // Land exactly on target, easing curves are not exact at t = 1.
        if finished {
            self.current = self.to;
            self.running = false;
        }

        Ok(AnimationStep {
            value: self.current,
            finished,
        })
    }

    fn value(&self) -> UiResult<f32> {
        Ok(self.current)
    }

    fn is_idle(&self) -> bool {
        !self.started
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
