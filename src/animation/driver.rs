//! Animation drivers.
//!
//! The host's frame scheduler owns time: every frame it hands the engine a
//! delta in seconds and the drivers here produce the next value. Nothing in
//! this module reads the clock itself, which keeps transitions fully
//! deterministic under test.

use super::animatable::Animatable;
use super::spring::SpringState;
use super::timing::TimingFunction;
use super::Transition;

/// A time-driven animation from one value to another.
///
/// Advancing past the configured duration snaps to the exact target value
/// and marks the run finished, so the reported duration is always the real
/// one. Springs shape the motion inside that window.
#[derive(Clone, Debug)]
pub struct Animation<T: Animatable> {
    from: T,
    to: T,
    transition: Transition,
    elapsed: f32,
    spring: Option<SpringState>,
    current: T,
    finished: bool,
}

impl<T: Animatable> Animation<T> {
    pub fn new(from: T, to: T, transition: Transition) -> Self {
        let spring = match transition.timing {
            TimingFunction::Spring(_) => Some(SpringState::new()),
            _ => None,
        };
        Self {
            current: from.clone(),
            from,
            to,
            transition,
            elapsed: 0.0,
            spring,
            finished: false,
        }
    }

    /// Advance by `dt` seconds and return the new value.
    pub fn advance(&mut self, dt: f32) -> T {
        if self.finished {
            return self.current.clone();
        }

        self.elapsed += dt.max(0.0);

        if self.elapsed >= self.transition.duration {
            self.finished = true;
            self.current = self.to.clone();
            return self.current.clone();
        }

        let eased = match (&mut self.spring, self.transition.timing) {
            (Some(spring), TimingFunction::Spring(config)) => spring.step(dt.max(0.0), &config),
            _ => {
                let t = (self.elapsed / self.transition.duration).min(1.0);
                self.transition.timing.evaluate(t)
            }
        };

        self.current = T::lerp(&self.from, &self.to, eased);
        self.current.clone()
    }

    pub fn current(&self) -> &T {
        &self.current
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn duration(&self) -> f32 {
        self.transition.duration
    }
}

/// A reversible animation scrubbed by a completion fraction.
///
/// While a gesture is tracking, the owner sets the fraction directly and the
/// value follows linearly. Once the gesture ends, [`continue_run`] switches
/// the animation to time-driven mode: it plays toward the end value, or back
/// toward the start if reversed, over the remaining fraction.
///
/// [`continue_run`]: ReversibleAnimation::continue_run
#[derive(Clone, Debug)]
pub struct ReversibleAnimation<T: Animatable> {
    from: T,
    to: T,
    duration: f32,
    fraction: f32,
    reversed: bool,
    /// Fraction progress per second once continued; None while scrubbing
    rate: Option<f32>,
    finished: bool,
}

impl<T: Animatable> ReversibleAnimation<T> {
    pub fn new(from: T, to: T, duration: f32) -> Self {
        Self {
            from,
            to,
            duration,
            fraction: 0.0,
            reversed: false,
            rate: None,
            finished: false,
        }
    }

    /// Scrub to the given completion fraction (clamped to [0, 1]).
    pub fn set_fraction_complete(&mut self, fraction: f32) {
        if self.rate.is_none() {
            self.fraction = fraction.clamp(0.0, 1.0);
        }
    }

    pub fn fraction_complete(&self) -> f32 {
        self.fraction
    }

    /// Set the playback direction for the continued run. Reversed means the
    /// animation runs back to its start value.
    pub fn set_reversed(&mut self, reversed: bool) {
        self.reversed = reversed;
    }

    /// Stop accepting scrubs and play out the rest of the animation over
    /// `duration_factor * duration` seconds.
    pub fn continue_run(&mut self, duration_factor: f32) {
        let scaled = (self.duration * duration_factor).max(1e-3);
        self.rate = Some(1.0 / scaled);
    }

    /// Advance a continued run by `dt` seconds and return the new value.
    /// Before [`continue_run`] this is a no-op returning the scrubbed value.
    ///
    /// [`continue_run`]: ReversibleAnimation::continue_run
    pub fn advance(&mut self, dt: f32) -> T {
        if let Some(rate) = self.rate {
            if !self.finished {
                let delta = rate * dt.max(0.0);
                if self.reversed {
                    self.fraction -= delta;
                    if self.fraction <= 0.0 {
                        self.fraction = 0.0;
                        self.finished = true;
                    }
                } else {
                    self.fraction += delta;
                    if self.fraction >= 1.0 {
                        self.fraction = 1.0;
                        self.finished = true;
                    }
                }
            }
        }
        self.value()
    }

    /// Current value at the current fraction.
    pub fn value(&self) -> T {
        T::lerp(&self.from, &self.to, self.fraction)
    }

    /// Whether a continued run has reached its terminal fraction.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }
}
