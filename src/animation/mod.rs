mod animatable;
mod driver;
mod spring;
mod timing;

pub use animatable::{Animatable, BackgroundFade};
pub use driver::{Animation, ReversibleAnimation};
pub use spring::{SpringConfig, SpringState};
pub use timing::TimingFunction;

/// Configuration for a single animation run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// Duration of the animation in seconds
    pub duration: f32,
    /// Timing function controlling the animation curve
    pub timing: TimingFunction,
}

impl Transition {
    /// Create a new transition with the given duration in seconds and
    /// timing function
    pub fn new(duration: f32, timing: TimingFunction) -> Self {
        Self { duration, timing }
    }

    /// Create a spring-based transition. The duration bounds the run; the
    /// spring supplies the shape within it.
    pub fn spring(duration: f32, config: SpringConfig) -> Self {
        Self {
            duration,
            timing: TimingFunction::Spring(config),
        }
    }
}
