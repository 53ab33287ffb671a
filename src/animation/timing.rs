//! Timing functions (easing curves) for transition animations.
//!
//! A timing function shapes the rate of change over a fixed-duration
//! animation. Springs are the exception: they are integrated with real
//! elapsed time by the animation driver, so [`TimingFunction::Spring`]
//! only carries the configuration here.

use super::spring::SpringConfig;

/// Timing function that controls the animation curve
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimingFunction {
    /// Linear interpolation (constant speed)
    Linear,
    /// Starts slow, ends fast
    EaseIn,
    /// Starts fast, ends slow
    EaseOut,
    /// Starts slow, speeds up, then slows down
    EaseInOut,
    /// Spring physics simulation (can overshoot); driven by real time in
    /// the animation driver
    Spring(SpringConfig),
}

impl TimingFunction {
    /// Evaluate the timing function at normalized time t (0.0 to 1.0).
    ///
    /// Springs are handled separately by the driver; this returns t
    /// unchanged for them.
    pub fn evaluate(&self, t: f32) -> f32 {
        match self {
            TimingFunction::Linear => t,
            TimingFunction::EaseIn => ease_in(t),
            TimingFunction::EaseOut => ease_out(t),
            TimingFunction::EaseInOut => ease_in_out(t),
            TimingFunction::Spring(_) => t,
        }
    }
}

fn ease_in(t: f32) -> f32 {
    t * t
}

fn ease_out(t: f32) -> f32 {
    t * (2.0 - t)
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear() {
        assert_eq!(TimingFunction::Linear.evaluate(0.0), 0.0);
        assert_eq!(TimingFunction::Linear.evaluate(0.5), 0.5);
        assert_eq!(TimingFunction::Linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_ease_in() {
        let result = TimingFunction::EaseIn.evaluate(0.5);
        assert!(result < 0.5); // Slower at start
    }

    #[test]
    fn test_ease_out() {
        let result = TimingFunction::EaseOut.evaluate(0.5);
        assert!(result > 0.5); // Faster at start
    }

    #[test]
    fn test_ease_in_out_endpoints() {
        assert_eq!(TimingFunction::EaseInOut.evaluate(0.0), 0.0);
        assert_eq!(TimingFunction::EaseInOut.evaluate(1.0), 1.0);
        assert_eq!(TimingFunction::EaseInOut.evaluate(0.5), 0.5);
    }
}
