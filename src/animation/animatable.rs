use crate::geometry::{Point, Rect, Size};

/// Trait for types that can be animated by interpolating between values
pub trait Animatable: Clone + PartialEq + 'static {
    /// Linear interpolation between two values.
    /// t = 0.0 returns `from`, t = 1.0 returns `to`.
    /// t can exceed [0, 1] for spring overshoot.
    fn lerp(from: &Self, to: &Self, t: f32) -> Self;
}

impl Animatable for f32 {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        from + (to - from) * t
    }
}

impl Animatable for Point {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Point {
            x: f32::lerp(&from.x, &to.x, t),
            y: f32::lerp(&from.y, &to.y, t),
        }
    }
}

impl Animatable for Size {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Size {
            width: f32::lerp(&from.width, &to.width, t),
            height: f32::lerp(&from.height, &to.height, t),
        }
    }
}

impl Animatable for Rect {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Rect {
            x: f32::lerp(&from.x, &to.x, t),
            y: f32::lerp(&from.y, &to.y, t),
            width: f32::lerp(&from.width, &to.width, t),
            height: f32::lerp(&from.height, &to.height, t),
        }
    }
}

/// The background track of an interactive dismissal: the dismissing screen's
/// opacity and the host chrome's opacity, scrubbed in lockstep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundFade {
    pub screen_opacity: f32,
    pub chrome_opacity: f32,
}

impl Animatable for BackgroundFade {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        BackgroundFade {
            screen_opacity: f32::lerp(&from.screen_opacity, &to.screen_opacity, t),
            chrome_opacity: f32::lerp(&from.chrome_opacity, &to.chrome_opacity, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f32_lerp() {
        assert_eq!(f32::lerp(&0.0, &10.0, 0.0), 0.0);
        assert_eq!(f32::lerp(&0.0, &10.0, 0.5), 5.0);
        assert_eq!(f32::lerp(&0.0, &10.0, 1.0), 10.0);
        // Overshoot
        assert_eq!(f32::lerp(&0.0, &10.0, 1.5), 15.0);
    }

    #[test]
    fn test_rect_lerp() {
        let from = Rect::new(0.0, 0.0, 100.0, 100.0);
        let to = Rect::new(50.0, 200.0, 300.0, 400.0);
        let mid = Rect::lerp(&from, &to, 0.5);
        assert_eq!(mid, Rect::new(25.0, 100.0, 200.0, 250.0));
    }

    #[test]
    fn test_background_fade_lerp() {
        let from = BackgroundFade {
            screen_opacity: 1.0,
            chrome_opacity: 0.0,
        };
        let to = BackgroundFade {
            screen_opacity: 0.0,
            chrome_opacity: 1.0,
        };
        let mid = BackgroundFade::lerp(&from, &to, 0.25);
        assert_eq!(mid.screen_opacity, 0.75);
        assert_eq!(mid.chrome_opacity, 0.25);
    }
}
