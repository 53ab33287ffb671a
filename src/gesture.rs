//! Gesture input consumed by the interaction controller.

use crate::geometry::Point;

/// Phase of a pan gesture recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// Recognizer exists but has not recognized anything yet
    Possible,
    /// Gesture recognized, tracking started
    Began,
    /// New translation/velocity since the last sample
    Changed,
    /// Finger lifted; the gesture completed normally
    Ended,
    /// Gesture interrupted by the system
    Cancelled,
    /// Recognition failed
    Failed,
}

/// One sample of a pan gesture, relative to a stable coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanSample {
    pub phase: GesturePhase,
    /// Cumulative translation since the gesture began, in points
    pub translation: Point,
    /// Instantaneous velocity in points per second
    pub velocity: Point,
}

impl PanSample {
    pub fn new(phase: GesturePhase, translation: Point, velocity: Point) -> Self {
        Self {
            phase,
            translation,
            velocity,
        }
    }
}
