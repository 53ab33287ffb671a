//! The capability contract a screen must implement to participate in a
//! zoom transition.

use crate::geometry::{Rect, Size};

/// Opaque handle to an image owned by the host, plus its pixel size.
///
/// The engine never touches pixels; `size` supplies the aspect ratio for
/// fit computation and `id` lets the host resolve the actual image when the
/// proxy visual is mounted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageRef {
    pub id: u64,
    pub size: Size,
}

impl ImageRef {
    pub fn new(id: u64, size: Size) -> Self {
        Self { id, size }
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.size.aspect_ratio()
    }
}

/// A screen that can act as either end of a zoom transition.
///
/// Delegates are passed by reference per transition call; the engine holds
/// no reference between calls. `reference_image` and `reference_frame` may
/// legitimately return `None` (image not loaded, cell scrolled offscreen),
/// which aborts the transition attempt before it starts.
pub trait ScreenDelegate {
    /// The currently relevant image element for this screen, if available.
    fn reference_image(&self) -> Option<ImageRef>;

    /// Bounding rectangle of the reference visual in the shared transition
    /// container's coordinate space, if currently measurable.
    fn reference_frame(&self) -> Option<Rect>;

    /// The screen's own bounds in the shared coordinate space.
    fn bounds(&self) -> Rect;

    /// Invoked exactly once per transition attempt, before any visual
    /// mutation.
    fn transition_will_start(&mut self);

    /// Invoked exactly once per transition attempt, after cleanup.
    fn transition_did_end(&mut self);

    /// Hide or show the screen's reference visual while the proxy stands
    /// in for it.
    fn set_reference_hidden(&mut self, hidden: bool);

    /// Set the whole screen's opacity (used for the cross-fade and the
    /// interactive background fade).
    fn set_opacity(&mut self, opacity: f32);
}
