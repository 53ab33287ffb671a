//! Hooks the engine calls back into the host navigation framework and
//! renderer.

use crate::geometry::Rect;
use crate::screen::ImageRef;

/// Where the incoming screen should be placed relative to the outgoing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenOrder {
    /// On top of the outgoing screen (cross-fade in, as when presenting)
    Above,
    /// Underneath the outgoing screen, so it is revealed as the outgoing
    /// screen fades (as when dismissing)
    Below,
}

/// The host side of a transition.
///
/// One implementation per navigation container. The engine guarantees
/// `complete_transition` is called exactly once per started transition, and
/// that every `mount_proxy` is paired with exactly one `unmount_proxy`.
/// Chrome opacity and the proxy visual are side-channel outputs: the engine
/// reports values, the host applies them to its own UI state.
pub trait TransitionHost {
    /// Insert the destination screen into the container in the given order.
    fn insert_destination(&mut self, order: ScreenOrder);

    /// Create the floating proxy visual at `frame`, showing `image`.
    fn mount_proxy(&mut self, image: ImageRef, frame: Rect);

    /// Move/resize the mounted proxy visual. Called once per animation
    /// frame or gesture sample.
    fn update_proxy(&mut self, frame: Rect);

    /// Remove the proxy visual from the container.
    fn unmount_proxy(&mut self);

    /// Report interactive-transition progress in [0, 1].
    fn update_interactive_transition(&mut self, progress: f32);

    /// The interactive transition will run to its committed end state.
    fn finish_interactive_transition(&mut self);

    /// The interactive transition will return to its start state.
    fn cancel_interactive_transition(&mut self);

    /// Terminal callback: the transition attempt is over. `cancelled` is
    /// true when the start state was restored.
    fn complete_transition(&mut self, cancelled: bool);

    /// Apply an opacity to the host's chrome (tab bar etc.) for this frame.
    fn set_chrome_opacity(&mut self, opacity: f32);
}
