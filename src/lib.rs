//! A host-driven zoom-transition engine for gallery-style screens: a grid
//! thumbnail expands into a full-screen viewer through a floating proxy
//! visual, and a pan gesture drives the same transition in reverse.
//!
//! The engine is headless. Screens participate through the
//! [`ScreenDelegate`](screen::ScreenDelegate) capability trait, the
//! navigation container through [`TransitionHost`](host::TransitionHost),
//! and time is advanced by the host's frame scheduler via `tick` calls, so
//! every transition is deterministic and testable.
//!
//! Entry point is [`TransitionCoordinator`](coordinator::TransitionCoordinator):
//! one per presenting pair of screens, reused across transitions.

pub mod animation;
pub mod animator;
pub mod coordinator;
pub mod geometry;
pub mod gesture;
pub mod host;
pub mod interaction;
pub mod screen;

use thiserror::Error;

/// Why a transition attempt was abandoned before starting.
///
/// None of these are user-visible failures: a declined attempt leaves no
/// state armed and callers are free to ignore the value. The screens simply
/// stay where they are.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionDeclined {
    #[error("source reference image is unavailable")]
    MissingSourceImage,
    #[error("destination reference image is unavailable")]
    MissingDestinationImage,
    #[error("source reference frame is unavailable")]
    MissingSourceFrame,
    #[error("destination reference frame is unavailable")]
    MissingDestinationFrame,
    #[error("a transition is already in flight")]
    AlreadyActive,
}

pub mod prelude {
    pub use crate::animation::{
        Animatable, Animation, BackgroundFade, ReversibleAnimation, SpringConfig, TimingFunction,
        Transition,
    };
    pub use crate::animator::{ProxyVisual, TransitionAnimator};
    pub use crate::coordinator::{TransitionCoordinator, TransitionRole};
    pub use crate::geometry::{clamped_progress, fit_rect, scale_from_progress, Point, Rect, Size};
    pub use crate::gesture::{GesturePhase, PanSample};
    pub use crate::host::{ScreenOrder, TransitionHost};
    pub use crate::interaction::InteractionController;
    pub use crate::screen::{ImageRef, ScreenDelegate};
    pub use crate::TransitionDeclined;
}
