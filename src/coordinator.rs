//! Top-level facade: owns one animator and one interaction controller,
//! picks the transition direction, and swaps the from/to roles between
//! presenting and dismissing.

use crate::animator::{TransitionAnimator, DISMISS_DURATION, PRESENT_DURATION};
use crate::gesture::PanSample;
use crate::host::TransitionHost;
use crate::interaction::InteractionController;
use crate::screen::ScreenDelegate;
use crate::TransitionDeclined;

/// Direction of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionRole {
    /// Origin screen presents the full-screen viewer
    Presenting,
    /// Full-screen viewer returns to the origin screen
    Dismissing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActiveTransition {
    Animated(TransitionRole),
    Interactive,
}

/// Coordinates zoom transitions between an origin screen (the thumbnail
/// grid) and a presented screen (the full-screen viewer).
///
/// Both delegates are passed by reference to every call in their natural
/// order; the coordinator swaps from/to roles internally for dismissal, so
/// callers never reorder arguments. At most one transition is in flight at
/// a time; a second `begin` is rejected, not queued.
pub struct TransitionCoordinator {
    animator: TransitionAnimator,
    interaction: InteractionController,
    is_interactive: bool,
    active: Option<ActiveTransition>,
}

impl TransitionCoordinator {
    pub fn new() -> Self {
        Self {
            animator: TransitionAnimator::new(),
            interaction: InteractionController::new(),
            is_interactive: false,
            active: None,
        }
    }

    /// Arm or disarm gesture-driven dismissal. Armed by the screen that
    /// owns the pan gesture, at gesture begin.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.is_interactive = interactive;
    }

    pub fn is_interactive(&self) -> bool {
        self.is_interactive
    }

    /// Whether any transition is currently in flight.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Duration in seconds of the animated transition for `role`.
    pub fn transition_duration(&self, role: TransitionRole) -> f32 {
        match role {
            TransitionRole::Presenting => PRESENT_DURATION,
            TransitionRole::Dismissing => DISMISS_DURATION,
        }
    }

    /// Begin a transition. Dismissals route to the interaction controller
    /// only while the interactive flag is armed; everything else runs the
    /// purely animated transition.
    pub fn begin(
        &mut self,
        role: TransitionRole,
        host: &mut dyn TransitionHost,
        origin: &mut dyn ScreenDelegate,
        presented: &mut dyn ScreenDelegate,
    ) -> Result<(), TransitionDeclined> {
        if self.active.is_some() {
            log::debug!("transition begin rejected: one already in flight");
            return Err(TransitionDeclined::AlreadyActive);
        }

        match role {
            TransitionRole::Presenting => {
                self.animator.set_presenting(true);
                self.animator.animate_transition(host, origin, presented)?;
                self.active = Some(ActiveTransition::Animated(role));
            }
            TransitionRole::Dismissing => {
                self.animator.set_presenting(false);
                if self.is_interactive {
                    self.interaction
                        .begin(&mut self.animator, host, presented, origin)?;
                    self.active = Some(ActiveTransition::Interactive);
                } else {
                    self.animator.animate_transition(host, presented, origin)?;
                    self.active = Some(ActiveTransition::Animated(role));
                }
            }
        }

        Ok(())
    }

    /// Feed a pan sample into the armed interactive transition. Samples
    /// arriving while no interactive transition is in flight are dropped.
    pub fn pan(
        &mut self,
        sample: &PanSample,
        host: &mut dyn TransitionHost,
        origin: &mut dyn ScreenDelegate,
        presented: &mut dyn ScreenDelegate,
    ) {
        if self.active != Some(ActiveTransition::Interactive) {
            log::warn!("dropped pan sample: no interactive transition in flight");
            return;
        }
        self.interaction
            .pan(sample, &mut self.animator, host, presented, origin);
    }

    /// Advance whatever transition is in flight by `dt` seconds. Returns
    /// true once nothing is left running.
    pub fn tick(
        &mut self,
        dt: f32,
        host: &mut dyn TransitionHost,
        origin: &mut dyn ScreenDelegate,
        presented: &mut dyn ScreenDelegate,
    ) -> bool {
        match self.active {
            None => true,
            Some(ActiveTransition::Animated(TransitionRole::Presenting)) => {
                let done = self.animator.tick(dt, host, origin, presented);
                if done {
                    self.active = None;
                }
                done
            }
            Some(ActiveTransition::Animated(TransitionRole::Dismissing)) => {
                let done = self.animator.tick(dt, host, presented, origin);
                if done {
                    self.active = None;
                }
                done
            }
            Some(ActiveTransition::Interactive) => {
                let done =
                    self.interaction
                        .tick(dt, &mut self.animator, host, presented, origin);
                if done {
                    self.active = None;
                }
                done
            }
        }
    }
}

impl Default for TransitionCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Rect, Size};
    use crate::gesture::GesturePhase;
    use crate::host::ScreenOrder;
    use crate::screen::ImageRef;

    struct Host {
        completions: u32,
        progress: u32,
        inserted: Vec<ScreenOrder>,
    }

    impl Host {
        fn new() -> Self {
            Self {
                completions: 0,
                progress: 0,
                inserted: Vec::new(),
            }
        }
    }

    impl TransitionHost for Host {
        fn insert_destination(&mut self, order: ScreenOrder) {
            self.inserted.push(order);
        }
        fn mount_proxy(&mut self, _image: ImageRef, _frame: Rect) {}
        fn update_proxy(&mut self, _frame: Rect) {}
        fn unmount_proxy(&mut self) {}
        fn update_interactive_transition(&mut self, _progress: f32) {
            self.progress += 1;
        }
        fn finish_interactive_transition(&mut self) {}
        fn cancel_interactive_transition(&mut self) {}
        fn complete_transition(&mut self, _cancelled: bool) {
            self.completions += 1;
        }
        fn set_chrome_opacity(&mut self, _opacity: f32) {}
    }

    struct Screen {
        opacity: f32,
        will_start: u32,
    }

    impl Screen {
        fn new() -> Self {
            Self {
                opacity: 1.0,
                will_start: 0,
            }
        }
    }

    impl ScreenDelegate for Screen {
        fn reference_image(&self) -> Option<ImageRef> {
            Some(ImageRef::new(3, Size::new(640.0, 480.0)))
        }
        fn reference_frame(&self) -> Option<Rect> {
            Some(Rect::new(12.0, 40.0, 96.0, 96.0))
        }
        fn bounds(&self) -> Rect {
            Rect::new(0.0, 0.0, 390.0, 844.0)
        }
        fn transition_will_start(&mut self) {
            self.will_start += 1;
        }
        fn transition_did_end(&mut self) {}
        fn set_reference_hidden(&mut self, _hidden: bool) {}
        fn set_opacity(&mut self, opacity: f32) {
            self.opacity = opacity;
        }
    }

    #[test]
    fn test_durations_per_role() {
        let coordinator = TransitionCoordinator::new();
        assert_eq!(coordinator.transition_duration(TransitionRole::Presenting), 0.5);
        assert_eq!(coordinator.transition_duration(TransitionRole::Dismissing), 0.25);
    }

    #[test]
    fn test_double_begin_rejected() {
        let mut coordinator = TransitionCoordinator::new();
        let mut host = Host::new();
        let mut origin = Screen::new();
        let mut presented = Screen::new();

        coordinator
            .begin(TransitionRole::Presenting, &mut host, &mut origin, &mut presented)
            .unwrap();
        let second = coordinator.begin(
            TransitionRole::Presenting,
            &mut host,
            &mut origin,
            &mut presented,
        );
        assert_eq!(second, Err(TransitionDeclined::AlreadyActive));

        // Each will-start hook fired once, for the first attempt only
        assert_eq!(origin.will_start, 1);
        assert_eq!(presented.will_start, 1);
    }

    #[test]
    fn test_role_swap_on_dismissal() {
        let mut coordinator = TransitionCoordinator::new();
        let mut host = Host::new();
        let mut origin = Screen::new();
        let mut presented = Screen::new();

        coordinator
            .begin(TransitionRole::Dismissing, &mut host, &mut origin, &mut presented)
            .unwrap();
        // Destination (the origin grid) goes below the dismissing viewer
        assert_eq!(host.inserted, vec![ScreenOrder::Below]);

        while !coordinator.tick(1.0 / 60.0, &mut host, &mut origin, &mut presented) {}
        // The viewer, not the grid, faded out
        assert_eq!(presented.opacity, 0.0);
        assert_eq!(origin.opacity, 1.0);
        assert_eq!(host.completions, 1);
        assert!(!coordinator.is_active());
    }

    #[test]
    fn test_interaction_only_exposed_when_armed() {
        let mut coordinator = TransitionCoordinator::new();
        let mut host = Host::new();
        let mut origin = Screen::new();
        let mut presented = Screen::new();

        // Not armed: dismissal runs the plain animated path, and pan
        // samples are dropped rather than scrubbing progress
        coordinator
            .begin(TransitionRole::Dismissing, &mut host, &mut origin, &mut presented)
            .unwrap();
        let sample = PanSample::new(
            GesturePhase::Changed,
            Point::new(0.0, 100.0),
            Point::ZERO,
        );
        coordinator.pan(&sample, &mut host, &mut origin, &mut presented);
        assert_eq!(host.progress, 0);

        while !coordinator.tick(1.0 / 60.0, &mut host, &mut origin, &mut presented) {}

        // Armed: the same dismissal scrubs interactive progress
        coordinator.set_interactive(true);
        coordinator
            .begin(TransitionRole::Dismissing, &mut host, &mut origin, &mut presented)
            .unwrap();
        coordinator.pan(&sample, &mut host, &mut origin, &mut presented);
        assert!(host.progress > 0);
    }
}
