//! Gesture-driven dismissal: the pan gesture scrubs the transition
//! percentage, and release either commits to the thumbnail rectangle or
//! springs back to full screen.
//!
//! The foreground (proxy frame) and background (screen/chrome fade) run as
//! decoupled tracks: the background is a reversible animation scrubbed by
//! the completion fraction while the gesture is live, then continued to
//! finish alongside the release animation.

use crate::animation::{
    Animation, BackgroundFade, ReversibleAnimation, SpringConfig, TimingFunction, Transition,
};
use crate::animator::{CompletionSignal, TransitionAnimator, DISMISS_DURATION};
use crate::geometry::{clamped_progress, scale_from_progress, Rect};
use crate::gesture::{GesturePhase, PanSample};
use crate::host::{ScreenOrder, TransitionHost};
use crate::screen::ScreenDelegate;
use crate::TransitionDeclined;

/// Downward drag distance, in points, that maps to 100% completion.
pub const FULL_DRAG_DISTANCE: f32 = 200.0;
/// Proxy scale floor reached at 100% completion.
pub const MIN_PROXY_SCALE: f32 = 0.68;
/// Completion fraction above which a release commits the dismissal.
pub const COMMIT_THRESHOLD: f32 = 0.1;

/// Nominal duration of the background fade when played end to end.
const BACKGROUND_DURATION: f32 = 0.5;
/// Duration of the spring back to full screen on cancel.
const CANCEL_DURATION: f32 = 0.5;

const BACKGROUND_START: BackgroundFade = BackgroundFade {
    screen_opacity: 1.0,
    chrome_opacity: 0.0,
};
const BACKGROUND_END: BackgroundFade = BackgroundFade {
    screen_opacity: 0.0,
    chrome_opacity: 1.0,
};

/// The release animation, armed once the gesture reaches a terminal phase.
struct ForegroundRun {
    frame: Animation<Rect>,
    did_cancel: bool,
}

/// All per-interaction fields, set together at interaction start and
/// cleared together at interaction end.
struct InteractionState {
    from_frame: Rect,
    to_frame: Rect,
    background: ReversibleAnimation<BackgroundFade>,
    percentage_complete: f32,
    decision: Option<ForegroundRun>,
    completion: CompletionSignal,
}

/// Drives a dismissal transition sample-by-sample from live pan input.
///
/// Created once per coordinator and reused; `Some` interaction state is
/// what "armed" means.
pub struct InteractionController {
    state: Option<InteractionState>,
}

impl InteractionController {
    pub fn new() -> Self {
        Self { state: None }
    }

    /// Whether a gesture-driven transition is currently armed.
    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    /// Arm the interactive dismissal. Resolves all required geometry before
    /// mutating anything; a missing precondition declines the attempt and
    /// nothing is armed.
    pub fn begin(
        &mut self,
        animator: &mut TransitionAnimator,
        host: &mut dyn TransitionHost,
        from: &mut dyn ScreenDelegate,
        to: &mut dyn ScreenDelegate,
    ) -> Result<(), TransitionDeclined> {
        if self.state.is_some() {
            return Err(TransitionDeclined::AlreadyActive);
        }

        let from_image = from
            .reference_image()
            .ok_or(TransitionDeclined::MissingSourceImage)?;
        let from_frame = from
            .reference_frame()
            .ok_or(TransitionDeclined::MissingSourceFrame)?;
        let to_frame = to
            .reference_frame()
            .ok_or(TransitionDeclined::MissingDestinationFrame)?;

        log::debug!(
            "interactive dismissal armed: from {:?} toward {:?}",
            from_frame,
            to_frame
        );

        from.transition_will_start();
        to.transition_will_start();

        host.insert_destination(ScreenOrder::Below);
        animator.ensure_proxy(host, from_image, from_frame);
        from.set_reference_hidden(true);
        to.set_reference_hidden(true);

        self.state = Some(InteractionState {
            from_frame,
            to_frame,
            background: ReversibleAnimation::new(
                BACKGROUND_START,
                BACKGROUND_END,
                BACKGROUND_DURATION,
            ),
            percentage_complete: 0.0,
            decision: None,
            completion: CompletionSignal::new(),
        });

        Ok(())
    }

    /// Feed one pan sample into the armed interaction.
    ///
    /// Every phase is handled; an unhandled `Ended` would strand the proxy
    /// and the host's transition context.
    pub fn pan(
        &mut self,
        sample: &PanSample,
        animator: &mut TransitionAnimator,
        host: &mut dyn TransitionHost,
        from: &mut dyn ScreenDelegate,
        to: &mut dyn ScreenDelegate,
    ) {
        let Some(state) = self.state.as_mut() else {
            debug_assert!(false, "pan sample with no armed interaction");
            log::warn!("dropped pan sample: no interaction armed");
            return;
        };

        if state.decision.is_some() {
            // Release already decided; late samples are noise
            log::trace!("dropped pan sample after release decision");
            return;
        }

        match sample.phase {
            GesturePhase::Possible | GesturePhase::Began => {}
            GesturePhase::Changed => {
                Self::track(state, sample, animator, host, from);
            }
            GesturePhase::Cancelled | GesturePhase::Failed => {
                // No tracking sample for this phase; report the fraction the
                // decision is taken at
                host.update_interactive_transition(state.percentage_complete);
                Self::decide(state, true, animator, host, to);
            }
            GesturePhase::Ended => {
                Self::track(state, sample, animator, host, from);
                let did_cancel = state.percentage_complete <= COMMIT_THRESHOLD;
                Self::decide(state, did_cancel, animator, host, to);
            }
        }
    }

    /// Advance a decided release animation by `dt` seconds. Returns true
    /// when the interaction has fully resolved (or none is armed).
    pub fn tick(
        &mut self,
        dt: f32,
        animator: &mut TransitionAnimator,
        host: &mut dyn TransitionHost,
        from: &mut dyn ScreenDelegate,
        to: &mut dyn ScreenDelegate,
    ) -> bool {
        let Some(state) = self.state.as_mut() else {
            return true;
        };
        let Some(run) = state.decision.as_mut() else {
            // Still tracking the finger; nothing is time-driven yet
            return false;
        };

        let frame = run.frame.advance(dt);
        animator.set_proxy_frame(host, frame);

        let fade = state.background.advance(dt);
        from.set_opacity(fade.screen_opacity);
        host.set_chrome_opacity(fade.chrome_opacity);

        if run.frame.is_finished() {
            let did_cancel = run.did_cancel;
            // Snap the background to its terminal values; the continued run
            // may still be a frame short
            let terminal = if did_cancel {
                BACKGROUND_START
            } else {
                BACKGROUND_END
            };
            from.set_opacity(terminal.screen_opacity);
            host.set_chrome_opacity(terminal.chrome_opacity);

            from.set_reference_hidden(false);
            to.set_reference_hidden(false);
            animator.remove_proxy(host);

            if did_cancel {
                host.cancel_interactive_transition();
            } else {
                host.finish_interactive_transition();
            }

            if let Some(mut state) = self.state.take() {
                state.completion.fire(host, did_cancel);
            }
            to.transition_did_end();
            from.transition_did_end();

            log::debug!(
                "interactive dismissal resolved ({})",
                if did_cancel { "cancelled" } else { "committed" }
            );
            return true;
        }

        false
    }

    /// Apply one tracking sample: scrub progress, proxy transform, and the
    /// background fade from the vertical displacement.
    fn track(
        state: &mut InteractionState,
        sample: &PanSample,
        animator: &mut TransitionAnimator,
        host: &mut dyn TransitionHost,
        from: &mut dyn ScreenDelegate,
    ) {
        // Upward drags count as zero progress
        let percentage = clamped_progress(sample.translation.y, FULL_DRAG_DISTANCE);
        let scale = scale_from_progress(percentage, MIN_PROXY_SCALE);

        let frame = state
            .from_frame
            .scaled_about_center(scale)
            .offset(sample.translation.x, sample.translation.y);
        animator.set_proxy_frame(host, frame);

        state.percentage_complete = percentage;
        host.update_interactive_transition(percentage);

        state.background.set_fraction_complete(percentage);
        let fade = state.background.value();
        from.set_opacity(fade.screen_opacity);
        host.set_chrome_opacity(fade.chrome_opacity);
    }

    /// Shared commit/cancel path: reverse the background if cancelling,
    /// aim the foreground at the right rectangle, and continue the
    /// background so both tracks finish together.
    fn decide(
        state: &mut InteractionState,
        did_cancel: bool,
        animator: &mut TransitionAnimator,
        host: &mut dyn TransitionHost,
        to: &mut dyn ScreenDelegate,
    ) {
        state.background.set_reversed(did_cancel);

        let start = animator.proxy_frame().unwrap_or(state.from_frame);
        let (target, transition) = if did_cancel {
            (
                state.from_frame,
                Transition::spring(
                    CANCEL_DURATION,
                    SpringConfig::with_damping_ratio(0.9, CANCEL_DURATION),
                ),
            )
        } else {
            // The thumbnail may have moved since the interaction started;
            // prefer its live frame
            let target = to.reference_frame().unwrap_or(state.to_frame);
            (
                target,
                Transition::new(DISMISS_DURATION, TimingFunction::EaseInOut),
            )
        };

        let foreground = Animation::new(start, target, transition);
        let factor = foreground.duration() / state.background.duration();
        state.background.continue_run(factor);

        log::debug!(
            "release at {:.0}% -> {}",
            state.percentage_complete * 100.0,
            if did_cancel { "cancel" } else { "commit" }
        );

        state.decision = Some(ForegroundRun {
            frame: foreground,
            did_cancel,
        });
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new()
    }
}
