//! Non-interactive zoom transition: fades the destination screen in or out
//! while a floating proxy visual flies between the thumbnail rectangle and
//! the fitted full-screen rectangle.

use crate::animation::{Animation, SpringConfig, TimingFunction, Transition};
use crate::geometry::{fit_rect, Rect};
use crate::host::{ScreenOrder, TransitionHost};
use crate::screen::{ImageRef, ScreenDelegate};
use crate::TransitionDeclined;

/// Duration of the zoom-in (presenting) transition in seconds.
pub const PRESENT_DURATION: f32 = 0.5;
/// Duration of the zoom-out (dismissing) transition in seconds.
pub const DISMISS_DURATION: f32 = 0.25;

/// The single floating image view that stands in for the transitioning
/// image while the real source and destination visuals are hidden.
///
/// Exactly one proxy exists per transition. The animator owns it; during a
/// gesture the interaction controller reaches it through the animator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProxyVisual {
    pub image: ImageRef,
    pub frame: Rect,
}

/// One-shot guard around the host's terminal transition callback.
///
/// Firing twice is a programming invariant violation: loud in debug builds,
/// logged and dropped in release, since a UI transition is not worth
/// terminating the process over.
#[derive(Debug)]
pub(crate) struct CompletionSignal {
    fired: bool,
}

impl CompletionSignal {
    pub(crate) fn new() -> Self {
        Self { fired: false }
    }

    pub(crate) fn fire(&mut self, host: &mut dyn TransitionHost, cancelled: bool) {
        if self.fired {
            debug_assert!(false, "complete_transition fired twice");
            log::warn!("dropped duplicate transition completion (cancelled: {cancelled})");
            return;
        }
        self.fired = true;
        host.complete_transition(cancelled);
    }
}

struct AnimationRun {
    /// Proxy frame track
    frame: Animation<Rect>,
    /// Destination (presenting) or source (dismissing) screen opacity
    fade: Animation<f32>,
    /// Host chrome opacity side channel
    chrome: Animation<f32>,
    completion: CompletionSignal,
}

/// Drives the non-interactive forward and reverse zoom transitions.
///
/// Created once per coordinator and reused; all per-transition state lives
/// in the optional proxy and run fields, cleared on every exit path.
pub struct TransitionAnimator {
    is_presenting: bool,
    proxy: Option<ProxyVisual>,
    run: Option<AnimationRun>,
}

impl TransitionAnimator {
    pub fn new() -> Self {
        Self {
            is_presenting: true,
            proxy: None,
            run: None,
        }
    }

    pub fn set_presenting(&mut self, presenting: bool) {
        self.is_presenting = presenting;
    }

    pub fn is_presenting(&self) -> bool {
        self.is_presenting
    }

    /// Whether an animation run is currently in flight.
    pub fn is_active(&self) -> bool {
        self.run.is_some()
    }

    /// Duration of the transition this animator would run, in seconds.
    pub fn transition_duration(&self) -> f32 {
        if self.is_presenting {
            PRESENT_DURATION
        } else {
            DISMISS_DURATION
        }
    }

    /// Begin the transition. Resolves all required geometry before mutating
    /// anything; a missing precondition declines the attempt and leaves
    /// both screens untouched.
    pub fn animate_transition(
        &mut self,
        host: &mut dyn TransitionHost,
        from: &mut dyn ScreenDelegate,
        to: &mut dyn ScreenDelegate,
    ) -> Result<(), TransitionDeclined> {
        if self.run.is_some() {
            return Err(TransitionDeclined::AlreadyActive);
        }

        if self.is_presenting {
            self.animate_zoom_in(host, from, to)
        } else {
            self.animate_zoom_out(host, from, to)
        }
    }

    fn animate_zoom_in(
        &mut self,
        host: &mut dyn TransitionHost,
        from: &mut dyn ScreenDelegate,
        to: &mut dyn ScreenDelegate,
    ) -> Result<(), TransitionDeclined> {
        let from_image = from
            .reference_image()
            .ok_or(TransitionDeclined::MissingSourceImage)?;
        to.reference_image()
            .ok_or(TransitionDeclined::MissingDestinationImage)?;
        let from_frame = from
            .reference_frame()
            .ok_or(TransitionDeclined::MissingSourceFrame)?;
        // Destination readiness guard; the end rectangle itself is fitted
        // against the destination bounds below.
        to.reference_frame()
            .ok_or(TransitionDeclined::MissingDestinationFrame)?;

        log::debug!("zoom-in transition starting from {:?}", from_frame);

        from.transition_will_start();
        to.transition_will_start();

        to.set_opacity(0.0);
        to.set_reference_hidden(true);
        host.insert_destination(ScreenOrder::Above);

        let start = self.ensure_proxy(host, from_image, from_frame);
        from.set_reference_hidden(true);

        let end = fit_rect(from_image.aspect_ratio(), to.bounds());
        let spring = SpringConfig::with_damping_ratio(0.8, PRESENT_DURATION);

        self.run = Some(AnimationRun {
            frame: Animation::new(start, end, Transition::spring(PRESENT_DURATION, spring)),
            fade: Animation::new(
                0.0,
                1.0,
                Transition::new(PRESENT_DURATION, TimingFunction::EaseInOut),
            ),
            chrome: Animation::new(
                1.0,
                0.0,
                Transition::new(PRESENT_DURATION, TimingFunction::EaseInOut),
            ),
            completion: CompletionSignal::new(),
        });

        Ok(())
    }

    fn animate_zoom_out(
        &mut self,
        host: &mut dyn TransitionHost,
        from: &mut dyn ScreenDelegate,
        to: &mut dyn ScreenDelegate,
    ) -> Result<(), TransitionDeclined> {
        let from_image = from
            .reference_image()
            .ok_or(TransitionDeclined::MissingSourceImage)?;
        to.reference_image()
            .ok_or(TransitionDeclined::MissingDestinationImage)?;
        let from_frame = from
            .reference_frame()
            .ok_or(TransitionDeclined::MissingSourceFrame)?;
        let to_frame = to
            .reference_frame()
            .ok_or(TransitionDeclined::MissingDestinationFrame)?;

        log::debug!("zoom-out transition starting toward {:?}", to_frame);

        from.transition_will_start();
        to.transition_will_start();

        to.set_reference_hidden(true);

        let start = self.ensure_proxy(host, from_image, from_frame);
        // Reveal rather than cross-fade: the grid sits under the viewer
        host.insert_destination(ScreenOrder::Below);
        from.set_reference_hidden(true);

        self.run = Some(AnimationRun {
            frame: Animation::new(
                start,
                to_frame,
                Transition::new(DISMISS_DURATION, TimingFunction::EaseInOut),
            ),
            fade: Animation::new(
                1.0,
                0.0,
                Transition::new(DISMISS_DURATION, TimingFunction::EaseInOut),
            ),
            chrome: Animation::new(
                0.0,
                1.0,
                Transition::new(DISMISS_DURATION, TimingFunction::EaseInOut),
            ),
            completion: CompletionSignal::new(),
        });

        Ok(())
    }

    /// Advance the animation by `dt` seconds. Returns true when the
    /// transition has fully completed (or nothing is running).
    pub fn tick(
        &mut self,
        dt: f32,
        host: &mut dyn TransitionHost,
        from: &mut dyn ScreenDelegate,
        to: &mut dyn ScreenDelegate,
    ) -> bool {
        let Some(run) = self.run.as_mut() else {
            return true;
        };

        let frame = run.frame.advance(dt);
        if let Some(proxy) = self.proxy.as_mut() {
            proxy.frame = frame;
            host.update_proxy(frame);
        }

        let alpha = run.fade.advance(dt);
        if self.is_presenting {
            to.set_opacity(alpha);
        } else {
            from.set_opacity(alpha);
        }
        host.set_chrome_opacity(run.chrome.advance(dt));

        if run.frame.is_finished() && run.fade.is_finished() && run.chrome.is_finished() {
            self.remove_proxy(host);
            to.set_reference_hidden(false);
            from.set_reference_hidden(false);
            if let Some(mut run) = self.run.take() {
                run.completion.fire(host, false);
            }
            to.transition_did_end();
            from.transition_did_end();
            log::debug!("zoom transition completed (presenting: {})", self.is_presenting);
            return true;
        }

        false
    }

    /// Create and mount the proxy if none exists (a prior interactive
    /// hand-off may have created it already). Returns its current frame.
    pub(crate) fn ensure_proxy(
        &mut self,
        host: &mut dyn TransitionHost,
        image: ImageRef,
        frame: Rect,
    ) -> Rect {
        match self.proxy {
            Some(existing) => existing.frame,
            None => {
                host.mount_proxy(image, frame);
                self.proxy = Some(ProxyVisual { image, frame });
                frame
            }
        }
    }

    /// Move the proxy and report the new frame to the host.
    pub(crate) fn set_proxy_frame(&mut self, host: &mut dyn TransitionHost, frame: Rect) {
        if let Some(proxy) = self.proxy.as_mut() {
            proxy.frame = frame;
            host.update_proxy(frame);
        }
    }

    /// The proxy visual currently standing in for the transitioning image,
    /// if a transition is under way.
    pub fn proxy(&self) -> Option<&ProxyVisual> {
        self.proxy.as_ref()
    }

    pub(crate) fn proxy_frame(&self) -> Option<Rect> {
        self.proxy.map(|proxy| proxy.frame)
    }

    /// Unmount and release the proxy. Safe to call on every exit path.
    pub(crate) fn remove_proxy(&mut self, host: &mut dyn TransitionHost) {
        if self.proxy.take().is_some() {
            host.unmount_proxy();
        }
    }
}

impl Default for TransitionAnimator {
    fn default() -> Self {
        Self::new()
    }
}
