//! Animation primitives used by the loading controller.
//!
//! Mutations are applied as soon as an animation starts (model values jump
//! to their targets); the renderer interpolates presentation values on its
//! own. What the controller relies on is *when* `on_complete` fires:
//! - `InstantAnimator` completes synchronously inside `animate`
//! - `TimelineAnimator` completes once its driven clock passes the duration

use std::cell::{Cell, RefCell};
use std::time::Duration;

use egui::emath::easing;

use crate::traits::Animator;

/// Duration of every loader fade.
pub const FADE_DURATION: Duration = Duration::from_millis(500);

/// Timing curve of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Curve {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Curve {
    /// The matching `emath` easing function, mapping linear progress in
    /// [0, 1] to eased progress.
    pub fn easing(self) -> fn(f32) -> f32 {
        match self {
            Curve::Linear => easing::linear,
            Curve::EaseIn => easing::quadratic_in,
            Curve::EaseOut => easing::quadratic_out,
            Curve::EaseInOut => easing::quadratic_in_out,
        }
    }

    /// The curve that, played backwards, traces this one forwards.
    ///
    /// Renderers that animate a value down by running an easing in reverse
    /// use this to keep the intended curve.
    pub fn reversed(self) -> Curve {
        match self {
            Curve::EaseIn => Curve::EaseOut,
            Curve::EaseOut => Curve::EaseIn,
            other => other,
        }
    }
}

/// Duration and curve of a single animated transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub duration: Duration,
    pub curve: Curve,
}

impl Transition {
    /// Content fades out, indicator fades in
    pub fn fade_out() -> Self {
        Self {
            duration: FADE_DURATION,
            curve: Curve::EaseOut,
        }
    }

    /// Content fades back in
    pub fn fade_in() -> Self {
        Self {
            duration: FADE_DURATION,
            curve: Curve::EaseIn,
        }
    }
}

/// Applies mutations and completes immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct InstantAnimator;

impl Animator for InstantAnimator {
    fn animate(
        &self,
        _transition: Transition,
        mutations: Box<dyn FnOnce()>,
        on_complete: Box<dyn FnOnce(bool)>,
    ) {
        mutations();
        on_complete(true);
    }
}

struct RunningAnimation {
    started_at: f64,
    transition: Transition,
    on_complete: Box<dyn FnOnce(bool)>,
}

/// Animator driven by an external clock (frame time in the UI, manual time in tests).
pub struct TimelineAnimator {
    now: Cell<f64>,
    running: RefCell<Vec<RunningAnimation>>,
}

impl std::fmt::Debug for TimelineAnimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimelineAnimator")
            .field("now", &self.now.get())
            .field("in_flight", &self.in_flight())
            .finish()
    }
}

impl Default for TimelineAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl TimelineAnimator {
    pub fn new() -> Self {
        Self {
            now: Cell::new(0.0),
            running: RefCell::new(Vec::new()),
        }
    }

    /// Current clock value in seconds
    pub fn now(&self) -> f64 {
        self.now.get()
    }

    /// Number of animations that have not completed yet
    pub fn in_flight(&self) -> usize {
        self.running.borrow().len()
    }

    pub fn is_idle(&self) -> bool {
        self.in_flight() == 0
    }

    /// Moves the clock to `now` and completes every animation whose duration
    /// has elapsed, in start order. Returns the number completed.
    ///
    /// The clock never moves backwards.
    pub fn advance_to(&self, now: f64) -> usize {
        if now > self.now.get() {
            self.now.set(now);
        }
        let now = self.now.get();

        let finished: Vec<RunningAnimation> = {
            let mut running = self.running.borrow_mut();
            let (done, pending): (Vec<_>, Vec<_>) = running
                .drain(..)
                .partition(|a| now - a.started_at >= a.transition.duration.as_secs_f64());
            *running = pending;
            done
        };

        let count = finished.len();
        // Completions may start new animations, so no borrow is held here.
        for animation in finished {
            (animation.on_complete)(true);
        }
        count
    }

    /// Advances the clock by `delta` seconds
    pub fn advance_by(&self, delta: f64) -> usize {
        self.advance_to(self.now.get() + delta)
    }

    /// Completes every outstanding animation regardless of the clock,
    /// including animations started by those completions.
    pub fn finish_all(&self) -> usize {
        let mut count = 0;
        loop {
            let next = {
                let mut running = self.running.borrow_mut();
                if running.is_empty() {
                    break;
                }
                running.remove(0)
            };
            (next.on_complete)(true);
            count += 1;
        }
        count
    }
}

impl Animator for TimelineAnimator {
    fn animate(
        &self,
        transition: Transition,
        mutations: Box<dyn FnOnce()>,
        on_complete: Box<dyn FnOnce(bool)>,
    ) {
        mutations();
        self.running.borrow_mut().push(RunningAnimation {
            started_at: self.now.get(),
            transition,
            on_complete,
        });
    }
}
