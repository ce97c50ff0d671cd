//! Loading state machine of a button.
//!
//! Phases run Idle -> Showing -> Loading -> Hiding -> Idle. Whether a show
//! is allowed is decided only by whether an indicator is mounted; the phase
//! is kept for observers.
//!
//! All work runs on one execution context. Fades go through the
//! `TransitionScheduler`, so a hide issued while a show fade is still
//! running cancels that fade's completion before it can start the indicator.
//! Scheduled work holds weak references only; once the controller is
//! dropped, outstanding work does nothing.

use std::cell::{Ref, RefCell};
use std::rc::{Rc, Weak};

use egui::Pos2;
use tracing::{debug, trace};

use crate::animation::Transition;
use crate::indicator::IndicatorKind;
use crate::scheduler::{CancellationToken, TransitionScheduler};
use crate::traits::{Animator, ButtonSurface, ContentElement, DynIndicator, ExecutionContext, Indicator};

/// Fraction of half the button height an indicator radius may use.
const MAX_RADIUS_FRACTION: f32 = 0.7;

/// Called when the show fade completes, with the loading flag at that moment.
pub type ShowCompletion = Box<dyn FnOnce(bool)>;

/// Called when the hide fade completes.
pub type HideCompletion = Box<dyn FnOnce()>;

/// Observable phase of the loading state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingPhase {
    #[default]
    Idle,
    /// Indicator mounted, content fading out
    Showing,
    /// Indicator animating, content hidden
    Loading,
    /// Indicator unmounted, content fading back in
    Hiding,
}

/// An indicator currently mounted on the button.
#[derive(Debug, Clone)]
pub struct MountedIndicator {
    indicator: DynIndicator,
    alpha: f32,
    center: Pos2,
}

impl MountedIndicator {
    pub fn indicator(&self) -> &DynIndicator {
        &self.indicator
    }

    /// Opacity of the indicator (0.0 while fading in has not been applied)
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Center of the indicator in surface coordinates
    pub fn center(&self) -> Pos2 {
        self.center
    }
}

#[derive(Debug)]
struct Session {
    is_loading: bool,
    phase: LoadingPhase,
    indicator: Option<MountedIndicator>,
    saved_title: Option<String>,
    saved_image_alpha: f32,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            is_loading: false,
            phase: LoadingPhase::Idle,
            indicator: None,
            saved_title: None,
            saved_image_alpha: 1.0,
        }
    }
}

struct Core<S> {
    session: RefCell<Session>,
    surface: Rc<RefCell<S>>,
    scheduler: TransitionScheduler,
    context: Rc<dyn ExecutionContext>,
    animator: Rc<dyn Animator>,
}

/// Drives the loading presentation of a single button surface.
pub struct LoadingController<S: ButtonSurface + 'static> {
    core: Rc<Core<S>>,
}

impl<S: ButtonSurface + 'static> std::fmt::Debug for LoadingController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadingController")
            .field("session", &self.core.session.borrow())
            .field("scheduler", &self.core.scheduler)
            .finish_non_exhaustive()
    }
}

impl<S: ButtonSurface + 'static> LoadingController<S> {
    pub fn new(
        surface: Rc<RefCell<S>>,
        context: Rc<dyn ExecutionContext>,
        animator: Rc<dyn Animator>,
    ) -> Self {
        let scheduler = TransitionScheduler::new(Rc::clone(&context));
        Self {
            core: Rc::new(Core {
                session: RefCell::new(Session::default()),
                surface,
                scheduler,
                context,
                animator,
            }),
        }
    }

    // ===== State Queries =====

    /// True from `show_loader` until `hide_loader` has run its bookkeeping
    pub fn is_loading(&self) -> bool {
        self.core.session.borrow().is_loading
    }

    pub fn phase(&self) -> LoadingPhase {
        self.core.session.borrow().phase
    }

    pub fn is_indicator_mounted(&self) -> bool {
        self.core.session.borrow().indicator.is_some()
    }

    /// Returns the mounted indicator, if any
    pub fn indicator(&self) -> Option<Ref<'_, MountedIndicator>> {
        Ref::filter_map(self.core.session.borrow(), |s| s.indicator.as_ref()).ok()
    }

    /// Title captured by the last show, restored by the next hide
    pub fn saved_title(&self) -> Option<String> {
        self.core.session.borrow().saved_title.clone()
    }

    pub fn has_pending_transition(&self) -> bool {
        self.core.scheduler.has_pending()
    }

    pub fn surface(&self) -> Ref<'_, S> {
        self.core.surface.borrow()
    }

    /// Shared handle to the surface, for owners that paint or resize it
    pub fn surface_handle(&self) -> Rc<RefCell<S>> {
        Rc::clone(&self.core.surface)
    }

    // ===== Transitions =====

    /// Mounts an indicator and fades `targets` out.
    ///
    /// Does nothing if an indicator is already mounted; `completion` is then
    /// dropped without being called.
    pub fn show_loader(
        &self,
        targets: &[ContentElement],
        kind: IndicatorKind,
        allow_user_interaction: bool,
        completion: ShowCompletion,
    ) {
        {
            let mut session = self.core.session.borrow_mut();
            if session.indicator.is_some() {
                trace!("indicator already mounted, ignoring show");
                return;
            }

            let mut surface = self.core.surface.borrow_mut();
            let mut indicator = kind.build();
            let max_radius = MAX_RADIUS_FRACTION * surface.size().y / 2.0;
            indicator.set_radius(indicator.radius().min(max_radius));

            debug!(
                style = %kind.style(),
                radius = indicator.radius(),
                allow_user_interaction,
                "showing loader"
            );

            session.indicator = Some(MountedIndicator {
                indicator,
                alpha: 0.0,
                center: surface.center(),
            });
            session.saved_title = surface.title();
            session.is_loading = true;
            session.phase = LoadingPhase::Showing;
            surface.set_user_interaction_enabled(allow_user_interaction);
        }

        let weak = Rc::downgrade(&self.core);
        let targets = targets.to_vec();
        self.core.scheduler.schedule(move |token| {
            if let Some(core) = weak.upgrade() {
                Core::run_show_transition(&core, token, targets, completion);
            }
        });
    }

    /// Unmounts the indicator and fades the content back in.
    ///
    /// Always runs asynchronously on the execution context, after any work
    /// already queued there. Does nothing if no indicator is mounted by then;
    /// `completion` is then dropped without being called.
    pub fn hide_loader(&self, completion: Option<HideCompletion>) {
        Core::request_hide(&self.core, completion);
    }

    // ===== Geometry =====

    /// Re-centers the mounted indicator and reapplies the remembered image
    /// opacity. Call whenever the surface bounds change.
    pub fn layout(&self) {
        let mut session = self.core.session.borrow_mut();
        let mut surface = self.core.surface.borrow_mut();

        if surface.has_content(ContentElement::Image) {
            surface.set_content_alpha(ContentElement::Image, session.saved_image_alpha);
        }
        if let Some(mounted) = session.indicator.as_mut() {
            mounted.center = surface.center();
        }
    }
}

impl<S: ButtonSurface + 'static> Core<S> {
    fn run_show_transition(
        core: &Rc<Self>,
        token: CancellationToken,
        targets: Vec<ContentElement>,
        completion: ShowCompletion,
    ) {
        let weak: Weak<Self> = Rc::downgrade(core);
        let weak_done = weak.clone();

        core.animator.animate(
            Transition::fade_out(),
            Box::new(move || {
                let Some(core) = weak.upgrade() else { return };
                let mut session = core.session.borrow_mut();
                let mut surface = core.surface.borrow_mut();

                for element in &targets {
                    if *element == ContentElement::Image {
                        session.saved_image_alpha = 0.0;
                    }
                    surface.set_content_alpha(*element, 0.0);
                }
                surface.set_title(Some(String::new()));
                if let Some(mounted) = session.indicator.as_mut() {
                    mounted.alpha = 1.0;
                }
            }),
            Box::new(move |_finished| {
                if token.is_cancelled() {
                    trace!("show transition superseded, skipping completion");
                    return;
                }
                let Some(core) = weak_done.upgrade() else { return };

                // A hide always supersedes this task before clearing the
                // loading flag, so a live completion only has to start the
                // indicator.
                let is_loading = {
                    let mut session = core.session.borrow_mut();
                    if session.is_loading {
                        if let Some(mounted) = session.indicator.as_mut() {
                            mounted.indicator.start_animating();
                        }
                        session.phase = LoadingPhase::Loading;
                        debug!("loader started");
                    }
                    session.is_loading
                };
                completion(is_loading);
            }),
        );
    }

    fn request_hide(core: &Rc<Self>, completion: Option<HideCompletion>) {
        let weak = Rc::downgrade(core);
        core.context.dispatch(Box::new(move || {
            if let Some(core) = weak.upgrade() {
                Core::hide_now(&core, completion);
            }
        }));
    }

    fn hide_now(core: &Rc<Self>, completion: Option<HideCompletion>) {
        {
            let mut session = core.session.borrow_mut();
            let Some(mut mounted) = session.indicator.take() else {
                trace!("no indicator mounted, ignoring hide");
                return;
            };

            session.is_loading = false;
            session.phase = LoadingPhase::Hiding;
            core.surface.borrow_mut().set_user_interaction_enabled(true);
            mounted.indicator.stop_animating();
            debug!("hiding loader");
        }

        // Runs in place, so the title is restored before any other queued
        // work can observe it cleared.
        let weak = Rc::downgrade(core);
        core.scheduler.perform(move |token| {
            if let Some(core) = weak.upgrade() {
                Core::run_hide_transition(&core, token, completion);
            }
        });
    }

    fn run_hide_transition(core: &Rc<Self>, token: CancellationToken, completion: Option<HideCompletion>) {
        let weak: Weak<Self> = Rc::downgrade(core);
        let weak_done = weak.clone();

        core.animator.animate(
            Transition::fade_in(),
            Box::new(move || {
                let Some(core) = weak.upgrade() else { return };
                let mut session = core.session.borrow_mut();
                let mut surface = core.surface.borrow_mut();

                surface.set_title(session.saved_title.clone());
                surface.set_content_alpha(ContentElement::Title, 1.0);
                surface.set_content_alpha(ContentElement::Image, 1.0);
                session.saved_image_alpha = 1.0;
            }),
            Box::new(move |_finished| {
                if token.is_cancelled() {
                    trace!("hide transition superseded, skipping completion");
                    return;
                }
                if let Some(core) = weak_done.upgrade() {
                    core.session.borrow_mut().phase = LoadingPhase::Idle;
                    debug!("loader hidden");
                }
                if let Some(completion) = completion {
                    completion();
                }
            }),
        );
    }
}
