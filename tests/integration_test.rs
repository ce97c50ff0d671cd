use loadbutton::{
    ButtonSurface, ContentElement, ImmediateContext, Indicator, IndicatorKind, IndicatorStyle,
    InstantAnimator, LoadButton, LoadingController, LoadingPhase, MainQueue, SurfaceState,
    TimelineAnimator,
};
use egui::{Color32, Vec2};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Controller wired to a real queue and a manually driven animator.
struct Harness {
    queue: Rc<MainQueue>,
    animator: Rc<TimelineAnimator>,
    surface: Rc<RefCell<SurfaceState>>,
    controller: LoadingController<SurfaceState>,
}

impl Harness {
    fn new(surface: SurfaceState) -> Self {
        let queue = Rc::new(MainQueue::new());
        let animator = Rc::new(TimelineAnimator::new());
        let surface = Rc::new(RefCell::new(surface));
        let controller = LoadingController::new(Rc::clone(&surface), queue.clone(), animator.clone());
        Self { queue, animator, surface, controller }
    }

    /// Drains the queue, lets every fade finish, and drains again until quiet.
    fn settle(&self) {
        loop {
            let ran = self.queue.run_until_idle();
            let finished = self.animator.finish_all();
            if ran == 0 && finished == 0 {
                break;
            }
        }
    }

    fn show(&self, completion: impl FnOnce(bool) + 'static) {
        self.controller.show_loader(
            &[ContentElement::Title, ContentElement::Image],
            dots(12.0),
            false,
            Box::new(completion),
        );
    }

    fn title(&self) -> Option<String> {
        self.surface.borrow().title()
    }
}

fn dots(radius: f32) -> IndicatorKind {
    IndicatorKind::Dots { radius, color: Color32::LIGHT_GRAY }
}

fn counter() -> (Rc<Cell<u32>>, Rc<Cell<u32>>) {
    let c = Rc::new(Cell::new(0));
    (Rc::clone(&c), c)
}

#[test]
fn test_submit_scenario() {
    let h = Harness::new(SurfaceState::new(Vec2::new(200.0, 48.0)).with_title("Submit"));

    h.show(|_| {});
    h.settle();

    assert_eq!(h.controller.phase(), LoadingPhase::Loading);
    assert!(h.controller.is_loading());
    assert!(!h.surface.borrow().is_user_interaction_enabled());
    assert_eq!(h.title().as_deref(), Some(""));

    let restored = Rc::new(Cell::new(false));
    let r = Rc::clone(&restored);
    h.controller.hide_loader(Some(Box::new(move || r.set(true))));
    h.settle();

    assert!(restored.get());
    assert_eq!(h.title().as_deref(), Some("Submit"));
    assert!(h.surface.borrow().is_user_interaction_enabled());
    assert_eq!(h.controller.phase(), LoadingPhase::Idle);
}

#[test]
fn test_round_trip_restores_title_and_opacity() {
    let h = Harness::new(SurfaceState::default().with_title("Send").with_image());

    h.show(|_| {});
    h.settle();
    assert_eq!(h.surface.borrow().content_alpha(ContentElement::Title), 0.0);
    assert_eq!(h.surface.borrow().content_alpha(ContentElement::Image), 0.0);

    h.controller.hide_loader(None);
    h.settle();

    let surface = h.surface.borrow();
    assert_eq!(surface.title().as_deref(), Some("Send"));
    assert_eq!(surface.content_alpha(ContentElement::Title), 1.0);
    assert_eq!(surface.content_alpha(ContentElement::Image), 1.0);
}

#[test]
fn test_double_show_is_idempotent() {
    let h = Harness::new(SurfaceState::default().with_title("Go"));
    let (first, first_count) = counter();
    let (second, second_count) = counter();

    h.show(move |_| first.set(first.get() + 1));
    h.surface.borrow_mut().set_title(Some("Changed".to_string()));
    h.show(move |_| second.set(second.get() + 1));
    h.settle();

    assert_eq!(first_count.get(), 1);
    assert_eq!(second_count.get(), 0);
    assert!(h.controller.is_indicator_mounted());
    assert_eq!(h.controller.saved_title().as_deref(), Some("Go"));
}

#[test]
fn test_hide_without_indicator_is_noop() {
    let h = Harness::new(SurfaceState::default().with_title("Idle"));
    let (hit, hits) = counter();

    h.controller.hide_loader(Some(Box::new(move || hit.set(hit.get() + 1))));
    h.settle();

    assert_eq!(hits.get(), 0);
    assert_eq!(h.controller.phase(), LoadingPhase::Idle);
    assert!(!h.controller.has_pending_transition());
    assert_eq!(h.title().as_deref(), Some("Idle"));
}

#[test]
fn test_show_then_immediate_hide_ends_idle() {
    let h = Harness::new(SurfaceState::default().with_title("Buy"));
    let (shown, show_count) = counter();
    let (hidden, hide_count) = counter();

    h.show(move |_| shown.set(shown.get() + 1));
    h.controller.hide_loader(Some(Box::new(move || hidden.set(hidden.get() + 1))));
    h.settle();

    assert_eq!(show_count.get(), 0, "superseded show completion must not fire");
    assert_eq!(hide_count.get(), 1);
    assert!(!h.controller.is_loading());
    assert!(!h.controller.is_indicator_mounted());
    assert_eq!(h.controller.phase(), LoadingPhase::Idle);
    assert_eq!(h.title().as_deref(), Some("Buy"));
}

#[test]
fn test_hide_during_show_fade_cancels_show_completion() {
    let h = Harness::new(SurfaceState::default().with_title("Save"));
    let (shown, show_count) = counter();

    h.show(move |_| shown.set(shown.get() + 1));
    h.queue.run_until_idle();
    h.animator.advance_to(0.2);
    assert_eq!(h.controller.phase(), LoadingPhase::Showing);
    assert_eq!(h.animator.in_flight(), 1);

    h.controller.hide_loader(None);
    h.queue.run_until_idle();
    assert!(!h.controller.is_indicator_mounted());
    assert_eq!(h.controller.phase(), LoadingPhase::Hiding);

    // Both fades finish; only the hide's completion may have effects
    h.animator.advance_to(2.0);
    h.queue.run_until_idle();

    assert_eq!(show_count.get(), 0);
    assert_eq!(h.controller.phase(), LoadingPhase::Idle);
    assert_eq!(h.title().as_deref(), Some("Save"));
}

#[test]
fn test_show_during_hide_fade_supersedes_hide() {
    let h = Harness::new(SurfaceState::default().with_title("Retry"));
    h.show(|_| {});
    h.settle();

    let (hidden, hide_count) = counter();
    h.controller.hide_loader(Some(Box::new(move || hidden.set(hidden.get() + 1))));
    h.queue.run_until_idle();
    assert_eq!(h.controller.phase(), LoadingPhase::Hiding);

    let loading_seen = Rc::new(Cell::new(None));
    let l = Rc::clone(&loading_seen);
    h.show(move |is_loading| l.set(Some(is_loading)));
    h.settle();

    assert_eq!(hide_count.get(), 0, "superseded hide completion must not fire");
    assert_eq!(loading_seen.get(), Some(true));
    assert_eq!(h.controller.phase(), LoadingPhase::Loading);
    assert_eq!(h.controller.saved_title().as_deref(), Some("Retry"));
}

#[test]
fn test_show_right_after_hide_bookkeeping_keeps_saved_title() {
    let h = Harness::new(SurfaceState::default().with_title("Retry"));
    h.show(|_| {});
    h.settle();

    h.controller.hide_loader(None);
    // Only the hide bookkeeping runs; nothing queued after it does
    assert_eq!(h.queue.run_pending(), 1);
    assert_eq!(h.title().as_deref(), Some("Retry"));

    h.show(|_| {});
    h.settle();
    assert_eq!(h.controller.saved_title().as_deref(), Some("Retry"));

    h.controller.hide_loader(None);
    h.settle();
    assert_eq!(h.title().as_deref(), Some("Retry"));
    assert_eq!(h.controller.phase(), LoadingPhase::Idle);
}

#[test]
fn test_at_most_one_indicator_across_call_sequences() {
    let h = Harness::new(SurfaceState::default().with_title("Loop"));
    let steps: [u8; 12] = [0, 0, 1, 2, 0, 1, 1, 2, 0, 2, 1, 2];

    for step in steps {
        match step {
            0 => h.show(|_| {}),
            1 => h.controller.hide_loader(None),
            _ => h.settle(),
        }
        assert!(h.animator.in_flight() <= 2);
        if h.controller.is_indicator_mounted() {
            assert!(h.controller.is_loading() || h.controller.phase() == LoadingPhase::Showing);
        }
    }
    h.settle();
    assert!(!h.controller.is_indicator_mounted());
    assert_eq!(h.title().as_deref(), Some("Loop"));
}

#[test]
fn test_radius_clamp_scenario() {
    let h = Harness::new(SurfaceState::new(Vec2::new(300.0, 100.0)));
    h.controller
        .show_loader(&[ContentElement::Title], dots(50.0), false, Box::new(|_| {}));

    let radius = h.controller.indicator().map(|m| m.indicator().radius()).unwrap();
    assert!((radius - 35.0).abs() < 1e-4);
}

#[test]
fn test_indicator_fades_in_and_starts_after_fade() {
    let h = Harness::new(SurfaceState::default());
    h.show(|_| {});

    {
        let mounted = h.controller.indicator().unwrap();
        assert_eq!(mounted.alpha(), 0.0);
        assert!(!mounted.indicator().is_animating());
    }

    h.queue.run_until_idle();
    assert_eq!(h.controller.indicator().unwrap().alpha(), 1.0);
    assert!(!h.controller.indicator().unwrap().indicator().is_animating());

    h.animator.advance_to(0.5);
    let mounted = h.controller.indicator().unwrap();
    assert!(mounted.indicator().is_animating());
    assert_eq!(mounted.indicator().layer().map(|l| l.len()), Some(3));
}

#[test]
fn test_button_wrapper_with_synchronous_substitutes() {
    let button = LoadButton::new(
        SurfaceState::new(Vec2::new(180.0, 40.0)).with_title("Login").with_image(),
        Rc::new(ImmediateContext),
        Rc::new(InstantAnimator),
    );

    button.show_loader(IndicatorStyle::Spinner, Some(Color32::WHITE), Some(30.0), false, None);
    assert!(button.is_loading());
    assert!((button.indicator().unwrap().indicator().radius() - 14.0).abs() < 1e-4);

    button.hide_loader(None);
    assert!(!button.is_loading());
    assert_eq!(button.phase(), LoadingPhase::Idle);
    assert_eq!(button.surface().title().as_deref(), Some("Login"));
}
