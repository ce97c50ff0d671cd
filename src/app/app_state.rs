//! Centralized state of the demo application.

use std::cell::RefCell;
use std::rc::Rc;

use egui::Vec2;
use loadbutton::{LoadButton, LoaderSettings, MainQueue, SurfaceState, TimelineAnimator};

const EVENT_LOG_LIMIT: usize = 8;

/// Recent loader events, newest last, shared with completion callbacks.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    entries: Rc<RefCell<Vec<String>>>,
}

impl EventLog {
    pub fn push(&self, entry: impl Into<String>) {
        let mut entries = self.entries.borrow_mut();
        entries.push(entry.into());
        if entries.len() > EVENT_LOG_LIMIT {
            let excess = entries.len() - EVENT_LOG_LIMIT;
            entries.drain(..excess);
        }
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }
}

/// Demo application state.
///
/// The queue and animator are shared with the button's controller; the
/// frame loop drives both.
pub struct AppState {
    /// The button under demonstration
    pub button: LoadButton,
    /// UI execution queue, drained every frame
    pub queue: Rc<MainQueue>,
    /// Animator driven by frame time
    pub animator: Rc<TimelineAnimator>,
    /// Loader preferences (persisted)
    pub settings: LoaderSettings,
    /// Color text being edited, applied to settings once valid
    pub color_input: String,
    /// Current validation error to display (if any)
    pub error_message: Option<String>,
    pub events: EventLog,
}

impl AppState {
    /// Creates the state with a queue that calls `waker` whenever work is queued.
    pub fn new(settings: LoaderSettings, waker: impl Fn() + 'static) -> Self {
        let queue = Rc::new(MainQueue::with_waker(waker));
        let animator = Rc::new(TimelineAnimator::new());
        let surface = SurfaceState::new(Vec2::new(220.0, 52.0))
            .with_title("Submit")
            .with_image();
        let button = LoadButton::new(surface, queue.clone(), animator.clone());

        Self {
            button,
            queue,
            animator,
            color_input: settings.color.clone(),
            settings,
            error_message: None,
            events: EventLog::default(),
        }
    }

    /// True while anything still needs frames: queued work, running fades or a live indicator
    pub fn needs_repaint(&self) -> bool {
        !self.queue.is_empty() || !self.animator.is_idle() || self.button.indicator().is_some()
    }
}
