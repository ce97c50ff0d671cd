//! Single-slot scheduling of cancellable transition work.
//!
//! A `TransitionScheduler` holds at most one pending task. Installing a new
//! task cancels the previous one first. Every task checks its own flag as
//! the first thing it does when it runs, and the work it was given can
//! check the same flag again later (e.g. in an animation completion).

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::trace;

use crate::traits::ExecutionContext;

/// Shared cancellation flag for one scheduled task.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// A deferred unit of work identified by its cancellation flag.
#[derive(Debug, Clone)]
pub struct CancellableTask {
    id: u64,
    token: CancellationToken,
}

impl CancellableTask {
    /// Sequence number of this task within its scheduler
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// Owner of the single outstanding transition task.
pub struct TransitionScheduler {
    context: Rc<dyn ExecutionContext>,
    pending: RefCell<Option<CancellableTask>>,
    next_id: Cell<u64>,
}

impl std::fmt::Debug for TransitionScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionScheduler")
            .field("pending", &self.pending.borrow())
            .finish_non_exhaustive()
    }
}

impl TransitionScheduler {
    pub fn new(context: Rc<dyn ExecutionContext>) -> Self {
        Self {
            context,
            pending: RefCell::new(None),
            next_id: Cell::new(0),
        }
    }

    /// Cancels any pending task, installs `work` as the new pending task and
    /// submits it to the execution context right away.
    ///
    /// `work` receives the task's token so it can re-check cancellation after
    /// its own suspension points.
    pub fn schedule<F>(&self, work: F) -> CancellableTask
    where
        F: FnOnce(CancellationToken) + 'static,
    {
        let task = self.install();
        let id = task.id;
        let token = task.token.clone();
        self.context.dispatch(Box::new(move || {
            if token.is_cancelled() {
                trace!(task = id, "skipping cancelled transition");
                return;
            }
            work(token);
        }));

        task
    }

    /// Like [`schedule`](Self::schedule), but runs `work` in place instead of
    /// going through the execution context.
    ///
    /// Callers must already be on the execution context.
    pub fn perform<F>(&self, work: F) -> CancellableTask
    where
        F: FnOnce(CancellationToken) + 'static,
    {
        let task = self.install();
        work(task.token.clone());
        task
    }

    fn install(&self) -> CancellableTask {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let task = CancellableTask {
            id,
            token: CancellationToken::new(),
        };

        let mut pending = self.pending.borrow_mut();
        if let Some(previous) = pending.take() {
            trace!(task = previous.id, "superseding pending transition");
            previous.cancel();
        }
        *pending = Some(task.clone());
        task
    }

    /// Cancels and clears the pending task. Safe to call with nothing pending.
    pub fn cancel_pending(&self) {
        if let Some(task) = self.pending.borrow_mut().take() {
            task.cancel();
        }
    }

    /// Returns true if a task is held and has not been cancelled
    pub fn has_pending(&self) -> bool {
        self.pending
            .borrow()
            .as_ref()
            .is_some_and(|task| !task.is_cancelled())
    }

    /// Returns a handle to the pending task, if any
    pub fn pending(&self) -> Option<CancellableTask> {
        self.pending.borrow().clone()
    }
}
