//! Execution contexts for scheduled UI work.
//!
//! `MainQueue` is the real UI queue: jobs are queued on dispatch and run when
//! the frame loop drains it. `ImmediateContext` runs jobs inline so tests can
//! make every transition synchronous.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use crate::traits::{ExecutionContext, Job};

/// FIFO queue of UI jobs, drained once per frame.
pub struct MainQueue {
    jobs: RefCell<VecDeque<Job>>,
    waker: Option<Box<dyn Fn()>>,
    draining: Cell<bool>,
}

impl std::fmt::Debug for MainQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MainQueue")
            .field("pending", &self.len())
            .finish_non_exhaustive()
    }
}

impl Default for MainQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl MainQueue {
    pub fn new() -> Self {
        Self {
            jobs: RefCell::new(VecDeque::new()),
            waker: None,
            draining: Cell::new(false),
        }
    }

    /// Creates a queue that calls `waker` on every dispatch.
    ///
    /// The UI uses this to request a repaint so the queue is drained promptly.
    pub fn with_waker(waker: impl Fn() + 'static) -> Self {
        Self {
            waker: Some(Box::new(waker)),
            ..Self::new()
        }
    }

    /// Number of queued jobs
    pub fn len(&self) -> usize {
        self.jobs.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.borrow().is_empty()
    }

    /// Runs queued jobs in FIFO order until the queue is empty, including
    /// jobs dispatched by the jobs themselves. Returns the number run.
    ///
    /// A nested call from inside a running job returns 0; the outer drain
    /// picks up whatever was queued.
    pub fn run_until_idle(&self) -> usize {
        if self.draining.replace(true) {
            return 0;
        }

        let mut count = 0;
        loop {
            let next = self.jobs.borrow_mut().pop_front();
            match next {
                Some(job) => {
                    job();
                    count += 1;
                }
                None => break,
            }
        }

        self.draining.set(false);
        count
    }

    /// Runs only the jobs that were queued when called. Returns the number run.
    pub fn run_pending(&self) -> usize {
        let batch: Vec<Job> = self.jobs.borrow_mut().drain(..).collect();
        let count = batch.len();
        for job in batch {
            job();
        }
        count
    }
}

impl ExecutionContext for MainQueue {
    fn dispatch(&self, job: Job) {
        self.jobs.borrow_mut().push_back(job);
        if let Some(waker) = &self.waker {
            waker();
        }
    }
}

/// Runs every job inline at dispatch time.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImmediateContext;

impl ExecutionContext for ImmediateContext {
    fn dispatch(&self, job: Job) {
        job();
    }
}
