use crate::error::Error;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// A deferred callback.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// A host timer facility.
///
/// Implementations must not run `task` before `schedule_after` returns.
pub trait Scheduler: Send + Sync + 'static {
    /// Identifies a scheduled task so it can be cancelled.
    type Handle: Send + 'static;

    /// Runs `task` once `delay` has elapsed.
    fn schedule_after(&self, delay: Duration, task: Task) -> Self::Handle;

    /// Prevents a scheduled task from running, if it has not started yet.
    fn cancel(&self, handle: Self::Handle);
}

/// A [`Scheduler`] backed by tokio timers.
///
/// Each scheduled task is a spawned future that sleeps until its deadline;
/// cancelling aborts it.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Uses the runtime the caller is running on.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoRuntime`] when called outside a tokio runtime.
    pub fn try_current() -> Result<Self, Error> {
        Handle::try_current()
            .map(Self::new)
            .map_err(|_| Error::NoRuntime)
    }
}

impl Scheduler for TokioScheduler {
    type Handle = JoinHandle<()>;

    fn schedule_after(&self, delay: Duration, task: Task) -> JoinHandle<()> {
        // The deadline is read from the runtime clock, which may be paused.
        let _guard = self.handle.enter();
        let deadline = tokio::time::Instant::now() + delay;
        self.handle.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            task();
        })
    }

    fn cancel(&self, handle: JoinHandle<()>) {
        handle.abort();
    }
}
