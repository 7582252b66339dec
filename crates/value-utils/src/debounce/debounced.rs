use super::scheduler::{Scheduler, TokioScheduler};
use crate::error::Error;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::trace;

/// Options for [`debounce`].
///
/// Deserializes from a config fragment such as `{"leading": true}`; missing
/// fields take their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebounceOptions {
    /// Invoke on the first call of a burst instead of after it.
    pub leading: bool,
}

/// A debounced wrapper around a function, see [`debounce`].
///
/// Clones share the same pending timer.
pub struct Debounced<A, S: Scheduler = TokioScheduler> {
    inner: Arc<Inner<A, S>>,
}

struct Inner<A, S: Scheduler> {
    func: Box<dyn Fn(A) + Send + Sync>,
    wait: Duration,
    options: DebounceOptions,
    scheduler: S,
    state: Mutex<State<S::Handle>>,
}

struct State<H> {
    generation: u64,
    pending: Option<Pending<H>>,
}

struct Pending<H> {
    generation: u64,
    handle: H,
}

/// Creates a debounced wrapper that schedules on the current tokio runtime.
///
/// Every call restarts the `wait` timer. Without `leading`, `func` runs once
/// the timer elapses, with the arguments of the most recent call. With
/// `leading`, `func` runs immediately on the first call of a burst and the
/// timer only marks the end of the burst. Pass a tuple as `A` for several
/// arguments.
///
/// # Errors
///
/// Returns [`Error::NoRuntime`] when called outside a tokio runtime.
///
/// # Examples
///
/// ```
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
/// use std::time::Duration;
/// use value_utils::{debounce, DebounceOptions};
///
/// # #[tokio::main(flavor = "current_thread", start_paused = true)]
/// # async fn main() {
/// let calls = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&calls);
/// let save = debounce(
///     move |_: &str| {
///         counter.fetch_add(1, Ordering::SeqCst);
///     },
///     Duration::from_millis(50),
///     DebounceOptions::default(),
/// )
/// .unwrap();
///
/// save.call("a");
/// save.call("b");
/// tokio::time::sleep(Duration::from_millis(100)).await;
/// assert_eq!(calls.load(Ordering::SeqCst), 1);
/// # }
/// ```
pub fn debounce<A, F>(func: F, wait: Duration, options: DebounceOptions) -> Result<Debounced<A>, Error>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    let scheduler = TokioScheduler::try_current()?;
    Ok(debounce_with(scheduler, func, wait, options))
}

/// Like [`debounce`], with an explicit timer facility.
pub fn debounce_with<A, F, S>(scheduler: S, func: F, wait: Duration, options: DebounceOptions) -> Debounced<A, S>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
    S: Scheduler,
{
    Debounced {
        inner: Arc::new(Inner {
            func: Box::new(func),
            wait,
            options,
            scheduler,
            state: Mutex::new(State {
                generation: 0,
                pending: None,
            }),
        }),
    }
}

impl<A, S> Debounced<A, S>
where
    A: Send + 'static,
    S: Scheduler,
{
    /// Registers a call.
    ///
    /// Cancels the pending timer, if any, and schedules a new one `wait`
    /// from now. In leading mode `func` runs before this returns when no
    /// timer was pending.
    pub fn call(&self, args: A) {
        let inner = &self.inner;
        let immediate = {
            let mut state = inner.state.lock();
            let call_now = inner.options.leading && state.pending.is_none();

            if let Some(previous) = state.pending.take() {
                trace!(generation = previous.generation, "debounce: cancelling pending call");
                inner.scheduler.cancel(previous.handle);
            }

            // Leading mode never invokes from the timer, so the timer does not need the args.
            let (immediate, trailing) = if inner.options.leading {
                (call_now.then_some(args), None)
            } else {
                (None, Some(args))
            };

            state.generation += 1;
            let generation = state.generation;
            let task_inner = Arc::clone(inner);
            let handle = inner.scheduler.schedule_after(
                inner.wait,
                Box::new(move || task_inner.fire(generation, trailing)),
            );
            state.pending = Some(Pending { generation, handle });
            trace!(generation, wait_ms = inner.wait.as_millis() as u64, "debounce: scheduled");

            immediate
        };

        if let Some(args) = immediate {
            trace!("debounce: leading call");
            (inner.func)(args);
        }
    }

    /// Whether a timer is currently pending.
    pub fn is_pending(&self) -> bool {
        self.inner.state.lock().pending.is_some()
    }

    pub fn wait(&self) -> Duration {
        self.inner.wait
    }

    pub fn options(&self) -> DebounceOptions {
        self.inner.options
    }
}

impl<A, S: Scheduler> Inner<A, S> {
    fn fire(&self, generation: u64, args: Option<A>) {
        {
            let mut state = self.state.lock();
            match &state.pending {
                Some(pending) if pending.generation == generation => state.pending = None,
                _ => {
                    trace!(generation, "debounce: superseded timer fired, ignoring");
                    return;
                }
            }
        }

        match args {
            Some(args) => {
                trace!(generation, "debounce: trailing call");
                (self.func)(args);
            }
            None => trace!(generation, "debounce: burst ended, trailing call skipped in leading mode"),
        }
    }
}

impl<A, S: Scheduler> Clone for Debounced<A, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A, S: Scheduler> fmt::Debug for Debounced<A, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounced")
            .field("wait", &self.inner.wait)
            .field("options", &self.inner.options)
            .field("pending", &self.inner.state.lock().pending.is_some())
            .finish()
    }
}
