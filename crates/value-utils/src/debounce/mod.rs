//! Coalescing bursts of calls into a single deferred invocation.
//!
//! [`debounce`] wraps a function so that every call restarts a wait
//! period. In trailing mode (the default) the function runs once the wait
//! period elapses without another call, with the most recent arguments. In
//! leading mode it runs immediately on the first call of a burst and the
//! trailing firing is suppressed.
//!
//! Timers come from a [`Scheduler`]; [`TokioScheduler`] runs them on a
//! tokio runtime.

mod debounced;
mod scheduler;

pub use debounced::{debounce, debounce_with, DebounceOptions, Debounced};
pub use scheduler::{Scheduler, Task, TokioScheduler};
