use thiserror::Error;

/// Errors raised by this crate.
///
/// The value helpers never fail; only constructing a debounced callable
/// without an explicit scheduler can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("no tokio runtime is running; use debounce_with to supply a scheduler")]
    NoRuntime,
}
