//! Deep equality and deep cloning.
//!
//! Both walk the value recursively and have no cycle detection. `Value`
//! containers are immutable behind `Arc`, so cycles cannot be built through
//! this crate, but very deep nesting can still exhaust the stack.

mod clone;
mod equal;

pub use clone::clone_deep;
pub use equal::is_equal;
