//! value-utils - Lightweight helpers over dynamic values
//!
//! This crate provides small, independent helpers for shaping and comparing
//! dynamic values: `pick`, `omit`, deep equality, deep cloning, `uniq`,
//! `xor`, path lookup, regex escaping, sequential ids and debouncing.
//!
//! Values enter through [`Value`], usually converted from `serde_json`:
//!
//! ```
//! use serde_json::json;
//! use value_utils::{clone_deep, has, is_equal, omit, Value};
//!
//! let user = Value::from(json!({"name": "ada", "tags": ["x"], "password": "..."}));
//! let public = Value::from(omit(&user, ["password"]));
//!
//! assert!(has(&public, "tags[0]"));
//! assert!(is_equal(&clone_deep(&public), &public));
//! ```

pub mod array;
pub mod debounce;
pub mod deep;
pub mod error;
pub mod identity;
pub mod object;
pub mod path;
pub mod strings;
pub mod uniq_id;
pub mod value;

// Re-exports for convenience
pub use array::{last, uniq, uniq_by, xor};
pub use debounce::{debounce, debounce_with, DebounceOptions, Debounced, Scheduler, TokioScheduler};
pub use deep::{clone_deep, is_equal};
pub use error::Error;
pub use identity::IdentityKey;
pub use object::{has, has_path, omit, pick, pick_by};
pub use path::to_path;
pub use strings::escape_reg_exp;
pub use uniq_id::{uniq_id, IdCounter};
pub use value::{Map, OpaqueValue, Value};
