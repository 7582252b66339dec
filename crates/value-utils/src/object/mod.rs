//! Object shaping and path lookup.
//!
//! All helpers read own keys only (see [`Value::own_entries`]) and treat a
//! value without own keys as an empty object.
//!
//! [`Value::own_entries`]: crate::Value::own_entries

mod has;
mod omit;
mod pick;

pub use has::{has, has_path};
pub use omit::omit;
pub use pick::{pick, pick_by};
