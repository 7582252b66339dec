//! Sequence helpers.
//!
//! Distinctness everywhere in this module is [`IdentityKey`] equality.
//!
//! [`IdentityKey`]: crate::IdentityKey

mod last;
mod uniq;
mod xor;

pub use last::last;
pub use uniq::{uniq, uniq_by};
pub use xor::xor;
