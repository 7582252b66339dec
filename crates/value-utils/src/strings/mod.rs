//! String utilities.

mod reg_exp;

pub use reg_exp::escape_reg_exp;
