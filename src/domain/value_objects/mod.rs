//! Domain Value Objects
//!
//! Field identities and the validation rule set shared by every customer
//! record type.

mod field;
pub mod rules;

pub use field::Field;
