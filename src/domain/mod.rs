//! Domain Layer
//!
//! Pure validated records, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Customer records (CustomerSummary, Customer)
//! - `value_objects/` - Field names and the shared validation rules
//!
//! ## Design Principles
//!
//! 1. **Always valid** - A record that exists has passed every rule
//! 2. **Atomic updates** - A rejected setter leaves the record untouched
//! 3. **Projection, not inheritance** - `Customer` owns a `CustomerSummary`
//!    and hands out copies of it

pub mod entities;
pub mod value_objects;
