//! Domain Entities
//!
//! - `CustomerSummary` - id, name and phone
//! - `Customer` - full record, projects down to a `CustomerSummary`

mod customer;
mod customer_summary;

pub use customer::Customer;
pub use customer_summary::CustomerSummary;
