//! customer_record - validated customer value objects
//!
//! A [`Customer`] and its [`CustomerSummary`] projection are always valid:
//! every constructor and every setter runs the same rule set, and a rejected
//! value leaves the record exactly as it was.
//!
//! ```
//! use customer_record::{Customer, ErrorKind};
//!
//! let customer = Customer::new(
//!     1,
//!     "Acme Corp",
//!     "123 Main Street",
//!     "+1 (555) 123-4567",
//!     "John Smith",
//! )?;
//! assert_eq!(customer.to_summary().describe(), "ID: 1, Name: Acme Corp, Phone: +1 (555) 123-4567");
//!
//! let err = Customer::from_json(r#"{"id": 1, "name": "A", "phone": "12345"}"#).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::MissingField);
//! # Ok::<(), customer_record::CustomerError>(())
//! ```

pub mod domain;
pub mod error;
pub mod mapping;

// Re-exports for convenience
pub use domain::entities::{Customer, CustomerSummary};
pub use domain::value_objects::{rules, Field};
pub use error::{CustomerError, CustomerResult, ErrorKind, Violation};
pub use mapping::{Mapping, UnknownKey};
