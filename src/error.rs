//! Error types for customer records
//!
//! Uses `thiserror` for library errors. Every constructor and setter returns
//! [`CustomerResult`], so a rejected value never leaves a record half-built.

use std::fmt;

use thiserror::Error;

use crate::domain::value_objects::Field;

/// Result type alias for customer record operations
pub type CustomerResult<T> = Result<T, CustomerError>;

/// Coarse classification of a [`CustomerError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Value has the wrong primitive type (not an integer, not a string)
    Type,
    /// Value has the right type but breaks a length, sign, digit or word constraint
    Range,
    /// Mapping construction is missing one or more required keys
    MissingField,
    /// Text could not be parsed as a JSON object
    Format,
}

/// The constraint a well-typed value failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    /// Integer was zero or negative
    NotPositive,
    /// Integer does not fit the supported range
    OutOfRange,
    /// Text is empty after trimming
    Empty,
    /// Text is shorter than `min` characters after trimming
    TooShort { min: usize },
    /// Phone contains something other than digits and separators
    InvalidCharacters,
    /// Phone has fewer than `min` digits
    TooFewDigits { min: usize },
    /// Text has fewer than `min` whitespace-separated words
    TooFewTokens { min: usize },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::NotPositive => write!(f, "must be a positive number"),
            Violation::OutOfRange => write!(f, "is out of the supported range"),
            Violation::Empty => write!(f, "must not be empty"),
            Violation::TooShort { min } => {
                write!(f, "must contain at least {} characters", min)
            }
            Violation::InvalidCharacters => {
                write!(
                    f,
                    "may only contain digits, spaces, parentheses, hyphens and a leading +"
                )
            }
            Violation::TooFewDigits { min } => write!(f, "must contain at least {} digits", min),
            Violation::TooFewTokens { min } => write!(f, "must contain at least {} words", min),
        }
    }
}

/// Main error type for customer record operations
#[derive(Error, Debug)]
pub enum CustomerError {
    /// Field value has the wrong type
    #[error("{field} must be {expected}")]
    Type { field: Field, expected: &'static str },

    /// Field value breaks a range constraint
    #[error("{field} {violation}")]
    Range { field: Field, violation: Violation },

    /// Required keys absent from a mapping
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// JSON text could not be parsed
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON text parsed, but not to an object
    #[error("invalid JSON: expected an object, found {found}")]
    NotAnObject { found: &'static str },
}

impl CustomerError {
    /// Classify the error into one of the four failure kinds
    pub fn kind(&self) -> ErrorKind {
        match self {
            CustomerError::Type { .. } => ErrorKind::Type,
            CustomerError::Range { .. } => ErrorKind::Range,
            CustomerError::MissingFields(_) => ErrorKind::MissingField,
            CustomerError::Json(_) | CustomerError::NotAnObject { .. } => ErrorKind::Format,
        }
    }

    /// The field that failed validation, if the error concerns a single field
    pub fn field(&self) -> Option<Field> {
        match self {
            CustomerError::Type { field, .. } | CustomerError::Range { field, .. } => Some(*field),
            _ => None,
        }
    }

    /// The missing keys, for `MissingFields` errors
    pub fn missing_fields(&self) -> &[String] {
        match self {
            CustomerError::MissingFields(keys) => keys,
            _ => &[],
        }
    }
}
