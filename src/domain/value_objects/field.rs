//! Field value object - names the validated fields of a customer record

use std::fmt;

/// One of the five fields a customer record carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Name,
    Address,
    Phone,
    ContactPerson,
}

impl Field {
    /// All fields, in the order missing keys are reported
    pub const ALL: [Field; 5] = [
        Field::Id,
        Field::Name,
        Field::Address,
        Field::Phone,
        Field::ContactPerson,
    ];

    /// Fields shared with the summary projection
    pub const SUMMARY: [Field; 3] = [Field::Id, Field::Name, Field::Phone];

    /// Key used in JSON objects and mappings
    pub fn key(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::Address => "address",
            Field::Phone => "phone",
            Field::ContactPerson => "contactPerson",
        }
    }

    /// Human-readable label used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            Field::Id => "customer id",
            Field::Name => "name",
            Field::Address => "address",
            Field::Phone => "phone",
            Field::ContactPerson => "contact person",
        }
    }

    /// Parse from a mapping key
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
