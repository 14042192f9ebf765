//! CustomerSummary entity - the minimal identity of a customer
//!
//! Carries id, name and phone. Every instance has passed the shared rules in
//! [`rules`]; setters re-run the same rule before touching a field.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{rules, Field};
use crate::error::{CustomerError, CustomerResult};
use crate::mapping::{self, Mapping};

/// Validated id, name and phone of a customer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Mapping")]
pub struct CustomerSummary {
    id: i64,
    name: String,
    phone: String,
}

impl CustomerSummary {
    /// Create a summary, checking id, then name, then phone
    pub fn new(
        id: i64,
        name: impl Into<String>,
        phone: impl Into<String>,
    ) -> CustomerResult<Self> {
        let name = name.into();
        let phone = phone.into();

        rules::validate_id(id)?;
        rules::validate_name(&name)?;
        rules::validate_phone(&phone)?;

        Ok(Self { id, name, phone })
    }

    /// Create a summary from a JSON object with keys `id`, `name` and `phone`
    pub fn from_mapping(map: &Mapping) -> CustomerResult<Self> {
        mapping::require_fields(map, &Field::SUMMARY)?;

        let id = mapping::integer_field(map, Field::Id)?;
        rules::validate_id(id)?;
        let name = mapping::checked_text(map, Field::Name, rules::validate_name)?;
        let phone = mapping::checked_text(map, Field::Phone, rules::validate_phone)?;

        Ok(Self {
            id,
            name: name.to_string(),
            phone: phone.to_string(),
        })
    }

    /// Get the customer id
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Get the customer name, exactly as given
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the phone number, exactly as given
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Replace the id; on error the summary is unchanged
    pub fn set_id(&mut self, id: i64) -> CustomerResult<()> {
        rules::validate_id(id)?;
        self.id = id;
        Ok(())
    }

    /// Replace the name; on error the summary is unchanged
    pub fn set_name(&mut self, name: impl Into<String>) -> CustomerResult<()> {
        let name = name.into();
        rules::validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Replace the phone; on error the summary is unchanged
    pub fn set_phone(&mut self, phone: impl Into<String>) -> CustomerResult<()> {
        let phone = phone.into();
        rules::validate_phone(&phone)?;
        self.phone = phone;
        Ok(())
    }

    /// Copy of this summary with a different id
    pub fn with_id(&self, id: i64) -> CustomerResult<Self> {
        let mut next = self.clone();
        next.set_id(id)?;
        Ok(next)
    }

    /// Copy of this summary with a different name
    pub fn with_name(&self, name: impl Into<String>) -> CustomerResult<Self> {
        let mut next = self.clone();
        next.set_name(name)?;
        Ok(next)
    }

    /// Copy of this summary with a different phone
    pub fn with_phone(&self, phone: impl Into<String>) -> CustomerResult<Self> {
        let mut next = self.clone();
        next.set_phone(phone)?;
        Ok(next)
    }

    /// Human-readable one-line description
    pub fn describe(&self) -> String {
        format!("ID: {}, Name: {}, Phone: {}", self.id, self.name, self.phone)
    }

    /// Serialize to a JSON object string
    pub fn to_json(&self) -> CustomerResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for CustomerSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

impl TryFrom<Mapping> for CustomerSummary {
    type Error = CustomerError;

    fn try_from(map: Mapping) -> Result<Self, Self::Error> {
        Self::from_mapping(&map)
    }
}
