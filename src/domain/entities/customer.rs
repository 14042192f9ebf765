//! Customer entity - the full customer record
//!
//! A `Customer` owns a [`CustomerSummary`] for its id, name and phone, and
//! adds an address and a contact person. [`Customer::to_summary`] hands out an
//! independent copy of that summary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{rules, Field};
use crate::error::{CustomerError, CustomerResult};
use crate::mapping::{self, Mapping, UnknownKey};

use super::CustomerSummary;

/// A validated customer record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Mapping", rename_all = "camelCase")]
pub struct Customer {
    #[serde(flatten)]
    summary: CustomerSummary,
    address: String,
    contact_person: String,
}

impl Customer {
    /// Create a customer.
    ///
    /// Fields are checked in the order address, contact person, id, name,
    /// phone; the first failure is returned and nothing is built.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
        contact_person: impl Into<String>,
    ) -> CustomerResult<Self> {
        let address = address.into();
        let contact_person = contact_person.into();

        rules::validate_address(&address)?;
        rules::validate_contact_person(&contact_person)?;
        let summary = CustomerSummary::new(id, name, phone)?;

        Ok(Self {
            summary,
            address,
            contact_person,
        })
    }

    /// Create a customer from a JSON object.
    ///
    /// All of `id`, `name`, `address`, `phone` and `contactPerson` must be
    /// present; otherwise every absent key is reported before any field is
    /// validated. Extra keys are ignored.
    pub fn from_mapping(map: &Mapping) -> CustomerResult<Self> {
        mapping::require_fields(map, &Field::ALL)?;

        let address = mapping::checked_text(map, Field::Address, rules::validate_address)?;
        let contact_person =
            mapping::checked_text(map, Field::ContactPerson, rules::validate_contact_person)?;
        let summary = CustomerSummary::from_mapping(map)?;

        Ok(Self {
            summary,
            address: address.to_string(),
            contact_person: contact_person.to_string(),
        })
    }

    /// Create a customer from JSON text holding a single object
    pub fn from_json(text: &str) -> CustomerResult<Self> {
        let map = mapping::parse_object(text)?;
        Self::from_mapping(&map)
    }

    /// Like [`Customer::from_json`], also returning the keys that were ignored
    pub fn from_json_with_warnings(text: &str) -> CustomerResult<(Self, Vec<UnknownKey>)> {
        let map = mapping::parse_object(text)?;
        let customer = Self::from_mapping(&map)?;
        let unknown = mapping::unknown_keys(&map);
        Ok((customer, unknown))
    }

    pub fn id(&self) -> i64 {
        self.summary.id()
    }

    pub fn name(&self) -> &str {
        self.summary.name()
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn phone(&self) -> &str {
        self.summary.phone()
    }

    pub fn contact_person(&self) -> &str {
        &self.contact_person
    }

    pub fn set_id(&mut self, id: i64) -> CustomerResult<()> {
        self.summary.set_id(id)
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> CustomerResult<()> {
        self.summary.set_name(name)
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) -> CustomerResult<()> {
        self.summary.set_phone(phone)
    }

    /// Replace the address; on error the customer is unchanged
    pub fn set_address(&mut self, address: impl Into<String>) -> CustomerResult<()> {
        let address = address.into();
        rules::validate_address(&address)?;
        self.address = address;
        Ok(())
    }

    /// Replace the contact person; on error the customer is unchanged
    pub fn set_contact_person(&mut self, contact_person: impl Into<String>) -> CustomerResult<()> {
        let contact_person = contact_person.into();
        rules::validate_contact_person(&contact_person)?;
        self.contact_person = contact_person;
        Ok(())
    }

    /// Project down to an independent summary of id, name and phone
    pub fn to_summary(&self) -> CustomerSummary {
        self.summary.clone()
    }

    /// Summary description followed by address and contact person
    pub fn describe(&self) -> String {
        format!(
            "{}, Address: {}, Contact: {}",
            self.summary.describe(),
            self.address,
            self.contact_person
        )
    }

    /// Serialize to a JSON object string
    pub fn to_json(&self) -> CustomerResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

impl TryFrom<Mapping> for Customer {
    type Error = CustomerError;

    fn try_from(map: Mapping) -> Result<Self, Self::Error> {
        Self::from_mapping(&map)
    }
}

impl FromStr for Customer {
    type Err = CustomerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s)
    }
}
