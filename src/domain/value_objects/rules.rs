//! Shared validation rules
//!
//! Pure functions applied identically by every constructor and setter of
//! [`CustomerSummary`](crate::domain::entities::CustomerSummary) and
//! [`Customer`](crate::domain::entities::Customer). Rules only inspect values;
//! stored values are never trimmed or normalized.
//!
//! Type checks for untyped input live in [`crate::mapping`]; by the time a
//! value reaches these functions it already has the right primitive type.

use crate::error::{CustomerError, CustomerResult, Violation};

use super::Field;

/// Minimum trimmed length of a customer name
pub const NAME_MIN_LEN: usize = 2;

/// Minimum trimmed length of an address
pub const ADDRESS_MIN_LEN: usize = 5;

/// Minimum trimmed length of a contact person
pub const CONTACT_PERSON_MIN_LEN: usize = 2;

/// Minimum number of words in a contact person (first and last name)
pub const CONTACT_PERSON_MIN_WORDS: usize = 2;

/// Minimum number of digits in a phone number
pub const PHONE_MIN_DIGITS: usize = 5;

/// Separators ignored when checking a phone number
const PHONE_SEPARATORS: [char; 4] = [' ', '(', ')', '-'];

fn reject(field: Field, violation: Violation) -> CustomerError {
    tracing::debug!(field = field.key(), %violation, "rejected field value");
    CustomerError::Range { field, violation }
}

/// Validate a customer id: must be strictly positive
pub fn validate_id(id: i64) -> CustomerResult<()> {
    if id <= 0 {
        return Err(reject(Field::Id, Violation::NotPositive));
    }
    Ok(())
}

/// Validate a text field: non-empty and at least `min_len` characters once trimmed
pub fn validate_text_field(value: &str, min_len: usize, field: Field) -> CustomerResult<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(reject(field, Violation::Empty));
    }
    if trimmed.chars().count() < min_len {
        return Err(reject(field, Violation::TooShort { min: min_len }));
    }
    Ok(())
}

/// Validate a customer name
pub fn validate_name(name: &str) -> CustomerResult<()> {
    validate_text_field(name, NAME_MIN_LEN, Field::Name)
}

/// Validate a postal address
pub fn validate_address(address: &str) -> CustomerResult<()> {
    validate_text_field(address, ADDRESS_MIN_LEN, Field::Address)
}

/// Validate a phone number
///
/// Spaces, parentheses and hyphens are ignored, as is a single leading `+`.
/// Everything left must be an ASCII digit, and there must be at least
/// [`PHONE_MIN_DIGITS`] of them.
pub fn validate_phone(phone: &str) -> CustomerResult<()> {
    let cleaned: String = phone
        .chars()
        .filter(|c| !PHONE_SEPARATORS.contains(c))
        .collect();
    let digits = cleaned.strip_prefix('+').unwrap_or(&cleaned);

    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(reject(Field::Phone, Violation::InvalidCharacters));
    }
    if digits.len() < PHONE_MIN_DIGITS {
        return Err(reject(
            Field::Phone,
            Violation::TooFewDigits {
                min: PHONE_MIN_DIGITS,
            },
        ));
    }
    Ok(())
}

/// Validate a contact person: a text field that also needs a first and last name
pub fn validate_contact_person(contact_person: &str) -> CustomerResult<()> {
    validate_text_field(contact_person, CONTACT_PERSON_MIN_LEN, Field::ContactPerson)?;
    if contact_person.split_whitespace().count() < CONTACT_PERSON_MIN_WORDS {
        return Err(reject(
            Field::ContactPerson,
            Violation::TooFewTokens {
                min: CONTACT_PERSON_MIN_WORDS,
            },
        ));
    }
    Ok(())
}
