//! Property tests for the shared field rules.

use proptest::prelude::*;

use customer_record::{Customer, CustomerSummary, ErrorKind, Field};

pub fn valid_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z &.]{0,20}[A-Za-z.]").unwrap()
}

pub fn valid_phone() -> impl Strategy<Value = String> {
    // Optional leading '+', separators anywhere, at least five digits.
    proptest::string::string_regex("\\+?[ ()\\-]{0,3}[0-9]{5,12}[ ()\\-]{0,3}[0-9]{0,4}").unwrap()
}

pub fn valid_address() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[0-9]{1,4} [A-Za-z]{4,16}( Street| Ave)?").unwrap()
}

pub fn valid_contact() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z]{1,10} [A-Za-z]{1,12}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Valid summary input is accepted and stored exactly as given.
    #[test]
    fn property_valid_summary_stored_verbatim(
        id in 1..=i64::MAX,
        name in valid_name(),
        phone in valid_phone(),
    ) {
        let summary = CustomerSummary::new(id, name.clone(), phone.clone());
        prop_assert!(summary.is_ok(), "rejected {id} {name:?} {phone:?}: {summary:?}");
        let summary = summary.unwrap();
        prop_assert_eq!(summary.id(), id);
        prop_assert_eq!(summary.name(), name.as_str());
        prop_assert_eq!(summary.phone(), phone.as_str());
    }

    /// PROPERTY: Zero and negative ids are always range errors on the id field.
    #[test]
    fn property_non_positive_id_rejected(id in i64::MIN..=0) {
        let err = CustomerSummary::new(id, "Acme", "12345").unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Range);
        prop_assert_eq!(err.field(), Some(Field::Id));
    }

    /// PROPERTY: A letter anywhere in a phone number is rejected.
    #[test]
    fn property_phone_with_letter_rejected(
        digits in "[0-9]{5,12}",
        letter in "[A-Za-z]",
        position in 0usize..12,
    ) {
        let at = position.min(digits.len());
        let phone = format!("{}{}{}", &digits[..at], letter, &digits[at..]);
        let err = CustomerSummary::new(1, "Acme", phone).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Range);
        prop_assert_eq!(err.field(), Some(Field::Phone));
    }

    /// PROPERTY: Fewer than five digits is rejected, whatever the separators.
    #[test]
    fn property_short_phone_rejected(phone in "[ ()\\-]{0,3}[0-9]{0,4}[ ()\\-]{0,3}") {
        let err = CustomerSummary::new(1, "Acme", phone).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Range);
    }

    /// PROPERTY: A one-word contact person is never accepted.
    #[test]
    fn property_single_word_contact_rejected(
        word in "[A-Za-z]{1,12}",
        pad in " {0,3}",
    ) {
        let contact = format!("{pad}{word}{pad}");
        let err = Customer::new(1, "Acme", "123 Main Street", "12345", contact).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Range);
        prop_assert_eq!(err.field(), Some(Field::ContactPerson));
    }

    /// PROPERTY: The summary projection equals a summary rebuilt from the accessors.
    #[test]
    fn property_projection_matches_rebuilt_summary(
        id in 1..=i64::MAX,
        name in valid_name(),
        address in valid_address(),
        phone in valid_phone(),
        contact in valid_contact(),
    ) {
        let customer = Customer::new(id, name, address, phone, contact).unwrap();
        let rebuilt = CustomerSummary::new(customer.id(), customer.name(), customer.phone()).unwrap();
        prop_assert_eq!(customer.to_summary(), rebuilt);
    }
}
