//! Construction contracts (BUILD-001 through BUILD-003)

use customer_record::{Customer, CustomerSummary, ErrorKind, Field, Violation};

/// CONTRACT BUILD-001: A valid customer is built and described in full
mod valid_customer {
    use super::*;

    #[test]
    fn contract_valid_customer_describes_all_fields() {
        let customer = Customer::new(
            1,
            "Acme Corp",
            "123 Main Street",
            "+1 (555) 123-4567",
            "John Smith",
        )
        .expect("customer should be valid");

        assert_eq!(
            customer.describe(),
            "ID: 1, Name: Acme Corp, Phone: +1 (555) 123-4567, Address: 123 Main Street, Contact: John Smith"
        );
    }

    #[test]
    fn contract_summary_keeps_input_untrimmed() {
        let summary = CustomerSummary::new(42, " Initech ", "(01) 234-56").unwrap();
        assert_eq!(summary.id(), 42);
        assert_eq!(summary.name(), " Initech ");
        assert_eq!(summary.phone(), "(01) 234-56");
    }
}

/// CONTRACT BUILD-002: Invalid input fails with the documented error kind
///
/// Prevents: a record existing with a field that never passed its rule.
mod invalid_input {
    use super::*;

    fn summary_error(id: i64, name: &str, phone: &str) -> (ErrorKind, Option<Field>) {
        let err = CustomerSummary::new(id, name, phone).unwrap_err();
        (err.kind(), err.field())
    }

    #[test]
    fn contract_non_positive_id_is_range_error() {
        assert_eq!(summary_error(0, "Acme", "12345"), (ErrorKind::Range, Some(Field::Id)));
        assert_eq!(summary_error(-1, "Acme", "12345"), (ErrorKind::Range, Some(Field::Id)));
    }

    #[test]
    fn contract_short_names_are_range_errors() {
        assert_eq!(summary_error(1, "", "12345"), (ErrorKind::Range, Some(Field::Name)));
        assert_eq!(summary_error(1, "A", "12345"), (ErrorKind::Range, Some(Field::Name)));
    }

    #[test]
    fn contract_bad_phones_are_range_errors() {
        assert_eq!(summary_error(1, "Acme", "12a45"), (ErrorKind::Range, Some(Field::Phone)));
        assert_eq!(summary_error(1, "Acme", "1-2-3"), (ErrorKind::Range, Some(Field::Phone)));
    }

    #[test]
    fn contract_single_word_contact_is_rejected() {
        let err = Customer::new(1, "Acme Corp", "123 Main Street", "555-1234", "John").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(err.field(), Some(Field::ContactPerson));
        assert!(matches!(
            err,
            customer_record::CustomerError::Range {
                violation: Violation::TooFewTokens { min: 2 },
                ..
            }
        ));
    }
}

/// CONTRACT BUILD-003: Setters re-run validation and never partially apply
mod atomic_updates {
    use super::*;

    #[test]
    fn contract_rejected_update_leaves_record_unchanged() {
        let original =
            Customer::new(5, "Globex", "42 Evergreen Terrace", "555 0199", "Hank Scorpio").unwrap();
        let mut customer = original.clone();

        assert!(customer.set_address("   ").is_err());
        assert!(customer.set_contact_person("Hank").is_err());
        assert!(customer.set_id(-5).is_err());
        assert!(customer.set_name("G").is_err());
        assert!(customer.set_phone("555").is_err());

        assert_eq!(customer, original);
    }
}
