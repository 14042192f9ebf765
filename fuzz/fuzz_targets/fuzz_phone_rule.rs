#![no_main]

use customer_record::{rules, CustomerSummary};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(phone) = std::str::from_utf8(data) {
        // Constructor and rule must agree on every phone
        let accepted = rules::validate_phone(phone).is_ok();
        let built = CustomerSummary::new(1, "Acme", phone).is_ok();
        assert_eq!(accepted, built);
    }
});
