#![no_main]

use customer_record::Customer;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Customer JSON construction should never panic
        if let Ok(customer) = Customer::from_json(content) {
            // An accepted customer must survive a serialize/parse round trip
            let json = customer.to_json().expect("serializing a valid customer");
            let reparsed = Customer::from_json(&json).expect("reparsing a valid customer");
            assert_eq!(reparsed, customer);
        }
    }
});
