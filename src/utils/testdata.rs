//! Shared test data helpers
//!
//! Generators for the payment fields gateway tests commonly need.

use chrono::{Datelike, Utc};
use rand::Rng;
use serde_json::{json, Value};

/// A valid test credit card with a randomized future expiry.
///
/// The card number is the standard Visa test PAN and never charges
/// anything real.
pub fn valid_card() -> Value {
    let mut rng = rand::rng();
    json!({
        "first_name": "Example",
        "last_name": "User",
        "number": "4111111111111111",
        "expiry_month": rng.random_range(1..=12),
        "expiry_year": Utc::now().year() + rng.random_range(1..=5),
        "cvv": rng.random_range(100..=999),
    })
}

/// A plausible billing customer.
pub fn customer() -> Value {
    json!({
        "first_name": "Example",
        "last_name": "User",
        "address_one": "123 Billing St",
        "address_two": "Billsville",
        "city": "Billstown",
        "postcode": "12345",
        "state": "CA",
        "country": "US",
        "phone": "(555) 123-4567",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_card_shape() {
        let card = valid_card();
        assert_eq!(card["number"], "4111111111111111");

        let month = card["expiry_month"].as_i64().unwrap();
        assert!((1..=12).contains(&month));

        let year = card["expiry_year"].as_i64().unwrap();
        assert!(year > i64::from(Utc::now().year()));

        let cvv = card["cvv"].as_i64().unwrap();
        assert!((100..=999).contains(&cvv));
    }

    #[test]
    fn test_customer_shape() {
        let customer = customer();
        assert_eq!(customer["country"], "US");
        assert!(customer["address_one"].is_string());
    }
}
