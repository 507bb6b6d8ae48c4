//! Test fixtures
//!
//! Factory functions for customers with sensible defaults.

use crate::domain::entities::Customer;

pub const TEST_CUSTOMER_NAME: &str = "Alice";

/// Create a fully populated test customer
pub fn test_customer() -> Customer {
    test_customer_named(TEST_CUSTOMER_NAME)
}

/// Create a test customer with a specific first name
pub fn test_customer_named(first_name: &str) -> Customer {
    Customer::new()
        .with_first_name(first_name)
        .with_last_name("Smith")
        .with_license_number(format!("LIC-{}", first_name.to_uppercase()))
}

/// The stand-in customer handed out by substituted collaborators
pub fn mock_alice() -> Customer {
    Customer::new()
        .with_first_name("Mock-Alice")
        .with_license_number("Mock-License")
}
