//! Customer domain entity
//!
//! A plain record for the person holding a reservation. Every attribute may
//! be unset; a freshly constructed customer has none of them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    first_name: Option<String>,
    last_name: Option<String>,
    license_number: Option<String>,
}

impl Customer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn license_number(&self) -> Option<&str> {
        self.license_number.as_deref()
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = Some(first_name.into());
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = Some(last_name.into());
    }

    pub fn set_license_number(&mut self, license_number: impl Into<String>) {
        self.license_number = Some(license_number.into());
    }

    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.set_first_name(first_name);
        self
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.set_last_name(last_name);
        self
    }

    pub fn with_license_number(mut self, license_number: impl Into<String>) -> Self {
        self.set_license_number(license_number);
        self
    }
}

impl std::fmt::Display for Customer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Customer[firstName={}, lastName={}, licenseNumber={}]",
            self.first_name().unwrap_or("-"),
            self.last_name().unwrap_or("-"),
            self.license_number().unwrap_or("-"),
        )
    }
}
