//! Order snapshot and customer information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CartItem, Price};

/// Errors that can occur when validating [`CustomerInfo`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CustomerInfoError {
    /// A required field is blank.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Shipping information collected at checkout.
///
/// `name`, `email`, `phone`, and `address` are required; the remaining fields
/// are optional and default to empty strings. Validation checks presence
/// only - the checkout form performs no format validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub country: String,
}

impl CustomerInfo {
    /// Check that every required field is present.
    ///
    /// # Errors
    ///
    /// Returns the first blank required field, in form order.
    pub fn validate(&self) -> Result<(), CustomerInfoError> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("address", &self.address),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(CustomerInfoError::MissingField(field));
            }
        }
        Ok(())
    }
}

/// An immutable order snapshot produced once at checkout.
///
/// The snapshot copies the cart lines and total at the moment the order was
/// placed; it is never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Human-facing confirmation id (e.g. `SM-12345678`).
    pub confirmation_number: String,
    pub customer_info: CustomerInfo,
    pub items: Vec<CartItem>,
    pub total: Price,
    pub date: DateTime<Utc>,
}
