//! Fixed-point monetary amount.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Monetary amount backed by a fixed-point decimal.
///
/// Sign is not checked; amounts are non-negative by convention only.
/// The scale given at construction is preserved, so `42.50` displays as
/// `42.50` rather than `42.5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Wraps an existing decimal.
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Builds an amount from integer minor units (e.g. cents) and a scale.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` if `scale` exceeds the 28 digits a decimal
    /// can hold.
    pub fn from_minor_units(units: i64, scale: u32) -> Result<Self, ValidationError> {
        Decimal::try_new(units, scale)
            .map(Self)
            .map_err(|e| ValidationError::invalid_format("amount", e.to_string()))
    }

    /// Parses a decimal string such as `"42.50"`.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("amount"));
        }
        Decimal::from_str(trimmed)
            .map(Self)
            .map_err(|e| ValidationError::invalid_format("amount", e.to_string()))
    }

    /// Returns the inner decimal.
    pub fn as_decimal(&self) -> &Decimal {
        &self.0
    }

    /// Returns true if the amount is below zero.
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
