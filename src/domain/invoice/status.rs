//! Invoice status value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Lifecycle status of an invoice.
///
/// The set of statuses is open: any non-blank label is accepted. Only
/// [`InvoiceStatus::UNPAID`] carries meaning for queries, and it is matched
/// by exact, case-sensitive comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InvoiceStatus(String);

impl InvoiceStatus {
    pub const UNPAID: &'static str = "UNPAID";
    pub const PAID: &'static str = "PAID";

    /// Creates a status from a raw label.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the label is empty or whitespace only
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ValidationError::empty_field("status"));
        }
        Ok(Self(raw))
    }

    pub fn unpaid() -> Self {
        Self(Self::UNPAID.to_string())
    }

    pub fn paid() -> Self {
        Self(Self::PAID.to_string())
    }

    /// Returns the raw label.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this is exactly the `UNPAID` status.
    pub fn is_unpaid(&self) -> bool {
        self.0 == Self::UNPAID
    }
}

impl TryFrom<String> for InvoiceStatus {
    type Error = ValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<InvoiceStatus> for String {
    fn from(status: InvoiceStatus) -> Self {
        status.0
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
