//! Invoice entity.
//!
//! A pure data holder: it knows nothing about persistence, caching or
//! notification. Once built it is never mutated.

use serde::{Deserialize, Serialize};

use super::InvoiceStatus;
use crate::domain::foundation::{InvoiceId, Money, Timestamp, ValidationError};

/// Billing record for a single invoice.
///
/// # Invariants
///
/// - All fields are fixed at construction
/// - `status` is never blank
/// - `amount` sign is not checked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    id: InvoiceId,
    amount: Money,
    status: InvoiceStatus,
    created_at: Timestamp,
}

impl Invoice {
    /// Creates an invoice from already-validated parts.
    pub fn new(id: InvoiceId, amount: Money, status: InvoiceStatus, created_at: Timestamp) -> Self {
        Self {
            id,
            amount,
            status,
            created_at,
        }
    }

    /// Creates an `UNPAID` invoice stamped with the current time.
    pub fn unpaid(id: InvoiceId, amount: Money) -> Self {
        Self::new(id, amount, InvoiceStatus::unpaid(), Timestamp::now())
    }

    /// Creates an invoice from raw input, validating amount and status.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if `amount` is not a decimal number
    /// - `EmptyField` if `amount` or `status` is blank
    pub fn from_raw(
        id: i64,
        amount: &str,
        status: &str,
        created_at: Timestamp,
    ) -> Result<Self, ValidationError> {
        Ok(Self::new(
            InvoiceId::new(id),
            Money::parse(amount)?,
            InvoiceStatus::new(status)?,
            created_at,
        ))
    }

    pub fn id(&self) -> InvoiceId {
        self.id
    }

    pub fn amount(&self) -> &Money {
        &self.amount
    }

    pub fn status(&self) -> &InvoiceStatus {
        &self.status
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns true if the invoice still awaits payment.
    pub fn is_unpaid(&self) -> bool {
        self.status.is_unpaid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fixed_time() -> Timestamp {
        Timestamp::from_unix_secs(1_705_276_800).unwrap()
    }

    #[test]
    fn unpaid_constructor_sets_status() {
        let invoice = Invoice::unpaid(InvoiceId::new(1), Money::parse("42.50").unwrap());
        assert!(invoice.is_unpaid());
        assert_eq!(invoice.status().as_str(), "UNPAID");
    }

    #[test]
    fn from_raw_builds_invoice() {
        let invoice = Invoice::from_raw(7, "19.99", "PAID", fixed_time()).unwrap();
        assert_eq!(invoice.id(), InvoiceId::new(7));
        assert_eq!(invoice.amount().to_string(), "19.99");
        assert!(!invoice.is_unpaid());
        assert_eq!(invoice.created_at(), &fixed_time());
    }

    #[test]
    fn from_raw_rejects_blank_status() {
        let result = Invoice::from_raw(1, "1.00", "", fixed_time());
        assert_eq!(result, Err(ValidationError::empty_field("status")));
    }

    #[test]
    fn from_raw_rejects_bad_amount() {
        let result = Invoice::from_raw(1, "12,00", "UNPAID", fixed_time());
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }

    #[test]
    fn serializes_and_deserializes_json() {
        let invoice = Invoice::from_raw(3, "100.00", "UNPAID", fixed_time()).unwrap();
        let json = serde_json::to_string(&invoice).unwrap();
        let restored: Invoice = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, invoice);
    }

    proptest! {
        #[test]
        fn fields_read_back_exactly(
            id in any::<i64>(),
            units in any::<i64>(),
            scale in 0u32..=6,
            status in "[A-Z_]{1,12}",
            secs in 0i64..4_102_444_800,
        ) {
            let amount = Money::from_minor_units(units, scale).unwrap();
            let status = InvoiceStatus::new(status.clone()).unwrap();
            let created_at = Timestamp::from_unix_secs(secs).unwrap();

            let invoice = Invoice::new(InvoiceId::new(id), amount, status.clone(), created_at);

            prop_assert_eq!(invoice.id().value(), id);
            prop_assert_eq!(invoice.amount(), &amount);
            prop_assert_eq!(invoice.amount().as_decimal().scale(), scale);
            prop_assert_eq!(invoice.status(), &status);
            prop_assert_eq!(invoice.created_at(), &created_at);
        }
    }
}
