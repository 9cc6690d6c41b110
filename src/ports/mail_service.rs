//! Notification port.

use async_trait::async_trait;

use super::AdapterError;
use crate::domain::invoice::Invoice;

/// Sends invoice notifications to customers.
#[async_trait]
pub trait MailService: Send + Sync {
    /// Announce that an invoice was created.
    async fn send_invoice_created(&self, invoice: &Invoice) -> Result<(), AdapterError>;
}
