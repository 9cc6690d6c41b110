//! Invoice repository port.
//!
//! Persistence contract used by the invoice service. Implementations own
//! the storage technology and the meaning of "unpaid" filtering.

use async_trait::async_trait;

use super::AdapterError;
use crate::domain::invoice::Invoice;

/// Repository port for invoice persistence.
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    /// Persist an invoice.
    ///
    /// # Errors
    ///
    /// - `AdapterError` of kind `Persistence` on storage failure
    async fn save(&self, invoice: &Invoice) -> Result<(), AdapterError>;

    /// Return every stored invoice whose status is `UNPAID`.
    async fn find_unpaid(&self) -> Result<Vec<Invoice>, AdapterError>;
}
