//! Invoice cache port.
//!
//! A seam for read-through caching of invoices by id. In-memory, Redis or
//! stub implementations can sit behind it.

use async_trait::async_trait;

use super::AdapterError;
use crate::domain::foundation::InvoiceId;
use crate::domain::invoice::Invoice;

#[async_trait]
pub trait InvoiceCache: Send + Sync {
    /// Store an invoice under its id, replacing any previous entry.
    async fn put(&self, invoice: &Invoice) -> Result<(), AdapterError>;

    /// Look up an invoice by id.
    ///
    /// Returns `None` on a cache miss.
    async fn get(&self, id: InvoiceId) -> Result<Option<Invoice>, AdapterError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoice_cache_is_object_safe() {
        fn _accepts_dyn(_cache: &dyn InvoiceCache) {}
    }
}
