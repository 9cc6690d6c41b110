//! In-Memory Invoice Repository
//!
//! Stores invoices in a map keyed by id. Useful for demos and tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::InvoiceId;
use crate::domain::invoice::Invoice;
use crate::ports::{AdapterError, InvoiceRepository};

/// In-memory storage for invoices
#[derive(Debug, Clone, Default)]
pub struct InMemoryInvoiceRepository {
    invoices: Arc<RwLock<BTreeMap<InvoiceId, Invoice>>>,
}

impl InMemoryInvoiceRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored invoices
    pub async fn len(&self) -> usize {
        self.invoices.read().await.len()
    }

    /// Check whether nothing has been saved yet
    pub async fn is_empty(&self) -> bool {
        self.invoices.read().await.is_empty()
    }

    /// Clear all stored invoices (useful for tests)
    pub async fn clear(&self) {
        self.invoices.write().await.clear();
    }
}

#[async_trait]
impl InvoiceRepository for InMemoryInvoiceRepository {
    async fn save(&self, invoice: &Invoice) -> Result<(), AdapterError> {
        let mut invoices = self.invoices.write().await;
        if invoices.insert(invoice.id(), invoice.clone()).is_some() {
            tracing::debug!(invoice_id = %invoice.id(), "Replaced existing invoice");
        }
        Ok(())
    }

    async fn find_unpaid(&self) -> Result<Vec<Invoice>, AdapterError> {
        let invoices = self.invoices.read().await;
        Ok(invoices
            .values()
            .filter(|invoice| invoice.is_unpaid())
            .cloned()
            .collect())
    }
}
