//! Map-backed invoice cache.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::InvoiceId;
use crate::domain::invoice::Invoice;
use crate::ports::{AdapterError, InvoiceCache};

/// Unbounded in-process cache. Entries are never evicted.
#[derive(Debug, Clone, Default)]
pub struct InMemoryInvoiceCache {
    entries: Arc<RwLock<HashMap<InvoiceId, Invoice>>>,
}

impl InMemoryInvoiceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of cached invoices
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl InvoiceCache for InMemoryInvoiceCache {
    async fn put(&self, invoice: &Invoice) -> Result<(), AdapterError> {
        self.entries
            .write()
            .await
            .insert(invoice.id(), invoice.clone());
        Ok(())
    }

    async fn get(&self, id: InvoiceId) -> Result<Option<Invoice>, AdapterError> {
        Ok(self.entries.read().await.get(&id).cloned())
    }
}
