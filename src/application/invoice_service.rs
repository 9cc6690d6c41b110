//! InvoiceService - Use-case orchestrator for invoices.
//!
//! Coordinates the invoice workflow over the four ports. It holds no state
//! of its own beyond the port handles set at construction.

use std::sync::Arc;

use crate::domain::invoice::Invoice;
use crate::ports::{AdapterError, InvoiceCache, InvoiceRepository, MailService, TokenService};

/// Orchestrates invoice creation, querying and API token issuing.
pub struct InvoiceService {
    repository: Arc<dyn InvoiceRepository>,
    cache: Arc<dyn InvoiceCache>,
    mail: Arc<dyn MailService>,
    tokens: Arc<dyn TokenService>,
}

impl InvoiceService {
    pub fn new(
        repository: Arc<dyn InvoiceRepository>,
        cache: Arc<dyn InvoiceCache>,
        mail: Arc<dyn MailService>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            repository,
            cache,
            mail,
            tokens,
        }
    }

    /// Persist, cache, then announce a new invoice.
    ///
    /// Steps run strictly in that order. The first failing step's error is
    /// returned as-is; earlier steps are not undone and later ones are skipped.
    pub async fn create_invoice(&self, invoice: &Invoice) -> Result<(), AdapterError> {
        let invoice_id = invoice.id();

        // 1. Persist
        self.repository.save(invoice).await?;
        tracing::debug!(%invoice_id, "Invoice saved");

        // 2. Cache
        self.cache.put(invoice).await?;
        tracing::debug!(%invoice_id, "Invoice cached");

        // 3. Notify
        self.mail.send_invoice_created(invoice).await?;
        tracing::debug!(%invoice_id, "Invoice notification sent");

        Ok(())
    }

    /// All invoices the repository considers unpaid.
    pub async fn list_unpaid(&self) -> Result<Vec<Invoice>, AdapterError> {
        self.repository.find_unpaid().await
    }

    /// Issue an API token for `client_id`, unvalidated.
    pub async fn issue_api_token(&self, client_id: &str) -> Result<String, AdapterError> {
        self.tokens.issue_token(client_id).await
    }
}
