//! Console "mail" adapter.
//!
//! Writes notifications to stdout instead of sending email. Swap in a real
//! SMTP adapter behind the same port when one is needed.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::config::NotificationConfig;
use crate::domain::invoice::Invoice;
use crate::ports::{AdapterError, MailService};

/// Mail service that prints to stdout.
#[derive(Debug, Clone)]
pub struct ConsoleMailService {
    from: String,
    sent: Arc<AtomicUsize>,
}

impl ConsoleMailService {
    /// Creates a console mailer with the given "From" header.
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            sent: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn from_config(config: &NotificationConfig) -> Self {
        Self::new(config.from_header())
    }

    /// Formats the line printed for a created invoice.
    pub fn format_invoice_created(invoice: &Invoice) -> String {
        format!(
            "[MAIL] Invoice {} created for ${}",
            invoice.id(),
            invoice.amount()
        )
    }

    /// Number of notifications written so far.
    pub fn sent_count(&self) -> usize {
        self.sent.load(Ordering::SeqCst)
    }
}

impl Default for ConsoleMailService {
    fn default() -> Self {
        Self::from_config(&NotificationConfig::default())
    }
}

#[async_trait]
impl MailService for ConsoleMailService {
    async fn send_invoice_created(&self, invoice: &Invoice) -> Result<(), AdapterError> {
        println!("{}", Self::format_invoice_created(invoice));
        tracing::info!(
            from = %self.from,
            invoice_id = %invoice.id(),
            amount = %invoice.amount(),
            "Invoice notification written to console"
        );
        self.sent.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
