//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the invoice service and the outside world. Adapters implement these ports.
//!
//! - `InvoiceRepository` - Invoice persistence
//! - `InvoiceCache` - Invoice lookup cache
//! - `MailService` - Customer notification
//! - `TokenService` - API token issuing
//!
//! Every port reports failures as a single [`AdapterError`] kind.

mod adapter_error;
mod invoice_cache;
mod invoice_repository;
mod mail_service;
mod token_service;

pub use adapter_error::{AdapterError, AdapterKind, BoxError};
pub use invoice_cache::InvoiceCache;
pub use invoice_repository::InvoiceRepository;
pub use mail_service::MailService;
pub use token_service::TokenService;
