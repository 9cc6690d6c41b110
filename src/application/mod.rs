//! Application layer - Use-case orchestration.
//!
//! This layer coordinates domain types and ports. It depends only on port
//! traits, never on concrete adapters.

mod invoice_service;

pub use invoice_service::InvoiceService;
