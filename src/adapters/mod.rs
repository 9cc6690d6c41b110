//! Adapters - Implementations of port interfaces.
//!
//! - `persistence` - Invoice repository (in-memory)
//! - `caching` - Invoice cache (in-memory)
//! - `notification` - Mail service (console)
//! - `security` - Token service (static)

pub mod caching;
pub mod notification;
pub mod persistence;
pub mod security;

pub use caching::InMemoryInvoiceCache;
pub use notification::ConsoleMailService;
pub use persistence::InMemoryInvoiceRepository;
pub use security::StaticTokenService;
