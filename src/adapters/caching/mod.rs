//! Cache adapters for the invoice cache port.

mod in_memory_cache;

pub use in_memory_cache::InMemoryInvoiceCache;
