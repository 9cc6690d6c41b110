//! Persistence adapters for the invoice repository port.

mod in_memory_repository;

pub use in_memory_repository::InMemoryInvoiceRepository;
