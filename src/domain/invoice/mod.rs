//! Invoice domain module.
//!
//! Holds the `Invoice` entity and its status value object. Nothing here
//! depends on ports or adapters.

mod aggregate;
mod status;

pub use aggregate::Invoice;
pub use status::InvoiceStatus;
