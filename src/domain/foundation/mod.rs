//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the invoice domain.

mod errors;
mod ids;
mod money;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use ids::{InvoiceId, PoolId};
pub use money::Money;
pub use timestamp::Timestamp;
