//! Domain layer containing business types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, money, timestamps, errors)
//! - `invoice` - Invoice entity and status

pub mod foundation;
pub mod invoice;
