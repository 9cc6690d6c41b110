//! Invoice Hub - Invoice workflow in a ports-and-adapters layout
//!
//! The invoice service persists, caches and announces invoices through
//! swappable ports. A separate fixed-size resource pool hands out reusable
//! resources under a single lock.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod pool;
pub mod ports;
pub mod telemetry;
