//! Fixed-size resource pooling.
//!
//! A [`ResourcePool`] allocates all of its resources up front and hands
//! them out as [`PooledResource`] leases. Acquisition never blocks: an
//! exhausted pool returns `None` and the caller decides whether to retry.

mod connection;
mod errors;
mod resource_pool;

pub use connection::DatabaseConnection;
pub use errors::ReleaseError;
pub use resource_pool::{PooledResource, ResourcePool};
