//! Resource pool error types.

use std::error::Error;
use std::fmt;

use super::PooledResource;
use crate::domain::foundation::PoolId;

/// A lease was released into a pool that did not mint it.
///
/// Running out of resources is not an error; `acquire` reports it as `None`.
/// The rejected lease is carried back so the caller can still return it to
/// its own pool.
pub struct ReleaseError<R> {
    pool: PoolId,
    lease: PooledResource<R>,
}

impl<R> ReleaseError<R> {
    pub(crate) fn foreign(pool: PoolId, lease: PooledResource<R>) -> Self {
        Self { pool, lease }
    }

    /// Pool the release was attempted against.
    pub fn pool(&self) -> PoolId {
        self.pool
    }

    /// Pool that actually owns the lease.
    pub fn lease_pool(&self) -> PoolId {
        self.lease.pool_id()
    }

    /// Recover the rejected lease.
    pub fn into_lease(self) -> PooledResource<R> {
        self.lease
    }
}

impl<R> fmt::Debug for ReleaseError<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReleaseError")
            .field("pool", &self.pool)
            .field("lease", &self.lease)
            .finish()
    }
}

impl<R> fmt::Display for ReleaseError<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Resource from pool {} released into pool {}",
            self.lease_pool(),
            self.pool
        )
    }
}

impl<R> Error for ReleaseError<R> {}
