//! Fixed-size, lock-guarded resource pool.
//!
//! # Design
//!
//! - **Eager**: every resource is built when the pool is constructed
//! - **Constant size**: resources are never added or removed afterwards
//! - **Non-blocking**: `acquire` on an exhausted pool returns `None`
//! - **One lock**: acquire and release serialize on the same mutex, so the
//!   scan-and-flip of an in-use flag is atomic

use std::fmt;
use std::ops::Deref;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::ReleaseError;
use crate::config::PoolConfig;
use crate::domain::foundation::PoolId;

struct Slot<R> {
    resource: Arc<R>,
    in_use: bool,
}

/// Pool of reusable resources handed out one caller at a time.
pub struct ResourcePool<R> {
    id: PoolId,
    name: String,
    slots: Mutex<Vec<Slot<R>>>,
}

/// Exclusive lease on one pooled resource.
///
/// Not `Clone`: giving the lease back through [`ResourcePool::release`]
/// consumes it, so the same holder cannot release twice.
pub struct PooledResource<R> {
    pool_id: PoolId,
    slot: usize,
    resource: Arc<R>,
}

impl<R> ResourcePool<R> {
    /// Creates a pool of `capacity` resources built by `factory`.
    ///
    /// The factory receives the slot index of each resource. A capacity of
    /// zero is allowed and yields a pool whose `acquire` always returns `None`.
    pub fn new(
        name: impl Into<String>,
        capacity: usize,
        mut factory: impl FnMut(usize) -> R,
    ) -> Self {
        let name = name.into();
        let slots = (0..capacity)
            .map(|index| Slot {
                resource: Arc::new(factory(index)),
                in_use: false,
            })
            .collect();

        tracing::debug!(pool = %name, capacity, "Resource pool created");

        Self {
            id: PoolId::new(),
            name,
            slots: Mutex::new(slots),
        }
    }

    /// Creates a pool sized and named from configuration.
    pub fn from_config(config: &PoolConfig, factory: impl FnMut(usize) -> R) -> Self {
        Self::new(config.name.clone(), config.capacity, factory)
    }

    /// Hands out the first free resource, or `None` if all are in use.
    pub fn acquire(&self) -> Option<PooledResource<R>> {
        let mut slots = self.lock_slots();

        let Some(index) = slots.iter().position(|slot| !slot.in_use) else {
            tracing::warn!(pool = %self.name, capacity = slots.len(), "No available resources");
            return None;
        };

        let slot = &mut slots[index];
        slot.in_use = true;
        tracing::debug!(pool = %self.name, slot = index, "Resource acquired");

        Some(PooledResource {
            pool_id: self.id,
            slot: index,
            resource: Arc::clone(&slot.resource),
        })
    }

    /// Returns a leased resource to the pool.
    ///
    /// # Errors
    ///
    /// Returns [`ReleaseError`] carrying the lease back, without touching
    /// either pool, when the lease was minted by a different pool.
    pub fn release(&self, lease: PooledResource<R>) -> Result<(), ReleaseError<R>> {
        if lease.pool_id != self.id {
            tracing::warn!(
                pool = %self.name,
                lease_pool = %lease.pool_id,
                "Rejected release of a foreign resource"
            );
            return Err(ReleaseError::foreign(self.id, lease));
        }

        let mut slots = self.lock_slots();
        if let Some(slot) = slots.get_mut(lease.slot) {
            slot.in_use = false;
        }
        tracing::debug!(pool = %self.name, slot = lease.slot, "Resource released");
        Ok(())
    }

    /// Number of resources the pool was built with.
    pub fn capacity(&self) -> usize {
        self.lock_slots().len()
    }

    /// Number of resources currently free.
    pub fn available(&self) -> usize {
        self.lock_slots().iter().filter(|slot| !slot.in_use).count()
    }

    /// Number of resources currently leased out.
    pub fn in_use(&self) -> usize {
        self.lock_slots().iter().filter(|slot| slot.in_use).count()
    }

    pub fn id(&self) -> PoolId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // In-use flags are plain booleans, so state behind a poisoned lock is
    // still consistent.
    fn lock_slots(&self) -> MutexGuard<'_, Vec<Slot<R>>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<R> fmt::Debug for ResourcePool<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourcePool")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("capacity", &self.capacity())
            .field("available", &self.available())
            .finish()
    }
}

impl<R> PooledResource<R> {
    /// Index of the slot this lease occupies.
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Pool that minted this lease.
    pub fn pool_id(&self) -> PoolId {
        self.pool_id
    }

    /// True if both leases point at the same underlying resource.
    pub fn same_resource(&self, other: &PooledResource<R>) -> bool {
        Arc::ptr_eq(&self.resource, &other.resource)
    }
}

impl<R> Deref for PooledResource<R> {
    type Target = R;

    fn deref(&self) -> &R {
        &self.resource
    }
}

impl<R> fmt::Debug for PooledResource<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PooledResource")
            .field("pool_id", &self.pool_id)
            .field("slot", &self.slot)
            .finish()
    }
}
