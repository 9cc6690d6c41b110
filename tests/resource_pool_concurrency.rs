//! Concurrent access tests for `ResourcePool`.
//!
//! Verifies that the single lock around acquire/release never hands the same
//! resource to two holders at once.

use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

use invoice_hub::pool::{DatabaseConnection, PooledResource, ResourcePool};

#[test]
fn capacity_concurrent_acquirers_all_succeed_without_duplicates() {
    const CAPACITY: usize = 16;
    let pool = Arc::new(ResourcePool::new("concurrent", CAPACITY, DatabaseConnection::new));
    let barrier = Arc::new(Barrier::new(CAPACITY));

    let handles: Vec<_> = (0..CAPACITY)
        .map(|_| {
            let pool = Arc::clone(&pool);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                pool.acquire()
            })
        })
        .collect();

    let leases: Vec<PooledResource<DatabaseConnection>> = handles
        .into_iter()
        .filter_map(|h| h.join().unwrap())
        .collect();

    assert_eq!(leases.len(), CAPACITY);

    let slots: HashSet<usize> = leases.iter().map(|l| l.slot()).collect();
    assert_eq!(slots.len(), CAPACITY);

    let connection_ids: HashSet<usize> = leases.iter().map(|l| l.id()).collect();
    assert_eq!(connection_ids.len(), CAPACITY);

    assert!(pool.acquire().is_none());
}

#[test]
fn oversubscribed_pool_grants_exactly_capacity() {
    const CAPACITY: usize = 4;
    const CALLERS: usize = 32;
    let pool = Arc::new(ResourcePool::new("oversubscribed", CAPACITY, DatabaseConnection::new));
    let barrier = Arc::new(Barrier::new(CALLERS));

    let handles: Vec<_> = (0..CALLERS)
        .map(|_| {
            let pool = Arc::clone(&pool);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                pool.acquire()
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let granted: Vec<_> = results.iter().flatten().collect();

    assert_eq!(granted.len(), CAPACITY);
    assert_eq!(results.iter().filter(|r| r.is_none()).count(), CALLERS - CAPACITY);

    let slots: HashSet<usize> = granted.iter().map(|l| l.slot()).collect();
    assert_eq!(slots.len(), CAPACITY);
}

#[test]
fn churn_never_double_leases() {
    const CAPACITY: usize = 3;
    const WORKERS: usize = 8;
    const ROUNDS: usize = 500;
    let pool = Arc::new(ResourcePool::new("churn", CAPACITY, DatabaseConnection::new));

    let handles: Vec<_> = (0..WORKERS)
        .map(|_| {
            let pool = Arc::clone(&pool);
            thread::spawn(move || {
                let mut granted = 0usize;
                for _ in 0..ROUNDS {
                    if let Some(lease) = pool.acquire() {
                        assert!(pool.in_use() <= CAPACITY);
                        lease.execute_query("SELECT 1");
                        pool.release(lease).unwrap();
                        granted += 1;
                    }
                }
                granted
            })
        })
        .collect();

    let total: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

    assert!(total > 0);
    assert_eq!(pool.available(), CAPACITY);
    assert_eq!(pool.in_use(), 0);
}

#[test]
fn release_returns_a_previously_acquired_resource() {
    let pool = ResourcePool::new("billing-pool", 2, DatabaseConnection::new);

    let first = pool.acquire().unwrap();
    let second = pool.acquire().unwrap();
    assert!(!first.same_resource(&second));
    assert!(pool.acquire().is_none());

    let first_id = first.id();
    pool.release(first).unwrap();

    let again = pool.acquire().unwrap();
    assert_eq!(again.id(), first_id);
}
