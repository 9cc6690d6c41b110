//! Simulated database connection used as a pooled resource.

use std::sync::atomic::{AtomicU64, Ordering};

/// Stand-in for a real database connection.
///
/// Queries are only logged. The execution counter lets callers observe that
/// the same connection object is reused across leases.
#[derive(Debug)]
pub struct DatabaseConnection {
    id: usize,
    executed: AtomicU64,
}

impl DatabaseConnection {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            executed: AtomicU64::new(0),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Pretend to run a query, returning how many this connection has run.
    pub fn execute_query(&self, query: &str) -> u64 {
        tracing::info!(connection = self.id, query, "Executing query");
        self.executed.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Total queries executed on this connection.
    pub fn executed(&self) -> u64 {
        self.executed.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::ResourcePool;

    #[test]
    fn counts_executed_queries() {
        let connection = DatabaseConnection::new(3);
        assert_eq!(connection.execute_query("SELECT * FROM users"), 1);
        assert_eq!(connection.execute_query("SELECT * FROM orders"), 2);
        assert_eq!(connection.executed(), 2);
        assert_eq!(connection.id(), 3);
    }

    #[test]
    fn pooled_connection_is_reused_after_release() {
        let pool = ResourcePool::new("billing-pool", 1, DatabaseConnection::new);

        let lease = pool.acquire().unwrap();
        lease.execute_query("SELECT * FROM users");
        pool.release(lease).unwrap();

        let lease = pool.acquire().unwrap();
        assert_eq!(lease.executed(), 1);
        assert_eq!(lease.execute_query("SELECT * FROM products"), 2);
    }
}
