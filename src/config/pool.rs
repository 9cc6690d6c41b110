//! Resource pool configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Largest pool the application will build
pub const MAX_POOL_CAPACITY: usize = 100;

/// Resource pool configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PoolConfig {
    /// Name used in log output
    #[serde(default = "default_name")]
    pub name: String,

    /// Number of resources allocated up front
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl PoolConfig {
    /// Validate pool configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingRequired("POOL__NAME"));
        }
        if self.capacity == 0 {
            return Err(ValidationError::EmptyPool);
        }
        if self.capacity > MAX_POOL_CAPACITY {
            return Err(ValidationError::PoolSizeTooLarge);
        }
        Ok(())
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            capacity: default_capacity(),
        }
    }
}

fn default_name() -> String {
    "billing-pool".to_string()
}

fn default_capacity() -> usize {
    10
}
