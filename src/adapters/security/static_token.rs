//! Static token issuer.
//!
//! Returns a predictable `<prefix><client_id>` string. No signing happens;
//! this stands in wherever a real issuer is not wired.

use async_trait::async_trait;

use crate::config::TokenConfig;
use crate::ports::{AdapterError, TokenService};

/// Deterministic token issuer.
#[derive(Debug, Clone)]
pub struct StaticTokenService {
    prefix: String,
}

impl StaticTokenService {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn from_config(config: &TokenConfig) -> Self {
        Self::new(config.prefix.clone())
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for StaticTokenService {
    fn default() -> Self {
        Self::from_config(&TokenConfig::default())
    }
}

#[async_trait]
impl TokenService for StaticTokenService {
    async fn issue_token(&self, client_id: &str) -> Result<String, AdapterError> {
        Ok(format!("{}{}", self.prefix, client_id))
    }
}
