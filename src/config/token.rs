//! Token issuing configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Static token issuer configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TokenConfig {
    /// Text prepended to the client id
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl TokenConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.prefix.is_empty() {
            return Err(ValidationError::MissingRequired("TOKEN__PREFIX"));
        }
        Ok(())
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
        }
    }
}

fn default_prefix() -> String {
    "token-for-".to_string()
}
