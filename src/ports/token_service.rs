//! Security token port.

use async_trait::async_trait;

use super::AdapterError;

/// Issues API tokens for clients.
///
/// The port does not validate `client_id`; that is left to implementations.
#[async_trait]
pub trait TokenService: Send + Sync {
    async fn issue_token(&self, client_id: &str) -> Result<String, AdapterError>;
}
