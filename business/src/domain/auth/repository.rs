use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::Caller;

/// Port for resolving API keys issued to catalog users.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// Resolves a valid, unexpired API key to its caller.
    /// Unknown and expired keys both surface as `NotFound`.
    async fn find_caller_by_api_key(&self, key: &str) -> Result<Caller, RepositoryError>;
}
