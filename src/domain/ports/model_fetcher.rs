use crate::domain::error::DomainError;
use std::path::PathBuf;

#[async_trait::async_trait]
pub trait ModelFetcher: Send + Sync {
    /// Capability probe. False means downloads cannot proceed right now;
    /// callers decide how to surface that. Never installs anything.
    async fn ensure_available(&self) -> bool;

    /// Fetch the model's complete artifact set into the local cache and
    /// return the resulting directory. Already-cached artifacts are not
    /// transferred again.
    async fn fetch(&self, model_id: &str) -> Result<PathBuf, DomainError>;
}
