use crate::domain::error::DomainError;
use crate::domain::ports::model_fetcher::ModelFetcher;
use crate::infrastructure::models::locator::ModelLocator;
use std::path::PathBuf;
use std::sync::Arc;

/// One-time model acquisition: the locator decides whether anything is
/// already on disk, the fetcher is only consulted on a cache miss.
pub struct AcquireModelUseCase {
    locator: ModelLocator,
    fetcher: Arc<dyn ModelFetcher>,
}

impl AcquireModelUseCase {
    pub fn new(locator: ModelLocator, fetcher: Arc<dyn ModelFetcher>) -> Self {
        Self { locator, fetcher }
    }

    pub async fn ensure_available(&self) -> bool {
        self.fetcher.ensure_available().await
    }

    /// Idempotent: an already-cached model is returned without touching
    /// the fetcher.
    pub async fn download(&self, model_id: &str) -> Result<PathBuf, DomainError> {
        if let Some(path) = self.locator.locate(model_id) {
            tracing::info!("model {model_id} already cached at {}", path.display());
            return Ok(path);
        }
        self.fetcher.fetch(model_id).await
    }
}
