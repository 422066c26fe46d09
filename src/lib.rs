pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::acquire::AcquireModelUseCase;
use crate::application::ingest::IngestUseCase;
use crate::application::retrieve::RetrieveUseCase;
use crate::config::Config;
use crate::domain::entities::ranked_result::RankedResult;
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::domain::ports::model_fetcher::ModelFetcher;
use crate::domain::ports::vector_store::VectorStore;
use crate::domain::values::metric::Metric;
use crate::domain::values::model_source::ModelSource;
use crate::infrastructure::embeddings::fastembed::FastembedProvider;
use crate::infrastructure::models::hub::HubFetcher;
use crate::infrastructure::models::locator::ModelLocator;
use crate::infrastructure::postgres::item_store::PgItemStore;
use std::sync::Arc;

pub struct TextVec {
    ingest_uc: IngestUseCase,
    retrieve_uc: RetrieveUseCase,
}

impl std::fmt::Debug for TextVec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextVec").finish_non_exhaustive()
    }
}

impl TextVec {
    /// Resolve the model, load the provider, connect the store, and make
    /// sure schema and provider agree on the vector dimension.
    pub async fn connect(config: &Config) -> Result<Self, DomainError> {
        let cache_root = config.cache_root();
        let locator = ModelLocator::new(cache_root.clone());

        let source = match locator.locate(&config.model_id) {
            Some(path) => {
                tracing::info!("using local model cache at {}", path.display());
                ModelSource::LocalPath(path)
            }
            None => {
                tracing::info!(
                    "no local cache for {}, falling back to online loading",
                    config.model_id
                );
                ModelSource::RemoteIdentifier(config.model_id.clone())
            }
        };
        let embedder: Arc<dyn EmbeddingProvider> =
            Arc::new(FastembedProvider::load(&source, &cache_root)?);

        let pool = infrastructure::postgres::connect(&config.database).await?;
        let store: Arc<dyn VectorStore> = Arc::new(PgItemStore::new(pool, embedder.dimension()));

        Self::with_providers(embedder, store).await
    }

    /// Wiring seam: tests swap in deterministic providers here. Bootstraps
    /// the schema and validates the deployed dimension eagerly, so a
    /// provider/schema mismatch fails at startup instead of at insert.
    pub async fn with_providers(
        embedder: Arc<dyn EmbeddingProvider>,
        store: Arc<dyn VectorStore>,
    ) -> Result<Self, DomainError> {
        store.ensure_schema().await?;
        if let Some(stored) = store.stored_dimension().await? {
            if stored != embedder.dimension() {
                return Err(DomainError::DimensionMismatch {
                    expected: stored,
                    actual: embedder.dimension(),
                });
            }
        }

        Ok(Self {
            ingest_uc: IngestUseCase::new(embedder.clone(), store.clone()),
            retrieve_uc: RetrieveUseCase::new(embedder, store),
        })
    }

    pub async fn ingest(&self, texts: &[String]) -> Result<usize, DomainError> {
        self.ingest_uc.execute(texts).await
    }

    pub async fn search(
        &self,
        query: &str,
        metric: Metric,
        k: usize,
    ) -> Result<Vec<RankedResult>, DomainError> {
        self.retrieve_uc.execute(query, metric, k).await
    }
}

/// Wiring for the download utility; independent of the database.
pub fn acquirer(config: &Config) -> AcquireModelUseCase {
    let cache_root = config.cache_root();
    let fetcher: Arc<dyn ModelFetcher> =
        Arc::new(HubFetcher::new(config.hub_url.clone(), cache_root.clone()));
    AcquireModelUseCase::new(ModelLocator::new(cache_root), fetcher)
}
