use crate::domain::entities::ranked_result::RankedResult;
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::domain::ports::vector_store::VectorStore;
use crate::domain::values::metric::Metric;
use std::sync::Arc;

pub struct RetrieveUseCase {
    embedder: Arc<dyn EmbeddingProvider>,
    store: Arc<dyn VectorStore>,
}

impl RetrieveUseCase {
    pub fn new(embedder: Arc<dyn EmbeddingProvider>, store: Arc<dyn VectorStore>) -> Self {
        Self { embedder, store }
    }

    /// Embed the query and rank stored items against it. The query vector
    /// is transient; nothing is persisted here.
    pub async fn execute(
        &self,
        query: &str,
        metric: Metric,
        k: usize,
    ) -> Result<Vec<RankedResult>, DomainError> {
        let vectors = self.embedder.embed(&[query.to_string()], true).await?;
        let vector = vectors
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::Embedding("Provider returned no vector for query".into()))?;
        self.store.query_nearest(&vector, metric, k).await
    }
}
