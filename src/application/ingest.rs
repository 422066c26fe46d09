use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::domain::ports::vector_store::VectorStore;
use std::sync::Arc;

pub struct IngestUseCase {
    embedder: Arc<dyn EmbeddingProvider>,
    store: Arc<dyn VectorStore>,
}

impl IngestUseCase {
    pub fn new(embedder: Arc<dyn EmbeddingProvider>, store: Arc<dyn VectorStore>) -> Self {
        Self { embedder, store }
    }

    /// Embed the corpus and append it in one atomic batch. Vectors are
    /// unit-normalized so euclidean and cosine rankings agree.
    pub async fn execute(&self, texts: &[String]) -> Result<usize, DomainError> {
        if texts.is_empty() {
            return Ok(0);
        }
        let vectors = self.embedder.embed(texts, true).await?;
        let pairs: Vec<(String, Vec<f32>)> = texts.iter().cloned().zip(vectors).collect();
        self.store.insert_many(&pairs).await
    }
}
