use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Deterministic offline provider: vectors are derived from a hash of the
/// input text, so equal texts embed equally and the pipeline runs without
/// model files. Not semantically meaningful; used by tests and as an
/// explicit offline fallback.
pub struct HashedProvider {
    dimension: usize,
}

impl HashedProvider {
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    fn raw_vector(&self, text: &str) -> Vec<f32> {
        (0..self.dimension)
            .map(|i| {
                let mut hasher = DefaultHasher::new();
                text.hash(&mut hasher);
                i.hash(&mut hasher);
                // map the hash onto [-1, 1]
                (hasher.finish() as f64 / u64::MAX as f64 * 2.0 - 1.0) as f32
            })
            .collect()
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for HashedProvider {
    async fn embed(&self, texts: &[String], normalize: bool) -> Result<Vec<Vec<f32>>, DomainError> {
        Ok(texts
            .iter()
            .map(|text| {
                let mut v = self.raw_vector(text);
                if normalize {
                    super::l2_normalize(&mut v);
                }
                v
            })
            .collect())
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
