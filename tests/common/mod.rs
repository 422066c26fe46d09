//! Shared test helpers.

use std::sync::Arc;
use textvec::domain::ports::embedding_port::EmbeddingProvider;
use textvec::infrastructure::embeddings::hashed::HashedProvider;

pub const DIM: usize = 32;

pub fn embedder() -> Arc<dyn EmbeddingProvider> {
    Arc::new(HashedProvider::new(DIM))
}

pub fn corpus() -> Vec<String> {
    vec!["这是一个测试句子。".to_string(), "Hello world".to_string()]
}
