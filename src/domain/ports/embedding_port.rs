use crate::domain::error::DomainError;

#[async_trait::async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Encode texts into vectors, one per input, preserving input order.
    /// With `normalize` set, every returned vector has unit L2 norm.
    async fn embed(&self, texts: &[String], normalize: bool) -> Result<Vec<Vec<f32>>, DomainError>;

    /// Output width, constant for the lifetime of this provider instance.
    fn dimension(&self) -> usize;
}
