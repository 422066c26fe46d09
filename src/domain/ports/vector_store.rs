use crate::domain::entities::ranked_result::RankedResult;
use crate::domain::error::DomainError;
use crate::domain::values::metric::Metric;

#[async_trait::async_trait]
pub trait VectorStore: Send + Sync {
    /// Idempotently create the vector capability and the items table.
    async fn ensure_schema(&self) -> Result<(), DomainError>;

    /// Declared vector width of the deployed items table, or None before
    /// the schema exists.
    async fn stored_dimension(&self) -> Result<Option<usize>, DomainError>;

    /// Append all pairs as new items in one atomic batch and return the
    /// number inserted. Any bad row fails the whole batch.
    async fn insert_many(&self, pairs: &[(String, Vec<f32>)]) -> Result<usize, DomainError>;

    /// Top-k items ranked ascending by distance under `metric`, ties
    /// broken by ascending item id.
    async fn query_nearest(
        &self,
        vector: &[f32],
        metric: Metric,
        k: usize,
    ) -> Result<Vec<RankedResult>, DomainError>;

    async fn count(&self) -> Result<i64, DomainError>;
}
