use crate::domain::entities::ranked_result::RankedResult;
use crate::domain::error::DomainError;
use crate::domain::ports::vector_store::VectorStore;
use crate::domain::values::metric::Metric;
use pgvector::Vector;
use sqlx::{PgPool, Row};

/// pgvector-backed item store. The vector dimension is fixed here, baked
/// into the schema, and enforced on every insert.
pub struct PgItemStore {
    pool: PgPool,
    dimension: usize,
}

impl PgItemStore {
    pub fn new(pool: PgPool, dimension: usize) -> Self {
        Self { pool, dimension }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }
}

#[async_trait::async_trait]
impl VectorStore for PgItemStore {
    async fn ensure_schema(&self) -> Result<(), DomainError> {
        sqlx::query("CREATE EXTENSION IF NOT EXISTS vector")
            .execute(&self.pool)
            .await?;

        let ddl = format!(
            "CREATE TABLE IF NOT EXISTS items (
                id BIGSERIAL PRIMARY KEY,
                text TEXT NOT NULL,
                embedding vector({}) NOT NULL
            )",
            self.dimension
        );
        sqlx::query(&ddl).execute(&self.pool).await?;
        Ok(())
    }

    async fn stored_dimension(&self) -> Result<Option<usize>, DomainError> {
        // For vector columns atttypmod carries the declared dimension.
        let row = sqlx::query(
            "SELECT atttypmod FROM pg_attribute
             WHERE attrelid = to_regclass('items') AND attname = 'embedding'",
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(|r| r.get::<i32, _>(0) as usize))
    }

    async fn insert_many(&self, pairs: &[(String, Vec<f32>)]) -> Result<usize, DomainError> {
        for (_, vector) in pairs {
            if vector.len() != self.dimension {
                return Err(DomainError::DimensionMismatch {
                    expected: self.dimension,
                    actual: vector.len(),
                });
            }
        }

        let mut tx = self.pool.begin().await?;
        for (text, vector) in pairs {
            sqlx::query("INSERT INTO items (text, embedding) VALUES ($1, $2)")
                .bind(text)
                .bind(Vector::from(vector.clone()))
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        Ok(pairs.len())
    }

    async fn query_nearest(
        &self,
        vector: &[f32],
        metric: Metric,
        k: usize,
    ) -> Result<Vec<RankedResult>, DomainError> {
        // Operators cannot be bound as parameters; the vector itself is a
        // typed bind, never a string literal.
        let sql = format!(
            "SELECT id, text, embedding {} $1 AS distance
             FROM items
             ORDER BY distance ASC, id ASC
             LIMIT $2",
            metric.operator()
        );
        let rows = sqlx::query(&sql)
            .bind(Vector::from(vector.to_vec()))
            .bind(k as i64)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| RankedResult {
                item_id: row.get("id"),
                text: row.get("text"),
                distance: row.get("distance"),
            })
            .collect())
    }

    async fn count(&self) -> Result<i64, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) FROM items")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get(0))
    }
}
