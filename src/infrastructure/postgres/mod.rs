pub mod item_store;

use crate::config::DatabaseConfig;
use crate::domain::error::DomainError;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::time::Duration;

/// Connection pool held for the process lifetime; dropping it on any
/// exit path releases all connections.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DomainError> {
    let options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .database(&config.dbname)
        .username(&config.user)
        .password(&config.password);

    PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
        .map_err(|e| DomainError::Database(format!("Failed to connect to Postgres: {e}")))
}
