use crate::infrastructure::models::hub::DEFAULT_HUB_URL;
use std::path::{Path, PathBuf};

pub const DEFAULT_MODEL: &str = "BAAI/bge-m3";

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub dbname: String,
    pub user: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub model_id: String,
    pub cache_dir: Option<PathBuf>,
    pub hub_url: String,
    pub database: DatabaseConfig,
}

impl Config {
    /// Read configuration from the environment once, at startup. Defaults
    /// suit a local development Postgres.
    pub fn from_env() -> Self {
        Self {
            model_id: env_or("TEXTVEC_MODEL", DEFAULT_MODEL),
            cache_dir: std::env::var_os("TEXTVEC_CACHE_DIR").map(PathBuf::from),
            hub_url: env_or("TEXTVEC_HUB_URL", DEFAULT_HUB_URL),
            database: DatabaseConfig {
                host: env_or("TEXTVEC_DB_HOST", "127.0.0.1"),
                port: std::env::var("TEXTVEC_DB_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(5432),
                dbname: env_or("TEXTVEC_DB_NAME", "vectordb"),
                user: env_or("TEXTVEC_DB_USER", "postgres"),
                password: env_or("TEXTVEC_DB_PASSWORD", "postgres"),
            },
        }
    }

    /// Cache root for model artifacts, honoring the configured override.
    pub fn cache_root(&self) -> PathBuf {
        cache_root(self.cache_dir.as_deref())
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

pub fn cache_root(override_dir: Option<&Path>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir.to_path_buf();
    }
    let home = std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    home.join(".cache").join("textvec").join("models")
}
