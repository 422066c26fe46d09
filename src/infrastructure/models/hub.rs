use crate::domain::error::DomainError;
use crate::domain::ports::model_fetcher::ModelFetcher;
use crate::infrastructure::models::locator::ModelLocator;
use reqwest::Client;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_HUB_URL: &str = "https://huggingface.co";

/// Artifact set fetched per model: ONNX weights plus everything the
/// tokenizer needs. A directory holding all of these counts as a
/// complete download.
pub const MODEL_FILES: &[&str] = &[
    "model.onnx",
    "tokenizer.json",
    "config.json",
    "special_tokens_map.json",
    "tokenizer_config.json",
];

/// Downloads model artifacts from a hub endpoint into the cache root,
/// following the locator's `owner/name` directory convention.
pub struct HubFetcher {
    client: Client,
    base_url: String,
    cache_root: PathBuf,
}

impl HubFetcher {
    pub fn new(base_url: impl Into<String>, cache_root: PathBuf) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            cache_root,
        }
    }

    fn has_model_files(dir: &Path) -> bool {
        MODEL_FILES.iter().all(|f| dir.join(f).exists())
    }

    async fn download_file(
        &self,
        model_id: &str,
        filename: &str,
        dest: &Path,
    ) -> Result<(), DomainError> {
        let url = format!("{}/{}/resolve/main/{}", self.base_url, model_id, filename);
        tracing::info!("downloading {filename}");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainError::Fetch(format!("{filename}: {e}")))?;
        if !resp.status().is_success() {
            return Err(DomainError::Fetch(format!("{filename}: HTTP {}", resp.status())));
        }
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| DomainError::Fetch(format!("{filename}: {e}")))?;

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| DomainError::Fetch(format!("{}: {e}", parent.display())))?;
        }
        fs::write(dest, &bytes)
            .map_err(|e| DomainError::Fetch(format!("{}: {e}", dest.display())))?;
        tracing::debug!("wrote {} ({} bytes)", dest.display(), bytes.len());
        Ok(())
    }
}

#[async_trait::async_trait]
impl ModelFetcher for HubFetcher {
    async fn ensure_available(&self) -> bool {
        match self
            .client
            .head(&self.base_url)
            .timeout(Duration::from_secs(10))
            .send()
            .await
        {
            Ok(resp) => resp.status().is_success() || resp.status().is_redirection(),
            Err(e) => {
                tracing::debug!("hub probe failed: {e}");
                false
            }
        }
    }

    async fn fetch(&self, model_id: &str) -> Result<PathBuf, DomainError> {
        let target = ModelLocator::new(self.cache_root.clone()).download_target(model_id);

        if Self::has_model_files(&target) {
            tracing::debug!("model already cached at {}", target.display());
            return Ok(target);
        }

        // An interrupted run leaves the marker behind; start that
        // directory over.
        let marker = target.join(".downloading");
        if marker.exists() {
            tracing::warn!("found partial download at {}, cleaning up", target.display());
            fs::remove_dir_all(&target)
                .map_err(|e| DomainError::Fetch(format!("Failed to clean up partial download: {e}")))?;
        }

        fs::create_dir_all(&target)
            .map_err(|e| DomainError::Fetch(format!("{}: {e}", target.display())))?;
        fs::write(&marker, "")
            .map_err(|e| DomainError::Fetch(format!("{}: {e}", marker.display())))?;

        tracing::info!("downloading {model_id} to {}", target.display());
        for filename in MODEL_FILES {
            let dest = target.join(filename);
            if dest.exists() {
                continue;
            }
            self.download_file(model_id, filename, &dest).await?;
        }

        let _ = fs::remove_file(&marker);
        tracing::info!("download of {model_id} complete");
        Ok(target)
    }
}
