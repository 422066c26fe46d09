use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::domain::values::model_source::ModelSource;
use fastembed::{
    InitOptions, InitOptionsUserDefined, Pooling, TextEmbedding, TokenizerFiles,
    UserDefinedEmbeddingModel,
};
use std::fs;
use std::path::Path;
use std::sync::Mutex;

const ONNX_CANDIDATES: &[&str] = &["model.onnx", "onnx/model.onnx"];

/// Embedding provider backed by fastembed's ONNX runtime.
///
/// Local paths are read from disk only; remote identifiers go through
/// fastembed's own hub cache under `cache_dir`.
pub struct FastembedProvider {
    model: Mutex<TextEmbedding>,
    dimension: usize,
}

impl FastembedProvider {
    pub fn load(source: &ModelSource, cache_dir: &Path) -> Result<Self, DomainError> {
        match source {
            ModelSource::LocalPath(path) => Self::from_local_dir(path),
            ModelSource::RemoteIdentifier(id) => Self::from_remote_id(id, cache_dir),
        }
    }

    fn from_remote_id(model_id: &str, cache_dir: &Path) -> Result<Self, DomainError> {
        let info = TextEmbedding::list_supported_models()
            .into_iter()
            .find(|m| m.model_code == model_id)
            .ok_or_else(|| {
                DomainError::Embedding(format!("Model {model_id} is not supported for online loading"))
            })?;

        let options = InitOptions::new(info.model.clone())
            .with_cache_dir(cache_dir.to_path_buf())
            .with_show_download_progress(true);
        let model = TextEmbedding::try_new(options)
            .map_err(|e| DomainError::Embedding(format!("Failed to load model {model_id}: {e}")))?;

        Ok(Self {
            model: Mutex::new(model),
            dimension: info.dim,
        })
    }

    fn from_local_dir(dir: &Path) -> Result<Self, DomainError> {
        let onnx_path = ONNX_CANDIDATES
            .iter()
            .map(|c| dir.join(c))
            .find(|p| p.exists())
            .ok_or_else(|| {
                DomainError::Embedding(format!("No ONNX weights found under {}", dir.display()))
            })?;

        let tokenizer_files = TokenizerFiles {
            tokenizer_file: read_model_file(dir, "tokenizer.json")?,
            config_file: read_model_file(dir, "config.json")?,
            special_tokens_map_file: read_model_file(dir, "special_tokens_map.json")?,
            tokenizer_config_file: read_model_file(dir, "tokenizer_config.json")?,
        };
        let onnx_file = fs::read(&onnx_path)
            .map_err(|e| DomainError::Embedding(format!("{}: {e}", onnx_path.display())))?;

        let user_model =
            UserDefinedEmbeddingModel::new(onnx_file, tokenizer_files).with_pooling(Pooling::Cls);
        let mut model =
            TextEmbedding::try_new_from_user_defined(user_model, InitOptionsUserDefined::default())
                .map_err(|e| {
                    DomainError::Embedding(format!("Failed to load model from {}: {e}", dir.display()))
                })?;

        // User-provided weights declare no output width anywhere; probe
        // once so a mismatch surfaces at load time, not at insert time.
        let probe = model
            .embed(vec!["dimension probe"], None)
            .map_err(|e| DomainError::Embedding(format!("Model probe failed: {e}")))?;
        let dimension = probe
            .first()
            .map(|v| v.len())
            .ok_or_else(|| DomainError::Embedding("Model probe returned no vector".into()))?;

        Ok(Self {
            model: Mutex::new(model),
            dimension,
        })
    }
}

fn read_model_file(dir: &Path, name: &str) -> Result<Vec<u8>, DomainError> {
    fs::read(dir.join(name))
        .map_err(|e| DomainError::Embedding(format!("{}: {e}", dir.join(name).display())))
}

#[async_trait::async_trait]
impl EmbeddingProvider for FastembedProvider {
    async fn embed(&self, texts: &[String], normalize: bool) -> Result<Vec<Vec<f32>>, DomainError> {
        let mut model = self
            .model
            .lock()
            .map_err(|_| DomainError::Embedding("Embedding model lock poisoned".into()))?;
        let mut vectors = model
            .embed(texts.to_vec(), None)
            .map_err(|e| DomainError::Embedding(format!("Encoding failed: {e}")))?;
        if normalize {
            for v in &mut vectors {
                super::l2_normalize(v);
            }
        }
        Ok(vectors)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
