use std::fmt;
use std::path::PathBuf;

/// Where an embedding model is loaded from. Produced once by the locator
/// so a single component decides whether the model is already on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    /// A fully materialized model directory. Loading must not touch the
    /// network.
    LocalPath(PathBuf),
    /// A hub identifier, conventionally `owner/name`. Loading may trigger
    /// the model loader's own fetch-and-cache.
    RemoteIdentifier(String),
}

impl fmt::Display for ModelSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelSource::LocalPath(path) => write!(f, "{}", path.display()),
            ModelSource::RemoteIdentifier(id) => write!(f, "{id}"),
        }
    }
}
