use std::path::PathBuf;

/// Resolves a model identifier against the local cache using the layout
/// conventions `owner/name`, `owner-name`, and `owner_name`.
///
/// The identifier is trusted input; existence is the only check applied
/// to a candidate.
pub struct ModelLocator {
    base: PathBuf,
}

impl ModelLocator {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// First existing candidate path, or None on a cache miss. A miss is
    /// the normal signal to fall back to online loading, not an error.
    pub fn locate(&self, model_id: &str) -> Option<PathBuf> {
        self.candidates(model_id).into_iter().find(|p| p.exists())
    }

    /// Cache directory a fresh download of this model should land in.
    pub fn download_target(&self, model_id: &str) -> PathBuf {
        let mut candidates = self.candidates(model_id);
        candidates.swap_remove(0)
    }

    fn candidates(&self, model_id: &str) -> Vec<PathBuf> {
        let parts: Vec<&str> = model_id.split('/').collect();
        let mut candidates = Vec::new();
        if let [owner, name] = parts[..] {
            candidates.push(self.base.join(owner).join(name));
        } else {
            candidates.push(self.base.join(model_id));
        }
        candidates.push(self.base.join(model_id.replace('/', "-")));
        candidates.push(self.base.join(model_id.replace('/', "_")));
        candidates
    }
}
