use serde::Serialize;

/// One row of a nearest-neighbor ranking: the stored item's surrogate id
/// and text, plus its distance to the query under the chosen metric.
#[derive(Debug, Clone, Serialize)]
pub struct RankedResult {
    pub item_id: i64,
    pub text: String,
    pub distance: f64,
}

impl RankedResult {
    /// Cosine similarity view of a cosine-distance result.
    pub fn similarity(&self) -> f64 {
        1.0 - self.distance
    }
}
