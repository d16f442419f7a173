use serde::{Deserialize, Serialize};

/// A feature matched by keyword search.
///
/// `score` counts how many of the search terms occur in the feature's
/// title, description and keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub feature_id: String,
    pub score: u32,
}
