mod layout;
mod search;

pub use layout::*;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::{NaiveDate, Utc};
use serde::de::DeserializeOwned;

use crate::error::{LedgerError, Result};
use crate::models::*;

/// The ledger document: feature id to entry.
pub type Ledger = BTreeMap<String, LedgerEntry>;

/// In-memory view of one project's feature ledger.
///
/// Both documents are read once by [`LedgerStore::open`]. Mutations only touch
/// memory; call [`LedgerStore::save`] to write the ledger back.
#[derive(Debug, Clone)]
pub struct LedgerStore {
    layout: ProjectLayout,
    metadata: ProjectMetadata,
    ledger: Ledger,
}

impl LedgerStore {
    pub fn open(project_root: impl AsRef<Path>) -> Result<Self> {
        let layout = ProjectLayout::new(project_root.as_ref());
        let ledger: Ledger = read_json(&layout.ledger_path())?;
        let metadata: ProjectMetadata = read_json(&layout.metadata_path())?;

        tracing::debug!(
            root = %layout.root().display(),
            features = ledger.len(),
            initials = %metadata.project_initials,
            "loaded feature ledger"
        );

        Ok(Self {
            layout,
            metadata,
            ledger,
        })
    }

    pub fn project_root(&self) -> &Path {
        self.layout.root()
    }

    pub fn metadata(&self) -> &ProjectMetadata {
        &self.metadata
    }

    pub fn project_name(&self) -> &str {
        &self.metadata.project_name
    }

    /// Prefix of every feature id this store allocates.
    pub fn project_initials(&self) -> &str {
        &self.metadata.project_initials
    }

    /// The in-memory ledger, exactly as it would be saved.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn len(&self) -> usize {
        self.ledger.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }

    // ============================================================
    // Mutation
    // ============================================================

    /// Add a feature dated today (UTC) and return its new id.
    pub fn add_feature(&mut self, input: NewFeature) -> Result<String> {
        self.add_feature_on(input, Utc::now().date_naive())
    }

    /// Add a feature with an explicit creation date and return its new id.
    ///
    /// The id number is one past the highest number already in the ledger,
    /// regardless of gaps. Fails with [`LedgerError::CorruptLedger`] without
    /// changing anything if an existing key is not `PREFIX-N`.
    pub fn add_feature_on(&mut self, input: NewFeature, created: NaiveDate) -> Result<String> {
        let number = self.next_feature_number()?;
        let feature_id = format!("{}-{}", self.metadata.project_initials, number);
        let entry = input.into_entry(&feature_id, created);

        tracing::debug!(feature_id = %feature_id, "added feature");
        self.ledger.insert(feature_id.clone(), entry);
        Ok(feature_id)
    }

    fn next_feature_number(&self) -> Result<u64> {
        let mut max = 0;
        for feature_id in self.ledger.keys() {
            let (_, n) =
                parse_feature_id(feature_id).ok_or_else(|| LedgerError::CorruptLedger {
                    feature_id: feature_id.clone(),
                })?;
            max = max.max(n);
        }
        max.checked_add(1).ok_or_else(|| LedgerError::CorruptLedger {
            feature_id: format!("{}-{}", self.metadata.project_initials, max),
        })
    }

    // ============================================================
    // Queries
    // ============================================================

    /// Look up a single feature. An unknown id is `None`, not an error.
    pub fn get_feature_by_id(&self, feature_id: &str) -> Option<&LedgerEntry> {
        self.ledger.get(feature_id)
    }

    /// All features whose status equals `status` exactly, in feature order.
    pub fn get_features_by_status(&self, status: &str) -> Result<Vec<(String, LedgerEntry)>> {
        let mut matches = Vec::new();
        for (feature_id, entry) in &self.ledger {
            let entry_status =
                entry
                    .status
                    .as_deref()
                    .ok_or_else(|| LedgerError::MissingField {
                        feature_id: feature_id.clone(),
                        field: "status",
                    })?;
            if entry_status == status {
                matches.push((feature_id.clone(), entry.clone()));
            }
        }
        matches.sort_by(|(a, _), (b, _)| compare_feature_ids(a, b));
        Ok(matches)
    }

    /// Rank features by how many `terms` appear in their title, description or keywords.
    ///
    /// Matching is case-insensitive substring containment. Features matching no
    /// term are omitted. Results are ordered by score, highest first, with ties
    /// in feature order.
    pub fn keyword_search<S: AsRef<str>>(&self, terms: &[S]) -> Result<Vec<SearchHit>> {
        let terms: Vec<String> = terms.iter().map(|t| t.as_ref().to_lowercase()).collect();

        let mut hits = Vec::new();
        for (feature_id, entry) in &self.ledger {
            let text = search::searchable_text(feature_id, entry)?;
            let score = search::score(&text, &terms);
            if score > 0 {
                hits.push(SearchHit {
                    feature_id: feature_id.clone(),
                    score,
                });
            }
        }

        hits.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| compare_feature_ids(&a.feature_id, &b.feature_id))
        });
        Ok(hits)
    }

    // ============================================================
    // Persistence
    // ============================================================

    /// Write the in-memory ledger back to the project's ledger document.
    pub fn save(&self) -> Result<()> {
        let path = self.layout.ledger_path();
        layout::write_json(&path, &self.ledger)?;
        tracing::debug!(path = %path.display(), features = self.ledger.len(), "saved ledger");
        Ok(())
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| LedgerError::io(path, e))?;
    serde_json::from_str(&content).map_err(|source| LedgerError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
