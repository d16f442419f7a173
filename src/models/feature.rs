use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Category assigned when the caller does not supply one.
pub const DEFAULT_FEATURE_TYPE: &str = "new_feature";

/// Lifecycle state assigned when the caller does not supply one.
pub const DEFAULT_FEATURE_STATUS: &str = "requested";

/// Date format used for every field of [`FeatureDates`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One feature record in the ledger.
///
/// Entries created through the ledger always carry every field. Entries read
/// from disk may have been hand-edited, so each field is optional: a missing
/// field stays missing in memory and is not written back on save. Fields this
/// type does not know about are kept in `extra` and round-trip untouched.
///
/// On disk the fields appear in the order `type, status, title, description,
/// keywords, dates, artifacts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dates: Option<FeatureDates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<FeatureArtifacts>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Milestone dates of a feature, each `YYYY-MM-DD` or empty when unset.
///
/// Only `created` is filled in by the ledger; the rest are set by whoever
/// moves the feature through its lifecycle. Like [`LedgerEntry`], a field
/// missing on disk stays missing and unknown keys are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureDates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fip_approved: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implemented: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superseded: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FeatureDates {
    /// Dates for a feature created on `created`, with every milestone set to empty.
    pub fn created_on(created: NaiveDate) -> Self {
        Self {
            created: Some(created.format(DATE_FORMAT).to_string()),
            fip_approved: Some(String::new()),
            implemented: Some(String::new()),
            validated: Some(String::new()),
            superseded: Some(String::new()),
            extra: Map::new(),
        }
    }
}

/// Paths of the documents that accompany a feature, relative to the ledger directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureArtifacts {
    /// The original feature request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<String>,
    /// The feature implementation proposal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fip: Option<String>,
    /// The architecture decision record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adr: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FeatureArtifacts {
    pub fn for_feature(feature_id: &str) -> Self {
        Self {
            request: Some(format!("{feature_id}/request.md")),
            fip: Some(format!("{feature_id}/fip.md")),
            adr: Some(format!("{feature_id}/adr.md")),
            extra: Map::new(),
        }
    }
}

/// Input for adding a feature. Every field is optional and has a documented default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewFeature {
    /// Defaults to an empty string.
    pub title: Option<String>,
    /// Defaults to an empty string.
    pub description: Option<String>,
    /// Defaults to no keywords.
    pub keywords: Option<Vec<String>>,
    /// Defaults to [`DEFAULT_FEATURE_TYPE`].
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Defaults to [`DEFAULT_FEATURE_STATUS`].
    pub status: Option<String>,
}

impl NewFeature {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Build the full ledger entry for `feature_id`, applying defaults.
    pub fn into_entry(self, feature_id: &str, created: NaiveDate) -> LedgerEntry {
        LedgerEntry {
            kind: Some(self.kind.unwrap_or_else(|| DEFAULT_FEATURE_TYPE.to_string())),
            status: Some(
                self.status
                    .unwrap_or_else(|| DEFAULT_FEATURE_STATUS.to_string()),
            ),
            title: Some(self.title.unwrap_or_default()),
            description: Some(self.description.unwrap_or_default()),
            keywords: Some(self.keywords.unwrap_or_default()),
            dates: Some(FeatureDates::created_on(created)),
            artifacts: Some(FeatureArtifacts::for_feature(feature_id)),
            extra: Map::new(),
        }
    }
}

/// Split a feature id into its prefix and positive sequence number.
///
/// The split happens at the last `-`, so prefixes may contain dashes. Returns
/// `None` unless the suffix is a non-empty run of ASCII digits greater than zero.
pub fn parse_feature_id(feature_id: &str) -> Option<(&str, u64)> {
    let (prefix, number) = feature_id.rsplit_once('-')?;
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match number.parse::<u64>() {
        Ok(n) if n > 0 => Some((prefix, n)),
        _ => None,
    }
}

/// Total order used for query results: by prefix, then numerically by
/// sequence number, so `F-2` sorts before `F-10`. Ids that do not parse
/// fall back to plain string comparison after all well-formed ids.
pub fn compare_feature_ids(a: &str, b: &str) -> Ordering {
    match (parse_feature_id(a), parse_feature_id(b)) {
        (Some((pa, na)), Some((pb, nb))) => pa.cmp(pb).then(na.cmp(&nb)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}
