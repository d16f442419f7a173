//! Plain-text rendering of query results for the command line.

use crate::ledger::Ledger;
use crate::models::{LedgerEntry, SearchHit};

/// Render status-filter results, one feature per line.
///
/// Example output:
/// ```text
/// F-1   requested  Jump pad
/// F-12  requested  Save slots
/// ```
pub fn render_feature_list(features: &[(String, LedgerEntry)]) -> String {
    let width = id_width(features.iter().map(|(id, _)| id.as_str()));
    let mut output = String::new();
    for (feature_id, entry) in features {
        output.push_str(&format!(
            "{:<width$}  {}  {}\n",
            feature_id,
            entry.status.as_deref().unwrap_or("-"),
            title_of(entry),
        ));
    }
    output
}

/// Render ranked search hits with their scores and titles, best first.
pub fn render_search_hits(hits: &[SearchHit], ledger: &Ledger) -> String {
    let width = id_width(hits.iter().map(|hit| hit.feature_id.as_str()));
    let mut output = String::new();
    for hit in hits {
        output.push_str(&format!(
            "{:<width$}  {:>3}  {}\n",
            hit.feature_id,
            hit.score,
            ledger.get(&hit.feature_id).map_or(UNTITLED, title_of),
        ));
    }
    output
}

fn id_width<'a>(ids: impl Iterator<Item = &'a str>) -> usize {
    ids.map(str::len).max().unwrap_or(0)
}

const UNTITLED: &str = "(untitled)";

fn title_of(entry: &LedgerEntry) -> &str {
    match entry.title.as_deref() {
        Some(title) if !title.is_empty() => title,
        _ => UNTITLED,
    }
}
