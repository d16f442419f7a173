//! Term-count keyword scoring.

use crate::error::{LedgerError, Result};
use crate::models::LedgerEntry;

/// Lowercased `title description keywords` text that search terms are matched against.
pub(crate) fn searchable_text(feature_id: &str, entry: &LedgerEntry) -> Result<String> {
    let missing = |field| LedgerError::MissingField {
        feature_id: feature_id.to_string(),
        field,
    };
    let title = entry.title.as_deref().ok_or_else(|| missing("title"))?;
    let description = entry
        .description
        .as_deref()
        .ok_or_else(|| missing("description"))?;
    let keywords = entry.keywords.as_ref().ok_or_else(|| missing("keywords"))?;

    Ok(format!("{} {} {}", title, description, keywords.join(" ")).to_lowercase())
}

/// Number of `terms` occurring anywhere in `text`, as plain substrings.
///
/// Terms must already be lowercased. Each term counts at most once.
pub(crate) fn score(text: &str, terms: &[String]) -> u32 {
    terms.iter().filter(|term| text.contains(term.as_str())).count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewFeature;
    use chrono::NaiveDate;

    fn entry(title: &str, description: &str, keywords: &[&str]) -> LedgerEntry {
        NewFeature {
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            keywords: Some(keywords.iter().map(|k| k.to_string()).collect()),
            ..NewFeature::default()
        }
        .into_entry("F-1", NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    }

    #[test]
    fn joins_and_lowercases_fields() {
        let e = entry("Jump Pad", "Launches The Player", &["Physics", "Level"]);
        let text = searchable_text("F-1", &e).unwrap();
        assert_eq!(text, "jump pad launches the player physics level");
    }

    #[test]
    fn counts_substring_matches_once_per_term() {
        let text = "jump pad launches the player";
        let terms = vec!["lay".to_string(), "pad".to_string(), "zzz".to_string()];
        assert_eq!(score(text, &terms), 2);

        let repeated = vec!["pad".to_string(), "pad".to_string()];
        assert_eq!(score(text, &repeated), 2);
    }

    #[test]
    fn reports_first_missing_field() {
        let mut e = entry("t", "d", &[]);
        e.description = None;
        e.keywords = None;
        match searchable_text("F-9", &e) {
            Err(LedgerError::MissingField { feature_id, field }) => {
                assert_eq!(feature_id, "F-9");
                assert_eq!(field, "description");
            }
            other => panic!("expected MissingField, got {other:?}"),
        }
    }
}
