use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Project name used when the metadata document does not name the project.
pub const DEFAULT_PROJECT_NAME: &str = "Unnamed Project";

/// Feature id prefix used when the metadata document has none.
pub const DEFAULT_PROJECT_INITIALS: &str = "F";

/// The project metadata document (`project.json`).
///
/// Defaults are applied while deserializing, so `project_initials` is never
/// empty once loaded. Fields other than the two known ones are preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawProjectMetadata")]
pub struct ProjectMetadata {
    pub project_name: String,
    pub project_initials: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize)]
struct RawProjectMetadata {
    #[serde(default)]
    project_name: Option<String>,
    #[serde(default)]
    project_initials: Option<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl From<RawProjectMetadata> for ProjectMetadata {
    fn from(raw: RawProjectMetadata) -> Self {
        Self {
            project_name: raw
                .project_name
                .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string()),
            project_initials: raw
                .project_initials
                .filter(|initials| !initials.is_empty())
                .unwrap_or_else(|| DEFAULT_PROJECT_INITIALS.to_string()),
            extra: raw.extra,
        }
    }
}

impl ProjectMetadata {
    /// Metadata for a new project. Initials are derived from the name when not given.
    pub fn new(project_name: impl Into<String>, project_initials: Option<String>) -> Self {
        let project_name = project_name.into();
        let project_initials = project_initials
            .filter(|initials| !initials.is_empty())
            .unwrap_or_else(|| derive_initials(&project_name));
        Self {
            project_name,
            project_initials,
            extra: Map::new(),
        }
    }
}

/// Uppercased first alphanumeric character of each word in `name`.
///
/// Falls back to [`DEFAULT_PROJECT_INITIALS`] when the name has no usable words.
pub fn derive_initials(name: &str) -> String {
    let initials: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
        .flat_map(char::to_uppercase)
        .collect();

    if initials.is_empty() {
        DEFAULT_PROJECT_INITIALS.to_string()
    } else {
        initials
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_defaults_for_missing_fields() {
        let meta: ProjectMetadata = serde_json::from_str("{}").unwrap();
        assert_eq!(meta.project_name, "Unnamed Project");
        assert_eq!(meta.project_initials, "F");
    }

    #[test]
    fn empty_initials_fall_back_to_default() {
        let meta: ProjectMetadata =
            serde_json::from_str(r#"{"project_name":"Demo","project_initials":""}"#).unwrap();
        assert_eq!(meta.project_name, "Demo");
        assert_eq!(meta.project_initials, "F");
    }

    #[test]
    fn preserves_unknown_fields() {
        let meta: ProjectMetadata = serde_json::from_str(
            r#"{"project_name":"Demo","project_initials":"DM","engine":"godot"}"#,
        )
        .unwrap();
        assert_eq!(meta.extra.get("engine"), Some(&Value::from("godot")));

        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["engine"], "godot");
        assert_eq!(json["project_initials"], "DM");
    }

    #[test]
    fn derives_initials_from_words() {
        assert_eq!(derive_initials("Space Rocket Game"), "SRG");
        assert_eq!(derive_initials("  tiny   (demo) "), "TD");
        assert_eq!(derive_initials("--- ***"), "F");
        assert_eq!(derive_initials(""), "F");
    }
}
