//! On-disk layout of a project's ledger, and project initialization.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{LedgerError, Result};
use crate::models::ProjectMetadata;

/// Directory under the project root holding every ledger document.
pub const LEDGER_DIR: &str = ".antigine";
pub const LEDGER_FILE: &str = "ledger.json";
pub const METADATA_FILE: &str = "project.json";

/// Resolved locations of the documents belonging to one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn ledger_dir(&self) -> PathBuf {
        self.root.join(LEDGER_DIR)
    }

    pub fn ledger_path(&self) -> PathBuf {
        self.ledger_dir().join(LEDGER_FILE)
    }

    pub fn metadata_path(&self) -> PathBuf {
        self.ledger_dir().join(METADATA_FILE)
    }
}

/// Create the ledger directory, metadata document and an empty ledger for a project.
///
/// Refuses to touch a project that already has a ledger document.
pub fn init_project(
    root: impl AsRef<Path>,
    project_name: &str,
    project_initials: Option<String>,
) -> Result<ProjectMetadata> {
    let layout = ProjectLayout::new(root.as_ref());
    let ledger_path = layout.ledger_path();
    if ledger_path.exists() {
        return Err(LedgerError::AlreadyInitialized { path: ledger_path });
    }

    let dir = layout.ledger_dir();
    fs::create_dir_all(&dir).map_err(|e| LedgerError::io(&dir, e))?;

    let metadata = ProjectMetadata::new(project_name, project_initials);
    write_json(&layout.metadata_path(), &metadata)?;
    write_json(&ledger_path, &serde_json::Map::new())?;

    tracing::info!(
        root = %layout.root().display(),
        initials = %metadata.project_initials,
        "initialized project ledger"
    );
    Ok(metadata)
}

/// Write `value` as pretty JSON, replacing `path` via a sibling temp file.
pub(crate) fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut content = serde_json::to_string_pretty(value)?;
    content.push('\n');

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, content).map_err(|e| LedgerError::io(&tmp, e))?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(LedgerError::io(path, e));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_paths_under_ledger_dir() {
        let layout = ProjectLayout::new("/games/rocket");
        assert_eq!(layout.ledger_dir(), PathBuf::from("/games/rocket/.antigine"));
        assert_eq!(
            layout.ledger_path(),
            PathBuf::from("/games/rocket/.antigine/ledger.json")
        );
        assert_eq!(
            layout.metadata_path(),
            PathBuf::from("/games/rocket/.antigine/project.json")
        );
    }

    #[test]
    fn write_json_replaces_target_and_leaves_no_temp_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("ledger.json");
        fs::write(&path, "old").unwrap();

        write_json(&path, &serde_json::json!({"F-1": {}})).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let saved: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(saved, serde_json::json!({"F-1": {}}));
        assert!(!dir.path().join("ledger.json.tmp").exists());
    }

    #[test]
    fn write_json_removes_temp_file_when_rename_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        // A non-empty directory at the target makes the rename fail.
        let path = dir.path().join("ledger.json");
        fs::create_dir_all(path.join("occupied")).unwrap();

        let result = write_json(&path, &serde_json::json!({}));

        assert!(matches!(result, Err(LedgerError::Io { .. })));
        assert!(!dir.path().join("ledger.json.tmp").exists());
    }
}
