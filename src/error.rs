//! Error types for ledger operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while opening, mutating, querying or saving a ledger.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The project metadata or ledger document does not exist.
    #[error("document not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// The document exists but is not valid JSON of the expected shape.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An existing key does not follow the `prefix-integer` pattern.
    #[error("corrupt ledger: feature id {feature_id:?} is not of the form PREFIX-N")]
    CorruptLedger { feature_id: String },

    /// A stored entry lacks a field the query depends on.
    #[error("feature {feature_id} is missing required field `{field}`")]
    MissingField {
        feature_id: String,
        field: &'static str,
    },

    /// `init_project` was pointed at a project that already has a ledger.
    #[error("project already initialized: {}", .path.display())]
    AlreadyInitialized { path: PathBuf },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl LedgerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }
}

/// Result type for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
