//! Per-project feature ledger.
//!
//! A project keeps its features in `.antigine/ledger.json`, keyed by ids of the
//! form `"{initials}-{n}"`, with the prefix taken from `.antigine/project.json`.
//! [`LedgerStore`] loads both documents, allocates ids, and answers lookups,
//! status filters and keyword searches against the in-memory ledger.

pub mod error;
pub mod ledger;
pub mod models;
pub mod render;

pub use error::{LedgerError, Result};
pub use ledger::{init_project, Ledger, LedgerStore, ProjectLayout};
