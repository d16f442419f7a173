//! Domain models for the feature ledger.
//!
//! - [`ProjectMetadata`]: the project's name and the prefix used for feature ids.
//! - [`LedgerEntry`]: one tracked feature, keyed in the ledger by its feature id
//!   (`"{initials}-{n}"`).
//! - [`NewFeature`]: caller input for adding a feature, with per-field defaults.
//! - [`SearchHit`]: a keyword search result.

mod feature;
mod project;
mod search;

pub use feature::*;
pub use project::*;
pub use search::*;
