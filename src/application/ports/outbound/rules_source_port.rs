//! Rules source ports - The external class rules data the core consumes
//!
//! Transport is an adapter concern; the core only sees the three-way
//! [`RulesLookup`] outcome.

use anyhow::Result;
use async_trait::async_trait;

/// Outcome of a per-level feature lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesLookup {
    /// Feature names in the source's order
    Features(Vec<String>),
    /// The source has no data for this class level
    NotFound,
    /// The source could not be reached or answered with an error
    Unavailable(String),
}

/// Per-level class feature lookups
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RulesSourcePort: Send + Sync {
    /// Look up features for a lowercase class index at a class level
    async fn lookup(&self, class_index: &str, class_level: u8) -> RulesLookup;
}

/// Listing of class names offered by the rules source.
///
/// Only used to populate pickers; callers degrade failures to an empty list.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClassDirectoryPort: Send + Sync {
    async fn list_class_names(&self) -> Result<Vec<String>>;
}
