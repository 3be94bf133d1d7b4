//! Audit output document

use crate::domain::Repository;
use serde::{Deserialize, Serialize};

/// The per-repository audit outcome handed to the index sink.
///
/// Serialized field names are the dashboard's established document schema
/// and must not change; the index merges these documents into whatever else
/// has been harvested for the same repository id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditResult {
    /// Repository identifier the index keys documents by
    #[serde(rename = "id_repositorio")]
    pub repository_id: u64,
    /// Repository name
    #[serde(rename = "Repositorio")]
    pub repository_name: String,
    /// Number of declared dependencies judged stale
    #[serde(rename = "dependencias_desactualizadas")]
    pub stale_count: usize,
}

impl AuditResult {
    /// Create a result with a known stale count
    pub fn new(repository_id: u64, repository_name: impl Into<String>, stale_count: usize) -> Self {
        Self {
            repository_id,
            repository_name: repository_name.into(),
            stale_count,
        }
    }

    /// Result for a repository where no audit ran (unsupported language,
    /// absent manifest). The count is zero, not an error.
    pub fn empty(repository: &Repository) -> Self {
        Self::new(repository.id, repository.name.clone(), 0)
    }
}
