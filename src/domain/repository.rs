//! Repository descriptor consumed by the audit

use crate::domain::Ecosystem;
use serde::{Deserialize, Serialize};

/// One organization repository as handed to the audit.
///
/// The descriptor is assembled by external collaborators: the repository
/// listing supplies id and name, the branch-activity lookup supplies the
/// most-active branch, and the language breakdown is reduced to the single
/// most-declared language before it gets here. The audit only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Stable repository identifier, used to key index documents
    pub id: u64,
    /// Repository name within the organization
    pub name: String,
    /// Branch ref the manifest is read from
    pub branch: String,
    /// Primary language name as reported by the language resolver
    #[serde(default)]
    pub language: Option<String>,
}

impl Repository {
    /// Create a repository descriptor
    pub fn new(
        id: u64,
        name: impl Into<String>,
        branch: impl Into<String>,
        language: Option<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            branch: branch.into(),
            language,
        }
    }

    /// The ecosystem this repository is audited under, if its primary
    /// language is one of the supported set.
    pub fn ecosystem(&self) -> Option<Ecosystem> {
        self.language.as_deref().and_then(Ecosystem::from_language)
    }
}
