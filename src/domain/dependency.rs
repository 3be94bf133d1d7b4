//! Dependency declaration extracted from a manifest

use crate::domain::Ecosystem;
use std::fmt;

/// A single dependency as declared in a manifest.
///
/// `requirement` is the raw declared version or constraint, untouched by the
/// parser. For Maven the name is the `groupId:artifactId` coordinate.
/// Declarations are immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyDeclaration {
    /// Package name as the registry knows it
    pub name: String,
    /// Declared version or constraint string
    pub requirement: String,
    /// Ecosystem the declaration came from
    pub ecosystem: Ecosystem,
}

impl DependencyDeclaration {
    /// Create a declaration
    pub fn new(
        name: impl Into<String>,
        requirement: impl Into<String>,
        ecosystem: Ecosystem,
    ) -> Self {
        Self {
            name: name.into(),
            requirement: requirement.into(),
            ecosystem,
        }
    }
}

impl fmt::Display for DependencyDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.requirement)
    }
}
