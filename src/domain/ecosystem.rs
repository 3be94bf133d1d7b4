//! Ecosystem type definitions for the supported package registries

use serde::{Deserialize, Serialize};
use std::fmt;

/// Packaging ecosystems the audit understands.
///
/// One variant per audited language; everything the audit needs per
/// ecosystem (manifest filename, registry, parser, comparator) dispatches
/// over this enum, so adding an ecosystem means adding a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ecosystem {
    /// Python / PyPI (requirements.txt)
    Python,
    /// Ruby / RubyGems (gemfile)
    Ruby,
    /// Java / Maven Central (pom.xml)
    Java,
    /// JavaScript / npm (package.json)
    JavaScript,
    /// PHP / Packagist (composer.json)
    Php,
}

impl Ecosystem {
    /// Resolves a repository's primary-language name to an ecosystem.
    ///
    /// Matching is exact and case-sensitive on the names the language
    /// resolver reports. Anything else means no audit is performed.
    pub fn from_language(name: &str) -> Option<Self> {
        match name {
            "Python" => Some(Ecosystem::Python),
            "Ruby" => Some(Ecosystem::Ruby),
            "Java" => Some(Ecosystem::Java),
            "JavaScript" => Some(Ecosystem::JavaScript),
            "PHP" => Some(Ecosystem::Php),
            _ => None,
        }
    }

    /// Returns the manifest filename requested from the repository.
    ///
    /// The Ruby entry is lower case on purpose; that is the path the
    /// content requests have always used.
    pub fn manifest_filename(&self) -> &'static str {
        match self {
            Ecosystem::Python => "requirements.txt",
            Ecosystem::Ruby => "gemfile",
            Ecosystem::Java => "pom.xml",
            Ecosystem::JavaScript => "package.json",
            Ecosystem::Php => "composer.json",
        }
    }

    /// Returns the name of the registry queried for latest versions
    pub fn registry_name(&self) -> &'static str {
        match self {
            Ecosystem::Python => "PyPI",
            Ecosystem::Ruby => "RubyGems",
            Ecosystem::Java => "Maven Central",
            Ecosystem::JavaScript => "npm",
            Ecosystem::Php => "Packagist",
        }
    }

    /// Returns the display name for this ecosystem's language
    pub fn display_name(&self) -> &'static str {
        match self {
            Ecosystem::Python => "Python",
            Ecosystem::Ruby => "Ruby",
            Ecosystem::Java => "Java",
            Ecosystem::JavaScript => "JavaScript",
            Ecosystem::Php => "PHP",
        }
    }

    /// Returns all supported ecosystems
    pub fn all() -> &'static [Ecosystem] {
        &[
            Ecosystem::Python,
            Ecosystem::Ruby,
            Ecosystem::Java,
            Ecosystem::JavaScript,
            Ecosystem::Php,
        ]
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
