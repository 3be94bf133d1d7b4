//! Gemfile parser for Ruby projects
//!
//! Extracts `gem 'name', '~> version'` declarations. Only pessimistic
//! constraints are audited; gems declared without one (or with other
//! operators) are skipped.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{DependencyDeclaration, Ecosystem};
use crate::github::RawManifest;
use crate::manifest::ManifestParser;

static GEM_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"gem ['"](\w+)['"], ['"]~> (.+?)['"]"#).unwrap());

/// Parser for Gemfile files
pub struct GemfileParser;

impl ManifestParser for GemfileParser {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Ruby
    }

    fn parse(&self, manifest: &RawManifest) -> Vec<DependencyDeclaration> {
        let RawManifest::Text(content) = manifest else {
            return Vec::new();
        };

        GEM_LINE
            .captures_iter(content)
            .map(|captures| {
                // The requirement is the version after `~> `, without the
                // operator itself.
                DependencyDeclaration::new(&captures[1], &captures[2], Ecosystem::Ruby)
            })
            .collect()
    }
}
