//! requirements.txt parser
//!
//! Extracts pinned `name==version` lines. Anything without `==` (comments,
//! editable installs, range specifiers) is skipped; the audit only compares
//! exact pins.

use crate::domain::{DependencyDeclaration, Ecosystem};
use crate::github::RawManifest;
use crate::manifest::ManifestParser;

/// Parser for Python requirements files
pub struct RequirementsTxtParser;

impl ManifestParser for RequirementsTxtParser {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Python
    }

    fn parse(&self, manifest: &RawManifest) -> Vec<DependencyDeclaration> {
        let RawManifest::Text(content) = manifest else {
            return Vec::new();
        };

        content
            .lines()
            .filter_map(|line| {
                // Split on the first `==`; the requirement keeps whatever
                // trails it, exactly as declared.
                let (name, version) = line.split_once("==")?;
                Some(DependencyDeclaration::new(name, version, Ecosystem::Python))
            })
            .collect()
    }
}
