//! Manifest parsing
//!
//! This module provides one parser per ecosystem, each extracting
//! dependency declarations from the fetched manifest content:
//! - requirements.txt pinned `name==version` lines
//! - Gemfile pessimistic gem specifiers
//! - Maven POM `<dependency>` elements
//! - package.json dependency maps
//! - composer.json require maps

mod composer_json;
mod gemfile;
mod package_json;
mod pom_xml;
mod requirements_txt;

pub use composer_json::ComposerJsonParser;
pub use gemfile::GemfileParser;
pub use package_json::PackageJsonParser;
pub use pom_xml::PomXmlParser;
pub use requirements_txt::RequirementsTxtParser;

use crate::domain::{DependencyDeclaration, Ecosystem};
use crate::github::RawManifest;

/// Trait for manifest parsers.
///
/// Parsing is infallible by signature: content that does not match the
/// expected shape (wrong manifest variant, unparseable document) yields an
/// empty declaration list, never an error.
pub trait ManifestParser {
    /// Returns the ecosystem this parser handles
    fn ecosystem(&self) -> Ecosystem;

    /// Extract dependency declarations from fetched manifest content
    fn parse(&self, manifest: &RawManifest) -> Vec<DependencyDeclaration>;
}

/// Get a manifest parser for the specified ecosystem
pub fn get_parser(ecosystem: Ecosystem) -> Box<dyn ManifestParser> {
    match ecosystem {
        Ecosystem::Python => Box::new(RequirementsTxtParser),
        Ecosystem::Ruby => Box::new(GemfileParser),
        Ecosystem::Java => Box::new(PomXmlParser),
        Ecosystem::JavaScript => Box::new(PackageJsonParser),
        Ecosystem::Php => Box::new(ComposerJsonParser),
    }
}
