//! package.json parser for Node.js projects
//!
//! Handles:
//! - dependencies
//! - devDependencies
//!
//! Entries whose value is not a string (workspace objects, overrides) are
//! skipped.

use serde_json::Value;

use crate::domain::{DependencyDeclaration, Ecosystem};
use crate::github::RawManifest;
use crate::manifest::ManifestParser;

/// Parser for package.json files
pub struct PackageJsonParser;

impl ManifestParser for PackageJsonParser {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::JavaScript
    }

    fn parse(&self, manifest: &RawManifest) -> Vec<DependencyDeclaration> {
        let RawManifest::Json(json) = manifest else {
            return Vec::new();
        };

        let mut declarations = Vec::new();
        for key in ["dependencies", "devDependencies"] {
            collect_section(json, key, &mut declarations);
        }
        declarations
    }
}

fn collect_section(json: &Value, key: &str, output: &mut Vec<DependencyDeclaration>) {
    let Some(section) = json.get(key).and_then(Value::as_object) else {
        return;
    };
    for (name, value) in section {
        if let Some(requirement) = value.as_str() {
            output.push(DependencyDeclaration::new(
                name.clone(),
                requirement,
                Ecosystem::JavaScript,
            ));
        }
    }
}
