//! composer.json parser for PHP projects
//!
//! Handles:
//! - require
//! - require-dev
//!
//! Platform packages (`php`, `ext-*`) are declared the same way as library
//! packages, so they pass through here and resolve to not-found at the
//! registry.

use serde_json::Value;

use crate::domain::{DependencyDeclaration, Ecosystem};
use crate::github::RawManifest;
use crate::manifest::ManifestParser;

/// Parser for composer.json files
pub struct ComposerJsonParser;

impl ManifestParser for ComposerJsonParser {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Php
    }

    fn parse(&self, manifest: &RawManifest) -> Vec<DependencyDeclaration> {
        let RawManifest::Json(json) = manifest else {
            return Vec::new();
        };

        let mut declarations = Vec::new();
        for key in ["require", "require-dev"] {
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
                Ecosystem::Php,
            ));
        }
    }
}
