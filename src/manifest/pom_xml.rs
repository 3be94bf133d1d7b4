//! pom.xml parser for Maven projects
//!
//! Handles:
//! - `<dependency>` elements anywhere in the document (including
//!   dependencyManagement and plugin blocks)
//! - POM-namespaced documents only; elements outside the namespace are ignored
//! - Property placeholders (`${...}`) and absent versions, which are skipped

use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;

use crate::domain::{DependencyDeclaration, Ecosystem};
use crate::github::RawManifest;
use crate::manifest::ManifestParser;

const POM_NAMESPACE: Namespace<'static> = Namespace(b"http://maven.apache.org/POM/4.0.0");

/// Parser for Maven pom.xml files
pub struct PomXmlParser;

impl ManifestParser for PomXmlParser {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Java
    }

    fn parse(&self, manifest: &RawManifest) -> Vec<DependencyDeclaration> {
        let RawManifest::Xml(content) = manifest else {
            return Vec::new();
        };
        // Any malformed document yields an empty list rather than an error.
        collect_dependencies(content).unwrap_or_default()
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Field {
    GroupId,
    ArtifactId,
    Version,
}

/// A `<dependency>` element currently being read.
///
/// Coordinates are only taken from direct children, so the groupId of a
/// nested `<exclusion>` never leaks into the declaration.
struct PartialDependency {
    depth: usize,
    group_id: Option<String>,
    artifact_id: Option<String>,
    version: Option<String>,
    field: Option<Field>,
}

impl PartialDependency {
    fn opened_at(depth: usize) -> Self {
        Self {
            depth,
            group_id: None,
            artifact_id: None,
            version: None,
            field: None,
        }
    }

    fn open_field(&mut self, local: &[u8]) {
        self.field = match local {
            b"groupId" => {
                self.group_id = Some(String::new());
                Some(Field::GroupId)
            }
            b"artifactId" => {
                self.artifact_id = Some(String::new());
                Some(Field::ArtifactId)
            }
            b"version" => {
                self.version = Some(String::new());
                Some(Field::Version)
            }
            _ => None,
        };
    }

    fn append_text(&mut self, text: &str) {
        let buffer = match self.field {
            Some(Field::GroupId) => self.group_id.as_mut(),
            Some(Field::ArtifactId) => self.artifact_id.as_mut(),
            Some(Field::Version) => self.version.as_mut(),
            None => None,
        };
        if let Some(buffer) = buffer {
            buffer.push_str(text);
        }
    }

    fn into_declaration(self) -> Option<DependencyDeclaration> {
        let group = self.group_id.filter(|g| !g.is_empty())?;
        let artifact = self.artifact_id.filter(|a| !a.is_empty())?;
        let version = self.version.filter(|v| !v.is_empty())?;
        if version.starts_with("${") {
            return None;
        }
        Some(DependencyDeclaration::new(
            format!("{group}:{artifact}"),
            version,
            Ecosystem::Java,
        ))
    }
}

fn collect_dependencies(content: &str) -> Option<Vec<DependencyDeclaration>> {
    let mut reader = NsReader::from_str(content);
    let mut declarations = Vec::new();
    let mut depth = 0usize;
    let mut current: Option<PartialDependency> = None;

    loop {
        match reader.read_resolved_event().ok()? {
            (resolve, Event::Start(element)) => {
                depth += 1;
                if resolve == ResolveResult::Bound(POM_NAMESPACE) {
                    let local = element.local_name();
                    if current.is_none() && local.as_ref() == b"dependency" {
                        current = Some(PartialDependency::opened_at(depth));
                    } else if let Some(dep) = current.as_mut() {
                        if depth == dep.depth + 1 {
                            dep.open_field(local.as_ref());
                        }
                    }
                }
            }
            (resolve, Event::Empty(element)) => {
                // Opens and closes in place; a bare `<version/>` counts as an
                // absent version.
                if resolve == ResolveResult::Bound(POM_NAMESPACE) {
                    if let Some(dep) = current.as_mut() {
                        if depth == dep.depth {
                            dep.open_field(element.local_name().as_ref());
                            dep.field = None;
                        }
                    }
                }
            }
            (_, Event::Text(text)) => {
                if let Some(dep) = current.as_mut() {
                    if dep.field.is_some() {
                        let unescaped = text.unescape().ok()?;
                        dep.append_text(&unescaped);
                    }
                }
            }
            (_, Event::End(_)) => {
                let closes_dependency = current.as_ref().is_some_and(|dep| dep.depth == depth);
                if closes_dependency {
                    if let Some(declaration) =
                        current.take().and_then(PartialDependency::into_declaration)
                    {
                        declarations.push(declaration);
                    }
                } else if let Some(dep) = current.as_mut() {
                    if depth == dep.depth + 1 {
                        dep.field = None;
                    }
                }
                depth = depth.saturating_sub(1);
            }
            (_, Event::Eof) => break,
            _ => {}
        }
    }

    Some(declarations)
}
