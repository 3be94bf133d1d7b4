//! JSON output formatter for machine processing
//!
//! This module provides:
//! - JSON serialization of the audit report
//! - The wire documents themselves, plus a summary block

use crate::domain::{AuditResult, Repository};
use crate::output::ReportFormatter;
use serde::Serialize;
use std::collections::HashMap;
use std::io::Write;

/// JSON formatter for machine-readable output
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

/// JSON representation of the full report
#[derive(Serialize)]
struct JsonReport<'a> {
    /// Summary statistics across the batch
    summary: JsonSummary,
    /// One entry per audited repository, in audit order
    repositories: Vec<JsonRepository<'a>>,
}

/// JSON representation of summary statistics
#[derive(Serialize)]
struct JsonSummary {
    /// Number of repositories audited
    audited: usize,
    /// Total stale dependencies across the batch
    outdated: usize,
    /// Repositories with at least one stale dependency
    affected: usize,
}

/// One repository's audit outcome, wire document plus context
#[derive(Serialize)]
struct JsonRepository<'a> {
    /// The index document, under its fixed wire field names
    #[serde(flatten)]
    document: &'a AuditResult,
    /// Primary language of the repository, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<&'a str>,
}

impl ReportFormatter for JsonFormatter {
    fn format(
        &self,
        repositories: &[Repository],
        results: &[AuditResult],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let by_id: HashMap<u64, &Repository> = repositories.iter().map(|r| (r.id, r)).collect();

        let report = JsonReport {
            summary: JsonSummary {
                audited: results.len(),
                outdated: results.iter().map(|r| r.stale_count).sum(),
                affected: results.iter().filter(|r| r.stale_count > 0).count(),
            },
            repositories: results
                .iter()
                .map(|result| JsonRepository {
                    document: result,
                    language: by_id
                        .get(&result.repository_id)
                        .and_then(|r| r.language.as_deref()),
                })
                .collect(),
        };

        let json = serde_json::to_string_pretty(&report).map_err(std::io::Error::other)?;
        writeln!(writer, "{}", json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(repositories: &[Repository], results: &[AuditResult]) -> serde_json::Value {
        let mut output = Vec::new();
        JsonFormatter::new()
            .format(repositories, results, &mut output)
            .unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn test_report_carries_wire_documents() {
        let repositories = vec![Repository::new(
            1,
            "svc",
            "main",
            Some("JavaScript".to_string()),
        )];
        let results = vec![AuditResult::new(1, "svc", 2)];

        let value = render(&repositories, &results);
        let entry = &value["repositories"][0];
        assert_eq!(entry["id_repositorio"], 1);
        assert_eq!(entry["Repositorio"], "svc");
        assert_eq!(entry["dependencias_desactualizadas"], 2);
        assert_eq!(entry["language"], "JavaScript");
    }

    #[test]
    fn test_summary_counts() {
        let repositories = vec![
            Repository::new(1, "a", "main", Some("Python".to_string())),
            Repository::new(2, "b", "main", Some("Ruby".to_string())),
        ];
        let results = vec![AuditResult::new(1, "a", 3), AuditResult::new(2, "b", 0)];

        let value = render(&repositories, &results);
        assert_eq!(value["summary"]["audited"], 2);
        assert_eq!(value["summary"]["outdated"], 3);
        assert_eq!(value["summary"]["affected"], 1);
    }

    #[test]
    fn test_language_omitted_when_unknown() {
        let results = vec![AuditResult::new(9, "orphan", 0)];
        let value = render(&[], &results);
        let entry = &value["repositories"][0];
        assert_eq!(entry["Repositorio"], "orphan");
        assert!(entry.get("language").is_none());
    }

    #[test]
    fn test_empty_batch() {
        let value = render(&[], &[]);
        assert_eq!(value["summary"]["audited"], 0);
        assert_eq!(value["repositories"].as_array().unwrap().len(), 0);
    }
}
