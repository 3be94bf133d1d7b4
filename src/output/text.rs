//! Text output formatter for human-readable display
//!
//! This module provides:
//! - Per-repository staleness lines with colors
//! - Repository name alignment for scanning long reports
//! - Totals footer across the audited organization

use crate::domain::{AuditResult, Repository};
use crate::output::ReportFormatter;
use colored::Colorize;
use std::collections::HashMap;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Only print the totals footer
    quiet: bool,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(quiet: bool) -> Self {
        Self { quiet, color: true }
    }

    /// Create a new text formatter with color option
    pub fn with_color(quiet: bool, color: bool) -> Self {
        Self { quiet, color }
    }

    /// Calculate the maximum repository name length for alignment
    fn max_name_length(&self, results: &[AuditResult]) -> usize {
        results
            .iter()
            .map(|r| r.repository_name.len())
            .max()
            .unwrap_or(0)
    }

    /// Format a single repository line
    fn format_repository_line(
        &self,
        result: &AuditResult,
        repository: Option<&Repository>,
        max_name_len: usize,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let language = repository
            .and_then(|r| r.language.as_deref())
            .unwrap_or("unknown");
        let supported = repository.is_some_and(|r| r.ecosystem().is_some());

        if self.color {
            let status = if !supported {
                "unsupported".dimmed().to_string()
            } else if result.stale_count == 0 {
                "up to date".green().to_string()
            } else {
                format!("{} outdated", result.stale_count)
                    .red()
                    .bold()
                    .to_string()
            };
            writeln!(
                writer,
                "  {:width$} {} {}",
                result.repository_name,
                format!("({})", language).dimmed(),
                status,
                width = max_name_len
            )
        } else {
            let status = if !supported {
                "unsupported".to_string()
            } else if result.stale_count == 0 {
                "up to date".to_string()
            } else {
                format!("{} outdated", result.stale_count)
            };
            writeln!(
                writer,
                "  {:width$} ({}) {}",
                result.repository_name,
                language,
                status,
                width = max_name_len
            )
        }
    }

    /// Format the totals footer
    fn format_totals(&self, results: &[AuditResult], writer: &mut dyn Write) -> std::io::Result<()> {
        let audited = results.len();
        let total_stale: usize = results.iter().map(|r| r.stale_count).sum();
        let affected = results.iter().filter(|r| r.stale_count > 0).count();

        if self.quiet {
            // Minimal output
            if total_stale > 0 {
                if self.color {
                    writeln!(
                        writer,
                        "{} {}",
                        total_stale.to_string().red(),
                        "outdated"
                    )?;
                } else {
                    writeln!(writer, "{} outdated", total_stale)?;
                }
            } else if self.color {
                writeln!(writer, "{}", "No outdated dependencies".dimmed())?;
            } else {
                writeln!(writer, "No outdated dependencies")?;
            }
            return Ok(());
        }

        if self.color {
            writeln!(writer, "{}:", "Summary".bold())?;
            writeln!(
                writer,
                "  {} repositor{} audited",
                audited.to_string().cyan(),
                if audited == 1 { "y" } else { "ies" }
            )?;
            if total_stale > 0 {
                writeln!(
                    writer,
                    "  {} outdated dependenc{} across {} repositor{}",
                    total_stale.to_string().red(),
                    if total_stale == 1 { "y" } else { "ies" },
                    affected.to_string().red(),
                    if affected == 1 { "y" } else { "ies" }
                )?;
            } else {
                writeln!(writer, "  {}", "No outdated dependencies".green())?;
            }
        } else {
            writeln!(writer, "Summary:")?;
            writeln!(
                writer,
                "  {} repositor{} audited",
                audited,
                if audited == 1 { "y" } else { "ies" }
            )?;
            if total_stale > 0 {
                writeln!(
                    writer,
                    "  {} outdated dependenc{} across {} repositor{}",
                    total_stale,
                    if total_stale == 1 { "y" } else { "ies" },
                    affected,
                    if affected == 1 { "y" } else { "ies" }
                )?;
            } else {
                writeln!(writer, "  No outdated dependencies")?;
            }
        }

        Ok(())
    }
}

impl ReportFormatter for TextFormatter {
    fn format(
        &self,
        repositories: &[Repository],
        results: &[AuditResult],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if self.quiet {
            return self.format_totals(results, writer);
        }

        let by_id: HashMap<u64, &Repository> =
            repositories.iter().map(|r| (r.id, r)).collect();
        let max_name_len = self.max_name_length(results).max(20);

        for result in results {
            let repository = by_id.get(&result.repository_id).copied();
            self.format_repository_line(result, repository, max_name_len, writer)?;
        }
        if !results.is_empty() {
            writeln!(writer)?;
        }

        self.format_totals(results, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_repositories() -> Vec<Repository> {
        vec![
            Repository::new(1, "billing-api", "main", Some("JavaScript".to_string())),
            Repository::new(2, "payments", "main", Some("Python".to_string())),
            Repository::new(3, "infra-scripts", "main", Some("Go".to_string())),
        ]
    }

    fn sample_results() -> Vec<AuditResult> {
        vec![
            AuditResult::new(1, "billing-api", 3),
            AuditResult::new(2, "payments", 0),
            AuditResult::new(3, "infra-scripts", 0),
        ]
    }

    #[test]
    fn test_format_normal() {
        let formatter = TextFormatter::with_color(false, false);
        let mut output = Vec::new();

        formatter
            .format(&sample_repositories(), &sample_results(), &mut output)
            .unwrap();
        let output_str = String::from_utf8(output).unwrap();

        assert!(output_str.contains("billing-api"));
        assert!(output_str.contains("(JavaScript)"));
        assert!(output_str.contains("3 outdated"));
        assert!(output_str.contains("payments"));
        assert!(output_str.contains("up to date"));
        assert!(output_str.contains("Summary:"));
        assert!(output_str.contains("3 repositories audited"));
        assert!(output_str.contains("3 outdated dependencies across 1 repository"));
    }

    #[test]
    fn test_format_marks_unsupported_language() {
        let formatter = TextFormatter::with_color(false, false);
        let mut output = Vec::new();

        formatter
            .format(&sample_repositories(), &sample_results(), &mut output)
            .unwrap();
        let output_str = String::from_utf8(output).unwrap();

        assert!(output_str.contains("infra-scripts"));
        assert!(output_str.contains("(Go) unsupported"));
    }

    #[test]
    fn test_format_quiet() {
        let formatter = TextFormatter::with_color(true, false);
        let mut output = Vec::new();

        formatter
            .format(&sample_repositories(), &sample_results(), &mut output)
            .unwrap();
        let output_str = String::from_utf8(output).unwrap();

        assert!(output_str.contains("3 outdated"));
        assert!(!output_str.contains("Summary:"));
        assert!(!output_str.contains("billing-api"));
    }

    #[test]
    fn test_format_quiet_all_current() {
        let formatter = TextFormatter::with_color(true, false);
        let results = vec![AuditResult::new(1, "billing-api", 0)];
        let mut output = Vec::new();

        formatter
            .format(&sample_repositories(), &results, &mut output)
            .unwrap();
        let output_str = String::from_utf8(output).unwrap();

        assert!(output_str.contains("No outdated dependencies"));
    }

    #[test]
    fn test_format_empty_results() {
        let formatter = TextFormatter::with_color(false, false);
        let mut output = Vec::new();

        formatter.format(&[], &[], &mut output).unwrap();
        let output_str = String::from_utf8(output).unwrap();

        assert!(output_str.contains("0 repositories audited"));
        assert!(output_str.contains("No outdated dependencies"));
    }

    #[test]
    fn test_format_without_repository_metadata() {
        let formatter = TextFormatter::with_color(false, false);
        let results = vec![AuditResult::new(9, "orphan", 1)];
        let mut output = Vec::new();

        formatter.format(&[], &results, &mut output).unwrap();
        let output_str = String::from_utf8(output).unwrap();

        // No matching repository entry means language cannot be shown
        assert!(output_str.contains("orphan"));
        assert!(output_str.contains("(unknown) unsupported"));
    }
}
