//! Index sinks for audit documents
//!
//! The audit hands each finished [`AuditResult`] to a sink keyed by
//! repository id; writing the same repository twice replaces the earlier
//! document. Provides an in-memory sink for tests and aggregation and a
//! JSON-lines file sink for piping results into an indexer.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::AuditResult;
use crate::error::SinkError;

/// Destination for finished audit documents
pub trait IndexSink {
    /// Write a batch of documents, replacing any earlier document with the
    /// same repository id where the sink supports it
    fn upsert(&mut self, results: &[AuditResult]) -> Result<(), SinkError>;
}

/// In-memory sink keyed by repository id
#[derive(Debug, Default)]
pub struct MemorySink {
    documents: HashMap<u64, AuditResult>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// All stored documents, keyed by repository id
    pub fn documents(&self) -> &HashMap<u64, AuditResult> {
        &self.documents
    }

    /// Look up the document for one repository
    pub fn get(&self, repository_id: u64) -> Option<&AuditResult> {
        self.documents.get(&repository_id)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl IndexSink for MemorySink {
    fn upsert(&mut self, results: &[AuditResult]) -> Result<(), SinkError> {
        for result in results {
            self.documents.insert(result.repository_id, result.clone());
        }
        Ok(())
    }
}

/// Sink writing one JSON document per line
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl JsonLinesSink<BufWriter<File>> {
    /// Create a sink writing to a new file at `path`
    pub fn create(path: impl AsRef<Path>) -> Result<Self, SinkError> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> JsonLinesSink<W> {
    /// Wrap an arbitrary writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Unwrap the inner writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> IndexSink for JsonLinesSink<W> {
    fn upsert(&mut self, results: &[AuditResult]) -> Result<(), SinkError> {
        for result in results {
            let line =
                serde_json::to_string(result).map_err(|e| SinkError::encode(e.to_string()))?;
            writeln!(self.writer, "{}", line)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_stores_by_repository_id() {
        let mut sink = MemorySink::new();
        sink.upsert(&[AuditResult::new(1, "svc", 2), AuditResult::new(2, "api", 0)])
            .unwrap();

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.get(1).unwrap().stale_count, 2);
        assert_eq!(sink.get(2).unwrap().repository_name, "api");
    }

    #[test]
    fn test_memory_sink_replaces_existing_document() {
        let mut sink = MemorySink::new();
        sink.upsert(&[AuditResult::new(1, "svc", 2)]).unwrap();
        sink.upsert(&[AuditResult::new(1, "svc", 5)]).unwrap();

        assert_eq!(sink.len(), 1);
        assert_eq!(sink.get(1).unwrap().stale_count, 5);
    }

    #[test]
    fn test_json_lines_sink_writes_one_document_per_line() {
        let mut sink = JsonLinesSink::new(Vec::new());
        sink.upsert(&[AuditResult::new(1, "svc", 0), AuditResult::new(2, "api", 3)])
            .unwrap();

        let written = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: AuditResult = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first, AuditResult::new(1, "svc", 0));
        assert!(lines[1].contains("\"dependencias_desactualizadas\":3"));
    }

    #[test]
    fn test_json_lines_sink_create_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audits.ndjson");

        let mut sink = JsonLinesSink::create(&path).unwrap();
        sink.upsert(&[AuditResult::new(7, "svc", 1)]).unwrap();
        drop(sink);

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"id_repositorio\":7"));
        assert!(content.ends_with('\n'));
    }
}
