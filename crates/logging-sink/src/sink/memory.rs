use crate::record::Record;
use crate::severity::Severity;
use crate::sink::Sink;
use std::io;

/// Sink that keeps every record in memory.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    records: Vec<Record>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Records captured so far, oldest first.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Messages captured so far, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.records.iter().map(Record::message).collect()
    }

    /// Messages captured at `severity`.
    #[must_use]
    pub fn messages_at(&self, severity: Severity) -> Vec<&str> {
        self.records
            .iter()
            .filter(|record| record.severity() == severity)
            .map(Record::message)
            .collect()
    }

    /// Number of captured records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when nothing has been captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drops every captured record.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl Sink for MemorySink {
    fn emit(&mut self, record: &Record) -> io::Result<()> {
        self.records.push(record.clone());
        Ok(())
    }
}
