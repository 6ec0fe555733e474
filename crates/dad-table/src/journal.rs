//! The move log: the table's append-only record of resolved moves.

use serde::{Deserialize, Serialize};

use dad_draw::MoveRecord;

use crate::catalog;
use crate::error::TableResult;

/// A chronological log of every committed move at the table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoveLog {
    records: Vec<MoveRecord>,
}

impl MoveLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the log.
    pub fn append(&mut self, record: MoveRecord) {
        self.records.push(record);
    }

    /// Get all records.
    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Export the log as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Table Log\n=========\n\n");
        for record in &self.records {
            out.push_str(&catalog::render_text(record));
            out.push('\n');
        }
        out
    }

    /// Export the log as Markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Table Log\n\n");
        for record in &self.records {
            out.push_str(&catalog::render_markdown(record));
            out.push('\n');
        }
        out
    }

    /// Export the log as pretty-printed JSON.
    pub fn export_json(&self) -> TableResult<String> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }
}
