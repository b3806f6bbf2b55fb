//! JSONL audit logging for claimguard
//!
//! Records classification outcomes to a JSONL file for later analysis.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::rules::Agency;
use crate::verdict::ClassificationResult;

const SUMMARY_CHARS: usize = 100;

/// An audit log entry
#[derive(Debug, Serialize)]
pub struct AuditEntry {
    /// Timestamp of the classification
    pub timestamp: DateTime<Utc>,

    /// Agency whose rules were applied
    pub agency: Agency,

    /// Verdict boundary string
    pub status: String,

    /// The statement, truncated for the log
    pub statement: String,

    /// Number of records in the result
    pub record_count: usize,

    /// Joined explanations
    pub explanations: String,
}

impl AuditEntry {
    /// Create a new audit entry for a classification outcome
    pub fn new(statement: &str, agency: Agency, result: &ClassificationResult) -> Self {
        Self {
            timestamp: Utc::now(),
            agency,
            status: result.verdict.as_str().to_string(),
            statement: truncate(statement),
            record_count: result.records.len(),
            explanations: result.explanations(),
        }
    }
}

fn truncate(statement: &str) -> String {
    if statement.chars().count() > SUMMARY_CHARS {
        let prefix: String = statement.chars().take(SUMMARY_CHARS).collect();
        format!("{}...", prefix)
    } else {
        statement.to_string()
    }
}

/// Audit logger
pub struct AuditLogger {
    writer: Option<BufWriter<File>>,
}

impl AuditLogger {
    /// Create a new audit logger
    pub fn new(path: Option<&Path>) -> Self {
        let writer = path.and_then(|p| {
            if let Some(parent) = p.parent() {
                let _ = std::fs::create_dir_all(parent);
            }

            OpenOptions::new()
                .create(true)
                .append(true)
                .open(p)
                .ok()
                .map(BufWriter::new)
        });

        Self { writer }
    }

    /// Log an audit entry
    pub fn log(&mut self, entry: &AuditEntry) -> Result<(), std::io::Error> {
        if let Some(ref mut writer) = self.writer {
            let json = serde_json::to_string(entry)?;
            writeln!(writer, "{}", json)?;
            writer.flush()?;
        }
        Ok(())
    }

    /// Log a classification outcome
    pub fn log_classification(
        &mut self,
        statement: &str,
        agency: Agency,
        result: &ClassificationResult,
    ) -> Result<(), std::io::Error> {
        let entry = AuditEntry::new(statement, agency, result);
        self.log(&entry)
    }

    /// Check if logging is enabled
    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }
}

/// Create a disabled logger (for when audit logging is off)
impl Default for AuditLogger {
    fn default() -> Self {
        Self { writer: None }
    }
}
