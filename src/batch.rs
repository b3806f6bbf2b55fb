//! Bulk classification over tabular input
//!
//! Consumes a CSV with a required `statement` column, classifies each row,
//! and produces the fixed results table: `statement, status, explanations,
//! offending_phrases, llm_status, llm_explanation`. Explanations and phrases
//! are semicolon-joined; empty phrases are excluded. LLM columns stay blank
//! unless a reviewer is supplied.

use crate::engine::ComplianceEngine;
use crate::llm::LlmReviewer;
use crate::rules::Agency;

use serde::Serialize;
use std::io::{self, Write};
use thiserror::Error;

/// Required input column
pub const STATEMENT_COLUMN: &str = "statement";

/// Output column order of the results table
pub const RESULT_COLUMNS: [&str; 6] = [
    "statement",
    "status",
    "explanations",
    "offending_phrases",
    "llm_status",
    "llm_explanation",
];

/// Batch input errors — the only fatal error path, and it lives in the
/// shell, not the classifier
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("input contains no header row")]
    EmptyInput,

    #[error("input is missing the required 'statement' column")]
    MissingStatementColumn,
}

/// One row of the results table
#[derive(Debug, Clone, Serialize)]
pub struct ResultRow {
    pub statement: String,
    pub status: String,
    pub explanations: String,
    pub offending_phrases: String,
    pub llm_status: String,
    pub llm_explanation: String,
}

/// Extract the `statement` column values from CSV input
pub fn read_statements(input: &str) -> Result<Vec<String>, BatchError> {
    let records = parse_csv(input);
    let header = records.first().ok_or(BatchError::EmptyInput)?;

    let column = header
        .iter()
        .position(|name| name.trim() == STATEMENT_COLUMN)
        .ok_or(BatchError::MissingStatementColumn)?;

    Ok(records
        .iter()
        .skip(1)
        .filter_map(|record| record.get(column).cloned())
        .collect())
}

/// Classify every statement, optionally asking the LLM for a second opinion
/// per row.
///
/// Adjudication calls are independent: a sentinel opinion for one row never
/// aborts the rest of the batch.
pub fn run_batch(
    engine: &ComplianceEngine,
    agency: Agency,
    statements: &[String],
    reviewer: Option<&LlmReviewer>,
    api_key: Option<&str>,
) -> Vec<ResultRow> {
    statements
        .iter()
        .map(|statement| {
            let result = engine.classify(statement, agency);

            let (llm_status, llm_explanation) = match reviewer {
                Some(reviewer) => {
                    let opinion = reviewer.review(statement, agency, api_key);
                    (opinion.status, opinion.explanation)
                }
                None => (String::new(), String::new()),
            };

            ResultRow {
                statement: statement.clone(),
                status: result.verdict.as_str().to_string(),
                explanations: result.explanations(),
                offending_phrases: result.offending_phrases(),
                llm_status,
                llm_explanation,
            }
        })
        .collect()
}

/// Count rows per status, in first-appearance order
pub fn status_counts(rows: &[ResultRow]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();

    for row in rows {
        match counts.iter_mut().find(|(status, _)| *status == row.status) {
            Some((_, count)) => *count += 1,
            None => counts.push((row.status.clone(), 1)),
        }
    }

    counts
}

/// Write the results table as CSV
pub fn write_csv<W: Write>(rows: &[ResultRow], writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{}", RESULT_COLUMNS.join(","))?;

    for row in rows {
        let fields = [
            &row.statement,
            &row.status,
            &row.explanations,
            &row.offending_phrases,
            &row.llm_status,
            &row.llm_explanation,
        ];
        let line: Vec<String> = fields.iter().map(|f| escape_field(f)).collect();
        writeln!(writer, "{}", line.join(","))?;
    }

    Ok(())
}

fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Minimal RFC 4180 parser: quoted fields, doubled quotes, embedded
/// newlines inside quotes
fn parse_csv(input: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' => in_quotes = true,
            ',' => record.push(std::mem::take(&mut field)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                record.push(std::mem::take(&mut field));
                records.push(std::mem::take(&mut record));
            }
            _ => field.push(c),
        }
    }

    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }

    records
}
