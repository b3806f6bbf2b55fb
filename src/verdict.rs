//! Classification outcome types
//!
//! The three-way verdict, the per-issue violation record, and the result
//! structure returned by the classifier. The verdict is a closed enum in
//! core logic; string rendering happens only at the boundary.

use serde::{Deserialize, Serialize};

/// Compliance verdict for a single statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// No rule violations detected
    Compliant,

    /// Violations present but the statement cites supporting evidence
    #[serde(rename = "Compliant with Evidence")]
    CompliantWithEvidence,

    /// Violations present and no supporting evidence
    #[serde(rename = "Non-Compliant")]
    NonCompliant,
}

impl Verdict {
    /// Boundary string for this verdict
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Compliant => "Compliant",
            Verdict::CompliantWithEvidence => "Compliant with Evidence",
            Verdict::NonCompliant => "Non-Compliant",
        }
    }

    /// True for both compliant verdicts
    pub fn is_compliant(&self) -> bool {
        !matches!(self, Verdict::NonCompliant)
    }
}

/// One reported issue: an explanation plus the offending text span.
///
/// `phrase` is a verbatim original-case substring of the input for rule
/// matches, a fixed label for synthetic records, or empty for the
/// no-issues record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationRecord {
    pub explanation: String,
    pub phrase: String,
}

impl ViolationRecord {
    pub fn new(explanation: impl Into<String>, phrase: impl Into<String>) -> Self {
        Self {
            explanation: explanation.into(),
            phrase: phrase.into(),
        }
    }
}

/// The full outcome of one classification call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    /// The verdict, serialized under the boundary name
    #[serde(rename = "status")]
    pub verdict: Verdict,

    /// Violation records in match order, synthetic records first where the
    /// resolver adds them
    pub records: Vec<ViolationRecord>,
}

impl ClassificationResult {
    pub fn new(verdict: Verdict, records: Vec<ViolationRecord>) -> Self {
        Self { verdict, records }
    }

    /// All explanations joined with "; " (batch column contract)
    pub fn explanations(&self) -> String {
        self.records
            .iter()
            .map(|r| r.explanation.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// All non-empty phrases joined with "; " (batch column contract)
    pub fn offending_phrases(&self) -> String {
        self.records
            .iter()
            .filter(|r| !r.phrase.is_empty())
            .map(|r| r.phrase.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
