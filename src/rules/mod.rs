//! Compliance rules for claimguard
//!
//! Defines the claim rule model, the regulatory agency codes, and the
//! static pattern tables.

pub mod claims;
pub mod evidence;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A regulatory agency whose rule set is applied during classification.
///
/// The agencies currently share one canonical rule table; the agency name
/// is interpolated into each rule's explanation when a match is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Agency {
    #[default]
    Fda,
    Ema,
    Hsa,
}

impl Agency {
    /// Parse an agency code, falling back to FDA for anything unrecognized.
    ///
    /// An unknown agency is not an error; it selects the default rule set.
    pub fn parse(code: &str) -> Self {
        match code.trim().to_uppercase().as_str() {
            "EMA" => Agency::Ema,
            "HSA" => Agency::Hsa,
            _ => Agency::Fda,
        }
    }

    /// The uppercase agency code used in explanations and serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            Agency::Fda => "FDA",
            Agency::Ema => "EMA",
            Agency::Hsa => "HSA",
        }
    }
}

impl fmt::Display for Agency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A claim rule definition
#[derive(Debug, Clone)]
pub struct Rule {
    /// Unique identifier for this rule
    pub id: &'static str,

    /// Regex pattern to match (compiled case-insensitively)
    pub pattern: &'static str,

    /// Optional pattern that suppresses a match starting at the same offset.
    ///
    /// Stands in for negative look-ahead, which the regex crate does not
    /// support: a rule match is dropped when the exception also matches at
    /// the match's start position.
    pub exception: Option<&'static str>,

    /// Explanation for the violation, without the agency qualifier
    pub explanation: &'static str,
}

impl Rule {
    /// Create a new rule
    pub const fn new(
        id: &'static str,
        pattern: &'static str,
        exception: Option<&'static str>,
        explanation: &'static str,
    ) -> Self {
        Self {
            id,
            pattern,
            exception,
            explanation,
        }
    }

    /// The full agency-qualified explanation reported on a match
    pub fn explanation_for(&self, agency: Agency) -> String {
        format!("{} ({}).", self.explanation, agency)
    }
}
