//! Compliance engine for claimguard
//!
//! Compiles the static rule and evidence tables once at construction and
//! coordinates scanning and verdict resolution. The engine holds no mutable
//! state; all entry points take `&self` and are safe to call concurrently.

pub mod resolver;
pub mod scan;

use crate::rules::claims::CLAIM_RULES;
use crate::rules::evidence::{CLINICAL_MENTION_PATTERN, EVIDENCE_PATTERNS};
use crate::rules::{Agency, Rule};
use crate::verdict::{ClassificationResult, ViolationRecord};

use regex::{Regex, RegexBuilder};

/// A claim rule with its patterns compiled for matching
pub struct CompiledRule {
    /// The rule definition this was compiled from
    pub rule: &'static Rule,

    /// Compiled case-insensitive trigger pattern
    pub pattern: Regex,

    /// Compiled exception pattern; a trigger match is dropped when this
    /// matches at the same start offset
    pub exception: Option<Regex>,
}

impl CompiledRule {
    /// Agency-qualified explanation for a match of this rule
    pub fn explanation_for(&self, agency: Agency) -> String {
        self.rule.explanation_for(agency)
    }
}

/// The main compliance engine
pub struct ComplianceEngine {
    rules: Vec<CompiledRule>,
    evidence: Vec<Regex>,
    clinical: Option<Regex>,
}

fn compile(pattern: &str) -> Option<Regex> {
    RegexBuilder::new(pattern).case_insensitive(true).build().ok()
}

impl ComplianceEngine {
    /// Compile the static rule tables into a ready engine.
    ///
    /// Patterns that fail to compile are skipped rather than aborting
    /// startup; the table contents are covered by unit tests, so this path
    /// is unreachable for the shipped rules.
    pub fn new() -> Self {
        let rules = CLAIM_RULES
            .iter()
            .filter_map(|rule| {
                let pattern = compile(rule.pattern)?;
                let exception = match rule.exception {
                    Some(exc) => Some(compile(exc)?),
                    None => None,
                };
                Some(CompiledRule {
                    rule,
                    pattern,
                    exception,
                })
            })
            .collect();

        let evidence = EVIDENCE_PATTERNS.iter().filter_map(|p| compile(p)).collect();

        let clinical = compile(CLINICAL_MENTION_PATTERN);

        Self {
            rules,
            evidence,
            clinical,
        }
    }

    /// Main entry point: classify a statement under an agency's rules.
    ///
    /// Pure and deterministic; an empty statement classifies as compliant
    /// with the no-issues record.
    pub fn classify(&self, text: &str, agency: Agency) -> ClassificationResult {
        let violations = self.scan(text, agency);
        let evidence_found = self.detect_evidence(text);
        let clinical_found = self.mentions_clinical_data(text);

        resolver::resolve(violations, evidence_found, clinical_found)
    }

    /// Scan a statement and return every rule match, in rule order.
    ///
    /// No deduplication: a rule matching twice yields two records, and two
    /// rules matching the same span yield two records.
    pub fn scan(&self, text: &str, agency: Agency) -> Vec<ViolationRecord> {
        scan::scan_rules(text, agency, &self.rules)
    }

    /// True if the statement matches any evidence-citation pattern
    pub fn detect_evidence(&self, text: &str) -> bool {
        scan::detect_evidence(text, &self.evidence)
    }

    /// True if the statement mentions clinical studies/trials/evidence/data.
    ///
    /// A weaker signal than [`detect_evidence`](Self::detect_evidence); the
    /// resolver consults it only for otherwise clean statements.
    pub fn mentions_clinical_data(&self, text: &str) -> bool {
        self.clinical.as_ref().is_some_and(|re| re.is_match(text))
    }
}

impl Default for ComplianceEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verdict::Verdict;

    fn test_engine() -> ComplianceEngine {
        ComplianceEngine::new()
    }

    #[test]
    fn test_all_rules_compiled() {
        let engine = test_engine();
        assert_eq!(engine.rules.len(), CLAIM_RULES.len());
        assert_eq!(engine.evidence.len(), EVIDENCE_PATTERNS.len());
        assert!(engine.clinical.is_some());
    }

    #[test]
    fn test_clean_statement_compliant() {
        let engine = test_engine();
        let result = engine.classify("This cream soothes dry skin.", Agency::Fda);
        assert_eq!(result.verdict, Verdict::Compliant);
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].phrase, "");
    }

    #[test]
    fn test_absolute_claim_non_compliant() {
        let engine = test_engine();
        let result = engine.classify("This drug guarantees results.", Agency::Fda);
        assert_eq!(result.verdict, Verdict::NonCompliant);
        assert_eq!(result.records[0].phrase, "guarantees");
    }

    #[test]
    fn test_evidence_downgrades_verdict() {
        let engine = test_engine();
        let result = engine.classify(
            "According to a 2022 study, this drug guarantees results.",
            Agency::Fda,
        );
        assert_eq!(result.verdict, Verdict::CompliantWithEvidence);
        assert_eq!(result.records[0].phrase, "evidence citation");
        assert!(result.records.len() > 1);
    }

    #[test]
    fn test_clinical_mention_compliant() {
        let engine = test_engine();
        let result = engine.classify("Clinical trials confirm the effect.", Agency::Ema);
        assert_eq!(result.verdict, Verdict::Compliant);
        assert!(!result.records[0].phrase.is_empty());
    }

    #[test]
    fn test_empty_statement_compliant() {
        let engine = test_engine();
        let result = engine.classify("", Agency::Fda);
        assert_eq!(result.verdict, Verdict::Compliant);
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].phrase, "");
    }
}
