//! Statement scanning
//!
//! Runs the compiled rule table over a statement and collects every match,
//! and checks the evidence-citation patterns. Matching is case-insensitive;
//! reported phrases are the original-case substrings at the matched spans.

use crate::engine::CompiledRule;
use crate::rules::Agency;
use crate::verdict::ViolationRecord;

use regex::Regex;

/// Scan a statement against the rules, in declared order.
///
/// Every non-overlapping match of every rule produces one record. A match
/// is suppressed when the rule's exception pattern also matches at the same
/// start offset (e.g. "best" inside "best practice").
pub fn scan_rules(text: &str, agency: Agency, rules: &[CompiledRule]) -> Vec<ViolationRecord> {
    let mut records = Vec::new();

    for rule in rules {
        for m in rule.pattern.find_iter(text) {
            if excepted(text, m.start(), rule.exception.as_ref()) {
                continue;
            }
            records.push(ViolationRecord::new(
                rule.explanation_for(agency),
                &text[m.start()..m.end()],
            ));
        }
    }

    records
}

/// True if any evidence-citation pattern matches the statement
pub fn detect_evidence(text: &str, patterns: &[Regex]) -> bool {
    patterns.iter().any(|re| re.is_match(text))
}

fn excepted(text: &str, start: usize, exception: Option<&Regex>) -> bool {
    exception
        .and_then(|re| re.find_at(text, start))
        .is_some_and(|m| m.start() == start)
}
