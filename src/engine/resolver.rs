//! Verdict resolution
//!
//! Combines the rule-scan output with the evidence signals into a final
//! verdict. The branch order is a design invariant: evidence can soften a
//! non-compliant verdict to "compliant with evidence", but the underlying
//! violations stay visible in the record list.

use crate::verdict::{ClassificationResult, Verdict, ViolationRecord};

/// Synthetic record prepended when evidence accompanies violations
pub const EVIDENCE_EXPLANATION: &str =
    "Claim references supporting evidence. Please ensure evidence is robust and cited properly.";
pub const EVIDENCE_PHRASE: &str = "evidence citation";

/// Synthetic record for clean statements backed by evidence or clinical data
pub const CLINICAL_EXPLANATION: &str = "Backed by clinical trial data or evidence.";
pub const CLINICAL_PHRASE: &str = "clinical studies/trials/evidence/data";

/// Synthetic record for clean statements with no evidence phrasing
pub const NO_ISSUES_EXPLANATION: &str = "No non-compliant patterns detected.";

/// Resolve violations and evidence signals into a classification result.
///
/// First matching branch wins:
/// 1. evidence + violations: compliant with evidence, synthetic evidence
///    record first, then the violations in their original order
/// 2. no violations, evidence or clinical mention: compliant, single
///    evidence-backed record
/// 3. no violations: compliant, single no-issues record
/// 4. otherwise: non-compliant, violations unchanged
pub fn resolve(
    violations: Vec<ViolationRecord>,
    evidence_found: bool,
    clinical_found: bool,
) -> ClassificationResult {
    if evidence_found && !violations.is_empty() {
        let mut records = Vec::with_capacity(violations.len() + 1);
        records.push(ViolationRecord::new(EVIDENCE_EXPLANATION, EVIDENCE_PHRASE));
        records.extend(violations);
        return ClassificationResult::new(Verdict::CompliantWithEvidence, records);
    }

    if violations.is_empty() && (evidence_found || clinical_found) {
        return ClassificationResult::new(
            Verdict::Compliant,
            vec![ViolationRecord::new(CLINICAL_EXPLANATION, CLINICAL_PHRASE)],
        );
    }

    if violations.is_empty() {
        return ClassificationResult::new(
            Verdict::Compliant,
            vec![ViolationRecord::new(NO_ISSUES_EXPLANATION, "")],
        );
    }

    ClassificationResult::new(Verdict::NonCompliant, violations)
}
