//! Claim rules shared by all supported agencies
//!
//! One canonical table; the agency name is interpolated into explanations
//! at scan time, so every agency reports identical detections with its own
//! qualifier.

use crate::rules::Rule;

/// The compliance rules, in match-reporting order
pub const CLAIM_RULES: &[Rule] = &[
    // Certainty language: guarantees, 100%, cures
    Rule::new(
        "absolute-claims",
        r"guarantees?\b|100%|cures?\b",
        None,
        "Absolute claims are not allowed",
    ),
    // "best" is carved out when it is part of "best practice"
    Rule::new(
        "superlative-claims",
        r"most (advanced|effective|powerful|potent|innovative|trusted)|best|better than all others|world'?s? (best|leading|#1|number one)",
        Some(r"best practice"),
        "Superlative claims need supporting evidence",
    ),
    Rule::new(
        "unsubstantiated-medical-claims",
        r"will (prevent|stop|eliminate|cure)|prevents? (disease|illness|condition)|treats? (all|every|any)",
        None,
        "Medical claims require proper disclaimers or evidence",
    ),
    Rule::new(
        "comparative-claims",
        r"better than (all|any|other|others)|superior to",
        None,
        "Comparative claims must be evidence-based",
    ),
];
