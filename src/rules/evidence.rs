//! Evidence-citation patterns
//!
//! Patterns recognizing citation-like phrasing ("according to a 2022
//! study", "randomized controlled trial", "meta-analysis"). A statement
//! matching any of these is treated as citing supporting evidence.

/// Citation patterns, any one of which counts as formal evidence
pub const EVIDENCE_PATTERNS: &[&str] = &[
    r"according to (a|an|the)? ?(\d{4})? ?(study|trial|report|paper|article|publication|data|evidence)",
    r"published in (the )?[A-Za-z ]+ (journal|magazine|review|proceedings)",
    r"(randomized|double-blind|placebo-controlled) (study|trial)",
    r"(meta-analysis|systematic review)",
    r"(as shown|as demonstrated|as reported) in (a|an|the)? ?(study|trial|report|publication)",
];

/// General clinical mention — a weaker signal than a formal citation.
///
/// Consulted by the resolver only when a statement has no violations and no
/// formal evidence match; kept separate from [`EVIDENCE_PATTERNS`] on
/// purpose.
pub const CLINICAL_MENTION_PATTERN: &str = r"clinical (studies|trials|evidence|data)";

#[cfg(test)]
mod tests {
    use super::*;
    use regex::RegexBuilder;

    fn compile(pattern: &str) -> regex::Regex {
        RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .unwrap()
    }

    #[test]
    fn test_all_patterns_compile() {
        for pattern in EVIDENCE_PATTERNS {
            let result = RegexBuilder::new(pattern).case_insensitive(true).build();
            assert!(result.is_ok(), "Invalid evidence pattern: {}", pattern);
        }
        assert!(RegexBuilder::new(CLINICAL_MENTION_PATTERN)
            .case_insensitive(true)
            .build()
            .is_ok());
    }

    #[test]
    fn test_according_to_study() {
        let re = compile(EVIDENCE_PATTERNS[0]);
        assert!(re.is_match("according to a 2022 study in The Lancet"));
        assert!(re.is_match("According to the report"));
        assert!(re.is_match("according to evidence"));
    }

    #[test]
    fn test_published_in_journal() {
        let re = compile(EVIDENCE_PATTERNS[1]);
        assert!(re.is_match("published in the British Medical journal"));
        assert!(re.is_match("published in Nature review"));
    }

    #[test]
    fn test_controlled_trial() {
        let re = compile(EVIDENCE_PATTERNS[2]);
        assert!(re.is_match("a randomized trial showed"));
        assert!(re.is_match("double-blind study of 400 patients"));
        assert!(re.is_match("placebo-controlled trial"));
    }

    #[test]
    fn test_meta_analysis() {
        let re = compile(EVIDENCE_PATTERNS[3]);
        assert!(re.is_match("a meta-analysis of 12 trials"));
        assert!(re.is_match("a recent systematic review"));
    }

    #[test]
    fn test_as_shown_in() {
        let re = compile(EVIDENCE_PATTERNS[4]);
        assert!(re.is_match("as shown in a study"));
        assert!(re.is_match("as demonstrated in the trial"));
        assert!(re.is_match("as reported in a publication"));
    }

    #[test]
    fn test_clinical_mention() {
        let re = compile(CLINICAL_MENTION_PATTERN);
        assert!(re.is_match("clinical trials confirm"));
        assert!(re.is_match("backed by clinical data"));
        assert!(!re.is_match("a clinical setting"));
    }
}
