//! Integration tests for bulk CSV classification

use claimguard::batch::{self, BatchError};
use claimguard::{Agency, ComplianceEngine};

fn engine() -> ComplianceEngine {
    ComplianceEngine::new()
}

// ============================================================================
// Input Parsing
// ============================================================================

#[test]
fn test_statement_column_required() {
    let input = "text,source\nIt cures colds.,web\n";
    assert!(matches!(
        batch::read_statements(input),
        Err(BatchError::MissingStatementColumn)
    ));
}

#[test]
fn test_statement_column_found_anywhere() {
    let input = "id,source,statement\n1,web,It cures colds.\n";
    let statements = batch::read_statements(input).unwrap();
    assert_eq!(statements, vec!["It cures colds."]);
}

#[test]
fn test_quoted_statements_with_commas() {
    let input = "statement\n\"Better than all, better than any.\"\n";
    let statements = batch::read_statements(input).unwrap();
    assert_eq!(statements, vec!["Better than all, better than any."]);
}

// ============================================================================
// Results Table Contract
// ============================================================================

#[test]
fn test_result_columns_contract() {
    assert_eq!(
        batch::RESULT_COLUMNS,
        [
            "statement",
            "status",
            "explanations",
            "offending_phrases",
            "llm_status",
            "llm_explanation",
        ]
    );
}

#[test]
fn test_batch_end_to_end() {
    let input = "statement\n\
                 This drug guarantees 100% effectiveness.\n\
                 Clinical trials confirm the effect.\n\
                 A gentle daily moisturizer.\n";

    let statements = batch::read_statements(input).unwrap();
    let rows = batch::run_batch(&engine(), Agency::Fda, &statements, None, None);

    assert_eq!(rows.len(), 3);

    assert_eq!(rows[0].status, "Non-Compliant");
    assert_eq!(rows[0].offending_phrases, "guarantees; 100%");
    assert!(rows[0]
        .explanations
        .contains("Absolute claims are not allowed (FDA)."));

    assert_eq!(rows[1].status, "Compliant");
    assert_eq!(rows[1].explanations, "Backed by clinical trial data or evidence.");

    assert_eq!(rows[2].status, "Compliant");
    assert_eq!(rows[2].explanations, "No non-compliant patterns detected.");
    // the clean row's empty phrase is excluded from the joined column
    assert_eq!(rows[2].offending_phrases, "");
}

#[test]
fn test_batch_respects_agency() {
    let statements = vec!["It cures everything.".to_string()];
    let rows = batch::run_batch(&engine(), Agency::Hsa, &statements, None, None);
    assert!(rows[0].explanations.contains("(HSA)."));
}

#[test]
fn test_llm_columns_blank_without_reviewer() {
    let statements = vec!["It cures everything.".to_string()];
    let rows = batch::run_batch(&engine(), Agency::Fda, &statements, None, None);
    assert_eq!(rows[0].llm_status, "");
    assert_eq!(rows[0].llm_explanation, "");
}

// ============================================================================
// CSV Output
// ============================================================================

#[test]
fn test_csv_output_shape() {
    let statements = vec!["This drug guarantees 100% effectiveness.".to_string()];
    let rows = batch::run_batch(&engine(), Agency::Fda, &statements, None, None);

    let mut out = Vec::new();
    batch::write_csv(&rows, &mut out).unwrap();
    let csv = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "statement,status,explanations,offending_phrases,llm_status,llm_explanation"
    );
    assert!(lines[1].contains("Non-Compliant"));
}

#[test]
fn test_csv_quotes_joined_explanations() {
    // two violations join with "; " and survive a write/read round trip
    let statements = vec!["It guarantees results and cures colds.".to_string()];
    let rows = batch::run_batch(&engine(), Agency::Fda, &statements, None, None);

    let mut out = Vec::new();
    batch::write_csv(&rows, &mut out).unwrap();
    let csv = String::from_utf8(out).unwrap();

    assert!(csv.contains("guarantees; cures"));
    let reparsed = batch::read_statements(&csv).unwrap();
    assert_eq!(reparsed, vec!["It guarantees results and cures colds."]);
}

#[test]
fn test_status_summary() {
    let statements = vec![
        "It cures everything.".to_string(),
        "It guarantees results.".to_string(),
        "A gentle moisturizer.".to_string(),
    ];
    let rows = batch::run_batch(&engine(), Agency::Fda, &statements, None, None);
    let counts = batch::status_counts(&rows);

    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0], ("Non-Compliant".to_string(), 2));
    assert_eq!(counts[1], ("Compliant".to_string(), 1));
}
