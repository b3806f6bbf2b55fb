//! claimguard - Regulatory compliance guardrails for medical and marketing claims
//!
//! This library classifies free-text claims against a small set of
//! regulatory heuristics and reports every violation with the offending
//! phrase. It is a keyword/pattern scanner, not a semantic classifier.
//!
//! # Features
//!
//! - **Rule scanning**: Detects absolute, superlative, unsubstantiated
//!   medical, and comparative claims
//! - **Evidence detection**: Recognizes citation-like phrasing (studies,
//!   trials, meta-analyses) and softens the verdict accordingly
//! - **Agency rule sets**: FDA, EMA, and HSA, with a permissive FDA fallback
//! - **LLM second opinion**: Optional OpenAI-backed review that never fails
//!   the rule-based path
//! - **Batch mode**: CSV in, results table out
//! - **Audit logging**: JSONL log of classification outcomes
//!
//! # Example
//!
//! ```
//! use claimguard::{Agency, ComplianceEngine, Verdict};
//!
//! let engine = ComplianceEngine::new();
//!
//! let result = engine.classify("This drug guarantees 100% recovery.", Agency::Fda);
//! assert_eq!(result.verdict, Verdict::NonCompliant);
//! assert_eq!(result.records[0].phrase, "guarantees");
//! ```

pub mod audit;
pub mod batch;
pub mod config;
pub mod engine;
pub mod llm;
pub mod rules;
pub mod verdict;

// Re-exports for convenience
pub use config::{Config, LlmConfig};
pub use engine::ComplianceEngine;
pub use llm::{LlmOpinion, LlmReviewer};
pub use rules::Agency;
pub use verdict::{ClassificationResult, Verdict, ViolationRecord};
