//! claimguard - Regulatory compliance guardrails for medical and marketing claims
//!
//! # Usage
//!
//! ```bash
//! # Classify a single statement (JSON result on stdout)
//! claimguard "This drug guarantees 100% effectiveness."
//!
//! # Read the statement from stdin
//! echo "Clinical trials confirm the effect." | claimguard --agency EMA
//!
//! # Bulk mode: CSV with a 'statement' column in, results CSV out
//! claimguard --batch claims.csv --output results.csv
//!
//! # Ask the LLM for a second opinion (needs OPENAI_API_KEY or --api-key)
//! claimguard --llm "Our formula cures all headaches."
//! ```

use std::env;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use claimguard::{
    audit::AuditLogger,
    batch,
    config::Config,
    engine::ComplianceEngine,
    llm::LlmReviewer,
    rules::Agency,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Print version information
fn print_version() {
    println!("claimguard {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message
fn print_help() {
    println!(
        r#"claimguard - Regulatory compliance guardrails for medical and marketing claims

USAGE:
    claimguard [OPTIONS] [STATEMENT]

    With no STATEMENT and no --batch, the statement is read from stdin.

OPTIONS:
    -h, --help              Print this help message
    -v, --version           Print version information
    -a, --agency CODE       Regulatory agency: FDA, EMA, HSA (default: FDA;
                            unknown codes fall back to FDA)
    -b, --batch PATH        Classify every row of a CSV file with a
                            'statement' column
    -o, --output PATH       Write batch results CSV to PATH (default: stdout)
    -c, --config PATH       Path to config file
        --llm               Also request an LLM second opinion
        --api-key KEY       OpenAI API key (default: OPENAI_API_KEY env var)

ENVIRONMENT:
    OPENAI_API_KEY          Credential for the LLM second opinion
    RUST_LOG                Diagnostic log filter (stderr)
"#
    );
}

/// Parse command line arguments
struct Args {
    help: bool,
    version: bool,
    agency: Option<String>,
    batch: Option<String>,
    output: Option<String>,
    config_path: Option<String>,
    llm: bool,
    api_key: Option<String>,
    statement: Option<String>,
}

impl Args {
    fn parse() -> Self {
        let args: Vec<String> = env::args().collect();
        let mut result = Args {
            help: false,
            version: false,
            agency: None,
            batch: None,
            output: None,
            config_path: None,
            llm: false,
            api_key: None,
            statement: None,
        };

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "-h" | "--help" => result.help = true,
                "-v" | "--version" => result.version = true,
                "--llm" => result.llm = true,
                "-a" | "--agency" => {
                    if i + 1 < args.len() {
                        i += 1;
                        result.agency = Some(args[i].clone());
                    }
                }
                "-b" | "--batch" => {
                    if i + 1 < args.len() {
                        i += 1;
                        result.batch = Some(args[i].clone());
                    }
                }
                "-o" | "--output" => {
                    if i + 1 < args.len() {
                        i += 1;
                        result.output = Some(args[i].clone());
                    }
                }
                "-c" | "--config" => {
                    if i + 1 < args.len() {
                        i += 1;
                        result.config_path = Some(args[i].clone());
                    }
                }
                "--api-key" => {
                    if i + 1 < args.len() {
                        i += 1;
                        result.api_key = Some(args[i].clone());
                    }
                }
                arg if arg.starts_with("--agency=") => {
                    result.agency = Some(arg.trim_start_matches("--agency=").to_string());
                }
                arg if arg.starts_with("--config=") => {
                    result.config_path = Some(arg.trim_start_matches("--config=").to_string());
                }
                arg if arg.starts_with("--api-key=") => {
                    result.api_key = Some(arg.trim_start_matches("--api-key=").to_string());
                }
                arg if !arg.starts_with('-') && result.statement.is_none() => {
                    result.statement = Some(arg.to_string());
                }
                _ => {}
            }
            i += 1;
        }

        result
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    if args.version {
        print_version();
        return ExitCode::SUCCESS;
    }

    // Diagnostics go to stderr; stdout carries results only
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "claimguard=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = if let Some(ref path) = args.config_path {
        Config::load_from(std::path::Path::new(path)).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to load config from {}: {}", path, e);
            Config::default()
        })
    } else {
        Config::load()
    };

    let agency = args
        .agency
        .as_deref()
        .map(Agency::parse)
        .unwrap_or(config.general.default_agency);

    let engine = ComplianceEngine::new();

    let reviewer = if args.llm {
        Some(LlmReviewer::new(config.llm.clone()))
    } else {
        None
    };

    let audit_path = if config.general.audit_log {
        config.audit_path()
    } else {
        None
    };
    let mut logger = AuditLogger::new(audit_path.as_deref());

    if let Some(ref batch_path) = args.batch {
        return run_batch_mode(
            batch_path,
            args.output.as_deref(),
            &engine,
            agency,
            reviewer.as_ref(),
            args.api_key.as_deref(),
        );
    }

    // Single-statement mode: argument, else stdin
    let statement = match args.statement {
        Some(statement) => statement,
        None => {
            let mut buffer = String::new();
            if io::stdin().read_to_string(&mut buffer).is_err() {
                eprintln!("Error: failed to read statement from stdin");
                return ExitCode::FAILURE;
            }
            buffer.trim_end_matches(&['\r', '\n'][..]).to_string()
        }
    };

    let result = engine.classify(&statement, agency);

    if let Err(e) = logger.log_classification(&statement, agency, &result) {
        eprintln!("Warning: Failed to write audit log: {}", e);
    }

    let mut output = serde_json::json!({
        "statement": statement,
        "agency": agency,
        "status": result.verdict.as_str(),
        "records": result.records,
    });

    if let Some(reviewer) = reviewer {
        let opinion = reviewer.review(&statement, agency, args.api_key.as_deref());
        output["llm_status"] = serde_json::json!(opinion.status);
        output["llm_explanation"] = serde_json::json!(opinion.explanation);
    }

    let json = serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string());
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let _ = writeln!(handle, "{}", json);
    let _ = handle.flush();

    ExitCode::SUCCESS
}

fn run_batch_mode(
    batch_path: &str,
    output_path: Option<&str>,
    engine: &ComplianceEngine,
    agency: Agency,
    reviewer: Option<&LlmReviewer>,
    api_key: Option<&str>,
) -> ExitCode {
    let input = match std::fs::read_to_string(batch_path) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error: failed to read {}: {}", batch_path, e);
            return ExitCode::FAILURE;
        }
    };

    let statements = match batch::read_statements(&input) {
        Ok(statements) => statements,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let rows = batch::run_batch(engine, agency, &statements, reviewer, api_key);

    let write_result = match output_path {
        Some(path) => std::fs::File::create(path)
            .and_then(|mut file| batch::write_csv(&rows, &mut file)),
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            batch::write_csv(&rows, &mut handle)
        }
    };

    if let Err(e) = write_result {
        eprintln!("Error: failed to write results: {}", e);
        return ExitCode::FAILURE;
    }

    // Status summary on stderr, so stdout stays machine-readable
    for (status, count) in batch::status_counts(&rows) {
        eprintln!("{}: {}", status, count);
    }

    ExitCode::SUCCESS
}
