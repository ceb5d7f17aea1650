//! CLI support for elseql
//!
//! Provides programmatic access to the elseql CLI functionality for
//! embedding in other tools.

mod check;
mod docs;

pub use check::{execute_check, execute_parse, CheckOptions, CheckResult};
pub use docs::{get_doc_category, get_docs_overview, DocCategory};

use std::io;
use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("syntax error: {0}")]
    Parse(#[from] crate::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("No query provided. Pass it as arguments or pipe it to stdin.")]
    NoInput,

    #[error("Unknown category: '{0}'\nRun 'elseql docs' to see available categories.")]
    UnknownCategory(String),
}
