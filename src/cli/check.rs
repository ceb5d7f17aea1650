//! Compile ELSEQL statements into search requests

use super::CliError;
use crate::{parse, ClientConfig, SearchRequest};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The ELSEQL statement
    pub query: String,
    /// Search engine to address
    pub config: ClientConfig,
    /// Only validate syntax, don't build the request
    pub syntax_only: bool,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid,
    /// Statement compiled to a request
    Request(SearchRequest),
}

fn statement(query: &str) -> Result<&str, CliError> {
    let query = query.trim();
    if query.is_empty() {
        Err(CliError::NoInput)
    } else {
        Ok(query)
    }
}

/// Execute an elseql check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let query = parse(statement(&options.query)?)?;

    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid);
    }

    Ok(CheckResult::Request(SearchRequest::new(&options.config, &query)))
}

/// Parse a statement and return its syntax tree as JSON
pub fn execute_parse(query: &str) -> Result<serde_json::Value, CliError> {
    let query = parse(statement(query)?)?;
    Ok(serde_json::to_value(&query)?)
}
