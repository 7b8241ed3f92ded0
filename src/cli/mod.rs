//! CLI support for pipegen
//!
//! Provides programmatic access to the pipegen commands so they can be
//! embedded in other tools.

mod compile;
mod docs;
mod sample;

pub use compile::{CompileCommand, execute_compile, execute_expr};
pub use docs::get_docs_overview;
pub use sample::{SampleOptions, execute_sample};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Compile error: {0}")]
    Compile(#[from] crate::CompileError),

    #[error("Expression error: {0}")]
    Expression(#[from] crate::ParseError),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("No input provided. Pass a query, use --input, --example, or pipe JSON to stdin.")]
    NoInput,
}

/// Serializes command output, pretty or compact.
pub fn render(value: &serde_json::Value, pretty: bool) -> Result<String, CliError> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text)
}
