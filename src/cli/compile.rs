//! Compile query documents and standalone expressions

use super::CliError;
use crate::{CompileOptions, Compiler, EXAMPLE_QUERY, output::expr_to_json, parse_expression};

/// Options for the compile command
#[derive(Debug, Clone, Default)]
pub struct CompileCommand {
    /// JSON query document
    pub query: Option<String>,
    /// Compile the bundled example query instead
    pub example: bool,
    pub options: CompileOptions,
}

/// Compile a query document into a JSON array of pipeline stages
pub fn execute_compile(command: &CompileCommand) -> Result<serde_json::Value, CliError> {
    let query = if command.example {
        EXAMPLE_QUERY
    } else {
        command.query.as_deref().ok_or(CliError::NoInput)?
    };

    let pipeline = Compiler::new(command.options.clone()).compile_str(query)?;
    Ok(pipeline.to_json())
}

/// Compile a calculate expression on its own
pub fn execute_expr(expression: &str) -> Result<serde_json::Value, CliError> {
    let expr = parse_expression(expression)?;
    Ok(expr_to_json(&expr))
}
