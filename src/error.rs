//! Compile errors.
//!
//! Every compile call fails on the first violation it finds and returns no
//! partial pipeline. Retrying with the same input cannot succeed.

use thiserror::Error;

use crate::parser::ParseError;

pub type CompileResult<T> = Result<T, CompileError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileError {
    /// Not valid JSON, a missing key, or a key of the wrong shape
    #[error("Malformed query: {0}")]
    MalformedDsl(String),

    /// Filter clause that is not `$field <comparator> value`
    #[error("Malformed filter clause '{clause}': {reason}")]
    MalformedFilterClause { clause: String, reason: String },

    /// Calculate expression that does not compile to a single tree
    #[error("Malformed expression: {0}")]
    MalformedExpression(#[from] ParseError),

    /// Input that the default policy would silently drop, rejected in strict mode
    #[error("Unsupported query: {0}")]
    UnsupportedQuery(String),
}

impl CompileError {
    /// Stable category name, e.g. `"MalformedFilterClause"`.
    pub fn kind(&self) -> &'static str {
        match self {
            CompileError::MalformedDsl(_) => "MalformedDSL",
            CompileError::MalformedFilterClause { .. } => "MalformedFilterClause",
            CompileError::MalformedExpression(_) => "MalformedExpression",
            CompileError::UnsupportedQuery(_) => "UnsupportedQuery",
        }
    }

    pub(crate) fn filter(clause: &str, reason: impl Into<String>) -> Self {
        CompileError::MalformedFilterClause {
            clause: clause.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for CompileError {
    fn from(e: serde_json::Error) -> Self {
        CompileError::MalformedDsl(e.to_string())
    }
}
