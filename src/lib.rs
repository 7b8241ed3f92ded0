pub mod ast;
pub mod error;
pub mod filter;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod sample;

#[cfg(feature = "cli")]
pub mod cli;

pub use ast::{ArithOp, Comparator, Expr, Pipeline, QueryDsl, Stage, Token};
pub use error::{CompileError, CompileResult};
pub use lexer::{LexError, Lexer};
pub use output::{to_json, to_json_pretty};
pub use parser::{ParseError, Parser, parse_expression};
pub use pipeline::{CompileOptions, Compiler, compile};

/// Daily deal totals for a window of opportunities, as a ready-made query.
pub const EXAMPLE_QUERY: &str = r#"{"group": ["$date"], "filters": ["$opportunity < 1000000", "$opportunity > 2000", "$state $eq success"], "calculate": "($opportunity + $deal_price) * $count"}"#;
