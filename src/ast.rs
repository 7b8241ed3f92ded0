//! # Pipegen - Abstract Syntax Tree
//!
//! Types shared by the query compiler: the input document, the tokens and
//! tree of a calculate expression, and the pipeline stages produced for the
//! database.
//!
//! - **[tokens]** - Lexical tokens of a calculate expression
//! - **[operators]** - Arithmetic operators and filter comparators
//! - **[expressions]** - Compiled arithmetic expression tree
//! - **[query]** - The declarative query document
//! - **[stages]** - Aggregation pipeline stages
//!
//! ## Query document
//!
//! ```text
//! {"group": ["$date"],
//!  "filters": ["$opportunity < 1000000", "$opportunity > 2000", "$state $eq success"],
//!  "calculate": "($opportunity + $deal_price) * $count"}
//! ```
//!
//! compiles to the stage sequence
//!
//! ```text
//! $match -> $group -> $sort -> $project
//! ```
//!
//! ### Stage presence
//!
//! - `$match` only when at least one filter is given
//! - `$group` and `$sort` together, only when a group field is given
//! - `$project` only when both a group field and a calculate expression are given
pub mod tokens;
pub mod operators;
pub mod expressions;
pub mod query;
pub mod stages;

pub use tokens::Token;
pub use operators::{ArithOp, Comparator};
pub use expressions::Expr;
pub use query::QueryDsl;
pub use stages::{
    Accumulator, FilterCondition, FilterValue, GroupKey, Pipeline, Projection, SortDirection,
    Stage,
};
