use crate::ast::Token;

/// Arithmetic operators of a calculate expression.
///
/// Each operator is binary and left-associative. `*` and `/` bind tighter
/// than `+` and `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    /// Addition (`+`), emitted as `$sum`
    Add,
    /// Subtraction (`-`), emitted as `$subtract`
    Subtract,
    /// Multiplication (`*`), emitted as `$multiply`
    Multiply,
    /// Division (`/`), emitted as `$divide`
    Divide,
}

impl ArithOp {
    pub fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::Plus => Some(ArithOp::Add),
            Token::Minus => Some(ArithOp::Subtract),
            Token::Star => Some(ArithOp::Multiply),
            Token::Slash => Some(ArithOp::Divide),
            _ => None,
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            ArithOp::Add | ArithOp::Subtract => 1,
            ArithOp::Multiply | ArithOp::Divide => 2,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            ArithOp::Add => '+',
            ArithOp::Subtract => '-',
            ArithOp::Multiply => '*',
            ArithOp::Divide => '/',
        }
    }

    /// Name of the aggregation expression operator this compiles to.
    pub fn pipeline_operator(self) -> &'static str {
        match self {
            ArithOp::Add => "$sum",
            ArithOp::Subtract => "$subtract",
            ArithOp::Multiply => "$multiply",
            ArithOp::Divide => "$divide",
        }
    }
}

/// Filter comparators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    /// Less than (`<`)
    Lt,
    /// Less than or equal (`<=`)
    Lte,
    /// Greater than (`>`)
    Gt,
    /// Greater than or equal (`>=`)
    Gte,
    /// Equal (`=` or `$eq`)
    Eq,
}

impl Comparator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "<" => Some(Comparator::Lt),
            "<=" => Some(Comparator::Lte),
            ">" => Some(Comparator::Gt),
            ">=" => Some(Comparator::Gte),
            "=" | "$eq" => Some(Comparator::Eq),
            _ => None,
        }
    }

    pub fn pipeline_operator(self) -> &'static str {
        match self {
            Comparator::Lt => "$lt",
            Comparator::Lte => "$lte",
            Comparator::Gt => "$gt",
            Comparator::Gte => "$gte",
            Comparator::Eq => "$eq",
        }
    }
}
