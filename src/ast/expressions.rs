use crate::ast::ArithOp;

/// Compiled calculate expression.
///
/// Leaves are the operand tokens exactly as written; inner nodes follow the
/// precedence and parenthesization of the source, with no re-association.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Field reference without its `$` marker
    ///
    /// # Example
    /// ```text
    /// $deal_price
    /// ```
    FieldRef(String),

    /// Numeric literal (raw text)
    Number(String),

    /// Bare word literal
    Word(String),

    /// Binary arithmetic operation
    ///
    /// # Example
    /// ```text
    /// ($opportunity + $deal_price) * $count
    /// ```
    BinaryOp {
        op: ArithOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn binary(op: ArithOp, left: Expr, right: Expr) -> Self {
        Expr::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn field(name: &str) -> Self {
        Expr::FieldRef(name.to_string())
    }
}
