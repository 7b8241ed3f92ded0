/// Lexical token of a calculate expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Field reference, stored without its `$` marker
    ///
    /// # Examples
    /// ```text
    /// $opportunity   // FieldRef("opportunity")
    /// $deal_price    // FieldRef("deal_price")
    /// $count         // FieldRef("count")
    /// ```
    FieldRef(String),

    /// Numeric literal, kept as its raw text
    ///
    /// # Examples
    /// ```text
    /// 2
    /// 0.5
    /// ```
    Number(String),

    /// Bare word literal (word characters without a `$` marker)
    Word(String),

    // Arithmetic
    /// Addition
    Plus,

    /// Subtraction
    Minus,

    /// Multiplication
    Star,

    /// Division
    Slash,

    // Delimiters
    /// Left parenthesis
    LParen,

    /// Right parenthesis
    RParen,

    /// End of input
    Eof,
}

impl Token {
    /// Operand tokens pass straight through the shunting-yard.
    pub fn is_operand(&self) -> bool {
        matches!(self, Token::FieldRef(_) | Token::Number(_) | Token::Word(_))
    }
}
