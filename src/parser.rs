//! Calculate expression compiler.
//!
//! Infix tokens are reordered into postfix with the shunting-yard algorithm,
//! then the postfix sequence is folded into an [`Expr`] tree with a single
//! operand stack.

use thiserror::Error;

use crate::{
    ast::{ArithOp, Expr, Token},
    lexer::{LexError, Lexer},
};

/// Malformed calculate expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("Empty expression")]
    Empty,

    #[error("Unmatched ')'")]
    UnmatchedCloseParen,

    #[error("Unclosed '('")]
    UnclosedParen,

    /// Operator applied to fewer than two operands
    #[error("Operator '{op}' is missing an operand")]
    MissingOperand { op: char },

    /// Field name the pipeline itself uses as a key
    #[error("Field '${name}' is reserved")]
    ReservedField { name: String },

    /// Postfix evaluation left more than one operand behind
    #[error("Expression reduced to {count} operands instead of one")]
    Dangling { count: usize },
}

pub struct Parser {
    lexer: Lexer,
}

impl Parser {
    pub fn new(lexer: Lexer) -> Self {
        Parser { lexer }
    }

    /// Consumes the lexer and compiles the expression tree.
    pub fn parse(&mut self) -> Result<Expr, ParseError> {
        let tokens = self.lexer.remaining_tokens()?;
        let postfix = to_postfix(tokens)?;
        eval_postfix(postfix)
    }
}

/// Compiles an expression string in one call.
pub fn parse_expression(input: &str) -> Result<Expr, ParseError> {
    Parser::new(Lexer::new(input)).parse()
}

/// Reorders infix tokens into postfix (Reverse-Polish) order.
///
/// Operators of equal precedence pop before the incoming one is pushed, so
/// `a - b - c` stays `(a - b) - c`. Parentheses never reach the output.
pub fn to_postfix(tokens: Vec<Token>) -> Result<Vec<Token>, ParseError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        if token.is_operand() {
            output.push(token);
            continue;
        }

        match token {
            Token::LParen => stack.push(token),
            Token::RParen => loop {
                match stack.pop() {
                    Some(Token::LParen) => break,
                    Some(op) => output.push(op),
                    None => return Err(ParseError::UnmatchedCloseParen),
                }
            },
            _ => {
                let Some(op) = ArithOp::from_token(&token) else {
                    continue;
                };
                while let Some(top) = stack.last().and_then(ArithOp::from_token) {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    if let Some(popped) = stack.pop() {
                        output.push(popped);
                    }
                }
                stack.push(token);
            }
        }
    }

    while let Some(token) = stack.pop() {
        if token == Token::LParen {
            return Err(ParseError::UnclosedParen);
        }
        output.push(token);
    }

    Ok(output)
}

/// Folds a postfix token sequence into an expression tree.
///
/// The second-to-last operand on the stack becomes the left child and the
/// last one the right child of each operator.
pub fn eval_postfix(postfix: Vec<Token>) -> Result<Expr, ParseError> {
    let mut operands: Vec<Expr> = Vec::new();

    for token in postfix {
        if let Some(op) = ArithOp::from_token(&token) {
            let (Some(right), Some(left)) = (operands.pop(), operands.pop()) else {
                return Err(ParseError::MissingOperand { op: op.symbol() });
            };
            operands.push(Expr::binary(op, left, right));
            continue;
        }

        let leaf = match token {
            Token::FieldRef(name) => Expr::FieldRef(name),
            Token::Number(raw) => Expr::Number(raw),
            Token::Word(word) => Expr::Word(word),
            // to_postfix never emits parentheses or Eof
            _ => continue,
        };
        operands.push(leaf);
    }

    match operands.len() {
        0 => Err(ParseError::Empty),
        1 => Ok(operands.remove(0)),
        count => Err(ParseError::Dangling { count }),
    }
}
