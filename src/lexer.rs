use thiserror::Error;

use crate::ast::Token;

/// Marker that starts a field reference.
pub const FIELD_MARKER: char = '$';

/// Unexpected input in a calculate expression.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message} at position {position}")]
pub struct LexError {
    pub message: String,
    /// Character offset into the expression
    pub position: usize,
}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Tokenizes the whole input. The trailing `Eof` is not included.
    pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
        Lexer::new(input).remaining_tokens()
    }

    /// Reads every token left in the input, without the trailing `Eof`.
    pub fn remaining_tokens(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            match self.next_token()? {
                Token::Eof => return Ok(tokens),
                token => tokens.push(token),
            }
        }
    }

    /// Distinct field references of an expression, in first-seen order.
    pub fn field_refs(input: &str) -> Result<Vec<String>, LexError> {
        let mut fields: Vec<String> = Vec::new();
        for token in Lexer::tokenize(input)? {
            if let Token::FieldRef(name) = token
                && !fields.contains(&name)
            {
                fields.push(name);
            }
        }
        Ok(fields)
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if is_word_char(ch) {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    fn read_number(&mut self) -> String {
        let mut number = String::new();
        let mut seen_dot = false;

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                number.push(ch);
                self.advance();
            } else if ch == '.'
                && !seen_dot
                && self.peek_char(1).is_some_and(|c| c.is_ascii_digit())
            {
                seen_dot = true;
                number.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        number
    }

    fn single(&mut self, token: Token) -> Token {
        self.advance();
        token
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        let token = match self.current_char() {
            None => Token::Eof,
            Some(FIELD_MARKER) => {
                if self.peek_char(1).is_some_and(is_word_char) {
                    self.advance();
                    Token::FieldRef(self.read_identifier())
                } else {
                    return Err(LexError {
                        message: format!("Expected field name after '{}'", FIELD_MARKER),
                        position: self.position,
                    });
                }
            }
            Some('+') => self.single(Token::Plus),
            Some('-') => self.single(Token::Minus),
            Some('*') => self.single(Token::Star),
            Some('/') => self.single(Token::Slash),
            Some('(') => self.single(Token::LParen),
            Some(')') => self.single(Token::RParen),
            Some(ch) if ch.is_ascii_digit() => Token::Number(self.read_number()),
            Some(ch) if is_word_char(ch) => Token::Word(self.read_identifier()),
            Some(ch) => {
                return Err(LexError {
                    message: format!("Unexpected character '{}'", ch),
                    position: self.position,
                });
            }
        };
        Ok(token)
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

#[test]
fn test_field_refs_dedup() {
    let fields = Lexer::field_refs("$a * $b + $a / $count").unwrap();
    assert_eq!(fields, vec!["a", "b", "count"]);
}

#[test]
fn test_operators_and_parens() {
    let mut lexer = Lexer::new("($x+2)*3.5");
    assert_eq!(lexer.next_token().unwrap(), Token::LParen);
    assert_eq!(lexer.next_token().unwrap(), Token::FieldRef("x".to_string()));
    assert_eq!(lexer.next_token().unwrap(), Token::Plus);
    assert_eq!(lexer.next_token().unwrap(), Token::Number("2".to_string()));
    assert_eq!(lexer.next_token().unwrap(), Token::RParen);
    assert_eq!(lexer.next_token().unwrap(), Token::Star);
    assert_eq!(lexer.next_token().unwrap(), Token::Number("3.5".to_string()));
    assert_eq!(lexer.next_token().unwrap(), Token::Eof);
}
