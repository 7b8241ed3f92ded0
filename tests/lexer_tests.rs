// tests/lexer_tests.rs

use pipegen::ast::Token;
use pipegen::lexer::Lexer;

fn field(name: &str) -> Token {
    Token::FieldRef(name.to_string())
}

// ============================================================================
// Single Character Tokens
// ============================================================================

#[test]
fn test_single_char_tokens() {
    let test_cases = vec![
        ("+", Token::Plus),
        ("-", Token::Minus),
        ("*", Token::Star),
        ("/", Token::Slash),
        ("(", Token::LParen),
        (")", Token::RParen),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        let token = lexer.next_token().unwrap();
        assert_eq!(token, expected, "Failed for input: {}", input);
        assert_eq!(lexer.next_token().unwrap(), Token::Eof);
    }
}

// ============================================================================
// Field References
// ============================================================================

#[test]
fn test_field_reference() {
    let mut lexer = Lexer::new("$deal_price");
    assert_eq!(lexer.next_token().unwrap(), field("deal_price"));
    assert_eq!(lexer.next_token().unwrap(), Token::Eof);
}

#[test]
fn test_field_reference_stops_at_operator() {
    let tokens = Lexer::tokenize("$a+$b").unwrap();
    assert_eq!(tokens, vec![field("a"), Token::Plus, field("b")]);
}

#[test]
fn test_bare_marker_is_error() {
    let err = Lexer::tokenize("$ + $b").unwrap_err();
    assert_eq!(err.position, 0);
}

#[test]
fn test_field_refs_skip_literals() {
    let fields = Lexer::field_refs("($opportunity + 10) * $count / ratio").unwrap();
    assert_eq!(fields, vec!["opportunity", "count"]);
}

// ============================================================================
// Literals
// ============================================================================

#[test]
fn test_numbers() {
    let tokens = Lexer::tokenize("42 3.14 0.5").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Number("42".into()),
            Token::Number("3.14".into()),
            Token::Number("0.5".into()),
        ]
    );
}

#[test]
fn test_trailing_dot_is_not_part_of_number() {
    let err = Lexer::tokenize("7.").unwrap_err();
    assert_eq!(err.position, 1);
}

#[test]
fn test_bare_word() {
    let tokens = Lexer::tokenize("total").unwrap();
    assert_eq!(tokens, vec![Token::Word("total".into())]);
}

// ============================================================================
// Whitespace and Errors
// ============================================================================

#[test]
fn test_whitespace_is_discarded() {
    let spaced = Lexer::tokenize("  ( $a\t+\n$b )  ").unwrap();
    let tight = Lexer::tokenize("($a+$b)").unwrap();
    assert_eq!(spaced, tight);
}

#[test]
fn test_remaining_tokens_after_next_token() {
    let mut lexer = Lexer::new("$a * $b");
    assert_eq!(lexer.next_token().unwrap(), field("a"));
    assert_eq!(
        lexer.remaining_tokens().unwrap(),
        vec![Token::Star, field("b")]
    );
    assert!(lexer.remaining_tokens().unwrap().is_empty());
}

#[test]
fn test_empty_input() {
    assert!(Lexer::tokenize("").unwrap().is_empty());
    assert!(Lexer::tokenize("   ").unwrap().is_empty());
}

#[test]
fn test_unexpected_character() {
    let err = Lexer::tokenize("$a % $b").unwrap_err();
    assert_eq!(err.position, 3);
    assert!(err.to_string().contains("Unexpected character '%'"));
}
