// tests/parser_tests.rs

use pipegen::ast::{ArithOp, Expr, Token};
use pipegen::lexer::Lexer;
use pipegen::output::expr_to_json;
use pipegen::parser::{ParseError, Parser, eval_postfix, parse_expression, to_postfix};
use serde_json::json;

fn parse(input: &str) -> Expr {
    Parser::new(Lexer::new(input)).parse().unwrap()
}

fn postfix(input: &str) -> Vec<Token> {
    to_postfix(Lexer::tokenize(input).unwrap()).unwrap()
}

fn f(name: &str) -> Expr {
    Expr::field(name)
}

// ============================================================================
// Shunting-yard
// ============================================================================

#[test]
fn test_postfix_precedence() {
    assert_eq!(
        postfix("$a + $b * $c"),
        vec![
            Token::FieldRef("a".into()),
            Token::FieldRef("b".into()),
            Token::FieldRef("c".into()),
            Token::Star,
            Token::Plus,
        ]
    );
}

#[test]
fn test_postfix_left_associative() {
    assert_eq!(
        postfix("$a - $b + $c"),
        vec![
            Token::FieldRef("a".into()),
            Token::FieldRef("b".into()),
            Token::Minus,
            Token::FieldRef("c".into()),
            Token::Plus,
        ]
    );
}

#[test]
fn test_postfix_drops_parentheses() {
    let tokens = postfix("(($a))");
    assert_eq!(tokens, vec![Token::FieldRef("a".into())]);
}

#[test]
fn test_unmatched_close_paren() {
    let err = to_postfix(Lexer::tokenize("$a + $b)").unwrap()).unwrap_err();
    assert_eq!(err, ParseError::UnmatchedCloseParen);
}

#[test]
fn test_unclosed_paren() {
    let err = to_postfix(Lexer::tokenize("($a + $b").unwrap()).unwrap_err();
    assert_eq!(err, ParseError::UnclosedParen);
}

// ============================================================================
// Tree building
// ============================================================================

#[test]
fn test_multiplication_binds_tighter() {
    assert_eq!(
        parse("$a + $b * $c"),
        Expr::binary(ArithOp::Add, f("a"), Expr::binary(ArithOp::Multiply, f("b"), f("c")))
    );
}

#[test]
fn test_parentheses_override_precedence() {
    assert_eq!(
        parse("($a + $b) * $c"),
        Expr::binary(ArithOp::Multiply, Expr::binary(ArithOp::Add, f("a"), f("b")), f("c"))
    );
}

#[test]
fn test_equal_precedence_is_left_to_right() {
    // (a / b) / c, not a / (b / c)
    assert_eq!(
        parse("$a / $b / $c"),
        Expr::binary(ArithOp::Divide, Expr::binary(ArithOp::Divide, f("a"), f("b")), f("c"))
    );
}

#[test]
fn test_operand_order_is_preserved() {
    // The second-to-last operand is the left child
    assert_eq!(parse("$x - $y"), Expr::binary(ArithOp::Subtract, f("x"), f("y")));
}

#[test]
fn test_single_operand() {
    assert_eq!(parse("$count"), f("count"));
    assert_eq!(parse("12"), Expr::Number("12".into()));
}

#[test]
fn test_literals_in_tree() {
    assert_eq!(
        parse("$price * 2"),
        Expr::binary(ArithOp::Multiply, f("price"), Expr::Number("2".into()))
    );
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_missing_operand() {
    assert_eq!(
        parse_expression("$a +").unwrap_err(),
        ParseError::MissingOperand { op: '+' }
    );
    assert_eq!(
        parse_expression("* $a").unwrap_err(),
        ParseError::MissingOperand { op: '*' }
    );
}

#[test]
fn test_dangling_operands() {
    assert_eq!(
        parse_expression("$a $b").unwrap_err(),
        ParseError::Dangling { count: 2 }
    );
}

#[test]
fn test_empty_expression() {
    assert_eq!(parse_expression("").unwrap_err(), ParseError::Empty);
    assert_eq!(parse_expression("()").unwrap_err(), ParseError::Empty);
}

#[test]
fn test_lex_error_surfaces() {
    assert!(matches!(
        parse_expression("$a ^ 2").unwrap_err(),
        ParseError::Lex(_)
    ));
}

#[test]
fn test_eval_postfix_directly() {
    let tokens = vec![
        Token::FieldRef("a".into()),
        Token::FieldRef("b".into()),
        Token::Slash,
    ];
    assert_eq!(
        eval_postfix(tokens).unwrap(),
        Expr::binary(ArithOp::Divide, f("a"), f("b"))
    );
}

// ============================================================================
// Emission
// ============================================================================

#[test]
fn test_emit_precedence() {
    assert_eq!(
        expr_to_json(&parse("$a + $b * $c")),
        json!({ "$sum": ["$a", { "$multiply": ["$b", "$c"] }] })
    );
    assert_eq!(
        expr_to_json(&parse("($a + $b) * $c")),
        json!({ "$multiply": [{ "$sum": ["$a", "$b"] }, "$c"] })
    );
}

#[test]
fn test_emit_all_operators() {
    assert_eq!(
        expr_to_json(&parse("$a - $b / $c")),
        json!({ "$subtract": ["$a", { "$divide": ["$b", "$c"] }] })
    );
}

#[test]
fn test_emit_literals() {
    assert_eq!(
        expr_to_json(&parse("$a * 2 + 0.5")),
        json!({ "$sum": [{ "$multiply": ["$a", 2] }, 0.5] })
    );
    assert_eq!(expr_to_json(&parse("total")), json!("total"));
}

#[test]
fn test_emit_deep_nesting() {
    assert_eq!(
        expr_to_json(&parse("(($a + $b) - ($c * $d)) / $e")),
        json!({
            "$divide": [
                { "$subtract": [{ "$sum": ["$a", "$b"] }, { "$multiply": ["$c", "$d"] }] },
                "$e"
            ]
        })
    );
}
