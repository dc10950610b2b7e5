//! Tests for parser error recovery.

use super::super::Parser;
use crate::lexer::Lexer;

fn parse_errors(input: &str) -> Vec<String> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer);
    parser.parse_program();
    parser.errors().to_vec()
}

#[test]
fn missing_identifier_after_let_is_reported() {
    let errors = parse_errors("let = 5;");
    assert_eq!(
        errors,
        vec!["expected next token to be \"IDENT\", got \"=\""]
    );
}

#[test]
fn missing_assign_after_let_name_is_reported() {
    let errors = parse_errors("let x 5;");
    assert_eq!(errors, vec!["expected next token to be \"=\", got \"INT\""]);
}

#[test]
fn token_with_no_prefix_parser_is_reported() {
    let errors = parse_errors(";");
    assert_eq!(errors, vec!["no prefix parse function for ; found"]);
}

#[test]
fn parser_keeps_parsing_after_an_error() {
    let errors = parse_errors("let x 5; let y = 10;");
    assert_eq!(errors.len(), 1);
}

#[test]
fn illegal_tokens_produce_no_prefix_parse_error() {
    let errors = parse_errors("@");
    assert_eq!(errors, vec!["no prefix parse function for ILLEGAL found"]);
}
