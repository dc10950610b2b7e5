//! Tests for `let`, `return`, and block-statement parsing.

use super::parse_program;
use crate::ast::{Expression, Statement};

#[test]
fn let_statements_parse_name_and_value() {
    let tests = [
        ("let x = 5;", "x", "5"),
        ("let y = true;", "y", "true"),
        ("let foobar = y;", "foobar", "y"),
    ];

    for (input, expected_name, expected_value) in tests {
        let program = parse_program(input);
        assert_eq!(program.statements.len(), 1);

        match &program.statements[0] {
            Statement::Let(stmt) => {
                assert_eq!(stmt.name.value, expected_name);
                assert_eq!(stmt.value.to_string(), expected_value);
            }
            other => panic!("expected LetStatement, got {:?}", other),
        }
    }
}

#[test]
fn return_statements_parse_their_value() {
    let tests = [
        ("return 5;", "5"),
        ("return true;", "true"),
        ("return foobar;", "foobar"),
    ];

    for (input, expected_value) in tests {
        let program = parse_program(input);
        assert_eq!(program.statements.len(), 1);

        match &program.statements[0] {
            Statement::Return(stmt) => {
                assert_eq!(stmt.return_value.to_string(), expected_value);
            }
            other => panic!("expected ReturnStatement, got {:?}", other),
        }
    }
}

#[test]
fn block_statement_concatenates_its_statements() {
    let program = parse_program("if (x) { a; b; c }");
    match &program.statements[0] {
        Statement::Expression(stmt) => match &stmt.expression {
            Expression::If(if_expr) => {
                assert_eq!(if_expr.consequence.statements.len(), 3);
                assert_eq!(if_expr.consequence.to_string(), "abc");
            }
            other => panic!("expected IfExpression, got {:?}", other),
        },
        other => panic!("expected ExpressionStatement, got {:?}", other),
    }
}

#[test]
fn program_string_round_trips_a_let_statement() {
    let program = parse_program("let myVar = anotherVar;");
    assert_eq!(program.to_string(), "let myVar = anotherVar;");
}
