//! Tests for operator precedence, verified through the canonical
//! `Display` rendering of the parsed expression.

use super::parse_program;

fn round_trip(input: &str) -> String {
    parse_program(input).to_string()
}

#[test]
fn equal_precedence_operators_are_left_associative() {
    assert_eq!(round_trip("a + b + c"), "((a + b) + c)");
    assert_eq!(round_trip("a + b - c"), "((a + b) - c)");
    assert_eq!(round_trip("a * b * c"), "((a * b) * c)");
    assert_eq!(round_trip("a * b / c"), "((a * b) / c)");
}

#[test]
fn unary_binds_tighter_than_multiplicative() {
    assert_eq!(round_trip("-a * b"), "((-a) * b)");
    assert_eq!(round_trip("!-a"), "(!(-a))");
}

#[test]
fn multiplicative_binds_tighter_than_additive() {
    assert_eq!(round_trip("a + b * c"), "(a + (b * c))");
    assert_eq!(round_trip("a + b / c - d"), "((a + (b / c)) - d)");
}

#[test]
fn additive_binds_tighter_than_comparison() {
    assert_eq!(round_trip("a + b < c + d"), "((a + b) < (c + d))");
    assert_eq!(round_trip("3 + 4 <= 5 * 6"), "((3 + 4) <= (5 * 6))");
}

#[test]
fn comparison_binds_tighter_than_equality() {
    assert_eq!(round_trip("1 < 2 == true"), "((1 < 2) == true)");
    assert_eq!(round_trip("3 > 5 == false"), "((3 > 5) == false)");
    assert_eq!(round_trip("5 >= 3 != false"), "((5 >= 3) != false)");
}

#[test]
fn grouped_expressions_override_precedence() {
    assert_eq!(round_trip("(1 + 2) * -3"), "((1 + 2) * (-3))");
    assert_eq!(round_trip("(5 + 5) * 2"), "((5 + 5) * 2)");
    assert_eq!(round_trip("2 / (5 + 5)"), "(2 / (5 + 5))");
    assert_eq!(round_trip("-(5 + 5)"), "(-(5 + 5))");
    assert_eq!(round_trip("!(true == true)"), "(!(true == true))");
}

#[test]
fn call_expressions_bind_tightest() {
    assert_eq!(
        round_trip("a + add(b * c) + d"),
        "((a + add((b * c))) + d)"
    );
    assert_eq!(
        round_trip("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))"),
        "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))"
    );
    assert_eq!(
        round_trip("add(a + b + c * d / f + g)"),
        "add((((a + b) + ((c * d) / f)) + g))"
    );
}

#[test]
fn parse_program_string_is_idempotent() {
    let input = "1 < 2 == true";
    let rendered = round_trip(input);
    let rendered_again = round_trip(&rendered);
    assert_eq!(rendered, rendered_again);
}
