//! End-to-end tests driving the full `tokenize -> parse -> evaluate`
//! pipeline, covering the seed scenarios and testable properties a
//! complete Pig implementation must satisfy.

use pig::evaluator::eval_program;
use pig::lexer::Lexer;
use pig::object::new_environment;
use pig::parser::Parser;

fn eval(input: &str) -> String {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();
    assert!(
        parser.errors().is_empty(),
        "unexpected parse errors for {:?}: {:?}",
        input,
        parser.errors()
    );

    eval_program(&program, &new_environment()).inspect()
}

#[test]
fn seed_scenarios() {
    let cases = [
        ("5 + 5 * 2", "15"),
        ("(1 + 2) * -3", "-9"),
        ("true == false", "false"),
        ("1 < 2 == true", "true"),
        ("if (1 > 2) { 10 } else { 20 }", "20"),
        ("let a = 5; let b = a > 3; if (b) { a * 2 } else { 0 }", "10"),
        ("5 + true;", "ERROR: type mismatch: INTEGER + BOOLEAN"),
        ("foobar", "ERROR: identifier not found: foobar"),
    ];

    for (input, expected) in cases {
        assert_eq!(eval(input), expected, "input was {:?}", input);
    }
}

#[test]
fn closures_capture_their_defining_environment_end_to_end() {
    let input = r#"
        let newAdder = fn(x) {
            fn(y) { x + y };
        };
        let addTwo = newAdder(2);
        addTwo(3);
    "#;
    assert_eq!(eval(input), "5");
}

#[test]
fn immediately_invoked_function_literal() {
    assert_eq!(eval("fn(x, y) { x + y; }(2, 3)"), "5");
}

#[test]
fn calling_a_non_function_is_a_runtime_error() {
    assert_eq!(eval("let x = 5; x(1);"), "ERROR: not a function: INTEGER");
}

#[test]
fn function_parameters_shadow_outer_bindings_only_for_the_call() {
    assert_eq!(
        eval("let x = 10; let f = fn(x) { x + 1; }; f(1);"),
        "2"
    );
}

#[test]
fn return_unwinds_through_nested_blocks_to_the_program() {
    assert_eq!(
        eval("if (10 > 1) { if (10 > 1) { return 10; } return 1; }"),
        "10"
    );
}

#[test]
fn error_short_circuits_the_enclosing_expression() {
    assert_eq!(
        eval("5; true + false; 5"),
        "ERROR: unknown operator: BOOLEAN + BOOLEAN"
    );
}

#[test]
fn double_negation_is_the_identity_on_booleans() {
    assert_eq!(eval("!!true"), "true");
    assert_eq!(eval("!!false"), "false");
    assert_eq!(eval("!null"), "true");
    assert_eq!(eval("!5"), "false");
}

#[test]
fn program_string_is_idempotent_under_reparsing() {
    let input = "let a = 5; let b = a + 1; b;";

    let first_program = {
        let mut parser = Parser::new(Lexer::new(input));
        parser.parse_program()
    };
    let rendered = first_program.to_string();

    let second_program = {
        let mut parser = Parser::new(Lexer::new(&rendered));
        parser.parse_program()
    };

    assert_eq!(first_program, second_program);
}

#[test]
fn repl_session_shares_one_environment_across_lines() {
    let mut output = Vec::new();
    let input = "let x = 5;\nlet y = 10;\nx + y;\n";
    pig::repl::start(std::io::Cursor::new(input.as_bytes()), &mut output).unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("15"));
}

#[test]
fn repl_session_reports_parser_errors_and_keeps_running() {
    let mut output = Vec::new();
    let input = "let = 5;\n1 + 1;\n";
    pig::repl::start(std::io::Cursor::new(input.as_bytes()), &mut output).unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Parser errors 1:"));
    assert!(output.contains("expected next token to be \"IDENT\", got \"=\""));
    assert!(output.contains('2'));
}
