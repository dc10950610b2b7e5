//! Unit tests for the Pratt parser, split by concern: [`statements`] for
//! `let`/`return`/blocks, [`expressions`] for literals, prefix/infix
//! operators, `if`, functions, and calls, [`precedence`] for the
//! operator-precedence `Display` table, and [`errors`] for the parser's
//! error-recovery behavior.

mod errors;
mod precedence;
mod statements;

use super::*;
use crate::lexer::Lexer;

/// Parses `input` and asserts there were no parse errors, returning the
/// resulting [`Program`]. Used by every test module in this directory.
pub(super) fn parse_program(input: &str) -> Program {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();
    assert!(
        parser.errors().is_empty(),
        "parser had errors for {:?}: {:?}",
        input,
        parser.errors()
    );
    program
}
