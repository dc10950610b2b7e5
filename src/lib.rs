//! Pig: a tree-walking interpreter for a small dynamically-typed,
//! expression-oriented language in the Monkey family.
//!
//! The pipeline:
//!
//! 1. [`lexer`] turns source bytes into a [`token`] stream.
//! 2. [`parser`] is a Pratt parser that turns tokens into an [`ast`].
//! 3. [`evaluator`] walks the AST against an [`object::Environment`],
//!    producing [`object::Value`]s.
//! 4. [`repl`] wires all three together into an interactive session; `run`
//!    below wires them into a one-shot file runner.

pub mod ast;
pub mod evaluator;
pub mod lexer;
pub mod object;
pub mod parser;
pub mod repl;
pub mod token;

use std::path::Path;

use anyhow::{bail, Context, Result};

/// Reads, tokenizes, parses, and evaluates the program at `path`.
///
/// Parser errors are printed to stderr, the same way [`repl`] prints them,
/// and are reported as the returned error. On success, the program's final
/// value is printed via [`object::Value::inspect`] unless it is `null`.
pub fn run_file(path: &Path) -> Result<()> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let lexer = lexer::Lexer::new(&source);
    let mut parser = parser::Parser::new(lexer);
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        for msg in parser.errors() {
            eprintln!("\t{msg}");
        }
        bail!("{} had {} parser error(s)", path.display(), parser.errors().len());
    }

    let env = object::new_environment();
    let result = evaluator::eval_program(&program, &env);

    if !matches!(result.as_ref(), object::Value::Null) {
        println!("{}", result.inspect());
    }

    if let object::Value::Error(msg) = result.as_ref() {
        bail!("{msg}");
    }

    Ok(())
}
