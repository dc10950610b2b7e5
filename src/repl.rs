//! The interactive read-eval-print loop.
//!
//! One `Environment` lives for the whole session, each line is lexed,
//! parsed, and evaluated in turn, and a non-empty parser error list
//! suppresses evaluation for that line entirely.
//!
//! [`start`] is a plain `BufRead`/`Write` loop with no line editing, so it
//! can run against in-memory buffers or a piped, non-interactive stdin.
//! [`run_interactive`] is the real terminal entry point, layering
//! `rustyline` history and editing on top of the same [`eval_line`] core.

use std::io::{BufRead, Write};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::evaluator::eval_program;
use crate::lexer::Lexer;
use crate::object::{new_environment, EnvRef, Value};
use crate::parser::Parser;

const PROMPT: &str = "PIG>> ";

const PIG_FACE: &str = r#"            __,__
   .--.  .-"     "-.  .--.
  / .. \/  .-. .-.  \/ .. \
 | |  '|  /   Y   \  |'  | |
 | \   \  \ 0 | 0 /  /   / |
  \ '- ,\.-"""""""-./, -' /
   ''-' /_   ^ ^   _\ '-''
       |  \._   _./  |
       \   \ '~' /   /
        '._ '-=-' _.'
           '-----'
"#;

/// Runs the REPL loop over an arbitrary `reader`/`writer` pair, one line
/// at a time, until `reader` reaches EOF. Prints the prompt to `writer`
/// before every read.
pub fn start<R: BufRead, W: Write>(mut reader: R, mut writer: W) -> std::io::Result<()> {
    let env = new_environment();
    let mut line = String::new();

    loop {
        write!(writer, "{PROMPT}")?;
        writer.flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Ok(());
        }

        eval_line(line.trim_end_matches(['\n', '\r']), &env, &mut writer)?;
    }
}

/// Runs the REPL on the controlling terminal, with `rustyline` history and
/// line editing, until EOF (Ctrl-D) or an interrupt (Ctrl-C).
pub fn run_interactive() -> rustyline::Result<()> {
    let mut editor = DefaultEditor::new()?;
    let env = new_environment();
    let stdout = std::io::stdout();

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let _ = editor.add_history_entry(line.as_str());
                eval_line(&line, &env, &mut stdout.lock())?;
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(err) => return Err(err),
        }
    }
}

fn eval_line(line: &str, env: &EnvRef, mut writer: impl Write) -> std::io::Result<()> {
    let lexer = Lexer::new(line);
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    log::debug!("parsed {} statement(s), {} error(s)", program.statements.len(), parser.errors().len());

    if !parser.errors().is_empty() {
        print_parser_errors(parser.errors(), &mut writer)?;
        return Ok(());
    }

    let evaluated = eval_program(&program, env);
    if !matches!(evaluated.as_ref(), Value::Null) {
        writeln!(writer, "{}", evaluated.inspect())?;
    }
    Ok(())
}

fn print_parser_errors(errors: &[String], mut writer: impl Write) -> std::io::Result<()> {
    write!(writer, "{PIG_FACE}")?;
    writeln!(writer, "Woops! We ran into some pig business here!")?;
    writeln!(writer, "Parser errors {}:", errors.len())?;
    for msg in errors {
        writeln!(writer, "\t{msg}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(input: &str) -> String {
        let mut output = Vec::new();
        start(Cursor::new(input.as_bytes()), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn evaluates_each_line_against_a_shared_environment() {
        let output = run_session("let x = 5;\nx + 1;\n");
        assert!(output.contains("6"));
    }

    #[test]
    fn reports_parser_errors_instead_of_evaluating() {
        let output = run_session("let = 5;\n");
        assert!(output.contains("Parser errors 1:"));
        assert!(output.contains("expected next token to be \"IDENT\", got \"=\""));
    }

    #[test]
    fn let_statements_and_false_ifs_print_nothing() {
        let output = run_session("let x = 5;\nif (false) { 10 }\n");
        assert_eq!(output, "PIG>> PIG>> PIG>> ");
    }

    #[test]
    fn stops_cleanly_at_eof_with_no_trailing_lines() {
        let output = run_session("");
        assert_eq!(output, "PIG>> ");
    }

    #[test]
    fn prompt_and_face_are_stable() {
        assert_eq!(PROMPT, "PIG>> ");
        assert!(PIG_FACE.contains('0'));
    }
}
