//! Lexical analyzer for the Pig programming language.
//!
//! This module provides the [`Lexer`] struct which converts source code text
//! into a stream of [`Token`]s for the parser.
//!
//! # Overview
//!
//! The lexer scans the input byte by byte with one byte of lookahead. It
//! recognizes identifiers, integer literals, the one- and two-character
//! operators, and punctuation, and skips ASCII whitespace between tokens.
//! There is no error channel: a byte that matches nothing is emitted as an
//! [`TokenKind::Illegal`] token rather than returned as an `Err`, matching
//! the language's own error model (see [`crate::object::Value::Error`]).
//!
//! # See Also
//!
//! * [`crate::token`] - Token type definitions
//! * [`crate::parser`] - Parser that consumes the token stream

use crate::token::{self, Token, TokenKind};

/// A lexical analyzer that tokenizes Pig source code.
///
/// The lexer operates on raw bytes rather than `char`s: Pig's grammar is
/// ASCII-only (identifiers, integers, and a fixed set of operators), so
/// byte-oriented scanning avoids UTF-8 decoding on every step and matches
/// the classic Pratt-parser-tutorial design this interpreter follows.
pub struct Lexer {
    input: Vec<u8>,
    /// Index of `ch` within `input`.
    position: usize,
    /// Index of the next byte to read.
    read_position: usize,
    /// The byte currently under the cursor; `0` once the input is exhausted.
    ch: u8,
}

impl Lexer {
    /// Creates a new `Lexer` over `input` and primes the first character.
    pub fn new(input: impl Into<String>) -> Self {
        let mut lexer = Lexer {
            input: input.into().into_bytes(),
            position: 0,
            read_position: 0,
            ch: 0,
        };
        lexer.read_char();
        lexer
    }

    /// Advances the cursor by one byte, setting `ch` to `0` at end of input.
    fn read_char(&mut self) {
        self.ch = if self.read_position >= self.input.len() {
            0
        } else {
            self.input[self.read_position]
        };
        self.position = self.read_position;
        self.read_position += 1;
    }

    /// Returns the byte after the current one without consuming it.
    fn peek_char(&self) -> u8 {
        if self.read_position >= self.input.len() {
            0
        } else {
            self.input[self.read_position]
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    /// Reads the next token from the input, advancing the cursor past it.
    ///
    /// Identifiers and integers are read as a maximal run and the cursor is
    /// left sitting on the first delimiter byte; every other branch consumes
    /// exactly the bytes it emits and then advances once more.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let tok = match self.ch {
            b'=' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    Token::new(TokenKind::Eq, "==")
                } else {
                    Token::new(TokenKind::Assign, "=")
                }
            }
            b'!' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    Token::new(TokenKind::NotEq, "!=")
                } else {
                    Token::new(TokenKind::Bang, "!")
                }
            }
            b'<' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    Token::new(TokenKind::Le, "<=")
                } else {
                    Token::new(TokenKind::Lt, "<")
                }
            }
            b'>' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    Token::new(TokenKind::Ge, ">=")
                } else {
                    Token::new(TokenKind::Gt, ">")
                }
            }
            b'+' => Token::new(TokenKind::Plus, "+"),
            b'-' => Token::new(TokenKind::Minus, "-"),
            b'*' => Token::new(TokenKind::Asterisk, "*"),
            b'/' => Token::new(TokenKind::Slash, "/"),
            b',' => Token::new(TokenKind::Comma, ","),
            b';' => Token::new(TokenKind::Semicolon, ";"),
            b'(' => Token::new(TokenKind::LParen, "("),
            b')' => Token::new(TokenKind::RParen, ")"),
            b'{' => Token::new(TokenKind::LBrace, "{"),
            b'}' => Token::new(TokenKind::RBrace, "}"),
            0 => Token::new(TokenKind::Eof, ""),
            ch if is_letter(ch) => {
                let literal = self.read_identifier();
                let kind = token::lookup_ident(&literal);
                return Token::new(kind, literal);
            }
            ch if ch.is_ascii_digit() => {
                let literal = self.read_number();
                return Token::new(TokenKind::Int, literal);
            }
            ch => Token::new(TokenKind::Illegal, (ch as char).to_string()),
        };

        self.read_char();
        tok
    }

    /// Reads a maximal run of letters, digits, and underscores starting at
    /// the current byte, leaving the cursor on the first non-identifier
    /// byte.
    fn read_identifier(&mut self) -> String {
        let start = self.position;
        while is_letter(self.ch) || self.ch.is_ascii_digit() {
            self.read_char();
        }
        String::from_utf8_lossy(&self.input[start..self.position]).into_owned()
    }

    /// Reads a maximal run of digits starting at the current byte, leaving
    /// the cursor on the first non-digit byte.
    fn read_number(&mut self) -> String {
        let start = self.position;
        while self.ch.is_ascii_digit() {
            self.read_char();
        }
        String::from_utf8_lossy(&self.input[start..self.position]).into_owned()
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}
