//! Pratt parser for the Pig programming language.
//!
//! This module provides the [`Parser`] struct which transforms the token
//! stream produced by [`crate::lexer::Lexer`] into a [`Program`] AST.
//!
//! # Overview
//!
//! The parser is a classic Vaughan Pratt / "top down operator precedence"
//! parser: it keeps two tokens of lookahead (`cur_token`, `peek_token`) and
//! drives expression parsing from two dispatch tables keyed by
//! [`TokenKind`], one mapping a token to the function that parses it as a
//! *prefix* position (an identifier, a literal, `!x`, `(grouped)`, `if`,
//! `fn`), the other mapping a token to the function that parses it as an
//! *infix* position given the already-parsed expression to its left (`+`,
//! `==`, and `(` for calls). [`precedence::precedence_of`] supplies the
//! binding power used to decide when to stop consuming infix operators.
//!
//! Parse errors never panic and never abort the parse: they are appended
//! to [`Parser::errors`] and the parser falls through to whatever recovery
//! point its statement loop reaches next.
//!
//! # See Also
//!
//! * [`crate::lexer`] produces the token stream consumed here
//! * [`crate::ast`] defines the AST types produced here
//! * [`crate::evaluator`] consumes the AST produced here

pub mod precedence;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use precedence::{precedence_of, Precedence};

use crate::ast::{
    BlockStatement, Boolean, CallExpression, Expression, ExpressionStatement, FunctionLiteral,
    Identifier, IfExpression, InfixExpression, IntegerLiteral, LetStatement, PrefixExpression,
    Program, ReturnStatement, Statement,
};
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

type PrefixParseFn = fn(&mut Parser) -> Option<Expression>;
type InfixParseFn = fn(&mut Parser, Expression) -> Option<Expression>;

/// A Pratt parser over a single source string's token stream.
pub struct Parser {
    lexer: Lexer,
    cur_token: Token,
    peek_token: Token,
    errors: Vec<String>,
    prefix_parse_fns: HashMap<TokenKind, PrefixParseFn>,
    infix_parse_fns: HashMap<TokenKind, InfixParseFn>,
}

impl Parser {
    /// Creates a new parser over `lexer`, registers the prefix/infix parse
    /// tables, and reads the first two tokens so `cur_token`/`peek_token`
    /// are both populated before any parsing happens.
    pub fn new(lexer: Lexer) -> Self {
        let mut parser = Parser {
            lexer,
            cur_token: Token::new(TokenKind::Illegal, ""),
            peek_token: Token::new(TokenKind::Illegal, ""),
            errors: Vec::new(),
            prefix_parse_fns: HashMap::new(),
            infix_parse_fns: HashMap::new(),
        };

        parser.register_prefix(TokenKind::Ident, Parser::parse_identifier);
        parser.register_prefix(TokenKind::Int, Parser::parse_integer_literal);
        parser.register_prefix(TokenKind::Bang, Parser::parse_prefix_expression);
        parser.register_prefix(TokenKind::Minus, Parser::parse_prefix_expression);
        parser.register_prefix(TokenKind::True, Parser::parse_boolean);
        parser.register_prefix(TokenKind::False, Parser::parse_boolean);
        parser.register_prefix(TokenKind::LParen, Parser::parse_grouped_expression);
        parser.register_prefix(TokenKind::If, Parser::parse_if_expression);
        parser.register_prefix(TokenKind::Function, Parser::parse_function_literal);

        for kind in [
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Slash,
            TokenKind::Asterisk,
            TokenKind::Eq,
            TokenKind::NotEq,
            TokenKind::Lt,
            TokenKind::Gt,
            TokenKind::Le,
            TokenKind::Ge,
        ] {
            parser.register_infix(kind, Parser::parse_infix_expression);
        }
        parser.register_infix(TokenKind::LParen, Parser::parse_call_expression);

        // Prime `cur_token` and `peek_token`.
        parser.next_token();
        parser.next_token();

        parser
    }

    fn register_prefix(&mut self, kind: TokenKind, f: PrefixParseFn) {
        self.prefix_parse_fns.insert(kind, f);
    }

    fn register_infix(&mut self, kind: TokenKind, f: InfixParseFn) {
        self.infix_parse_fns.insert(kind, f);
    }

    /// The parse errors accumulated so far, in the order they were found.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    fn next_token(&mut self) {
        std::mem::swap(&mut self.cur_token, &mut self.peek_token);
        self.peek_token = self.lexer.next_token();
    }

    fn cur_token_is(&self, kind: TokenKind) -> bool {
        self.cur_token.kind == kind
    }

    fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// If `peek_token` has kind `kind`, advances past it and returns
    /// `true`. Otherwise records a `peek_error` and returns `false` without
    /// advancing.
    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_token_is(kind) {
            self.next_token();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    fn peek_error(&mut self, expected: TokenKind) {
        self.errors.push(format!(
            "expected next token to be \"{}\", got \"{}\"",
            expected, self.peek_token.kind
        ));
    }

    fn no_prefix_parse_fn_error(&mut self, kind: TokenKind) {
        self.errors
            .push(format!("no prefix parse function for {} found", kind));
    }

    fn peek_precedence(&self) -> Precedence {
        precedence_of(self.peek_token.kind)
    }

    fn cur_precedence(&self) -> Precedence {
        precedence_of(self.cur_token.kind)
    }

    /// Parses the entire token stream into a [`Program`], advancing one
    /// statement at a time until `Eof`.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.cur_token_is(TokenKind::Eof) {
            if let Some(stmt) = self.parse_statement() {
                program.statements.push(stmt);
            }
            self.next_token();
        }

        program
    }

    fn parse_statement(&mut self) -> Option<Statement> {
        match self.cur_token.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_let_statement(&mut self) -> Option<Statement> {
        let let_token = self.cur_token.clone();

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }

        let name = Identifier {
            token: self.cur_token.clone(),
            value: self.cur_token.literal.clone(),
        };

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(Statement::Let(LetStatement {
            token: let_token,
            name,
            value,
        }))
    }

    fn parse_return_statement(&mut self) -> Option<Statement> {
        let return_token = self.cur_token.clone();

        self.next_token();
        let return_value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(Statement::Return(ReturnStatement {
            token: return_token,
            return_value,
        }))
    }

    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token.clone();
        let expression = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(Statement::Expression(ExpressionStatement { token, expression }))
    }

    fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let prefix = match self.prefix_parse_fns.get(&self.cur_token.kind) {
            Some(f) => *f,
            None => {
                self.no_prefix_parse_fn_error(self.cur_token.kind);
                return None;
            }
        };

        let mut left = prefix(self)?;

        while !self.peek_token_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            let infix = match self.infix_parse_fns.get(&self.peek_token.kind) {
                Some(f) => *f,
                None => return Some(left),
            };

            self.next_token();
            left = infix(self, left)?;
        }

        Some(left)
    }

    fn parse_identifier(&mut self) -> Option<Expression> {
        Some(Expression::Identifier(Identifier {
            token: self.cur_token.clone(),
            value: self.cur_token.literal.clone(),
        }))
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();
        match token.literal.parse::<i64>() {
            Ok(value) => Some(Expression::IntegerLiteral(IntegerLiteral { token, value })),
            Err(e) => {
                self.errors
                    .push(format!("could not parse {:?} as integer: {}", token.literal, e));
                None
            }
        }
    }

    fn parse_boolean(&mut self) -> Option<Expression> {
        Some(Expression::Boolean(Boolean {
            token: self.cur_token.clone(),
            value: self.cur_token_is(TokenKind::True),
        }))
    }

    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();
        let operator = token.literal.clone();

        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expression::Prefix(PrefixExpression {
            token,
            operator,
            right: Box::new(right),
        }))
    }

    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.cur_token.clone();
        let operator = token.literal.clone();
        let precedence = self.cur_precedence();

        self.next_token();
        let right = self.parse_expression(precedence)?;

        Some(Expression::Infix(InfixExpression {
            token,
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }))
    }

    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();
        let expr = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        Some(expr)
    }

    fn parse_if_expression(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let consequence = self.parse_block_statement();

        let alternative = if self.peek_token_is(TokenKind::Else) {
            self.next_token();
            if !self.expect_peek(TokenKind::LBrace) {
                return None;
            }
            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expression::If(IfExpression {
            token,
            condition: Box::new(condition),
            consequence,
            alternative,
        }))
    }

    /// Parses a `{ ... }` block. Assumes `cur_token` is `{` on entry and
    /// leaves `cur_token` on the closing `}` (or `Eof`, on unterminated
    /// input).
    fn parse_block_statement(&mut self) -> BlockStatement {
        let token = self.cur_token.clone();
        let mut statements = Vec::new();

        self.next_token();

        while !self.cur_token_is(TokenKind::RBrace) && !self.cur_token_is(TokenKind::Eof) {
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.next_token();
        }

        BlockStatement { token, statements }
    }

    fn parse_function_literal(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let body = self.parse_block_statement();

        Some(Expression::Function(FunctionLiteral {
            token,
            parameters,
            body,
        }))
    }

    /// Parses a comma-separated identifier list up to and including the
    /// closing `)`. Assumes `cur_token` is `(` on entry.
    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut identifiers = Vec::new();

        if self.peek_token_is(TokenKind::RParen) {
            self.next_token();
            return Some(identifiers);
        }

        self.next_token();
        identifiers.push(Identifier {
            token: self.cur_token.clone(),
            value: self.cur_token.literal.clone(),
        });

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            identifiers.push(Identifier {
                token: self.cur_token.clone(),
                value: self.cur_token.literal.clone(),
            });
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        Some(identifiers)
    }

    /// Parses `function(args...)`. Assumes `cur_token` is the `(` that was
    /// just advanced onto after `function` was parsed.
    fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let token = self.cur_token.clone();
        let arguments = self.parse_expression_list(TokenKind::RParen)?;

        Some(Expression::Call(CallExpression {
            token,
            function: Box::new(function),
            arguments,
        }))
    }

    /// Parses a comma-separated expression list up to and including
    /// `end`. Assumes `cur_token` is the opening delimiter on entry.
    fn parse_expression_list(&mut self, end: TokenKind) -> Option<Vec<Expression>> {
        let mut list = Vec::new();

        if self.peek_token_is(end) {
            self.next_token();
            return Some(list);
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(end) {
            return None;
        }

        Some(list)
    }
}
