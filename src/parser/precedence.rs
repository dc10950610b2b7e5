//! The operator-precedence ladder driving the Pratt parser.

use crate::token::TokenKind;

/// Binding power, low to high. `Precedence::Lowest` is the starting point
/// for any top-level call to [`super::Parser::parse_expression`];
/// `Precedence::Call` is the tightest level, reserved for `(` as an infix
/// operator (a function call applied to an already-parsed expression).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    Equals,      // == !=
    LessGreater, // < > <= >=
    Sum,         // + -
    Product,     // * /
    Prefix,      // -x !x
    Call,        // fn(...)
}

/// Looks up the precedence of an infix/call operator token. Tokens with no
/// entry (including `Eof` and anything that can't start an infix
/// expression) bind as loosely as possible, `Lowest`.
pub fn precedence_of(kind: TokenKind) -> Precedence {
    match kind {
        TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
        TokenKind::Lt | TokenKind::Gt | TokenKind::Le | TokenKind::Ge => Precedence::LessGreater,
        TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
        TokenKind::Slash | TokenKind::Asterisk => Precedence::Product,
        TokenKind::LParen => Precedence::Call,
        _ => Precedence::Lowest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_orders_correctly() {
        assert!(Precedence::Lowest < Precedence::Equals);
        assert!(Precedence::Equals < Precedence::LessGreater);
        assert!(Precedence::LessGreater < Precedence::Sum);
        assert!(Precedence::Sum < Precedence::Product);
        assert!(Precedence::Product < Precedence::Prefix);
        assert!(Precedence::Prefix < Precedence::Call);
    }

    #[test]
    fn unmapped_tokens_default_to_lowest() {
        assert_eq!(precedence_of(TokenKind::Ident), Precedence::Lowest);
        assert_eq!(precedence_of(TokenKind::Semicolon), Precedence::Lowest);
    }
}
