//! Operation dispatch table.
//!
//! Maps a leading keyword token to the grammar rule that consumes it. Adding
//! an operation means one arm here and one rule in the parser.

use crate::ast::{CombinatorOp, ComparisonOp, SetOp, TokenKind};

/// Grammar rule selected by a leading keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `op(property, value)`
    Comparison(ComparisonOp),
    /// `op(query, query, ...)`
    Combinator(CombinatorOp),
    /// `sort([+/-]property, ...)`
    Sort,
    /// `limit(limit[, skip])`
    Limit,
    /// `op(property, [value, ...])`
    SetMembership(SetOp),
}

/// Rule responsible for a token kind, or `None` if it does not start an operation.
pub const fn rule_for(kind: TokenKind) -> Option<Rule> {
    let rule = match kind {
        TokenKind::Eq => Rule::Comparison(ComparisonOp::Eq),
        TokenKind::Ne => Rule::Comparison(ComparisonOp::Ne),
        TokenKind::Lt => Rule::Comparison(ComparisonOp::Lt),
        TokenKind::Gt => Rule::Comparison(ComparisonOp::Gt),
        TokenKind::Lte => Rule::Comparison(ComparisonOp::Lte),
        TokenKind::Gte => Rule::Comparison(ComparisonOp::Gte),
        TokenKind::Like => Rule::Comparison(ComparisonOp::Like),
        TokenKind::And => Rule::Combinator(CombinatorOp::And),
        TokenKind::Or => Rule::Combinator(CombinatorOp::Or),
        TokenKind::Sort => Rule::Sort,
        TokenKind::Limit => Rule::Limit,
        TokenKind::In => Rule::SetMembership(SetOp::In),
        TokenKind::Out => Rule::SetMembership(SetOp::Out),
        TokenKind::Integer
        | TokenKind::Float
        | TokenKind::StringLiteral
        | TokenKind::OpenParen
        | TokenKind::CloseParen
        | TokenKind::OpenBracket
        | TokenKind::CloseBracket
        | TokenKind::Comma
        | TokenKind::Plus
        | TokenKind::Minus => return None,
    };
    Some(rule)
}
