use crate::ast::{Token, TokenKind};
use regex::Regex;
use std::sync::LazyLock;

/// A punctuation character, or a maximal run of anything else.
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[()\[\],+\-]|[^()\[\],+\-]+").expect("token pattern is valid")
});

/// Numeric literal shape: digits with optional fraction and exponent.
static NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$").expect("number pattern is valid")
});

/// Pull-based tokenizer over an RQL string.
///
/// Never fails: text that is not punctuation, a number or a keyword is a
/// [`TokenKind::StringLiteral`]. Whitespace around a run is trimmed and
/// whitespace-only runs produce no token.
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer { input, position: 0 }
    }

    /// Byte length of the whole input, used as the end-of-input position.
    pub fn input_len(&self) -> usize {
        self.input.len()
    }

    /// Next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Option<Token> {
        while let Some(found) = TOKEN_PATTERN.find_at(self.input, self.position) {
            self.position = found.end();

            let raw = found.as_str();
            let trimmed = raw.trim_start();
            let text = trimmed.trim_end();
            if text.is_empty() {
                continue;
            }

            let position = found.start() + (raw.len() - trimmed.len());
            let token = Token::new(classify(text), text, position);
            tracing::trace!(kind = ?token.kind, text = %token.text, position, "token");
            return Some(token);
        }

        self.position = self.input.len();
        None
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

/// Eagerly tokenize the whole input.
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).collect()
}

fn classify(text: &str) -> TokenKind {
    let mut chars = text.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        if let Some(kind) = TokenKind::punctuation(ch) {
            return kind;
        }
    }

    if NUMBER_PATTERN.is_match(text) {
        let is_float = text.contains(['.', 'e', 'E']);
        if !is_float && text.parse::<i64>().is_ok() {
            return TokenKind::Integer;
        }
        return TokenKind::Float;
    }

    TokenKind::keyword(text).unwrap_or(TokenKind::StringLiteral)
}
