use serde::Serialize;
use std::fmt;

/// Classification of a lexical token.
///
/// Classification is context-free: the same text always yields the same kind,
/// so a value spelled like a keyword (`sort`, `in`, ...) is a keyword token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // Literals
    /// Integer-shaped run that fits an `i64`
    ///
    /// # Examples
    /// ```text
    /// 42
    /// 007
    /// ```
    Integer,

    /// Numeric run with a fraction or exponent
    ///
    /// # Examples
    /// ```text
    /// 3.14
    /// .5
    /// 1e5
    /// ```
    Float,

    /// Bare text: a property name or a literal value
    ///
    /// # Examples
    /// ```text
    /// name
    /// user.email
    /// Fo*
    /// ```
    StringLiteral,

    // Delimiters
    /// Left parenthesis opening an operation's arguments
    OpenParen,
    /// Right parenthesis
    CloseParen,
    /// Left bracket opening a set-membership value list
    OpenBracket,
    /// Right bracket
    CloseBracket,
    /// Comma separating arguments
    Comma,
    /// Explicit ascending sort prefix, or a positive number sign
    Plus,
    /// Descending sort prefix, or a negative number sign
    Minus,

    // Operation keywords
    Eq,
    Ne,
    Lt,
    Gt,
    Lte,
    Gte,
    Like,
    And,
    Or,
    Sort,
    Limit,
    In,
    Out,
}

/// Operation keywords and the token kind each one produces.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("eq", TokenKind::Eq),
    ("ne", TokenKind::Ne),
    ("lt", TokenKind::Lt),
    ("gt", TokenKind::Gt),
    ("lte", TokenKind::Lte),
    ("gte", TokenKind::Gte),
    ("like", TokenKind::Like),
    ("and", TokenKind::And),
    ("or", TokenKind::Or),
    ("sort", TokenKind::Sort),
    ("limit", TokenKind::Limit),
    ("in", TokenKind::In),
    ("out", TokenKind::Out),
];

impl TokenKind {
    /// Look up the keyword kind for `text`, matching exactly and case-sensitively.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        KEYWORDS
            .iter()
            .find(|(word, _)| *word == text)
            .map(|(_, kind)| *kind)
    }

    /// Kind of a single punctuation character, if it is one.
    pub fn punctuation(ch: char) -> Option<TokenKind> {
        match ch {
            '(' => Some(TokenKind::OpenParen),
            ')' => Some(TokenKind::CloseParen),
            '[' => Some(TokenKind::OpenBracket),
            ']' => Some(TokenKind::CloseBracket),
            ',' => Some(TokenKind::Comma),
            '+' => Some(TokenKind::Plus),
            '-' => Some(TokenKind::Minus),
            _ => None,
        }
    }

    pub fn is_keyword(self) -> bool {
        KEYWORDS.iter().any(|(_, kind)| *kind == self)
    }

    /// Human-readable description used in error messages.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Integer => "integer",
            TokenKind::Float => "float",
            TokenKind::StringLiteral => "string",
            TokenKind::OpenParen => "'('",
            TokenKind::CloseParen => "')'",
            TokenKind::OpenBracket => "'['",
            TokenKind::CloseBracket => "']'",
            TokenKind::Comma => "','",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            _ => "keyword",
        }
    }
}

/// A token produced by the [`Lexer`](crate::lexer::Lexer).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,

    /// Source text, trimmed of surrounding whitespace
    pub text: String,

    /// Byte offset of the token's first character in the input
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Token {
            kind,
            text: text.into(),
            position,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.text)
    }
}
