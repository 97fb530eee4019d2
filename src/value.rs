use serde::Serialize;
use std::fmt;

/// A literal value appearing in a query.
///
/// Only three shapes are recognized; there are no booleans or nulls in the
/// language, so `true` is just the text `"true"`.
///
/// # Examples
///
/// ```
/// use rql_parser::Literal;
///
/// let integer = Literal::Integer(42);
/// let float = Literal::Float(2.5);
/// let text = Literal::Text("Foo".to_string());
///
/// assert_eq!(Literal::from(42), integer);
/// assert_eq!(Literal::from("Foo"), text);
/// assert_eq!(float.to_string(), "2.5");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Literal {
    /// Integer number (kept distinct from floats)
    Integer(i64),

    /// Floating-point number
    Float(f64),

    /// Bare text
    Text(String),
}

impl Literal {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Literal::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Literal::Integer(n) => Some(*n as f64),
            Literal::Float(n) => Some(*n),
            Literal::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Literal::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Negate a numeric literal. Text is returned unchanged.
    pub(crate) fn negated(self) -> Literal {
        match self {
            Literal::Integer(n) => Literal::Integer(-n),
            Literal::Float(n) => Literal::Float(-n),
            text => text,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Integer(n) => write!(f, "{n}"),
            Literal::Float(n) => write!(f, "{n}"),
            Literal::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Literal {
    fn from(n: i64) -> Self {
        Literal::Integer(n)
    }
}

impl From<f64> for Literal {
    fn from(n: f64) -> Self {
        Literal::Float(n)
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::Text(s.to_string())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::Text(s)
    }
}
