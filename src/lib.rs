pub mod ast;
pub mod cli;
pub mod dispatch;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod value;

pub use ast::{CombinatorOp, ComparisonOp, Node, SetOp, SortDirection, SortField, Token, TokenKind};
pub use dispatch::{Rule, rule_for};
pub use error::{ErrorKind, SyntaxError};
pub use lexer::{Lexer, tokenize};
pub use parser::{Parser, parse};
pub use value::Literal;
