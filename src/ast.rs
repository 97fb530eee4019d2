//! # Resource Query Language - Abstract Syntax Tree
//!
//! This module defines the tokens and tree produced when parsing RQL, a
//! compact function-call style language for filtering, sorting and paging
//! resources. The tree carries no knowledge of any backend; consumers walk it
//! and translate each node into their own query representation.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[operators]** - Operator tags for comparisons, combinators, sets and sorts
//! - **[node]** - The closed set of operation nodes
//!
//! ## Quick Start
//!
//! ```text
//! and(eq(status,active),gt(price,100))
//! ```
//!
//! This query keeps active records priced above 100.
//!
//! ## The Five Operation Families
//!
//! | Keyword | Shape | Node |
//! |---|---|---|
//! | `eq,ne,lt,gt,lte,gte,like` | `(property, value)` | [`Node::Comparison`] |
//! | `and,or` | `(query, query, ...)` | [`Node::BooleanCombinator`] |
//! | `sort` | `([+/-]property, ...)` | [`Node::Sort`] |
//! | `limit` | `(limit[, skip])` | [`Node::Limit`] |
//! | `in,out` | `(property, [value, ...])` | [`Node::SetMembership`] |
//!
//! ## Reserved Words
//!
//! Tokenization is context-free, so a value spelled like a keyword is read as
//! the keyword:
//!
//! ```text
//! eq(kind,sort)   // fails: `sort` is not a value
//! ```
pub mod node;
pub mod operators;
pub mod tokens;

pub use node::{Node, SortField};
pub use operators::{CombinatorOp, ComparisonOp, SetOp, SortDirection};
pub use tokens::{KEYWORDS, Token, TokenKind};
