//! CLI support for rql-parser
//!
//! Provides programmatic access to the `rql` command so other tools can embed
//! the same checks and output formats.

mod check;
mod render;

pub use check::{CheckOptions, execute_check};
pub use render::{ast_to_json, tokens_listing};

use std::io;
use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// Parser error
    #[error("Parse error: {0}")]
    Parse(#[from] crate::SyntaxError),

    /// JSON serialization error
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No query provided
    #[error("No query provided. Pass it as an argument or pipe it to stdin.")]
    NoInput,

    /// Query longer than `--max-length`
    #[error("Query is {length} bytes long, limit is {limit}")]
    TooLong { length: usize, limit: usize },

    /// Query nested deeper than `--max-depth`
    #[error("Query is nested {depth} levels deep, limit is {limit}")]
    TooDeep { depth: usize, limit: usize },
}
