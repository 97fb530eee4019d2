//! Validate RQL queries against caller-side limits

use super::CliError;
use crate::{Lexer, Node, Parser};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The RQL query to parse
    pub query: String,
    /// Reject queries longer than this many bytes before parsing
    pub max_length: Option<usize>,
    /// Reject parsed queries nested deeper than this
    pub max_depth: Option<usize>,
}

/// Parse the query, enforcing the configured limits.
///
/// The length check runs before the parser sees the input, so oversized
/// queries never reach the recursive descent.
pub fn execute_check(options: &CheckOptions) -> Result<Node, CliError> {
    let query = options.query.as_str();
    if query.trim().is_empty() {
        return Err(CliError::NoInput);
    }

    if let Some(limit) = options.max_length {
        if query.len() > limit {
            return Err(CliError::TooLong {
                length: query.len(),
                limit,
            });
        }
    }

    let node = Parser::new(Lexer::new(query)).parse()?;

    if let Some(limit) = options.max_depth {
        let depth = node.depth();
        if depth > limit {
            return Err(CliError::TooDeep { depth, limit });
        }
    }

    tracing::info!(operation = node.operation(), "query is valid");
    Ok(node)
}
