//! Text and JSON renderings of tokens and trees

use super::CliError;
use crate::{Node, tokenize};

/// Serialize a tree to JSON, compact or with 2-space indentation.
pub fn ast_to_json(node: &Node, pretty: bool) -> Result<String, CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(node)
    } else {
        serde_json::to_string(node)
    }?;
    Ok(json)
}

/// One line per token: position, kind and text.
pub fn tokens_listing(input: &str) -> String {
    tokenize(input)
        .iter()
        .map(|token| format!("{:>4}  {:<14} {}\n", token.position, format!("{:?}", token.kind), token.text))
        .collect()
}
