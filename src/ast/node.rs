use crate::ast::{CombinatorOp, ComparisonOp, SetOp, SortDirection};
use crate::value::Literal;
use serde::Serialize;

/// A parsed query operation.
///
/// The tree is owned outright: combinators own their operands and sorts own
/// their fields. Every variant is public so consumers can match exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum Node {
    /// Property comparison
    ///
    /// # Examples
    /// ```text
    /// eq(name,Foo)
    /// gte(count,10)
    /// like(name,Fo*)
    /// ```
    Comparison {
        operator: ComparisonOp,
        property: String,
        value: Literal,
    },

    /// Boolean combination of sub-queries, in source order
    ///
    /// # Examples
    /// ```text
    /// and(eq(a,1),gt(b,2))
    /// or(eq(a,1),and(eq(b,2),ne(c,3)))
    /// ```
    BooleanCombinator {
        operator: CombinatorOp,
        operands: Vec<Node>,
    },

    /// Multi-key sort, highest priority first
    ///
    /// # Example
    /// ```text
    /// sort(-count,+name,id)
    /// ```
    Sort { fields: Vec<SortField> },

    /// Result window
    ///
    /// # Examples
    /// ```text
    /// limit(10)
    /// limit(10,20)
    /// ```
    Limit { limit: u64, skip: u64 },

    /// Set membership test
    ///
    /// # Examples
    /// ```text
    /// in(tag,[a,b,c])
    /// out(id,[])
    /// ```
    SetMembership {
        operator: SetOp,
        property: String,
        values: Vec<Literal>,
    },
}

/// One key of a [`Node::Sort`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortField {
    pub property: String,
    pub direction: SortDirection,
}

impl SortField {
    pub fn new(property: impl Into<String>, direction: SortDirection) -> Self {
        SortField {
            property: property.into(),
            direction,
        }
    }

    pub fn asc(property: impl Into<String>) -> Self {
        SortField::new(property, SortDirection::Asc)
    }

    pub fn desc(property: impl Into<String>) -> Self {
        SortField::new(property, SortDirection::Desc)
    }
}

impl Node {
    /// Keyword of the operation this node was parsed from.
    pub fn operation(&self) -> &'static str {
        match self {
            Node::Comparison { operator, .. } => operator.keyword(),
            Node::BooleanCombinator { operator, .. } => operator.keyword(),
            Node::Sort { .. } => "sort",
            Node::Limit { .. } => "limit",
            Node::SetMembership { operator, .. } => operator.keyword(),
        }
    }

    /// Nesting depth. Leaf operations count as 1.
    pub fn depth(&self) -> usize {
        match self {
            Node::BooleanCombinator { operands, .. } => {
                1 + operands.iter().map(Node::depth).max().unwrap_or(0)
            }
            _ => 1,
        }
    }

    /// Property referenced directly by this node, if any.
    pub fn property(&self) -> Option<&str> {
        match self {
            Node::Comparison { property, .. } | Node::SetMembership { property, .. } => {
                Some(property)
            }
            _ => None,
        }
    }
}
