use serde::Serialize;
use std::fmt;

/// Comparison operators taking a property and a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonOp {
    /// Equal (`eq`)
    Eq,
    /// Not equal (`ne`)
    Ne,
    /// Less than (`lt`)
    Lt,
    /// Greater than (`gt`)
    Gt,
    /// Less than or equal (`lte`)
    Lte,
    /// Greater than or equal (`gte`)
    Gte,
    /// Pattern match (`like`)
    Like,
}

/// Boolean combinators over sub-queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CombinatorOp {
    /// Logical AND (`and`)
    And,
    /// Logical OR (`or`)
    Or,
}

/// Set-membership operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SetOp {
    /// Property value is one of the listed values (`in`)
    In,
    /// Property value is none of the listed values (`out`)
    Out,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl ComparisonOp {
    pub fn keyword(self) -> &'static str {
        match self {
            ComparisonOp::Eq => "eq",
            ComparisonOp::Ne => "ne",
            ComparisonOp::Lt => "lt",
            ComparisonOp::Gt => "gt",
            ComparisonOp::Lte => "lte",
            ComparisonOp::Gte => "gte",
            ComparisonOp::Like => "like",
        }
    }
}

impl CombinatorOp {
    pub fn keyword(self) -> &'static str {
        match self {
            CombinatorOp::And => "and",
            CombinatorOp::Or => "or",
        }
    }
}

impl SetOp {
    pub fn keyword(self) -> &'static str {
        match self {
            SetOp::In => "in",
            SetOp::Out => "out",
        }
    }
}

impl SortDirection {
    pub fn keyword(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

macro_rules! display_keyword {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.keyword())
                }
            }
        )*
    };
}

display_keyword!(ComparisonOp, CombinatorOp, SetOp, SortDirection);
