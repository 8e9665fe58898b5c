use std::fmt;

/// Closed set of comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    GreaterEq,
    LessEq,
    Equals,
    NotEquals,
    Contains,
    Greater,
    Less,
}

/// Scan order: two-character tokens first so `>=` is never read as `>`.
const PRIORITY: [CmpOp; 7] = [
    CmpOp::GreaterEq,
    CmpOp::LessEq,
    CmpOp::Equals,
    CmpOp::NotEquals,
    CmpOp::Contains,
    CmpOp::Greater,
    CmpOp::Less,
];

impl CmpOp {
    pub const fn token(self) -> &'static str {
        match self {
            CmpOp::GreaterEq => ">=",
            CmpOp::LessEq => "<=",
            CmpOp::Equals => "==",
            CmpOp::NotEquals => "!=",
            CmpOp::Contains => "~=",
            CmpOp::Greater => ">",
            CmpOp::Less => "<",
        }
    }

    /// Returns the first operator (in priority order) whose token occurs
    /// anywhere in the clause text. `None` means the clause carries no
    /// recognizable operator and is skipped by the planner, not rejected.
    pub fn from_clause(clause: &str) -> Option<Self> {
        PRIORITY.into_iter().find(|op| clause.contains(op.token()))
    }
}

impl fmt::Display for CmpOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
