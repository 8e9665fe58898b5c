use super::fields::GameField;
use super::ops::CmpOp;

/// One parsed `field operator value` unit of a filter expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub field: GameField,
    pub op: CmpOp,
    pub value: String,
}

/// Parses a single clause, permissively.
///
/// Returns `None` for anything malformed (no operator token, missing field
/// or value, unknown field name); the planner treats such clauses as
/// no-ops rather than failing the whole expression. All whitespace is
/// removed before the clause is split at the first operator occurrence.
pub fn parse_clause(raw: &str) -> Option<Clause> {
    let op = CmpOp::from_clause(raw)?;
    let stripped: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

    let (left, right) = stripped.split_once(op.token())?;
    if left.is_empty() || right.is_empty() {
        return None;
    }

    let field = GameField::resolve(left).ok()?;

    Some(Clause {
        field,
        op,
        value: right.to_string(),
    })
}
