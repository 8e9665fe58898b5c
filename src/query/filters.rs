use crate::errors::QueryError;
use crate::games::BoardGame;

use super::fields::GameField;
use super::ops::CmpOp;

/// Evaluates one predicate against one game.
pub fn filter(
    game: &BoardGame,
    field: GameField,
    op: CmpOp,
    value: &str,
) -> Result<bool, QueryError> {
    match field {
        GameField::Name => Ok(filter_text(&game.name, op, value)),
        GameField::Id => filter_number(field, game.id as f64, op, value),
        GameField::MinPlayers => filter_number(field, f64::from(game.min_players), op, value),
        GameField::MaxPlayers => filter_number(field, f64::from(game.max_players), op, value),
        GameField::MinTime => filter_number(field, f64::from(game.min_play_time), op, value),
        GameField::MaxTime => filter_number(field, f64::from(game.max_play_time), op, value),
        GameField::Difficulty => filter_number(field, game.difficulty, op, value),
        GameField::Rank => filter_number(field, game.rank as f64, op, value),
        GameField::Rating => filter_number(field, game.rating, op, value),
        GameField::Year => filter_number(field, f64::from(game.year_published), op, value),
    }
}

/// String comparison happens on whitespace-stripped values on both sides.
/// `==` is case-sensitive while `!=` is case-insensitive; that asymmetry
/// is intentional.
fn filter_text(data: &str, op: CmpOp, value: &str) -> bool {
    let data = strip_whitespace(data);
    let value = strip_whitespace(value);
    match op {
        CmpOp::Equals => data == value,
        CmpOp::NotEquals => data.to_lowercase() != value.to_lowercase(),
        CmpOp::Contains => data.contains(&value),
        CmpOp::LessEq => data <= value,
        CmpOp::GreaterEq => data >= value,
        CmpOp::Less => data < value,
        CmpOp::Greater => data > value,
    }
}

fn filter_number(
    field: GameField,
    data: f64,
    op: CmpOp,
    value: &str,
) -> Result<bool, QueryError> {
    let wanted: f64 = value
        .parse()
        .map_err(|_| QueryError::MalformedNumber(value.to_string()))?;

    // Exact equality, no epsilon: values round-trip through their textual
    // form unchanged.
    Ok(match op {
        CmpOp::Equals => data == wanted,
        CmpOp::NotEquals => data != wanted,
        CmpOp::Greater => data > wanted,
        CmpOp::Less => data < wanted,
        CmpOp::GreaterEq => data >= wanted,
        CmpOp::LessEq => data <= wanted,
        CmpOp::Contains => {
            return Err(QueryError::UnsupportedOperation {
                field: field.canonical_name(),
                op: op.token(),
            })
        }
    })
}

fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}
