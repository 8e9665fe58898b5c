use crate::games::BoardGame;
use crate::query::GameField;

/// Orders games by the lower-cased textual rendering of the chosen field.
///
/// Numeric fields are compared as strings too, so e.g. rank 100 sorts
/// before rank 40. Descending flips the comparison rather than reversing
/// the output, so the sort stays stable either way: ties keep their input
/// order.
pub fn sort(games: Vec<BoardGame>, sort_on: GameField, ascending: bool) -> Vec<BoardGame> {
    let mut keyed: Vec<(String, BoardGame)> = games
        .into_iter()
        .map(|game| (sort_on.render(&game).to_lowercase(), game))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| if ascending { a.cmp(b) } else { b.cmp(a) });

    keyed.into_iter().map(|(_, game)| game).collect()
}
