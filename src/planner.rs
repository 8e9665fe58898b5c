use crate::errors::QueryError;
use crate::games::BoardGame;
use crate::query::{self, GameField};
use crate::sorting;

/// Applies filter expressions against a persistent working set.
///
/// Narrowing accumulates: each `filter*` call starts from whatever the
/// previous call left behind, until `reset` restores the full collection.
/// One planner per session; not meant to be shared across threads.
pub struct Planner {
    games: Vec<BoardGame>,
    remaining: Vec<BoardGame>,
}

impl Planner {
    pub fn new(games: Vec<BoardGame>) -> Self {
        let remaining = games.clone();
        Self { games, remaining }
    }

    /// Filters and sorts by name, ascending.
    pub fn filter(&mut self, expression: &str) -> Result<Vec<BoardGame>, QueryError> {
        self.filter_sorted_dir(expression, GameField::Name, true)
    }

    /// Filters and sorts by the given field, ascending.
    pub fn filter_sorted(
        &mut self,
        expression: &str,
        sort_on: GameField,
    ) -> Result<Vec<BoardGame>, QueryError> {
        self.filter_sorted_dir(expression, sort_on, true)
    }

    /// Filters, then sorts the surviving games.
    ///
    /// Clauses are comma-separated and apply left to right as a logical
    /// AND. Malformed clauses are skipped. Evaluator failures (bad number,
    /// operator/field mismatch) abort the whole call and leave the working
    /// set exactly as it was.
    pub fn filter_sorted_dir(
        &mut self,
        expression: &str,
        sort_on: GameField,
        ascending: bool,
    ) -> Result<Vec<BoardGame>, QueryError> {
        let mut working = self.remaining.clone();

        for raw in expression.split(',') {
            let Some(clause) = query::parse_clause(raw) else {
                continue;
            };
            log::debug!(
                "clause field={} op={} value={}",
                clause.field.canonical_name(),
                clause.op,
                clause.value
            );

            let mut narrowed = Vec::with_capacity(working.len());
            for game in working {
                if query::filter(&game, clause.field, clause.op, &clause.value)? {
                    narrowed.push(game);
                }
            }
            working = narrowed;
        }

        self.remaining = working;
        Ok(sorting::sort(self.remaining.clone(), sort_on, ascending))
    }

    /// Same as [`filter_sorted_dir`](Self::filter_sorted_dir) but resolves
    /// the sort field from text. Unlike field names inside clauses, an
    /// unknown sort field here is a hard error.
    pub fn filter_named(
        &mut self,
        expression: &str,
        sort_on: &str,
        ascending: bool,
    ) -> Result<Vec<BoardGame>, QueryError> {
        let field = GameField::resolve(sort_on)?;
        self.filter_sorted_dir(expression, field, ascending)
    }

    /// Discards accumulated narrowing and starts over from the full set.
    pub fn reset(&mut self) {
        self.remaining = self.games.clone();
    }
}
