use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

use crate::errors::ListError;
use crate::games::BoardGame;

/// Keyword selecting every game of the source sequence, case-insensitive.
pub const ADD_ALL: &str = "all";

/// A 1-based index (`"3"`) or inclusive range (`"2-5"`).
static INDEX_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(-\d+)?$").expect("index token regex"));

/// The shortlist of chosen games, deduplicated by full-field equality and
/// kept in insertion order.
#[derive(Debug, Default)]
pub struct GameList {
    games: Vec<BoardGame>,
}

impl GameList {
    pub fn new() -> Self {
        Self::default()
    }

    /// All names, sorted ascending ignoring case.
    pub fn game_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.games.iter().map(|g| g.name.clone()).collect();
        names.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
        names
    }

    pub fn count(&self) -> usize {
        self.games.len()
    }

    pub fn clear(&mut self) {
        self.games.clear();
    }

    /// Adds game(s) from `filtered` chosen by `token`: the ALL keyword, a
    /// 1-based index or range into `filtered`, or an exact name
    /// (case-insensitive). Adding a name with no match is an error; index
    /// errors leave the list untouched.
    pub fn add_to_list(&mut self, token: &str, filtered: &[BoardGame]) -> Result<(), ListError> {
        if token.eq_ignore_ascii_case(ADD_ALL) {
            for game in filtered {
                self.insert(game.clone());
            }
            return Ok(());
        }

        if INDEX_TOKEN.is_match(token) {
            for game in select_by_index(token, filtered)? {
                self.insert(game.clone());
            }
            return Ok(());
        }

        match find_by_name(token, filtered) {
            Some(game) => {
                self.insert(game.clone());
                Ok(())
            }
            None => Err(ListError::NotFound(token.to_string())),
        }
    }

    /// Removes game(s) chosen by `token`: the ALL keyword clears the list,
    /// indexes/ranges address the list itself, and an absent name is a
    /// silent no-op.
    pub fn remove_from_list(&mut self, token: &str) -> Result<(), ListError> {
        if token.eq_ignore_ascii_case(ADD_ALL) {
            self.clear();
            return Ok(());
        }

        if INDEX_TOKEN.is_match(token) {
            let picked: Vec<BoardGame> = select_by_index(token, &self.games)?.to_vec();
            self.games.retain(|game| !picked.contains(game));
            return Ok(());
        }

        if let Some(game) = find_by_name(token, &self.games).cloned() {
            self.games.retain(|g| *g != game);
        }
        Ok(())
    }

    /// Writes the sorted names to a text file, one per line, overwriting
    /// whatever was there. Missing parent directories are created.
    pub fn save(&self, filename: &str) -> Result<(), ListError> {
        let path = Path::new(filename);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut out = String::new();
        for name in self.game_names() {
            out.push_str(&name);
            out.push('\n');
        }
        std::fs::write(path, out)?;
        Ok(())
    }

    fn insert(&mut self, game: BoardGame) {
        if !self.games.contains(&game) {
            self.games.push(game);
        }
    }
}

/// Resolves a 1-based index or inclusive range against `source`.
fn select_by_index<'a>(token: &str, source: &'a [BoardGame]) -> Result<&'a [BoardGame], ListError> {
    let (start, end) = match token.split_once('-') {
        Some((a, b)) => (parse_index(a, token)?, parse_index(b, token)?),
        None => {
            let index = parse_index(token, token)?;
            (index, index)
        }
    };

    if start == 0 || end == 0 || start > end || end > source.len() {
        return Err(ListError::IndexOutOfRange(token.to_string()));
    }
    Ok(&source[start - 1..end])
}

fn parse_index(text: &str, token: &str) -> Result<usize, ListError> {
    text.parse()
        .map_err(|_| ListError::IndexOutOfRange(token.to_string()))
}

fn find_by_name<'a>(name: &str, source: &'a [BoardGame]) -> Option<&'a BoardGame> {
    source.iter().find(|game| game.name.eq_ignore_ascii_case(name))
}
