use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::errors::QueryError;
use crate::games::BoardGame;

/// Closed set of attributes a game can be filtered or sorted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameField {
    Name,
    Id,
    MinPlayers,
    MaxPlayers,
    MinTime,
    MaxTime,
    Difficulty,
    Rank,
    Rating,
    Year,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Integer,
    Float,
}

/// Alias table, built once. Keys are lowercase with whitespace removed,
/// which is also how lookups are normalized; no alias maps to two fields.
static FIELD_ALIASES: Lazy<HashMap<&'static str, GameField>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert("name", GameField::Name);
    map.insert("id", GameField::Id);
    map.insert("objectid", GameField::Id);
    map.insert("minplayers", GameField::MinPlayers);
    map.insert("min_players", GameField::MinPlayers);
    map.insert("minplayer", GameField::MinPlayers);
    map.insert("maxplayers", GameField::MaxPlayers);
    map.insert("max_players", GameField::MaxPlayers);
    map.insert("maxplayer", GameField::MaxPlayers);
    map.insert("mintime", GameField::MinTime);
    map.insert("min_time", GameField::MinTime);
    map.insert("minplaytime", GameField::MinTime);
    map.insert("maxtime", GameField::MaxTime);
    map.insert("max_time", GameField::MaxTime);
    map.insert("maxplaytime", GameField::MaxTime);
    map.insert("difficulty", GameField::Difficulty);
    map.insert("weight", GameField::Difficulty);
    map.insert("rank", GameField::Rank);
    map.insert("rating", GameField::Rating);
    map.insert("avgrating", GameField::Rating);
    map.insert("year", GameField::Year);
    map.insert("yearpublished", GameField::Year);
    map.insert("year_published", GameField::Year);
    map
});

impl GameField {
    pub const ALL: [GameField; 10] = [
        GameField::Name,
        GameField::Id,
        GameField::MinPlayers,
        GameField::MaxPlayers,
        GameField::MinTime,
        GameField::MaxTime,
        GameField::Difficulty,
        GameField::Rank,
        GameField::Rating,
        GameField::Year,
    ];

    /// Case-insensitive, whitespace-insensitive lookup through the alias
    /// table.
    pub fn resolve(name: &str) -> Result<Self, QueryError> {
        let key: String = name
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        FIELD_ALIASES
            .get(key.as_str())
            .copied()
            .ok_or_else(|| QueryError::UnknownField(name.trim().to_string()))
    }

    pub const fn canonical_name(self) -> &'static str {
        match self {
            GameField::Name => "name",
            GameField::Id => "id",
            GameField::MinPlayers => "minplayers",
            GameField::MaxPlayers => "maxplayers",
            GameField::MinTime => "mintime",
            GameField::MaxTime => "maxtime",
            GameField::Difficulty => "difficulty",
            GameField::Rank => "rank",
            GameField::Rating => "rating",
            GameField::Year => "year",
        }
    }

    pub const fn kind(self) -> ValueKind {
        match self {
            GameField::Name => ValueKind::Text,
            GameField::Id
            | GameField::MinPlayers
            | GameField::MaxPlayers
            | GameField::MinTime
            | GameField::MaxTime
            | GameField::Rank
            | GameField::Year => ValueKind::Integer,
            GameField::Difficulty | GameField::Rating => ValueKind::Float,
        }
    }

    /// Renders the field's value as text. Sorting compares these rendered
    /// strings, including for numeric fields.
    pub fn render(self, game: &BoardGame) -> String {
        match self {
            GameField::Name => game.name.clone(),
            GameField::Id => game.id.to_string(),
            GameField::MinPlayers => game.min_players.to_string(),
            GameField::MaxPlayers => game.max_players.to_string(),
            GameField::MinTime => game.min_play_time.to_string(),
            GameField::MaxTime => game.max_play_time.to_string(),
            GameField::Difficulty => game.difficulty.to_string(),
            GameField::Rank => game.rank.to_string(),
            GameField::Rating => game.rating.to_string(),
            GameField::Year => game.year_published.to_string(),
        }
    }
}

impl ValueKind {
    pub const fn label(self) -> &'static str {
        match self {
            ValueKind::Text => "text",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
        }
    }
}
