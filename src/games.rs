use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// A single board game from the collection.
///
/// Records are immutable once loaded. Equality is full-field equality,
/// which is what the selection list dedups on (the float fields keep this
/// type out of `Eq`/`Hash`, so dedup goes through `Vec::contains`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardGame {
    pub name: String,
    pub id: u64,

    pub min_players: u32,
    pub max_players: u32,
    pub min_play_time: u32,
    pub max_play_time: u32,

    pub difficulty: f64,
    pub rank: u64,
    pub rating: f64,
    pub year_published: i32,
}

pub const CSV_HEADERS: [&str; 10] = [
    "name",
    "id",
    "min_players",
    "max_players",
    "min_play_time",
    "max_play_time",
    "difficulty",
    "rank",
    "rating",
    "year_published",
];

/// Reads the whole collection from a CSV file with the [`CSV_HEADERS`]
/// header row.
pub fn load_collection(path: &str) -> anyhow::Result<Vec<BoardGame>> {
    let now = Instant::now();
    let mut csv_reader = csv::Reader::from_path(path)?;

    let headers = csv_reader.headers()?;
    if headers.iter().ne(CSV_HEADERS) {
        return Err(anyhow!("unexpected collection headers: {headers:?}"));
    }

    let iter = csv_reader.records();

    let mut games = vec![];
    for record in iter {
        let record = record?;
        let name = record
            .get(0)
            .ok_or(anyhow!("couldnt get record name"))?
            .to_string();
        let id = record
            .get(1)
            .ok_or(anyhow!("couldnt get record id"))?
            .parse::<u64>()?;
        let min_players = record
            .get(2)
            .ok_or(anyhow!("couldnt get record min_players"))?
            .parse::<u32>()?;
        let max_players = record
            .get(3)
            .ok_or(anyhow!("couldnt get record max_players"))?
            .parse::<u32>()?;
        let min_play_time = record
            .get(4)
            .ok_or(anyhow!("couldnt get record min_play_time"))?
            .parse::<u32>()?;
        let max_play_time = record
            .get(5)
            .ok_or(anyhow!("couldnt get record max_play_time"))?
            .parse::<u32>()?;
        let difficulty = record
            .get(6)
            .ok_or(anyhow!("couldnt get record difficulty"))?
            .parse::<f64>()?;
        let rank = record
            .get(7)
            .ok_or(anyhow!("couldnt get record rank"))?
            .parse::<u64>()?;
        let rating = record
            .get(8)
            .ok_or(anyhow!("couldnt get record rating"))?
            .parse::<f64>()?;
        let year_published = record
            .get(9)
            .ok_or(anyhow!("couldnt get record year_published"))?
            .parse::<i32>()?;

        games.push(BoardGame {
            name,
            id,
            min_players,
            max_players,
            min_play_time,
            max_play_time,
            difficulty,
            rank,
            rating,
            year_published,
        });
    }

    log::debug!(
        "took {}ms to read collection csv",
        now.elapsed().as_micros() as f64 / 1000.0
    );

    Ok(games)
}
