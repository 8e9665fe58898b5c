mod collection;
mod config;
mod gamelist;

use crate::games::BoardGame;

#[allow(clippy::too_many_arguments)]
pub fn game(
    name: &str,
    id: u64,
    min_players: u32,
    max_players: u32,
    min_play_time: u32,
    max_play_time: u32,
    difficulty: f64,
    rank: u64,
    rating: f64,
    year_published: i32,
) -> BoardGame {
    BoardGame {
        name: name.to_string(),
        id,
        min_players,
        max_players,
        min_play_time,
        max_play_time,
        difficulty,
        rank,
        rating,
        year_published,
    }
}

/// Eight games; exactly Chess and Go satisfy `minplayers>1,maxplayers<6`.
pub fn sample_games() -> Vec<BoardGame> {
    vec![
        game("Monopoly", 1406, 2, 8, 60, 180, 1.6, 4529, 4.4, 1935),
        game("Go", 188, 2, 5, 30, 180, 4.0, 224, 7.6, 1950),
        game("Catan", 13, 3, 6, 60, 120, 2.3, 429, 7.1, 1995),
        game("Chess", 171, 2, 2, 10, 60, 3.7, 397, 7.2, 1475),
        game("Gloomhaven", 174430, 1, 4, 60, 120, 3.9, 3, 8.6, 2017),
        game("Onirim", 71836, 1, 2, 15, 15, 1.4, 1799, 6.8, 2010),
        game("Twilight Imperium", 12493, 3, 6, 240, 480, 4.2, 62, 8.2, 2005),
        game("Terraforming Mars", 167791, 1, 5, 120, 120, 3.2, 5, 8.4, 2016),
    ]
}
