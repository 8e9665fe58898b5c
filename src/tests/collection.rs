use super::sample_games;
use crate::games::{load_collection, CSV_HEADERS};

#[test]
fn test_csv_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("games.csv");
    let path = path.to_str().unwrap();

    let games = sample_games();

    let mut csv_wrt = csv::Writer::from_path(path).unwrap();
    csv_wrt.write_record(CSV_HEADERS).unwrap();
    for game in &games {
        csv_wrt
            .write_record([
                game.name.as_str(),
                &game.id.to_string(),
                &game.min_players.to_string(),
                &game.max_players.to_string(),
                &game.min_play_time.to_string(),
                &game.max_play_time.to_string(),
                &game.difficulty.to_string(),
                &game.rank.to_string(),
                &game.rating.to_string(),
                &game.year_published.to_string(),
            ])
            .unwrap();
    }
    csv_wrt.flush().unwrap();

    let loaded = load_collection(path).unwrap();
    assert_eq!(loaded, games);
}

#[test]
fn test_missing_collection_is_an_error() {
    assert!(load_collection("does-not-exist.csv").is_err());
}

#[test]
fn test_malformed_row_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("games.csv");
    std::fs::write(
        &path,
        "name,id,min_players,max_players,min_play_time,max_play_time,difficulty,rank,rating,year_published\n\
         Catan,13,three,6,60,120,2.3,429,7.1,1995\n",
    )
    .unwrap();

    assert!(load_collection(path.to_str().unwrap()).is_err());
}
