use super::sample_games;
use crate::errors::ListError;
use crate::gamelist::GameList;
use crate::planner::Planner;

fn filtered() -> Vec<crate::games::BoardGame> {
    // full sample set, sorted by name ascending
    Planner::new(sample_games()).filter("").unwrap()
}

#[test]
fn test_add_all_then_remove_all() {
    let source = filtered();
    let mut list = GameList::new();

    list.add_to_list("ALL", &source).unwrap();
    assert_eq!(list.count(), source.len());

    // keyword is case-insensitive and dedup keeps the count stable
    list.add_to_list("all", &source).unwrap();
    assert_eq!(list.count(), source.len());

    list.remove_from_list("ALL").unwrap();
    assert_eq!(list.count(), 0);
}

#[test]
fn test_add_range_one_based_inclusive() {
    let source = filtered();
    let mut list = GameList::new();

    list.add_to_list("2-3", &source[..4]).unwrap();
    assert_eq!(list.count(), 2);
    assert_eq!(list.game_names(), vec!["Chess", "Gloomhaven"]);
}

#[test]
fn test_add_single_index() {
    let source = filtered();
    let mut list = GameList::new();

    list.add_to_list("1", &source).unwrap();
    assert_eq!(list.game_names(), vec!["Catan"]);
}

#[test]
fn test_index_out_of_range_leaves_list_unchanged() {
    let source = filtered();
    let mut list = GameList::new();
    list.add_to_list("1-2", &source).unwrap();

    let err = list.add_to_list("99", &source[..4]).unwrap_err();
    assert!(matches!(err, ListError::IndexOutOfRange(token) if token == "99"));
    assert_eq!(list.count(), 2);

    assert!(list.add_to_list("0", &source).is_err());
    assert!(list.add_to_list("3-2", &source).is_err());
    assert!(list.remove_from_list("99").is_err());
    assert_eq!(list.count(), 2);
}

#[test]
fn test_add_by_name_case_insensitive() {
    let source = filtered();
    let mut list = GameList::new();

    list.add_to_list("chess", &source).unwrap();
    assert_eq!(list.game_names(), vec!["Chess"]);

    // same game again is a dedup no-op
    list.add_to_list("Chess", &source).unwrap();
    assert_eq!(list.count(), 1);
}

#[test]
fn test_add_unknown_name_fails() {
    let source = filtered();
    let mut list = GameList::new();

    let err = list.add_to_list("Azul", &source).unwrap_err();
    assert!(matches!(err, ListError::NotFound(name) if name == "Azul"));
    assert_eq!(list.count(), 0);
}

#[test]
fn test_remove_absent_name_is_silent() {
    let source = filtered();
    let mut list = GameList::new();
    list.add_to_list("1-3", &source).unwrap();

    list.remove_from_list("Azul").unwrap();
    assert_eq!(list.count(), 3);
}

#[test]
fn test_remove_by_name_and_index() {
    let source = filtered();
    let mut list = GameList::new();
    list.add_to_list("1-4", &source).unwrap();

    list.remove_from_list("gloomhaven").unwrap();
    assert_eq!(list.game_names(), vec!["Catan", "Chess", "Go"]);

    // indexes address the list itself, in insertion order
    list.remove_from_list("1-2").unwrap();
    assert_eq!(list.game_names(), vec!["Go"]);
}

#[test]
fn test_names_sorted_case_insensitively() {
    let source = filtered();
    let mut list = GameList::new();
    list.add_to_list("Monopoly", &source).unwrap();
    list.add_to_list("go", &source).unwrap();
    list.add_to_list("Catan", &source).unwrap();

    assert_eq!(list.game_names(), vec!["Catan", "Go", "Monopoly"]);
}

#[test]
fn test_save_creates_parents_and_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir
        .path()
        .join("out")
        .join("lists")
        .join("games.txt");
    let path = path.to_str().unwrap();

    let source = filtered();
    let mut list = GameList::new();
    list.add_to_list("Go", &source).unwrap();
    list.add_to_list("Catan", &source).unwrap();
    list.save(path).unwrap();

    let written = std::fs::read_to_string(path).unwrap();
    assert_eq!(written, "Catan\nGo\n");

    // saving again replaces the file instead of appending
    list.remove_from_list("Go").unwrap();
    list.save(path).unwrap();
    let written = std::fs::read_to_string(path).unwrap();
    assert_eq!(written, "Catan\n");
}
