use crate::config::Config;

#[test]
fn test_first_load_writes_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("meeple");
    let base = base.to_str().unwrap();

    let config = Config::load_with(base);
    assert_eq!(config.collection, "games.csv");
    assert_eq!(config.default_sort, "name");

    // the default file landed on disk and reloads identically
    let reloaded = Config::load_with(base);
    assert_eq!(reloaded.collection, config.collection);
    assert_eq!(reloaded.default_sort, config.default_sort);
}

#[test]
fn test_load_keeps_configured_values() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path();
    std::fs::write(
        base.join("config.yaml"),
        "collection: shelf.csv\ndefault_sort: rating\n",
    )
    .unwrap();

    let config = Config::load_with(base.to_str().unwrap());
    assert_eq!(config.collection, "shelf.csv");
    assert_eq!(config.default_sort, "rating");
}

#[test]
#[should_panic(expected = "default_sort is not a sortable field")]
fn test_unsortable_default_field_panics() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path();
    std::fs::write(base.join("config.yaml"), "default_sort: bogus\n").unwrap();

    Config::load_with(base.to_str().unwrap());
}
