use super::*;
use crate::storage::MemoryStore;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn fresh() -> Persistence<MemoryStore> {
    Persistence::new(MemoryStore::new(), StorageKeys::default())
}

/// Store whose every operation fails, like disabled storage.
struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

// =============================================================
// Bookmarks
// =============================================================

#[test]
fn missing_bookmarks_load_as_empty() {
    assert!(fresh().load_bookmarks().unwrap().is_empty());
}

#[test]
fn malformed_bookmarks_are_an_error_the_caller_can_recover() {
    let p = fresh();
    p.store().insert("solutions2coding-bookmarks", r#"{"not":"array"}"#);
    let result = p.load_bookmarks();
    assert!(matches!(result, Err(StorageError::Malformed(_))));
    assert!(recover(result, "load bookmarks").is_empty());

    p.store().insert("solutions2coding-bookmarks", "not json");
    assert!(recover(p.load_bookmarks(), "load bookmarks").is_empty());
}

#[test]
fn toggle_bookmark_persists_every_change() {
    let p = fresh();
    let mut set = p.load_bookmarks().unwrap();

    assert!(p.toggle_bookmark(&mut set, "a").unwrap());
    assert_eq!(p.load_bookmarks().unwrap(), set);

    assert!(p.toggle_bookmark(&mut set, "b").unwrap());
    assert!(!p.toggle_bookmark(&mut set, "a").unwrap());
    assert_eq!(p.load_bookmarks().unwrap(), set);
    assert_eq!(p.store().raw("solutions2coding-bookmarks").unwrap(), r#"["b"]"#);
}

#[test]
fn toggle_bookmark_updates_memory_even_when_write_fails() {
    let p = Persistence::new(MemoryStore::read_only(), StorageKeys::default());
    let mut set = BookmarkSet::new();
    assert!(matches!(p.toggle_bookmark(&mut set, "a"), Err(StorageError::Write(_))));
    assert!(set.contains("a"));
}

#[test]
fn unavailable_storage_falls_back_to_defaults() {
    let p = Persistence::new(UnavailableStore, StorageKeys::default());
    assert_eq!(p.load_bookmarks(), Err(StorageError::Unavailable));
    assert!(recover(p.load_bookmarks(), "load bookmarks").is_empty());
    assert_eq!(recover(p.load_reading_activity(), "load activity"), ReadingActivity::default());
    assert_eq!(recover(p.load_theme(), "load theme"), None);
    assert!(p.mark_article_read("a", day(2024, 1, 1)).is_err());
}

// =============================================================
// Reading activity
// =============================================================

#[test]
fn mark_article_read_twice_same_day_records_once() {
    let p = fresh();
    let today = day(2024, 5, 20);
    p.mark_article_read("intro", today).unwrap();
    let activity = p.mark_article_read("intro", today).unwrap();

    assert_eq!(activity.read_by_date["2024-05-20"], vec!["intro".to_owned()]);
    assert_eq!(activity.completed_slugs, vec!["intro".to_owned()]);
    assert_eq!(p.load_reading_activity().unwrap(), activity);
}

#[test]
fn mark_article_read_replaces_malformed_record() {
    let p = fresh();
    p.store().insert("solutions2coding-reading-activity", "{{{");
    let activity = p.mark_article_read("a", day(2024, 1, 1)).unwrap();
    assert_eq!(activity.total_completed(), 1);
    assert_eq!(p.load_reading_activity().unwrap(), activity);
}

#[test]
fn mark_article_read_keeps_foreign_fields_tolerantly() {
    let p = fresh();
    p.store().insert(
        "solutions2coding-reading-activity",
        r#"{"readByDate":"oops","completedSlugs":["old"]}"#,
    );
    let activity = p.mark_article_read("new", day(2024, 1, 1)).unwrap();
    assert_eq!(activity.completed_slugs, vec!["old", "new"]);
    assert_eq!(activity.read_by_date.len(), 1);
}

#[test]
fn mark_article_read_preserves_non_array_date_entries() {
    let p = fresh();
    p.store().insert(
        "solutions2coding-reading-activity",
        r#"{"readByDate":{"2023-12-30":1,"2023-12-31":["old"]},"completedSlugs":["old"]}"#,
    );
    p.mark_article_read("new", day(2024, 1, 1)).unwrap();
    assert_eq!(
        p.store().raw("solutions2coding-reading-activity").as_deref(),
        Some(r#"{"readByDate":{"2023-12-30":1,"2023-12-31":["old"],"2024-01-01":["new"]},"completedSlugs":["old","new"]}"#)
    );
}

#[test]
fn mark_article_read_surfaces_write_failure() {
    let p = Persistence::new(MemoryStore::read_only(), StorageKeys::default());
    assert!(matches!(p.mark_article_read("a", day(2024, 1, 1)), Err(StorageError::Write(_))));
}

#[test]
fn reading_stats_read_through_storage() {
    let p = fresh();
    p.mark_article_read("a", day(2024, 1, 1)).unwrap();
    p.mark_article_read("b", day(2024, 1, 2)).unwrap();
    p.mark_article_read("c", day(2024, 1, 4)).unwrap();

    let stats = p.reading_stats(day(2024, 1, 4)).unwrap();
    assert_eq!(stats, ReadingStats { current_streak: 1, best_streak: 2, total_completed: 3 });
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_round_trips_as_plain_string() {
    let p = fresh();
    assert_eq!(p.load_theme().unwrap(), None);
    p.save_theme(Theme::Dark).unwrap();
    assert_eq!(p.store().raw("solutions2coding-theme").unwrap(), "dark");
    assert_eq!(p.load_theme().unwrap(), Some(Theme::Dark));
}

#[test]
fn double_toggle_persists_final_state() {
    let p = fresh();
    let start = Theme::initial(p.load_theme().unwrap(), false);
    let once = start.toggled();
    p.save_theme(once).unwrap();
    let twice = once.toggled();
    p.save_theme(twice).unwrap();
    assert_eq!(twice, start);
    assert_eq!(p.load_theme().unwrap(), Some(twice));
}

#[test]
fn unknown_theme_value_is_malformed() {
    let p = fresh();
    p.store().insert("solutions2coding-theme", "sepia");
    assert!(matches!(p.load_theme(), Err(StorageError::Malformed(_))));
}
