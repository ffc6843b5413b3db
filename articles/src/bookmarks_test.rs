use super::*;

#[test]
fn toggle_twice_restores_membership() {
    let mut set: BookmarkSet = ["a", "b"].into_iter().collect();
    let before = set.clone();

    assert!(set.toggle("c"));
    assert!(set.contains("c"));
    assert!(!set.toggle("c"));
    assert_eq!(set, before);

    assert!(!set.toggle("a"));
    assert!(!set.contains("a"));
    assert!(set.toggle("a"));
    assert_eq!(set, before);
}

#[test]
fn json_round_trip_preserves_membership() {
    let set: BookmarkSet = ["z", "a", "m"].into_iter().collect();
    let raw = set.to_json().unwrap();
    assert_eq!(raw, r#"["a","m","z"]"#);
    assert_eq!(BookmarkSet::from_json(&raw).unwrap(), set);
}

#[test]
fn from_json_collapses_duplicates() {
    let set = BookmarkSet::from_json(r#"["a","a","b"]"#).unwrap();
    assert_eq!(set.len(), 2);
}

#[test]
fn from_json_stringifies_non_string_items() {
    let set = BookmarkSet::from_json(r#"["a", 7, true]"#).unwrap();
    assert!(set.contains("a"));
    assert!(set.contains("7"));
    assert!(set.contains("true"));
}

#[test]
fn from_json_rejects_non_arrays_and_garbage() {
    assert!(matches!(BookmarkSet::from_json(r#"{"a":1}"#), Err(StorageError::Malformed(_))));
    assert!(matches!(BookmarkSet::from_json("\"a\""), Err(StorageError::Malformed(_))));
    assert!(matches!(BookmarkSet::from_json("[oops"), Err(StorageError::Malformed(_))));
}

#[test]
fn saved_articles_follow_catalog_order_and_skip_unknown() {
    let catalog = crate::Catalog::builtin();
    let last = catalog.articles().last().unwrap().slug.clone();
    let first = catalog.articles()[0].slug.clone();
    let set: BookmarkSet = [last.clone(), "retired-post".to_owned(), first.clone()].into_iter().collect();

    let saved = set.saved_articles(catalog);
    let saved_slugs: Vec<_> = saved.iter().map(|a| a.slug.clone()).collect();
    assert_eq!(saved_slugs, vec![first, last]);
}

#[test]
fn labels() {
    assert_eq!(card_label(true), "Saved");
    assert_eq!(card_label(false), "Save");
    assert_eq!(detail_label(false), "Save Article");
    assert_eq!(toggle_message(true), "Added to your reading list.");
    assert_eq!(toggle_message(false), "Removed from your reading list.");
    assert_eq!(saved_label(0), "No saved articles yet. Click Save on any post.");
    assert_eq!(saved_label(1), "1 saved article");
    assert_eq!(saved_label(3), "3 saved articles");
}
