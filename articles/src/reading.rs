//! Reading activity record: which slugs were read on which UTC day.
//!
//! Stored as `{ "readByDate": { "YYYY-MM-DD": [slug, ...] }, "completedSlugs": [slug, ...] }`.
//! Every slug recorded under a date is also in `completedSlugs`, and slugs are
//! never removed. Date entries that are not slug arrays are carried through
//! unchanged until that day is read again.

use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::storage::StorageError;

#[cfg(test)]
#[path = "reading_test.rs"]
mod reading_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReadingActivity {
    /// Date key to slugs read that day, in first-read order.
    pub read_by_date: BTreeMap<String, Vec<String>>,
    /// Stored date entries whose value is not a slug array, kept verbatim.
    pub other_dates: BTreeMap<String, Value>,
    /// Every slug ever read, in first-read order.
    pub completed_slugs: Vec<String>,
}

/// Borrowed wire form written by [`ReadingActivity::to_json`].
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StoredActivity<'a> {
    read_by_date: BTreeMap<&'a str, StoredDay<'a>>,
    completed_slugs: &'a [String],
}

#[derive(Serialize)]
#[serde(untagged)]
enum StoredDay<'a> {
    Slugs(&'a [String]),
    Other(&'a Value),
}

impl ReadingActivity {
    /// Record `slug` as read on `day`. Returns `false` when the slug was
    /// already recorded for that day and in the completed list.
    pub fn mark_read(&mut self, slug: &str, day: NaiveDate) -> bool {
        let key = date_key(day);
        let mut changed = self.other_dates.remove(&key).is_some();

        let todays = self.read_by_date.entry(key).or_insert_with(|| {
            changed = true;
            Vec::new()
        });
        if !todays.iter().any(|s| s == slug) {
            todays.push(slug.to_owned());
            changed = true;
        }
        if !self.completed_slugs.iter().any(|s| s == slug) {
            self.completed_slugs.push(slug.to_owned());
            changed = true;
        }
        changed
    }

    #[must_use]
    pub fn was_read_on(&self, slug: &str, day: NaiveDate) -> bool {
        self.read_by_date.get(&date_key(day)).is_some_and(|slugs| slugs.iter().any(|s| s == slug))
    }

    #[must_use]
    pub fn total_completed(&self) -> usize {
        self.completed_slugs.len()
    }

    /// Every recorded date key, mapped to whether it counts as a reading day.
    ///
    /// Slug arrays always count, even when empty. Other stored values count
    /// unless they are `null`, `false`, `0`, or `""`.
    #[must_use]
    pub fn recorded_days(&self) -> BTreeMap<String, bool> {
        let mut days: BTreeMap<String, bool> =
            self.other_dates.iter().map(|(day, value)| (day.clone(), is_truthy(value))).collect();
        days.extend(self.read_by_date.keys().map(|day| (day.clone(), true)));
        days
    }

    /// Parse a stored record.
    ///
    /// A `readByDate` that is not an object, or a `completedSlugs` that is not
    /// an array, is treated as empty. Date entries whose value is not an array
    /// are kept in [`ReadingActivity::other_dates`].
    ///
    /// # Errors
    ///
    /// [`StorageError::Malformed`] when `raw` is not valid JSON.
    pub fn from_json(raw: &str) -> Result<Self, StorageError> {
        let value: Value = serde_json::from_str(raw).map_err(|e| StorageError::Malformed(e.to_string()))?;

        let mut read_by_date = BTreeMap::new();
        let mut other_dates = BTreeMap::new();
        if let Some(Value::Object(map)) = value.get("readByDate") {
            for (day, entry) in map {
                match entry {
                    Value::Array(items) => {
                        read_by_date.insert(day.clone(), string_items(items));
                    }
                    other => {
                        other_dates.insert(day.clone(), other.clone());
                    }
                }
            }
        }
        let completed_slugs = match value.get("completedSlugs") {
            Some(Value::Array(items)) => string_items(items),
            _ => Vec::new(),
        };

        Ok(Self { read_by_date, other_dates, completed_slugs })
    }

    /// # Errors
    ///
    /// [`StorageError::Encode`] if serialization fails.
    pub fn to_json(&self) -> Result<String, StorageError> {
        let mut read_by_date: BTreeMap<&str, StoredDay<'_>> =
            self.other_dates.iter().map(|(day, value)| (day.as_str(), StoredDay::Other(value))).collect();
        read_by_date.extend(self.read_by_date.iter().map(|(day, slugs)| (day.as_str(), StoredDay::Slugs(slugs))));
        let stored = StoredActivity { read_by_date, completed_slugs: &self.completed_slugs };
        serde_json::to_string(&stored).map_err(|e| StorageError::Encode(e.to_string()))
    }
}

/// ISO `YYYY-MM-DD` key for `day`.
#[must_use]
pub fn date_key(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

/// Inverse of [`date_key`]; `None` for anything that is not a calendar date.
#[must_use]
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()
}

/// The current UTC calendar day.
#[must_use]
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn string_items(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .map(|item| match item {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect()
}
