//! Typed access to the three persisted records over a [`KeyValueStore`].
//!
//! DESIGN
//! ======
//! Every accessor returns `Result`; an absent key is `Ok(default)`, never an
//! error. Callers that must not fail (page start-up, read tracking) pass the
//! result through [`recover`] to log and substitute the default explicitly.

use chrono::NaiveDate;

use crate::bookmarks::BookmarkSet;
use crate::config::StorageKeys;
use crate::reading::ReadingActivity;
use crate::storage::{KeyValueStore, StorageError};
use crate::streak::{ReadingStats, reading_stats};
use crate::theme::Theme;

#[cfg(test)]
#[path = "persistence_test.rs"]
mod tests;

#[derive(Clone, Debug)]
pub struct Persistence<S> {
    store: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    /// # Errors
    ///
    /// Backend failures, or [`StorageError::Malformed`] for a payload that is
    /// not a JSON array.
    pub fn load_bookmarks(&self) -> Result<BookmarkSet, StorageError> {
        match self.store.get(&self.keys.bookmarks)? {
            Some(raw) if !raw.is_empty() => BookmarkSet::from_json(&raw),
            _ => Ok(BookmarkSet::new()),
        }
    }

    /// # Errors
    ///
    /// Encoding or backend write failures.
    pub fn save_bookmarks(&self, bookmarks: &BookmarkSet) -> Result<(), StorageError> {
        self.store.set(&self.keys.bookmarks, &bookmarks.to_json()?)
    }

    /// Flip `slug` in `bookmarks` and write the whole set back.
    ///
    /// The in-memory set is updated even when the write fails.
    ///
    /// # Errors
    ///
    /// Encoding or backend write failures.
    pub fn toggle_bookmark(&self, bookmarks: &mut BookmarkSet, slug: &str) -> Result<bool, StorageError> {
        let saved = bookmarks.toggle(slug);
        self.save_bookmarks(bookmarks)?;
        Ok(saved)
    }

    /// # Errors
    ///
    /// Backend failures, or [`StorageError::Malformed`] for invalid JSON.
    pub fn load_reading_activity(&self) -> Result<ReadingActivity, StorageError> {
        match self.store.get(&self.keys.reading_activity)? {
            Some(raw) if !raw.is_empty() => ReadingActivity::from_json(&raw),
            _ => Ok(ReadingActivity::default()),
        }
    }

    /// Record one view of `slug` on `today` and persist the result.
    ///
    /// A malformed stored record is replaced by a fresh one. Nothing is
    /// written when the view was already recorded for `today`.
    ///
    /// # Errors
    ///
    /// Backend read or write failures.
    pub fn mark_article_read(&self, slug: &str, today: NaiveDate) -> Result<ReadingActivity, StorageError> {
        let mut activity = match self.load_reading_activity() {
            Ok(activity) => activity,
            Err(StorageError::Malformed(reason)) => {
                log::warn!("discarding malformed reading activity: {reason}");
                ReadingActivity::default()
            }
            Err(e) => return Err(e),
        };
        if activity.mark_read(slug, today) {
            self.store.set(&self.keys.reading_activity, &activity.to_json()?)?;
            log::debug!("recorded read of {slug} on {today}");
        }
        Ok(activity)
    }

    /// # Errors
    ///
    /// Same as [`Persistence::load_reading_activity`].
    pub fn reading_stats(&self, today: NaiveDate) -> Result<ReadingStats, StorageError> {
        Ok(reading_stats(&self.load_reading_activity()?, today))
    }

    /// Stored theme, `Ok(None)` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Backend failures, or [`StorageError::Malformed`] for an unknown value.
    pub fn load_theme(&self) -> Result<Option<Theme>, StorageError> {
        match self.store.get(&self.keys.theme)? {
            Some(raw) if !raw.is_empty() => Theme::parse(&raw)
                .map(Some)
                .ok_or_else(|| StorageError::Malformed(format!("unknown theme {raw:?}"))),
            _ => Ok(None),
        }
    }

    /// # Errors
    ///
    /// Backend write failures.
    pub fn save_theme(&self, theme: Theme) -> Result<(), StorageError> {
        self.store.set(&self.keys.theme, theme.as_str())
    }
}

/// Unwrap `result`, logging the failure and substituting `T::default()`.
pub fn recover<T: Default>(result: Result<T, StorageError>, what: &str) -> T {
    result.unwrap_or_else(|e| {
        log::warn!("{what}: {e}; using default");
        T::default()
    })
}
