//! Reader library state: listing filters, bookmarks, and streak counters.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loaded once when the app mounts. The home page and the article page both
//! mutate it, so a bookmark saved on the detail page shows up in the saved
//! panel without a reload.
//!
//! Storage failures never surface to the reader: they are logged and the
//! in-memory state carries on.

#[cfg(test)]
#[path = "library_test.rs"]
mod library_test;

use articles::persistence::recover;
use articles::streak::reading_stats;
use articles::{BlogConfig, BookmarkSet, KeyValueStore, ListingState, Persistence, ReadingStats};
use chrono::NaiveDate;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LibraryState {
    pub listing: ListingState,
    /// Search box text as typed; `listing` holds the normalized query.
    pub search_input: String,
    pub bookmarks: BookmarkSet,
    pub stats: ReadingStats,
}

impl LibraryState {
    /// Hydrate from storage, falling back to empty state for anything that
    /// cannot be read.
    pub fn load<S: KeyValueStore>(persistence: &Persistence<S>, config: &BlogConfig, today: NaiveDate) -> Self {
        Self {
            listing: ListingState::new(config.page_size),
            search_input: String::new(),
            bookmarks: recover(persistence.load_bookmarks(), "load bookmarks"),
            stats: recover(persistence.reading_stats(today), "load reading stats"),
        }
    }

    pub fn set_search(&mut self, raw: String) {
        self.listing.set_search(&raw);
        self.search_input = raw;
    }

    /// Flip a bookmark and persist the set. Returns whether `slug` is saved
    /// afterwards; a failed write still keeps the in-memory toggle.
    pub fn toggle_bookmark<S: KeyValueStore>(&mut self, persistence: &Persistence<S>, slug: &str) -> bool {
        match persistence.toggle_bookmark(&mut self.bookmarks, slug) {
            Ok(saved) => saved,
            Err(e) => {
                log::warn!("bookmark for {slug} not persisted: {e}");
                self.bookmarks.contains(slug)
            }
        }
    }

    /// Recompute the streak counters as of `today` from stored activity.
    /// A read failure keeps the current counters.
    pub fn refresh_stats<S: KeyValueStore>(&mut self, persistence: &Persistence<S>, today: NaiveDate) {
        match persistence.reading_stats(today) {
            Ok(stats) => self.stats = stats,
            Err(e) => log::warn!("reading stats not refreshed: {e}"),
        }
    }

    /// Record that `slug` was opened today and refresh the streak counters.
    pub fn record_read<S: KeyValueStore>(&mut self, persistence: &Persistence<S>, slug: &str, today: NaiveDate) {
        match persistence.mark_article_read(slug, today) {
            Ok(activity) => self.stats = reading_stats(&activity, today),
            Err(e) => log::warn!("reading activity for {slug} not recorded: {e}"),
        }
    }
}
