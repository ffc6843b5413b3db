//! Article catalog, reading-activity models, and derivation helpers for the
//! Solutions2Coding blog.
//!
//! This crate is UI-framework agnostic so the Leptos app can consume it
//! directly, and so every rule the pages depend on (filtering, pagination,
//! streaks, bookmark persistence, escaping) is testable without a browser.

pub mod bookmarks;
pub mod catalog;
pub mod config;
pub mod listing;
pub mod markup;
pub mod model;
pub mod persistence;
pub mod reading;
pub mod storage;
pub mod streak;
pub mod submission;
pub mod theme;

pub use bookmarks::BookmarkSet;
pub use catalog::{Catalog, CatalogError};
pub use config::{BlogConfig, StorageKeys};
pub use listing::{ALL_CATEGORIES, CategoryFacet, ListingPage, ListingState};
pub use model::{Article, CodeSample, Section};
pub use persistence::Persistence;
pub use reading::ReadingActivity;
pub use storage::{KeyValueStore, MemoryStore, StorageError};
pub use streak::ReadingStats;
pub use submission::{Submission, SubmissionDraft, SubmissionError};
pub use theme::Theme;
