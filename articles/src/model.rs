//! Article content records as authored in the embedded catalog.
//!
//! Records are immutable once loaded. Optional section parts deserialize to
//! empty vectors so rendering code never branches on `Option<Vec<_>>`.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

/// A published article.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// URL-safe unique identifier.
    pub slug: String,
    pub title: String,
    pub category: String,
    /// Display date, e.g. `Feb 8, 2026`.
    pub date: String,
    /// Authored read-time label, e.g. `12 min read`.
    pub read_time: String,
    pub excerpt: String,
    #[serde(default)]
    pub content: Vec<Section>,
}

/// One headed block of article body content.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub heading: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paragraphs: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_points: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub code_samples: Vec<CodeSample>,
}

/// A titled source listing shown in a section's code tab strip.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSample {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub code: String,
}

impl Article {
    /// Relative link to the detail page for `slug`.
    #[must_use]
    pub fn href_for(slug: &str) -> String {
        format!("/article?slug={slug}")
    }

    #[must_use]
    pub fn href(&self) -> String {
        Self::href_for(&self.slug)
    }

    /// Lowercased `title excerpt category`, the haystack for search queries.
    #[must_use]
    pub fn searchable_text(&self) -> String {
        format!("{} {} {}", self.title, self.excerpt, self.category).to_lowercase()
    }

    /// Whitespace-separated words across all paragraphs and key points.
    ///
    /// Headings and code samples are not counted.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.content
            .iter()
            .flat_map(|section| section.paragraphs.iter().chain(section.key_points.iter()))
            .map(|text| text.split_whitespace().count())
            .sum()
    }

    /// Estimated reading time in whole minutes, rounded up, never below one.
    #[must_use]
    pub fn estimated_read_minutes(&self, words_per_minute: usize) -> usize {
        let wpm = words_per_minute.max(1);
        self.word_count().div_ceil(wpm).max(1)
    }

    /// Badge text for the recomputed read time, e.g. `3 min (dynamic)`.
    #[must_use]
    pub fn dynamic_read_time_label(&self, words_per_minute: usize) -> String {
        format!("{} min (dynamic)", self.estimated_read_minutes(words_per_minute))
    }
}

impl CodeSample {
    /// Tab strip label: language, else title, else `Code {n}` (1-based).
    #[must_use]
    pub fn tab_label(&self, index: usize) -> String {
        if !self.language.trim().is_empty() {
            self.language.clone()
        } else if !self.title.trim().is_empty() {
            self.title.clone()
        } else {
            format!("Code {}", index + 1)
        }
    }

    /// Panel caption text.
    #[must_use]
    pub fn caption(&self) -> &str {
        if self.title.trim().is_empty() { "Code snippet" } else { &self.title }
    }

    /// Highlighter class suffix for the `language-*` class on the code element.
    #[must_use]
    pub fn highlight_language(&self) -> &'static str {
        match self.language.to_lowercase().as_str() {
            "csharp" => "csharp",
            "java" => "java",
            "javascript" => "javascript",
            "jsx" => "jsx",
            "sql" => "sql",
            "yaml" => "yaml",
            "http" => "http",
            _ => "none",
        }
    }
}
