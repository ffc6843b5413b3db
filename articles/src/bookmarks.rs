//! Set of bookmarked article slugs.
//!
//! Stored as a JSON array of strings. Order carries no meaning; the set is
//! serialized sorted so repeated saves of the same membership are identical.

use std::collections::BTreeSet;

use serde_json::Value;

use crate::listing::plural_suffix;
use crate::model::Article;
use crate::storage::StorageError;

#[cfg(test)]
#[path = "bookmarks_test.rs"]
mod bookmarks_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookmarkSet {
    slugs: BTreeSet<String>,
}

impl BookmarkSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, slug: &str) -> bool {
        self.slugs.contains(slug)
    }

    /// Flip membership of `slug`; returns `true` when it is now saved.
    pub fn toggle(&mut self, slug: &str) -> bool {
        if self.slugs.remove(slug) {
            false
        } else {
            self.slugs.insert(slug.to_owned());
            true
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.slugs.iter().map(String::as_str)
    }

    /// Saved articles in catalog order. Slugs missing from the catalog are
    /// skipped.
    pub fn saved_articles<'a, I>(&self, articles: I) -> Vec<&'a Article>
    where
        I: IntoIterator<Item = &'a Article>,
    {
        articles.into_iter().filter(|article| self.contains(&article.slug)).collect()
    }

    /// Parse a stored payload. Non-string array items are kept in their JSON
    /// text form.
    ///
    /// # Errors
    ///
    /// [`StorageError::Malformed`] when the payload is not JSON or not an array.
    pub fn from_json(raw: &str) -> Result<Self, StorageError> {
        let value: Value = serde_json::from_str(raw).map_err(|e| StorageError::Malformed(e.to_string()))?;
        let Value::Array(items) = value else {
            return Err(StorageError::Malformed("bookmarks payload is not an array".to_owned()));
        };
        let slugs = items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => s,
                other => other.to_string(),
            })
            .collect();
        Ok(Self { slugs })
    }

    /// Serialize as a JSON array.
    ///
    /// # Errors
    ///
    /// [`StorageError::Encode`] if serialization fails.
    pub fn to_json(&self) -> Result<String, StorageError> {
        serde_json::to_string(&self.slugs).map_err(|e| StorageError::Encode(e.to_string()))
    }
}

impl<S: Into<String>> FromIterator<S> for BookmarkSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self { slugs: iter.into_iter().map(Into::into).collect() }
    }
}

/// Card button text.
#[must_use]
pub fn card_label(saved: bool) -> &'static str {
    if saved { "Saved" } else { "Save" }
}

/// Detail page button text.
#[must_use]
pub fn detail_label(saved: bool) -> &'static str {
    if saved { "Saved" } else { "Save Article" }
}

/// Status line shown after toggling on the detail page.
#[must_use]
pub fn toggle_message(saved: bool) -> &'static str {
    if saved { "Added to your reading list." } else { "Removed from your reading list." }
}

/// Heading text of the saved-articles panel.
#[must_use]
pub fn saved_label(count: usize) -> String {
    if count == 0 {
        "No saved articles yet. Click Save on any post.".to_owned()
    } else {
        format!("{count} saved article{}", plural_suffix(count))
    }
}
