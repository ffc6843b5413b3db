//! Static, read-only article catalog.
//!
//! The built-in catalog is compiled into the binary from
//! `data/articles.json` and parsed once on first access. Lookups are linear
//! scans: the catalog is small and never mutated.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::model::Article;

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

const BUILTIN_JSON: &str = include_str!("../data/articles.json");

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| match Catalog::from_json(BUILTIN_JSON) {
    Ok(catalog) => catalog,
    Err(e) => {
        log::error!("built-in article catalog failed to load: {e}");
        Catalog::default()
    }
});

/// Error returned when catalog data cannot be accepted.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("article at index {0} has an empty slug")]
    EmptySlug(usize),
    #[error("slug is not url-safe: {0}")]
    InvalidSlug(String),
    #[error("duplicate slug: {0}")]
    DuplicateSlug(String),
}

/// Ordered collection of articles with unique slugs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    articles: Vec<Article>,
}

impl Catalog {
    /// The catalog shipped with the site.
    #[must_use]
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Build a catalog from records, rejecting empty, unsafe, or repeated slugs.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] naming the first offending slug.
    pub fn new(articles: Vec<Article>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(articles.len());
        for (index, article) in articles.iter().enumerate() {
            if article.slug.is_empty() {
                return Err(CatalogError::EmptySlug(index));
            }
            if !is_url_safe(&article.slug) {
                return Err(CatalogError::InvalidSlug(article.slug.clone()));
            }
            if !seen.insert(article.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(article.slug.clone()));
            }
        }
        Ok(Self { articles })
    }

    /// Parse a JSON array of articles.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed JSON, otherwise the
    /// validation errors of [`Catalog::new`].
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let articles: Vec<Article> = serde_json::from_str(raw)?;
        Self::new(articles)
    }

    /// Exact-match lookup by slug.
    #[must_use]
    pub fn get_article_by_slug(&self, slug: &str) -> Option<&Article> {
        self.articles.iter().find(|article| article.slug == slug)
    }

    #[must_use]
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Article> {
        self.articles.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Pick the article at `fraction` of the catalog, where `fraction` is a
    /// uniform sample in `[0, 1)`. Out-of-range samples are clamped.
    #[must_use]
    pub fn pick(&self, fraction: f64) -> Option<&Article> {
        if self.articles.is_empty() {
            return None;
        }
        let last = self.articles.len() - 1;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
        let index = if fraction.is_finite() && fraction > 0.0 {
            ((fraction * self.articles.len() as f64).floor() as usize).min(last)
        } else {
            0
        };
        self.articles.get(index)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Article;
    type IntoIter = std::slice::Iter<'a, Article>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lookup in the built-in catalog.
#[must_use]
pub fn get_article_by_slug(slug: &str) -> Option<&'static Article> {
    Catalog::builtin().get_article_by_slug(slug)
}

fn is_url_safe(slug: &str) -> bool {
    slug.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}
