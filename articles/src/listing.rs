//! Search, category filtering, and incremental pagination over the catalog.
//!
//! DESIGN
//! ======
//! `ListingState` is the whole of the list page's filter state. Pages hold it
//! in a signal and derive the visible slice on every render, so there is no
//! cached result set to invalidate when the query or category changes.

use std::collections::BTreeMap;

use crate::model::Article;

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

/// Sentinel category that matches every article.
pub const ALL_CATEGORIES: &str = "All";

/// One entry of the category sidebar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryFacet {
    pub name: String,
    pub count: usize,
}

/// Active category, normalized query, and how many results are revealed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingState {
    active_category: String,
    search_query: String,
    visible_count: usize,
    page_size: usize,
}

impl ListingState {
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            active_category: ALL_CATEGORIES.to_owned(),
            search_query: String::new(),
            visible_count: page_size,
            page_size,
        }
    }

    #[must_use]
    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Switch category and collapse back to the first page.
    pub fn set_category(&mut self, category: &str) {
        category.clone_into(&mut self.active_category);
        self.visible_count = self.page_size;
    }

    /// Store the trimmed, lowercased query and collapse back to the first page.
    pub fn set_search(&mut self, raw: &str) {
        self.search_query = raw.trim().to_lowercase();
        self.visible_count = self.page_size;
    }

    /// Reveal one more page of results.
    pub fn load_more(&mut self) {
        self.visible_count = self.visible_count.saturating_add(self.page_size);
    }

    #[must_use]
    pub fn is_active(&self, category: &str) -> bool {
        self.active_category == category
    }

    /// Category match AND (empty query OR query within title/excerpt/category).
    #[must_use]
    pub fn matches(&self, article: &Article) -> bool {
        let category_ok = self.active_category == ALL_CATEGORIES || article.category == self.active_category;
        if !category_ok {
            return false;
        }
        self.search_query.is_empty() || article.searchable_text().contains(&self.search_query)
    }

    /// All matching articles in catalog order.
    pub fn filter<'a, I>(&self, articles: I) -> Vec<&'a Article>
    where
        I: IntoIterator<Item = &'a Article>,
    {
        articles.into_iter().filter(|article| self.matches(article)).collect()
    }

    /// The revealed prefix of the filtered results plus the total match count.
    pub fn page<'a, I>(&self, articles: I) -> ListingPage<'a>
    where
        I: IntoIterator<Item = &'a Article>,
    {
        let mut matched = self.filter(articles);
        let total = matched.len();
        matched.truncate(self.visible_count);
        ListingPage { visible: matched, total }
    }
}

impl Default for ListingState {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_PAGE_SIZE)
    }
}

/// Result of applying a [`ListingState`] to the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingPage<'a> {
    pub visible: Vec<&'a Article>,
    pub total: usize,
}

impl ListingPage<'_> {
    /// Whether the "load more" control should be shown.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.visible.len() < self.total
    }

    #[must_use]
    pub fn results_label(&self) -> String {
        results_label(self.total)
    }
}

/// `"{n} article(s) found"`.
#[must_use]
pub fn results_label(count: usize) -> String {
    format!("{count} article{} found", plural_suffix(count))
}

/// `"All"` with the catalog size, then each distinct category with its
/// member count, alphabetically.
pub fn category_facets<'a, I>(articles: I) -> Vec<CategoryFacet>
where
    I: IntoIterator<Item = &'a Article>,
{
    let mut total = 0usize;
    let mut grouped: BTreeMap<(String, &'a str), usize> = BTreeMap::new();
    for article in articles {
        total += 1;
        *grouped.entry((article.category.to_lowercase(), article.category.as_str())).or_default() += 1;
    }

    let mut facets = Vec::with_capacity(grouped.len() + 1);
    facets.push(CategoryFacet { name: ALL_CATEGORIES.to_owned(), count: total });
    facets.extend(grouped.into_iter().map(|((_, name), count)| CategoryFacet { name: name.to_owned(), count }));
    facets
}

pub(crate) fn plural_suffix(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
