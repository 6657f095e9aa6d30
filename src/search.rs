//! Query engine: filters a memo collection by free-text query and category.
//!
//! Filtering never reorders. Callers decide the order before asking for a view.

use crate::model::{CategoryFilter, Memo};

/// A case-insensitive substring query over title, content and tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    needle: Option<String>,
}

impl SearchQuery {
    /// Blank input (after trimming) yields a query that matches everything.
    pub fn parse(query: &str) -> Self {
        let trimmed = query.trim();
        let needle = (!trimmed.is_empty()).then(|| trimmed.to_lowercase());
        Self { needle }
    }

    pub fn is_active(&self) -> bool {
        self.needle.is_some()
    }

    pub fn matches(&self, memo: &Memo) -> bool {
        let Some(needle) = &self.needle else {
            return true;
        };
        memo.title.to_lowercase().contains(needle)
            || memo.content.to_lowercase().contains(needle)
            || memo
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
    }
}

/// Combined filter: category AND text query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewFilter {
    pub query: SearchQuery,
    pub category: CategoryFilter,
}

impl ViewFilter {
    pub fn new(query: &str, category: CategoryFilter) -> Self {
        Self {
            query: SearchQuery::parse(query),
            category,
        }
    }

    pub fn is_active(&self) -> bool {
        self.query.is_active() || self.category.is_active()
    }

    pub fn matches(&self, memo: &Memo) -> bool {
        self.category.matches(&memo.category) && self.query.matches(memo)
    }

    pub fn apply<'a, I>(&self, memos: I) -> Vec<Memo>
    where
        I: IntoIterator<Item = &'a Memo>,
    {
        memos
            .into_iter()
            .filter(|m| self.matches(m))
            .cloned()
            .collect()
    }
}

/// Filter `memos` by `search_query` and `selected_category`.
///
/// `selected_category` of `""` or `"all"` disables the category filter; a
/// blank query disables the text filter. With both disabled the input comes
/// back unchanged.
pub fn view(memos: &[Memo], search_query: &str, selected_category: &str) -> Vec<Memo> {
    // CategoryFilter parsing is infallible
    let category: CategoryFilter = selected_category.parse().unwrap_or_default();
    ViewFilter::new(search_query, category).apply(memos)
}
