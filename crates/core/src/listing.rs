//! Canonical URLs for the two kinds of listing page.

use crate::FALLBACK_CATEGORY;

/// The context a page belongs to: a headline category or a title search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    Category(String),
    Search(String),
}

impl Listing {
    pub fn category(name: impl Into<String>) -> Self {
        Self::Category(name.into())
    }

    pub fn search(query: impl Into<String>) -> Self {
        Self::Search(query.into())
    }

    /// The `general` category, target of every silent fallback.
    pub fn fallback() -> Self {
        Self::Category(FALLBACK_CATEGORY.to_owned())
    }

    /// Category that preference changes return to.
    ///
    /// A search has no category of its own and lands on `general`.
    pub fn preference_target(&self) -> Self {
        match self {
            Self::Category(_) => self.clone(),
            Self::Search(_) => Self::fallback(),
        }
    }

    /// Name shown as the active category in the navigation bar.
    pub fn active_category(&self) -> &str {
        match self {
            Self::Category(name) => name,
            Self::Search(_) => "search",
        }
    }

    pub fn query(&self) -> Option<&str> {
        match self {
            Self::Category(_) => None,
            Self::Search(query) => Some(query),
        }
    }

    /// Path plus `?page=` query, with the path segment percent-encoded.
    pub fn url(&self, page: i64) -> String {
        match self {
            Self::Category(name) => format!("/category/{}?page={page}", urlencoding::encode(name)),
            Self::Search(query) => format!("/search/{}?page={page}", urlencoding::encode(query)),
        }
    }
}
