//! Page counting, article extraction and the page-number policy.

use crate::{Article, MAX_DISPLAY_PAGES, NewsPayload};

/// What a handler should do with a requested page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDecision {
    Render,
    Redirect(i64),
}

/// Number of pages the upstream result set spans, 0 for a failed payload.
pub fn count_pages(payload: &NewsPayload, page_size: u64) -> u64 {
    if !payload.is_ok() || page_size == 0 {
        return 0;
    }
    payload.total_results.div_ceil(page_size)
}

/// Titles and links of a successful payload; empty otherwise.
pub fn parse_articles(payload: NewsPayload) -> Vec<Article> {
    if !payload.is_ok() {
        return Vec::new();
    }
    payload.articles.into_iter().map(Article::from).collect()
}

/// Rejects page numbers below 1 before anything is fetched.
pub fn check_lower_bound(page: i64) -> PageDecision {
    if page < 1 { PageDecision::Redirect(1) } else { PageDecision::Render }
}

/// Full policy once the page count is known.
///
/// A page past the end redirects to the last page. With zero pages that is
/// `page=0`, which the lower-bound check on the next request turns into `page=1`.
pub fn resolve_page(page: i64, pages: u64) -> PageDecision {
    if let PageDecision::Redirect(target) = check_lower_bound(page) {
        return PageDecision::Redirect(target);
    }
    match u64::try_from(page) {
        Ok(requested) if requested > pages => {
            PageDecision::Redirect(i64::try_from(pages).unwrap_or(i64::MAX))
        },
        _ => PageDecision::Render,
    }
}

/// Pagination controls shown on a page, capped at [`MAX_DISPLAY_PAGES`].
pub fn display_pages(pages: u64) -> u64 {
    pages.min(MAX_DISPLAY_PAGES)
}
