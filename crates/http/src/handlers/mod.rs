pub mod category;
pub mod search;

use axum::response::{IntoResponse, Redirect, Response};
use newsdesk_core::{
    Config, Listing, NewsPayload, PageDecision, count_pages, parse_articles, resolve_page,
};

use crate::Preferences;
use crate::render::{self, IndexPage};

/// Canonical redirect; never renders.
pub(crate) fn redirect(location: &str) -> Response {
    tracing::debug!(location, "canonical redirect");
    Redirect::to(location).into_response()
}

/// Render `payload` as `page` of `listing`, or redirect when the page is past the end.
pub(crate) fn render_listing(
    config: &Config,
    listing: &Listing,
    page: i64,
    payload: NewsPayload,
    preferences: &Preferences,
) -> Response {
    let pages = count_pages(&payload, config.page_size);
    if let PageDecision::Redirect(target) = resolve_page(page, pages) {
        return redirect(&listing.url(target));
    }
    let articles = parse_articles(payload);
    render::render_index(&IndexPage {
        site_title: &config.site_title,
        listing,
        articles: &articles,
        page,
        pages,
        categories: &config.categories,
        countries: &config.countries,
        preferences,
    })
    .into_response()
}
