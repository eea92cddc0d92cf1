use std::sync::Arc;

use axum::{
    Form,
    extract::{Path, Query, State, rejection::FormRejection},
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use newsdesk_core::{Listing, PageDecision, check_lower_bound};
use newsdesk_upstream::UpstreamRequest;

use super::{redirect, render_listing};
use crate::query_types::{PageQuery, SubmitForm};
use crate::{AppState, PageError, Preferences, commands};

/// Search results page.
///
/// The body is decoded whatever the upstream status. An error payload counts
/// as zero pages and goes through the usual out-of-range redirect; a body that
/// is not JSON becomes a 502 page.
pub async fn show(
    State(state): State<Arc<AppState>>,
    Path(query): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
    jar: CookieJar,
) -> Result<Response, PageError> {
    let page = PageQuery::from_pairs(params).page();
    let listing = Listing::search(query.as_str());
    if let PageDecision::Redirect(target) = check_lower_bound(page) {
        return Ok(redirect(&listing.url(target)));
    }

    let request = UpstreamRequest::search(&query, page, state.config.page_size);
    let reply = state.upstream.fetch(&request).await?;
    let payload = reply.payload()?;
    let preferences = Preferences::from_jar(&jar);
    Ok(render_listing(&state.config, &listing, page, payload, &preferences))
}

pub async fn submit(
    Path(query): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
    jar: CookieJar,
    form: Result<Form<SubmitForm>, FormRejection>,
) -> Response {
    let page = PageQuery::from_pairs(params).page();
    let listing = Listing::search(query.as_str());
    if let PageDecision::Redirect(target) = check_lower_bound(page) {
        return redirect(&listing.url(target));
    }

    let form = form.map(|Form(f)| f).unwrap_or_else(|rejection| {
        tracing::debug!(%rejection, "unreadable form, treating as empty");
        SubmitForm::default()
    });
    let preferences = Preferences::from_jar(&jar);
    commands::resolve(&form, &preferences, &listing, page).into_response(jar)
}
