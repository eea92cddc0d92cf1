use std::sync::Arc;

use axum::{
    Form,
    extract::{Path, Query, State, rejection::FormRejection},
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use newsdesk_core::{Listing, PageDecision, check_lower_bound};
use newsdesk_upstream::UpstreamRequest;

use super::{redirect, render_listing};
use crate::query_types::{PageQuery, SubmitForm};
use crate::{AppState, PageError, Preferences, commands, render};

pub async fn show(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
    jar: CookieJar,
) -> Result<Response, PageError> {
    let page = PageQuery::from_pairs(params).page();
    let listing = Listing::category(category.as_str());
    if let PageDecision::Redirect(target) = check_lower_bound(page) {
        return Ok(redirect(&listing.url(target)));
    }
    if !state.config.has_category(&category) {
        return Ok(redirect(&Listing::fallback().url(page)));
    }

    let preferences = Preferences::from_jar(&jar);
    let request = UpstreamRequest::headlines(
        &category,
        preferences.country.as_deref(),
        page,
        state.config.page_size,
    );
    let reply = state.upstream.fetch(&request).await?;

    if reply.is_success() {
        let payload = reply.payload()?;
        return Ok(render_listing(&state.config, &listing, page, payload, &preferences));
    }
    if reply.is_unauthorized() {
        tracing::warn!(category = %category, "upstream rejected credentials");
        return Ok(render::render_unauthorized(&state.config.site_title).into_response());
    }
    tracing::warn!(
        category = %category,
        status = reply.status,
        "upstream failure, falling back to default category"
    );
    Ok(redirect(&Listing::fallback().url(page)))
}

pub async fn submit(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
    jar: CookieJar,
    form: Result<Form<SubmitForm>, FormRejection>,
) -> Response {
    let page = PageQuery::from_pairs(params).page();
    let listing = Listing::category(category.as_str());
    if let PageDecision::Redirect(target) = check_lower_bound(page) {
        return redirect(&listing.url(target));
    }
    if !state.config.has_category(&category) {
        return redirect(&Listing::fallback().url(page));
    }

    let form = form.map(|Form(f)| f).unwrap_or_else(|rejection| {
        tracing::debug!(%rejection, "unreadable form, treating as empty");
        SubmitForm::default()
    });
    let preferences = Preferences::from_jar(&jar);
    commands::resolve(&form, &preferences, &listing, page).into_response(jar)
}
