//! HTTP front end for newsdesk.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]

pub mod commands;
mod handlers;
pub mod page_error;
pub mod preferences;
pub mod query_types;
pub mod render;


use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    response::Redirect,
    routing::{any, get},
};
use newsdesk_core::Config;
use newsdesk_upstream::NewsSource;
use tower_http::trace::TraceLayer;

pub use page_error::PageError;
pub use preferences::Preferences;

/// Shared application state for all HTTP handlers.
///
/// Everything here is read-only after startup; the upstream source owns its
/// own connection pool and cache.
pub struct AppState {
    /// Static configuration loaded at startup
    pub config: Arc<Config>,
    /// Upstream news API (real client or a test stub)
    pub upstream: Arc<dyn NewsSource>,
}

impl AppState {
    pub fn new(config: Config, upstream: Arc<dyn NewsSource>) -> Self {
        Self { config: Arc::new(config), upstream }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", any(landing))
        .route("/health", get(health))
        .route(
            "/category/{category}",
            get(handlers::category::show).post(handlers::category::submit),
        )
        .route("/search/{query}", get(handlers::search::show).post(handlers::search::submit))
        .fallback(landing)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `/` and every unmatched path land on page 1 of the first category.
async fn landing(State(state): State<Arc<AppState>>) -> Redirect {
    Redirect::to(&state.config.default_listing().url(1))
}

async fn health() -> &'static str {
    "ok"
}
