//! Upstream news API access for newsdesk
//!
//! [`NewsSource`] is the seam the HTTP layer depends on; [`NewsClient`] is the
//! reqwest implementation with a [`ResponseCache`] in front of it.

mod cache;
mod client;
mod error;
mod request;


use async_trait::async_trait;

pub use cache::ResponseCache;
pub use client::NewsClient;
pub use error::UpstreamError;
pub use request::{Endpoint, UpstreamReply, UpstreamRequest};

/// Anything that can answer an [`UpstreamRequest`].
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Issue the request and return the raw status and body.
    ///
    /// Non-success statuses are not errors here; callers decide how to treat them.
    async fn fetch(&self, request: &UpstreamRequest) -> Result<UpstreamReply, UpstreamError>;
}
