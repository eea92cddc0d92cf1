use std::time::Duration;

use async_trait::async_trait;
use newsdesk_core::{Config, Endpoints};
use reqwest::Url;

use crate::{Endpoint, NewsSource, ResponseCache, UpstreamError, UpstreamReply, UpstreamRequest};

/// Client for the news API.
///
/// Holds one pooled `reqwest::Client` for the lifetime of the process and sends
/// the static credential as a bearer token on every request.
pub struct NewsClient {
    client: reqwest::Client,
    api_key: String,
    endpoints: Endpoints,
    cache: ResponseCache,
}

impl std::fmt::Debug for NewsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsClient")
            .field("client", &self.client)
            .field("api_key", &"***")
            .field("endpoints", &self.endpoints)
            .field("cache", &self.cache)
            .finish()
    }
}

impl NewsClient {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(config: &Config) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!("newsdesk/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| UpstreamError::ClientInit(e.to_string()))?;
        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            endpoints: config.endpoints.clone(),
            cache: ResponseCache::new(&config.cache),
        })
    }

    /// Replace the cache, e.g. with [`ResponseCache::disabled`].
    #[must_use]
    pub fn with_cache(mut self, cache: ResponseCache) -> Self {
        self.cache = cache;
        self
    }

    pub const fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    fn endpoint_url(&self, endpoint: Endpoint) -> &str {
        match endpoint {
            Endpoint::TopHeadlines => &self.endpoints.top_headlines,
            Endpoint::Everything => &self.endpoints.everything,
        }
    }

    fn request_url(&self, request: &UpstreamRequest) -> Result<Url, UpstreamError> {
        let base = self.endpoint_url(request.endpoint());
        Url::parse_with_params(base, request.params()).map_err(|e| {
            UpstreamError::InvalidEndpoint { url: base.to_owned(), reason: e.to_string() }
        })
    }
}

#[async_trait]
impl NewsSource for NewsClient {
    async fn fetch(&self, request: &UpstreamRequest) -> Result<UpstreamReply, UpstreamError> {
        let url = self.request_url(request)?;
        let key = ResponseCache::key(url.as_str());
        if let Some(hit) = self.cache.get(&key).await {
            return Ok(hit);
        }

        tracing::debug!(endpoint = ?request.endpoint(), %url, "fetching from upstream");
        let response = self.client.get(url).bearer_auth(&self.api_key).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        if status != 200 {
            tracing::warn!(status, endpoint = ?request.endpoint(), "upstream returned non-success");
        }

        let reply = UpstreamReply::new(status, body);
        self.cache.insert(key, reply.clone()).await;
        Ok(reply)
    }
}
