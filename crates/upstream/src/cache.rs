//! Time-bounded cache of upstream replies.
//!
//! Keyed by method and full request URL. Entries expire after the configured
//! TTL and are never invalidated otherwise, so a list may be stale for up to
//! one TTL.

use std::time::Duration;

use moka::future::Cache;
use newsdesk_core::CacheConfig;

use crate::UpstreamReply;

#[derive(Clone)]
pub struct ResponseCache {
    inner: Option<Cache<String, UpstreamReply>>,
}

impl std::fmt::Debug for ResponseCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseCache")
            .field("enabled", &self.inner.is_some())
            .field("entries", &self.entry_count())
            .finish()
    }
}

impl ResponseCache {
    pub fn new(config: &CacheConfig) -> Self {
        if !config.enabled || config.max_capacity == 0 {
            return Self::disabled();
        }
        let inner = Cache::builder()
            .max_capacity(config.max_capacity)
            .time_to_live(Duration::from_secs(config.ttl_secs))
            .build();
        Self { inner: Some(inner) }
    }

    pub const fn disabled() -> Self {
        Self { inner: None }
    }

    pub fn key(url: &str) -> String {
        format!("GET {url}")
    }

    pub async fn get(&self, key: &str) -> Option<UpstreamReply> {
        let cache = self.inner.as_ref()?;
        let hit = cache.get(key).await;
        tracing::debug!(key, hit = hit.is_some(), "response cache lookup");
        hit
    }

    /// Store a reply. Only successful replies are kept.
    pub async fn insert(&self, key: String, reply: UpstreamReply) {
        let Some(cache) = self.inner.as_ref() else {
            return;
        };
        if reply.is_success() {
            cache.insert(key, reply).await;
        }
    }

    pub fn entry_count(&self) -> u64 {
        self.inner.as_ref().map_or(0, |cache| cache.entry_count())
    }
}
