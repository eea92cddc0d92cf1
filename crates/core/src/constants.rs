//! Shared constants for newsdesk.

/// Upper bound on the pagination controls shown on a page.
pub const MAX_DISPLAY_PAGES: u64 = 12;

/// Category used when a request names one that is not configured.
pub const FALLBACK_CATEGORY: &str = "general";

/// Theme applied when the `theme` cookie is absent.
pub const DEFAULT_THEME: &str = "light";

/// Default config file looked up relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Default upstream request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default response cache time-to-live in seconds.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Default maximum number of cached upstream replies.
pub const DEFAULT_CACHE_CAPACITY: u64 = 1024;
