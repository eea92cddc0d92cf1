//! User preferences kept client-side in cookies.

use axum_extra::extract::cookie::{Cookie, CookieJar};
use newsdesk_core::DEFAULT_THEME;

pub const COUNTRY_COOKIE: &str = "country";
pub const THEME_COOKIE: &str = "theme";

/// Values are opaque strings; nothing beyond presence is checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    pub country: Option<String>,
    pub theme: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self { country: None, theme: DEFAULT_THEME.to_owned() }
    }
}

impl Preferences {
    pub fn from_jar(jar: &CookieJar) -> Self {
        Self {
            country: jar.get(COUNTRY_COOKIE).map(|c| c.value().to_owned()),
            theme: jar
                .get(THEME_COOKIE)
                .map_or_else(|| DEFAULT_THEME.to_owned(), |c| c.value().to_owned()),
        }
    }
}

/// Session cookie (no expiry) scoped to the whole site.
pub fn preference_cookie(name: &'static str, value: String) -> Cookie<'static> {
    Cookie::build((name, value)).path("/").build()
}
