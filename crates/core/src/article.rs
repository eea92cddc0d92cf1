//! Upstream payload and the article model rendered on a page.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome reported in the upstream `status` field.
///
/// Anything other than `"ok"`, including a missing field, counts as an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadStatus {
    Ok,
    #[default]
    #[serde(other)]
    Error,
}

/// Article object as returned upstream. Only the fields we render are kept.
///
/// Fields stay untyped so one odd article cannot fail the whole payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawArticle {
    #[serde(default)]
    pub title: Value,
    #[serde(default)]
    pub url: Value,
}

/// Strings as-is, `null` as empty, anything else in its JSON form.
fn display_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Body shared by the headline and search endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsPayload {
    #[serde(default)]
    pub status: PayloadStatus,
    #[serde(rename = "totalResults", default)]
    pub total_results: u64,
    #[serde(default)]
    pub articles: Vec<RawArticle>,
}

impl NewsPayload {
    pub fn is_ok(&self) -> bool {
        self.status == PayloadStatus::Ok
    }
}

/// A single rendered headline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    pub title: String,
    pub url: String,
}

impl From<RawArticle> for Article {
    fn from(raw: RawArticle) -> Self {
        Self { title: display_text(raw.title), url: display_text(raw.url) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_status_ok() {
        let p: NewsPayload = serde_json::from_value(json!({"status": "ok"})).unwrap();
        assert!(p.is_ok());
    }

    #[test]
    fn test_payload_unknown_status_is_error() {
        let p: NewsPayload =
            serde_json::from_value(json!({"status": "error", "code": "apiKeyInvalid"})).unwrap();
        assert_eq!(p.status, PayloadStatus::Error);
    }

    #[test]
    fn test_payload_missing_fields_default() {
        let p: NewsPayload = serde_json::from_value(json!({})).unwrap();
        assert!(!p.is_ok());
        assert_eq!(p.total_results, 0);
        assert!(p.articles.is_empty());
    }

    #[test]
    fn test_null_title_becomes_empty() {
        let raw: RawArticle =
            serde_json::from_value(json!({"title": null, "url": "https://x.test/a"})).unwrap();
        let article = Article::from(raw);
        assert_eq!(article.title, "");
        assert_eq!(article.url, "https://x.test/a");
    }

    #[test]
    fn test_non_string_fields_are_stringified() {
        let payload: NewsPayload = serde_json::from_value(json!({
            "status": "ok",
            "totalResults": 2,
            "articles": [
                {"title": 123, "url": "https://x.test/a"},
                {"title": "Plain", "url": ["https://x.test/b"]}
            ]
        }))
        .unwrap();
        let articles: Vec<Article> = payload.articles.into_iter().map(Article::from).collect();
        assert_eq!(articles[0].title, "123");
        assert_eq!(articles[0].url, "https://x.test/a");
        assert_eq!(articles[1].url, "[\"https://x.test/b\"]");
    }

    #[test]
    fn test_missing_fields_become_empty() {
        let raw: RawArticle = serde_json::from_value(json!({"source": {"id": null}})).unwrap();
        assert_eq!(Article::from(raw), Article { title: String::new(), url: String::new() });
    }
}
