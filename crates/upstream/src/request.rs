use std::sync::Arc;

use newsdesk_core::NewsPayload;

use crate::UpstreamError;

/// Maximum body prefix quoted in decode errors.
const BODY_PREVIEW_LEN: usize = 200;

/// The two upstream endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    TopHeadlines,
    Everything,
}

/// One GET against an upstream endpoint, with its query parameters in send order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamRequest {
    endpoint: Endpoint,
    params: Vec<(&'static str, String)>,
}

impl UpstreamRequest {
    pub fn headlines(category: &str, country: Option<&str>, page: i64, page_size: u64) -> Self {
        let mut params = vec![
            ("page", page.to_string()),
            ("category", category.to_owned()),
            ("pageSize", page_size.to_string()),
        ];
        if let Some(country) = country {
            params.push(("country", country.to_owned()));
        }
        Self { endpoint: Endpoint::TopHeadlines, params }
    }

    pub fn search(query: &str, page: i64, page_size: u64) -> Self {
        let params = vec![
            ("qInTitle", query.to_owned()),
            ("sortBy", "relevancy".to_owned()),
            ("page", page.to_string()),
            ("pageSize", page_size.to_string()),
        ];
        Self { endpoint: Endpoint::Everything, params }
    }

    pub const fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.iter().find(|(k, _)| *k == name).map(|(_, v)| v.as_str())
    }
}

/// Status and body of an upstream response, cheap to clone out of the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: Arc<str>,
}

impl UpstreamReply {
    pub fn new(status: u16, body: impl Into<Arc<str>>) -> Self {
        Self { status, body: body.into() }
    }

    pub const fn is_success(&self) -> bool {
        self.status == 200
    }

    pub const fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    /// Decode the body into the shared payload shape.
    ///
    /// # Errors
    /// Returns [`UpstreamError::Decode`] if the body is not a JSON object of that shape.
    pub fn payload(&self) -> Result<NewsPayload, UpstreamError> {
        serde_json::from_str(&self.body).map_err(|source| UpstreamError::Decode {
            context: format!(
                "upstream body (status {}, body: {})",
                self.status,
                preview(&self.body, BODY_PREVIEW_LEN)
            ),
            source,
        })
    }
}

fn preview(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while end > 0 && !s.is_char_boundary(end) {
        end = end.saturating_sub(1);
    }
    s.get(..end).unwrap_or("")
}
