//! Typed error for page handlers.
//!
//! Upstream failures the handlers cannot turn into a redirect end up here and
//! are rendered as a small HTML error page. The real error is logged
//! server-side; the client only sees a static message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use newsdesk_upstream::UpstreamError;

use crate::render;

#[derive(Debug)]
pub enum PageError {
    /// 502 Bad Gateway: upstream unreachable or the request could not be built.
    Unreachable(UpstreamError),
    /// 502 Bad Gateway: upstream answered with something that is not a news payload.
    Malformed(UpstreamError),
}

impl PageError {
    pub const fn status(&self) -> StatusCode {
        StatusCode::BAD_GATEWAY
    }

    fn public_message(&self) -> &'static str {
        match self {
            Self::Unreachable(_) => "The news service could not be reached. Please try again later.",
            Self::Malformed(_) => "The news service sent an unexpected response.",
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.public_message();
        match &self {
            Self::Unreachable(err) => tracing::error!(error = %err, "upstream request failed"),
            Self::Malformed(err) => tracing::error!(error = %err, "upstream payload rejected"),
        }
        (status, render::render_error(status, message)).into_response()
    }
}

impl From<UpstreamError> for PageError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Decode { .. } => Self::Malformed(err),
            _ => Self::Unreachable(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_maps_to_malformed() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = PageError::from(UpstreamError::Decode { context: "body".into(), source });
        assert!(matches!(err, PageError::Malformed(_)));
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_bad_endpoint_maps_to_unreachable() {
        let err = PageError::from(UpstreamError::InvalidEndpoint {
            url: "not a url".into(),
            reason: "relative URL without a base".into(),
        });
        assert!(matches!(err, PageError::Unreachable(_)));
    }

    #[test]
    fn test_response_is_bad_gateway() {
        let err = PageError::from(UpstreamError::ClientInit("tls backend secret detail".into()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
