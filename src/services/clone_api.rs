use async_trait::async_trait;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::utils::session_state::{SessionState, GENERIC_FAILURE_MESSAGE};

/// Body of the clone request
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CloneRequest {
    pub url: String,
}

/// Accepted shapes of a successful clone response
///
/// The backend normally answers `{ "html": "..." }` or `{ "error": "..." }`,
/// but a bare JSON string is accepted as the document too.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CloneReply {
    Document(String),
    Envelope {
        #[serde(default)]
        html: Option<String>,
        #[serde(default)]
        error: Option<String>,
    },
}

/// Error type for clone requests
#[derive(Debug, Clone, PartialEq)]
pub enum CloneError {
    /// The request never produced a response
    Network(String),
    /// The backend answered with a non-success status
    Status(u16),
    /// The body was not one of the accepted JSON shapes
    Decode(String),
    /// The body parsed but carried no HTML
    MissingHtml,
    /// The backend reported its own error message
    Backend(String),
}

impl std::fmt::Display for CloneError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            CloneError::Network(e) => write!(f, "Network error: {}", e),
            CloneError::Status(code) => write!(f, "HTTP error! status: {}", code),
            CloneError::Decode(e) => write!(f, "Invalid response body: {}", e),
            CloneError::MissingHtml => write!(f, "Response contained no HTML"),
            CloneError::Backend(e) => write!(f, "Backend error: {}", e),
        }
    }
}

impl std::error::Error for CloneError {}

impl CloneError {
    /// Message shown inline to the user.
    ///
    /// Only the backend's own error text is surfaced; transport and decoding
    /// details stay in the log. A blank backend message gets the generic text.
    pub fn user_message(&self) -> String {
        match self {
            CloneError::Backend(message) if !message.trim().is_empty() => message.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Interpret the body of a 2xx clone response
pub fn parse_clone_body(body: &str) -> Result<String, CloneError> {
    let reply: CloneReply =
        serde_json::from_str(body).map_err(|e| CloneError::Decode(e.to_string()))?;

    match reply {
        CloneReply::Envelope { error: Some(error), .. } if !error.is_empty() => {
            Err(CloneError::Backend(error))
        }
        CloneReply::Envelope { html: Some(html), .. } if !html.is_empty() => Ok(html),
        CloneReply::Document(html) if !html.is_empty() => Ok(html),
        _ => Err(CloneError::MissingHtml),
    }
}

/// Interpret a complete clone response
pub fn parse_clone_response(status: u16, body: &str) -> Result<String, CloneError> {
    if !(200..300).contains(&status) {
        return Err(CloneError::Status(status));
    }
    parse_clone_body(body)
}

/// Anything that can turn a URL into cloned HTML
#[async_trait(?Send)]
pub trait CloneBackend {
    async fn clone_page(&self, url: &str) -> Result<String, CloneError>;
}

/// Clone backend reached over HTTP with a JSON POST
#[derive(Debug, Clone, PartialEq)]
pub struct HttpCloneBackend {
    endpoint: String,
}

impl HttpCloneBackend {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

#[async_trait(?Send)]
impl CloneBackend for HttpCloneBackend {
    async fn clone_page(&self, url: &str) -> Result<String, CloneError> {
        log::info!("Sending clone request for {} to {}", url, self.endpoint);

        let request = Request::post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&CloneRequest { url: url.to_string() })
            .map_err(|e| CloneError::Network(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| CloneError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CloneError::Network(format!("Failed to read response body: {}", e)))?;

        let html = parse_clone_response(status, &body)?;
        log::info!("Received {} bytes of cloned HTML", html.len());
        Ok(html)
    }
}

/// Run one clone request and map the outcome to the state to display
pub async fn run_clone<B: CloneBackend + ?Sized>(backend: &B, url: &str) -> SessionState {
    match backend.clone_page(url).await {
        Ok(html) => SessionState::Previewing(html),
        Err(e) => {
            log::error!("Clone request for {} failed: {}", url, e);
            SessionState::Failed(e.user_message())
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;

    /// In-memory backend that records every URL it is asked to clone
    pub(crate) struct FakeBackend {
        pub status: u16,
        pub body: String,
        pub calls: RefCell<Vec<String>>,
    }

    impl FakeBackend {
        pub(crate) fn new(status: u16, body: &str) -> Self {
            Self {
                status,
                body: body.to_string(),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl CloneBackend for FakeBackend {
        async fn clone_page(&self, url: &str) -> Result<String, CloneError> {
            self.calls.borrow_mut().push(url.to_string());
            parse_clone_response(self.status, &self.body)
        }
    }

    struct OfflineBackend;

    #[async_trait(?Send)]
    impl CloneBackend for OfflineBackend {
        async fn clone_page(&self, _url: &str) -> Result<String, CloneError> {
            Err(CloneError::Network("connection refused".to_string()))
        }
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_string(&CloneRequest { url: "https://example.com".into() }).unwrap();
        assert_eq!(body, r#"{"url":"https://example.com"}"#);
    }

    #[test]
    fn test_parse_wrapped_html() {
        assert_eq!(parse_clone_body(r#"{"html":"<p>hi</p>"}"#), Ok("<p>hi</p>".to_string()));
    }

    #[test]
    fn test_parse_bare_string() {
        assert_eq!(parse_clone_body(r#""<p>raw</p>""#), Ok("<p>raw</p>".to_string()));
    }

    #[test]
    fn test_backend_error_wins_over_html() {
        let result = parse_clone_body(r#"{"error":"URL is required","html":"<p>x</p>"}"#);
        assert_eq!(result, Err(CloneError::Backend("URL is required".to_string())));
    }

    #[test]
    fn test_empty_error_is_ignored() {
        assert_eq!(parse_clone_body(r#"{"error":"","html":"<b>ok</b>"}"#), Ok("<b>ok</b>".to_string()));
        assert_eq!(parse_clone_body(r#"{"error":null,"html":"<b>ok</b>"}"#), Ok("<b>ok</b>".to_string()));
    }

    #[test]
    fn test_blank_backend_error_shows_generic_message() {
        let result = parse_clone_body(r#"{"error":"  ","html":"a"}"#);
        assert_eq!(result, Err(CloneError::Backend("  ".to_string())));
        assert_eq!(result.unwrap_err().user_message(), GENERIC_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_run_clone_blank_backend_error_is_generic() {
        let backend = FakeBackend::new(200, r#"{"error":"\t ","html":"a"}"#);
        let state = run_clone(&backend, "https://example.com").await;
        assert_eq!(state, SessionState::Failed(GENERIC_FAILURE_MESSAGE.to_string()));
    }

    #[test]
    fn test_missing_or_empty_html() {
        assert_eq!(parse_clone_body("{}"), Err(CloneError::MissingHtml));
        assert_eq!(parse_clone_body(r#"{"html":""}"#), Err(CloneError::MissingHtml));
        assert_eq!(parse_clone_body(r#""""#), Err(CloneError::MissingHtml));
    }

    #[test]
    fn test_malformed_body() {
        assert!(matches!(parse_clone_body("<html>"), Err(CloneError::Decode(_))));
        assert!(matches!(parse_clone_body("42"), Err(CloneError::Decode(_))));
    }

    #[test]
    fn test_error_status_never_previews() {
        for status in [400, 404, 500, 503] {
            let result = parse_clone_response(status, r#"{"html":"<p>hi</p>"}"#);
            assert_eq!(result, Err(CloneError::Status(status)));
            assert_eq!(result.unwrap_err().user_message(), GENERIC_FAILURE_MESSAGE);
        }
    }

    #[test]
    fn test_user_message_surfaces_backend_text_only() {
        assert_eq!(CloneError::Backend("X".into()).user_message(), "X");
        assert_eq!(CloneError::Network("dns".into()).user_message(), GENERIC_FAILURE_MESSAGE);
        assert_eq!(CloneError::Decode("eof".into()).user_message(), GENERIC_FAILURE_MESSAGE);
        assert_eq!(CloneError::MissingHtml.user_message(), GENERIC_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_run_clone_success() {
        let backend = FakeBackend::new(200, r#"{"html":"<p>hi</p>"}"#);
        let state = run_clone(&backend, "https://example.com").await;
        assert_eq!(state, SessionState::Previewing("<p>hi</p>".to_string()));
        assert_eq!(backend.calls.borrow().as_slice(), ["https://example.com".to_string()]);
    }

    #[tokio::test]
    async fn test_run_clone_backend_error_is_exact() {
        let backend = FakeBackend::new(200, r#"{"error":"X"}"#);
        let state = run_clone(&backend, "https://example.com").await;
        assert_eq!(state, SessionState::Failed("X".to_string()));
    }

    #[tokio::test]
    async fn test_run_clone_network_failure_is_generic() {
        let state = run_clone(&OfflineBackend, "https://example.com").await;
        assert_eq!(state, SessionState::Failed(GENERIC_FAILURE_MESSAGE.to_string()));
    }
}
