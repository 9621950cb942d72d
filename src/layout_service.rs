//! Layout Service client.
//!
//! DESIGN
//! ======
//! One POST per page request to the Experience Edge GraphQL endpoint. The
//! response envelope is parsed by the `layout` crate; this module owns the
//! transport, auth, and status handling. Nothing is cached or retried.
//!
//! Handlers depend on the [`LayoutService`] trait so router tests can swap
//! in a canned implementation.

use std::time::Duration;

use layout::{EnvelopeError, LayoutData, LayoutRequest};
use tracing::debug;

use crate::config::{EdgeAuth, LayoutTimeouts};
use crate::error::ErrorCode;

const API_KEY_HEADER: &str = "sc_apikey";
const CONTEXT_ID_PARAM: &str = "sitecoreContextId";

#[derive(Debug, thiserror::Error)]
pub enum LayoutServiceError {
    /// The HTTP request to the Layout Service failed.
    #[error("layout request failed: {0}")]
    Request(String),

    /// The Layout Service returned a non-success HTTP status.
    #[error("layout response error: status {status}")]
    Response { status: u16, body: String },

    /// The response body was not a GraphQL layout envelope.
    #[error("layout response parse failed: {0}")]
    Parse(String),

    /// The response carried GraphQL errors.
    #[error("layout query failed: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl ErrorCode for LayoutServiceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Request(_) => "E_LAYOUT_REQUEST",
            Self::Response { .. } => "E_LAYOUT_RESPONSE",
            Self::Parse(_) => "E_LAYOUT_PARSE",
            Self::GraphQl(_) => "E_LAYOUT_GRAPHQL",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Response { status: 429 | 500..=599, .. })
    }
}

impl From<EnvelopeError> for LayoutServiceError {
    fn from(err: EnvelopeError) -> Self {
        match err {
            EnvelopeError::Parse(e) => Self::Parse(e.to_string()),
            EnvelopeError::GraphQl(messages) => Self::GraphQl(messages),
        }
    }
}

// =============================================================================
// TRAIT
// =============================================================================

/// Source of layout data for a route.
#[async_trait::async_trait]
pub trait LayoutService: Send + Sync {
    /// Fetch the layout for `request`. `Ok(None)` means the route does not exist.
    async fn fetch_layout(&self, request: &LayoutRequest) -> Result<Option<LayoutData>, LayoutServiceError>;
}

// =============================================================================
// GRAPHQL CLIENT
// =============================================================================

pub struct GraphQlLayoutService {
    http: reqwest::Client,
    endpoint: String,
    auth: EdgeAuth,
}

impl GraphQlLayoutService {
    /// # Errors
    ///
    /// Returns [`LayoutServiceError::HttpClientBuild`] if the HTTP client fails to build.
    pub fn new(endpoint: impl Into<String>, auth: EdgeAuth, timeouts: LayoutTimeouts) -> Result<Self, LayoutServiceError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| LayoutServiceError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, endpoint: endpoint.into(), auth })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl LayoutService for GraphQlLayoutService {
    async fn fetch_layout(&self, request: &LayoutRequest) -> Result<Option<LayoutData>, LayoutServiceError> {
        let mut builder = self.http.post(&self.endpoint).json(&layout::layout_request_body(request));
        builder = match &self.auth {
            EdgeAuth::ApiKey(key) => builder.header(API_KEY_HEADER, key),
            EdgeAuth::ContextId(id) => builder.query(&[(CONTEXT_ID_PARAM, id)]),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| LayoutServiceError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LayoutServiceError::Request(e.to_string()))?;

        debug!(%status, path = %request.route_path, language = %request.language, "layout response");
        parse_response(status, &text)
    }
}

/// Map a raw HTTP response to layout data.
fn parse_response(status: u16, body: &str) -> Result<Option<LayoutData>, LayoutServiceError> {
    if status != 200 {
        return Err(LayoutServiceError::Response { status, body: body.to_owned() });
    }
    Ok(layout::parse_layout_response(body)?)
}

#[cfg(test)]
#[path = "layout_service_test.rs"]
mod tests;
