//! HTTP fetch client for the upstream graph API.

use std::time::Duration;

use reqwest::header::ACCEPT;
use thiserror::Error;
use tracing::debug;

use crate::record::GraphRecord;

/// Default upstream endpoint serving graph records.
pub const DEFAULT_BASE_URL: &str = "https://api.graphmark.dev/graph";

/// Default `User-Agent` sent with every fetch.
pub const DEFAULT_USER_AGENT: &str = concat!("graphmark/", env!("CARGO_PKG_VERSION"));

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors produced while fetching a graph record.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP transport failed before a response arrived.
    #[error("graph request failed: {0}")]
    Transport(reqwest::Error),
    /// The upstream answered with a non-2xx status.
    #[error("graph request returned HTTP {status} {reason}")]
    Status { status: u16, reason: String },
    /// The response body was not valid JSON or did not match the record shape.
    #[error("graph response body could not be decoded: {0}")]
    Body(reqwest::Error),
    /// The body parsed, but its status field was not the success marker.
    #[error("upstream reported failure status: {status}")]
    Upstream { status: String },
}

/// Connection settings for [`GraphClient`].
#[derive(Debug, Clone)]
pub struct GraphClientConfig {
    pub base_url: String,
    pub user_agent: String,
    /// `None` disables client-side timeout enforcement.
    pub timeout: Option<Duration>,
}

impl Default for GraphClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        }
    }
}

impl GraphClientConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Client issuing one unconditional GET per fetch. No retries, no caching.
#[derive(Debug, Clone)]
pub struct GraphClient {
    http: reqwest::Client,
    base_url: String,
}

impl GraphClient {
    /// Builds a client from connection settings.
    ///
    /// # Errors
    /// Returns `FetchError::Transport` if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: &GraphClientConfig) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(FetchError::Transport)?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// Fetches one graph record by its upstream identifier.
    ///
    /// The identifier is passed through as-is; format validation is left to
    /// the upstream, which reports unknown ids via its status field.
    ///
    /// # Errors
    /// Returns `FetchError` on transport failure, non-2xx status, an
    /// undecodable body, or an upstream status other than `"OK"`.
    pub async fn fetch_graph(&self, graph_id: &str) -> Result<GraphRecord, FetchError> {
        debug!(graph_id, base_url = %self.base_url, "fetching graph record");
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("graphId", graph_id)])
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        let record: GraphRecord = response.json().await.map_err(FetchError::Body)?;
        if !record.is_ok() {
            return Err(FetchError::Upstream {
                status: record.message,
            });
        }
        Ok(record)
    }
}
