//! HTTP client wrapper - sends contact requests and interprets replies

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::config::Config;
use crate::constants::FALLBACK_ERROR_MESSAGE;
use crate::models::{ContactRequest, SubmissionResult};
use crate::network::response::interpret;

/// Status and body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// The request never produced a usable response
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("error reading body: {0}")]
    Body(String),
    #[error("request failed: {0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TransportError::Timeout
        } else if e.is_connect() {
            TransportError::Connect(e.to_string())
        } else if e.is_body() || e.is_decode() {
            TransportError::Body(e.to_string())
        } else {
            TransportError::Other(e.to_string())
        }
    }
}

/// Sends one JSON POST and returns whatever the server answered
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, url: &str, body: &Value) -> Result<RawResponse, TransportError>;
}

/// reqwest-backed transport
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(HttpTransport {
            client: create_client(timeout)?,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<RawResponse, TransportError> {
        let resp = self.client.post(url).json(body).send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        Ok(RawResponse { status, body })
    }
}

/// Create an HTTP client with the configured timeout
pub fn create_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder().timeout(timeout).build()
}

/// Sends contact requests to the configured endpoint
#[derive(Clone)]
pub struct SubmissionClient {
    endpoint: String,
    transport: Arc<dyn Transport>,
}

impl SubmissionClient {
    /// Fails only if the TLS backend cannot be initialised
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let transport = HttpTransport::new(config.request_timeout())?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    pub fn with_transport(config: &Config, transport: Arc<dyn Transport>) -> Self {
        SubmissionClient {
            endpoint: config.contact_endpoint(),
            transport,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// One attempt, one result. Never retries.
    pub async fn submit(&self, request: &ContactRequest) -> SubmissionResult {
        let body = match serde_json::to_value(request) {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(error = %e, "Could not encode contact request");
                return SubmissionResult::failure(FALLBACK_ERROR_MESSAGE);
            }
        };

        let start = Instant::now();
        let result = self.transport.post_json(&self.endpoint, &body).await;
        let elapsed = start.elapsed().as_millis() as u64;

        match result {
            Ok(raw) => {
                let outcome = interpret(raw.status, &raw.body);
                if outcome.is_success() {
                    tracing::info!(status = raw.status, time_ms = elapsed, "Contact request accepted");
                } else {
                    tracing::warn!(
                        status = raw.status,
                        time_ms = elapsed,
                        reason = outcome.message(),
                        "Contact request rejected"
                    );
                }
                outcome
            }
            Err(e) => {
                tracing::error!(error = %e, time_ms = elapsed, endpoint = %self.endpoint, "Contact request failed");
                SubmissionResult::failure(FALLBACK_ERROR_MESSAGE)
            }
        }
    }
}
