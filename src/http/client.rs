//! HTTP client for the chat-completion gateway
//!
//! Sends one chat-completion request per provider and decodes the reply.

use anyhow::Context;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::utils::timer::Timer;

/// Failure to obtain a decodable response from the gateway
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("{0}")]
    Request(String),

    #[error("Timeout after {0} seconds")]
    Timeout(u64),

    #[error("Could not connect to {0}")]
    Connect(String),

    #[error("Invalid JSON response: {0}")]
    Decode(String),
}

/// Request body understood by the gateway
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub message: String,
}

impl ChatRequest {
    pub fn new(model: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            message: message.into(),
        }
    }
}

/// Decoded gateway reply.
///
/// Kept as raw JSON: the fields the harness reads are optional, and a
/// missing or oddly typed value falls back to its default instead of
/// rejecting the whole body.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GatewayResponse {
    body: Value,
}

impl GatewayResponse {
    /// Answer text of the first choice, empty when absent
    pub fn content(&self) -> &str {
        self.body
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    /// Gateway-reported response time, zero when absent
    pub fn response_time_ms(&self) -> u64 {
        self.body
            .pointer("/proxima/responseTimeMs")
            .and_then(Value::as_f64)
            .filter(|ms| ms.is_finite() && *ms > 0.0)
            .map(|ms| ms as u64)
            .unwrap_or(0)
    }
}

/// Sends a question to the gateway on behalf of one provider
pub trait Dispatcher {
    async fn dispatch(
        &self,
        model: &str,
        question: &str,
    ) -> Result<GatewayResponse, TransportError>;
}

/// reqwest-backed gateway client
#[derive(Clone)]
pub struct GatewayClient {
    client: Client,
    endpoint: String,
    timeout_secs: Option<u64>,
}

impl GatewayClient {
    /// Create a client using the transport's default timeout behaviour
    pub fn new(endpoint: impl Into<String>) -> anyhow::Result<Self> {
        Self::build(endpoint.into(), None)
    }

    /// Create client with custom timeout
    pub fn with_timeout(endpoint: impl Into<String>, timeout_secs: u64) -> anyhow::Result<Self> {
        Self::build(endpoint.into(), Some(timeout_secs))
    }

    fn build(endpoint: String, timeout_secs: Option<u64>) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            endpoint,
            timeout_secs,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn map_error(&self, e: reqwest::Error) -> TransportError {
        if e.is_timeout() {
            TransportError::Timeout(self.timeout_secs.unwrap_or_default())
        } else if e.is_connect() {
            TransportError::Connect(format!("{}: {e}", self.endpoint))
        } else {
            TransportError::Request(e.to_string())
        }
    }
}

impl Dispatcher for GatewayClient {
    async fn dispatch(
        &self,
        model: &str,
        question: &str,
    ) -> Result<GatewayResponse, TransportError> {
        let request = ChatRequest::new(model, question);
        debug!("Sending POST request to {} for {}", self.endpoint, model);

        let timer = Timer::start(format!("POST {} ({model})", self.endpoint));

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Gateway answered {} for {}", status, model);
        }

        let body = response.text().await.map_err(|e| self.map_error(e))?;
        timer.stop();

        serde_json::from_str(&body).map_err(|e| TransportError::Decode(e.to_string()))
    }
}
