//! HTTP client for the downstream chat-processing service.
//!
//! One POST per invocation, no retries, bounded by the configured timeout.

use reqwest::Client;
use tracing::{debug, info};

use crate::core::config::RelayConfig;
use crate::core::models::{OutboundPayload, OutboundResult};
use crate::errors::RelayError;

pub struct ChatServiceClient {
    http: Client,
    endpoint_url: String,
}

impl ChatServiceClient {
    pub fn new(config: &RelayConfig) -> Result<Self, RelayError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                RelayError::Unexpected(format!("Failed to build chat service HTTP client: {e}"))
            })?;

        Ok(Self {
            http,
            endpoint_url: config.endpoint_url.clone(),
        })
    }

    /// Sends `payload` to the chat service and decodes its answer.
    ///
    /// # Errors
    ///
    /// `Transport` when the service cannot be reached or the call times out,
    /// `UpstreamHttp` for a non-2xx status, `Unexpected` when the body is not
    /// a JSON object of the expected shape.
    pub async fn send(&self, payload: &OutboundPayload<'_>) -> Result<OutboundResult, RelayError> {
        let body = serde_json::to_vec(payload)?;
        info!(
            "Calling chat service at {} with payload: {}",
            self.endpoint_url,
            String::from_utf8_lossy(&body)
        );

        let response = self
            .http
            .post(&self.endpoint_url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            debug!(
                status = status.as_u16(),
                body = %error_text,
                "Chat service returned error status"
            );
            return Err(RelayError::upstream_http(status));
        }

        let raw = response.text().await?;
        info!("Chat service response: {}", raw);

        serde_json::from_str::<OutboundResult>(&raw)
            .map_err(|e| RelayError::Unexpected(format!("Invalid chat service response: {e}")))
    }
}
