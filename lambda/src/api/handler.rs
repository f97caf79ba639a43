//! API Lambda handler - relays a chat turn to the chat-processing service.
//!
//! Every invocation ends in an `Envelope`; failures are classified by
//! `RelayError` and rendered by `response::failure`.

use super::{parsing, response};
use crate::clients::ChatServiceClient;
use crate::core::config::RelayConfig;
use crate::core::models::{Envelope, OutboundPayload};
use crate::errors::RelayError;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

pub struct ChatRelay {
    client: ChatServiceClient,
}

impl ChatRelay {
    pub fn new(config: &RelayConfig) -> Result<Self, RelayError> {
        Ok(Self {
            client: ChatServiceClient::new(config)?,
        })
    }

    /// Lambda entrypoint.
    ///
    /// # Errors
    ///
    /// Never returns `Err`; relay failures are reported inside the envelope.
    #[tracing::instrument(
        level = "info",
        skip(self, event),
        fields(
            request_id = %event.context.request_id,
            region = %parsing::extract_region_from_arn(&event.context.invoked_function_arn)
        )
    )]
    pub async fn handler(&self, event: LambdaEvent<Value>) -> Result<Envelope, Error> {
        Ok(self.handle(&event.payload).await)
    }

    /// Runs one relay round trip for a trigger event.
    pub async fn handle(&self, event: &Value) -> Envelope {
        info!("Received event: {}", event);

        match self.relay(event).await {
            Ok(envelope) => envelope,
            Err(e) => {
                error!("Error: {}", e);
                response::failure(&e)
            }
        }
    }

    async fn relay(&self, event: &Value) -> Result<Envelope, RelayError> {
        if let Some(user) = parsing::caller_identity(event) {
            info!("Authenticated user: {}", user);
        }

        let request = parsing::parse_inbound(event)?;
        info!("Processing message: {}", request.message);

        let result = self.client.send(&OutboundPayload::from(&request)).await?;

        if !result.success {
            return Err(RelayError::upstream_logical(result.error.as_deref()));
        }

        Ok(response::success(
            result.response.unwrap_or_default(),
            result.conversation_history.unwrap_or_default(),
        ))
    }
}
