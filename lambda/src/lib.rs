/// Chat relay - a Lambda that forwards chat turns to a separately hosted
/// chat-processing service and normalizes its answer for browser callers.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda (`lambda_runtime`) for serverless execution behind API Gateway
/// - reqwest for the single outbound POST to the chat service
/// - thiserror for the error taxonomy that picks the envelope status code
/// - tracing with a JSON subscriber for `CloudWatch` logs
///
/// Conversation state is owned by the caller, which sends the history with
/// every turn and receives the updated history back.
///
/// # Example
///
/// ```no_run
/// use chat_relay::{ChatRelay, RelayConfig};
/// use serde_json::json;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     chat_relay::setup_logging();
///
///     let config = RelayConfig::new("http://localhost:8000/startup")?;
///     let relay = ChatRelay::new(&config)?;
///
///     let event = json!({
///         "body": r#"{"message":"hi","conversationHistory":[]}"#
///     });
///     let envelope = relay.handle(&event).await;
///     println!("{} {}", envelope.status_code, envelope.body);
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod api;
pub mod clients;
pub mod core;
pub mod errors;

pub use api::ChatRelay;
pub use crate::core::config::RelayConfig;
pub use crate::core::models::Envelope;
pub use errors::RelayError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Level filtering follows `RUST_LOG`, defaulting to `info`. Calling this more
/// than once is harmless; later calls leave the first subscriber in place.
///
/// # Example
///
/// ```
/// chat_relay::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
