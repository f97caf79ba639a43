use chat_relay::{ChatRelay, RelayConfig};
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    chat_relay::setup_logging();

    let config = RelayConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    info!(
        endpoint_url = %config.endpoint_url,
        timeout_secs = config.timeout.as_secs(),
        "Loaded relay config"
    );

    let relay = ChatRelay::new(&config)?;
    let relay = &relay;

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        relay.handler(event).await
    }))
    .await
}
