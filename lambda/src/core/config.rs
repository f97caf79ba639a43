use std::env;
use std::time::Duration;

use url::Url;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub endpoint_url: String,
    pub timeout: Duration,
}

impl RelayConfig {
    /// Config pointing at `endpoint_url` with the default 30s timeout.
    pub fn new(endpoint_url: impl Into<String>) -> Result<Self, String> {
        let endpoint_url = endpoint_url.into();
        validate_endpoint(&endpoint_url)?;
        Ok(Self {
            endpoint_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn from_env() -> Result<Self, String> {
        let endpoint_url =
            env::var("ENDPOINT_URL").map_err(|e| format!("ENDPOINT_URL: {}", e))?;
        let timeout = match env::var("ENDPOINT_TIMEOUT_SECS").ok() {
            Some(raw) => parse_timeout_secs(&raw)?,
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };
        Ok(Self::new(endpoint_url)?.with_timeout(timeout))
    }
}

fn validate_endpoint(raw: &str) -> Result<(), String> {
    let url = Url::parse(raw).map_err(|e| format!("ENDPOINT_URL: {}", e))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!("ENDPOINT_URL: unsupported scheme '{}'", other)),
    }
}

fn parse_timeout_secs(raw: &str) -> Result<Duration, String> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err("ENDPOINT_TIMEOUT_SECS: must be greater than zero".to_string()),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(e) => Err(format!("ENDPOINT_TIMEOUT_SECS: {}", e)),
    }
}
