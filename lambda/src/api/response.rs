//! Envelope builders shared by every outcome of the relay.

use serde_json::Value;

use crate::core::models::{CorsHeaders, Envelope, ResponseBody};
use crate::errors::RelayError;

pub const ALLOW_HEADERS: &str =
    "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token";
pub const ALLOW_METHODS: &str = "OPTIONS,POST";

#[must_use]
pub fn cors_headers() -> CorsHeaders {
    CorsHeaders {
        content_type: "application/json",
        allow_origin: "*",
        allow_headers: ALLOW_HEADERS,
        allow_methods: ALLOW_METHODS,
    }
}

/// Returns a 200 envelope relaying the assistant reply and updated history.
#[must_use]
pub fn success(response: String, conversation_history: Vec<Value>) -> Envelope {
    envelope(
        200,
        &ResponseBody {
            success: true,
            response: Some(response),
            conversation_history: Some(conversation_history),
            error: None,
        },
    )
}

/// Returns a failure envelope whose status code is chosen by the error kind.
#[must_use]
pub fn failure(error: &RelayError) -> Envelope {
    envelope(
        error.status_code(),
        &ResponseBody {
            success: false,
            response: None,
            conversation_history: None,
            error: Some(error.to_string()),
        },
    )
}

fn envelope(status_code: u16, body: &ResponseBody) -> Envelope {
    // A ResponseBody holds only strings, bools and already-parsed JSON values.
    let body = serde_json::to_string(body).unwrap_or_else(|_| {
        r#"{"success":false,"error":"Failed to encode response body"}"#.to_string()
    });
    Envelope {
        status_code,
        headers: cors_headers(),
        body,
    }
}
