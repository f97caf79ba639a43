//! Request-scoped values passed between the trigger, the relay and the chat service.
//!
//! Conversation turns are opaque to the relay and travel as raw JSON values.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body of the inbound request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundRequest {
    pub message: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub conversation_history: Vec<Value>,
}

/// Body of the outbound POST to the chat service.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundPayload<'a> {
    pub message: &'a str,
    pub conversation_history: &'a [Value],
}

impl<'a> From<&'a InboundRequest> for OutboundPayload<'a> {
    fn from(request: &'a InboundRequest) -> Self {
        Self {
            message: &request.message,
            conversation_history: &request.conversation_history,
        }
    }
}

/// What the chat service answers with.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundResult {
    #[serde(default, deserialize_with = "truthy")]
    pub success: bool,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub conversation_history: Option<Vec<Value>>,
    #[serde(default)]
    pub error: Option<String>,
}

/// JSON carried inside `Envelope::body`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_history: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Cross-origin headers attached to every envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorsHeaders {
    #[serde(rename = "Content-Type")]
    pub content_type: &'static str,
    #[serde(rename = "Access-Control-Allow-Origin")]
    pub allow_origin: &'static str,
    #[serde(rename = "Access-Control-Allow-Headers")]
    pub allow_headers: &'static str,
    #[serde(rename = "Access-Control-Allow-Methods")]
    pub allow_methods: &'static str,
}

/// Value returned to the trigger layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub status_code: u16,
    pub headers: CorsHeaders,
    pub body: String,
}

impl Envelope {
    /// Decodes `body` back into JSON. Only fails if `body` was not built by
    /// this crate.
    pub fn body_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default())
}

// `success` is judged by JSON truthiness: null, false, 0, "" and empty
// containers are failures.
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    })
}
