use serde_json::Value;

use crate::core::models::InboundRequest;
use crate::errors::RelayError;

const DEFAULT_REGION: &str = "us-east-1";

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

/// Unwraps the JSON-encoded `body` of a trigger event into an `InboundRequest`.
///
/// # Errors
///
/// Returns `RelayError::MalformedRequest` when the body is absent, is not a
/// string, is not valid JSON, or lacks a string `message`.
pub fn parse_inbound(event: &Value) -> Result<InboundRequest, RelayError> {
    let Some(body) = event.get("body") else {
        return Err(RelayError::MalformedRequest("missing body".to_string()));
    };

    let Some(body_str) = body.as_str() else {
        return Err(RelayError::MalformedRequest(
            "body is not a string".to_string(),
        ));
    };

    serde_json::from_str::<InboundRequest>(body_str)
        .map_err(|e| RelayError::MalformedRequest(e.to_string()))
}

/// Display identifier of the authenticated caller, if the gateway attached one.
pub fn caller_identity(event: &Value) -> Option<String> {
    let claims = v_path(event, &["requestContext", "authorizer", "claims"])?;
    ["email", "cognito:username"]
        .iter()
        .filter_map(|key| claims.get(*key).and_then(Value::as_str))
        .find(|v| !v.trim().is_empty())
        .map(ToString::to_string)
}

/// Region segment of `arn:aws:lambda:<region>:<account>:function:<name>`.
///
/// The prefix may appear anywhere in `arn`, and the region must be followed
/// by a `:`.
pub fn extract_region_from_arn(arn: &str) -> String {
    const PREFIX: &str = "arn:aws:lambda:";

    arn.match_indices(PREFIX)
        .find_map(|(idx, _)| {
            let rest = &arn[idx + PREFIX.len()..];
            rest.find(':')
                .filter(|&end| end > 0)
                .map(|end| &rest[..end])
        })
        .unwrap_or(DEFAULT_REGION)
        .to_string()
}
