use std::error::Error;
use chat_relay::errors::RelayError;

#[test]
fn test_relay_error_implements_error_trait() {
    // Verify RelayError implements the Error trait
    fn assert_error<T: Error + Send + Sync + 'static>(_: &T) {}

    let error = RelayError::MalformedRequest("missing field `message`".to_string());
    assert_error(&error);
}

#[test]
fn test_relay_error_display() {
    let error = RelayError::UpstreamHttp {
        code: 500,
        reason: "Internal Server Error".to_string(),
    };
    assert_eq!(format!("{error}"), "HTTPError 500: Internal Server Error");

    let error = RelayError::Transport("Connection refused (os error 111)".to_string());
    assert_eq!(
        format!("{error}"),
        "URLError: Connection refused (os error 111)"
    );

    let error = RelayError::Unexpected("boom".to_string());
    assert_eq!(format!("{error}"), "boom");
}

#[test]
fn test_relay_error_conversions() {
    let err: RelayError = serde_json::from_str::<serde_json::Value>("]")
        .unwrap_err()
        .into();

    match err {
        RelayError::Unexpected(msg) => assert!(!msg.is_empty()),
        _ => panic!("Unexpected error type"),
    }

    // reqwest::Error has no public constructor; this only checks the
    // conversion exists
    #[allow(unused)]
    #[allow(clippy::items_after_statements)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> RelayError {
        RelayError::from(err)
    }
}
