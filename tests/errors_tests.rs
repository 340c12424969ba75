use std::error::Error;

use recap::ai::RunState;
use recap::errors::RecapError;

#[test]
fn test_recap_error_implements_error_trait() {
    // Verify RecapError implements the Error trait
    fn assert_error<T: Error>(_: &T) {}

    let error = RecapError::RunFailed(RunState::Failed);
    assert_error(&error);
}

#[test]
fn test_transport_errors_carry_status_and_body() {
    let error = RecapError::DiscordApi {
        status: reqwest::StatusCode::NOT_FOUND,
        body: "Unknown Channel".to_string(),
    };
    let rendered = format!("{error}");
    assert!(rendered.contains("404"));
    assert!(rendered.contains("Unknown Channel"));

    let error = RecapError::AssistantApi {
        status: reqwest::StatusCode::UNAUTHORIZED,
        body: "invalid_api_key".to_string(),
    };
    let rendered = format!("{error}");
    assert!(rendered.contains("401"));
    assert!(rendered.contains("invalid_api_key"));
}

#[test]
fn test_run_failure_display_names_the_state() {
    assert_eq!(
        format!("{}", RecapError::RunFailed(RunState::Failed)),
        "Run failed with state: failed"
    );
    assert_eq!(
        format!("{}", RecapError::RunFailed(RunState::Expired)),
        "Run failed with state: expired"
    );
}

#[test]
fn test_parse_conversion() {
    let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let error: RecapError = parse_err.into();

    match error {
        RecapError::Parse(_) => {}
        other => panic!("Unexpected error type: {other:?}"),
    }
}

#[test]
fn test_reqwest_conversion_exists() {
    // Never called; verifies the From impl compiles
    #[allow(unused)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> RecapError {
        RecapError::from(err)
    }
}
