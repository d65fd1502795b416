use crate::api::{classify_status, ApiError, StatusClass};

#[test]
fn test_success_statuses_classify_as_success() {
    assert_eq!(classify_status(200), StatusClass::Success);
    assert_eq!(classify_status(201), StatusClass::Success);
    assert_eq!(classify_status(204), StatusClass::Success);
    assert_eq!(classify_status(299), StatusClass::Success);
}

#[test]
fn test_redirects_and_client_errors_classify_as_rejected() {
    assert_eq!(classify_status(300), StatusClass::Rejected);
    assert_eq!(classify_status(301), StatusClass::Rejected);
    assert_eq!(classify_status(400), StatusClass::Rejected);
    assert_eq!(classify_status(401), StatusClass::Rejected);
    assert_eq!(classify_status(404), StatusClass::Rejected);
    assert_eq!(classify_status(422), StatusClass::Rejected);
    assert_eq!(classify_status(499), StatusClass::Rejected);
}

#[test]
fn test_exactly_500_classifies_as_server_failure() {
    assert_eq!(classify_status(500), StatusClass::ServerFailure);
}

#[test]
fn test_statuses_past_500_keep_their_body_message() {
    // Only 500 itself gets the opaque treatment.
    assert_eq!(classify_status(501), StatusClass::Rejected);
    assert_eq!(classify_status(502), StatusClass::Rejected);
    assert_eq!(classify_status(503), StatusClass::Rejected);
}

#[test]
fn test_server_failure_message_is_opaque() {
    assert_eq!(ApiError::ServerFailure.to_string(), "Something went wrong.");
}

#[test]
fn test_rejection_message_passes_through_verbatim() {
    let err = ApiError::Rejected("Email already in use.".to_string());
    assert_eq!(err.to_string(), "Email already in use.");
}

#[test]
fn test_transport_message_passes_through_verbatim() {
    let err = ApiError::Transport("Request failed: connection refused".to_string());
    assert_eq!(err.to_string(), "Request failed: connection refused");
}
