use super::*;
use futures::executor::block_on;

#[test]
fn from_status_401_is_unauthorized_with_server_message() {
    let err = ApiError::from_status(401, r#"{"message":"Invalid credentials"}"#);
    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[test]
fn from_status_401_without_body_has_generic_text() {
    let err = ApiError::from_status(401, "");
    assert_eq!(err, ApiError::Unauthorized { message: None });
    assert_eq!(err.to_string(), "unauthorized");
}

#[test]
fn from_status_surfaces_server_message_verbatim() {
    let err = ApiError::from_status(400, r#"{"message":" User already exists"}"#);
    assert_eq!(err, ApiError::Status { status: 400, message: "User already exists".to_owned() });
    assert!(!err.is_unauthorized());
}

#[test]
fn from_status_falls_back_when_body_is_not_json() {
    let err = ApiError::from_status(500, "<html>Internal Server Error</html>");
    assert_eq!(err.to_string(), "request failed: 500");
}

#[test]
fn error_message_ignores_blank_messages() {
    assert_eq!(error_message_from_body(r#"{"message":"   "}"#), None);
    assert_eq!(error_message_from_body(r#"{"error":"x"}"#), None);
    assert_eq!(error_message_from_body(r#"{"message":"nope"}"#), Some("nope".to_owned()));
}

#[test]
fn bearer_header_value() {
    assert_eq!(bearer("tok1"), "Bearer tok1");
}

#[test]
fn oauth_entry_url_uses_provider_segment() {
    let api = HttpAuthApi::new(ApiConfig::new("https://api.example.com/"));
    assert_eq!(api.oauth_entry_url(OAuthProvider::Google), "https://api.example.com/auth/login/google");
    assert_eq!(api.oauth_entry_url(OAuthProvider::GitHub), "https://api.example.com/auth/login/github");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_api_is_unavailable_off_the_browser() {
    let api = HttpAuthApi::default();
    assert_eq!(block_on(api.check_auth(Some("tok"))), Err(ApiError::Unavailable));
    assert_eq!(block_on(api.logout(None)), Err(ApiError::Unavailable));
}
