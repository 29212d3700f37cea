use super::*;
use crate::components::notification::NoticeVariant;

#[test]
fn validate_login_input_trims_email_and_requires_both() {
    let creds = validate_login_input("  a@b.com  ", "pw").unwrap();
    assert_eq!(creds.email, "a@b.com");
    assert_eq!(creds.password, "pw");
    assert_eq!(validate_login_input("   ", "pw").unwrap_err(), "Enter both email and password.");
    assert_eq!(validate_login_input("a@b.com", "").unwrap_err(), "Enter both email and password.");
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    assert_eq!(validate_login_input("a@b.com", " pw ").unwrap().password, " pw ");
}

#[test]
fn confirm_login_response_accepts_complete_payload() {
    let response = LoginResponse {
        access_token: Some("tok1".to_owned()),
        id: Some("u1".to_owned()),
        username: Some("alice".to_owned()),
        email: Some("a@b.com".to_owned()),
        message: Some("ok".to_owned()),
    };
    assert_eq!(confirm_login_response(&response), Ok(()));
}

#[test]
fn confirm_login_response_rejects_missing_identity() {
    let response = LoginResponse {
        access_token: Some("tok1".to_owned()),
        message: Some("Login successful".to_owned()),
        ..LoginResponse::default()
    };
    assert_eq!(
        confirm_login_response(&response),
        Err(SessionError::ValidationMismatch("Login failed: Invalid response".to_owned()))
    );
}

#[test]
fn oauth_callback_marker() {
    assert!(is_oauth_callback(Some("callback")));
    assert!(!is_oauth_callback(Some("start")));
    assert!(!is_oauth_callback(None));
}

#[test]
fn failure_notice_uses_error_message() {
    let notice = failure_notice(&SessionError::Request("Invalid credentials".to_owned()), "Login failed").unwrap();
    assert_eq!(notice.message, "Invalid credentials");
    assert_eq!(notice.variant, NoticeVariant::Error);
}

#[test]
fn failure_notice_falls_back_on_blank_message() {
    let notice = failure_notice(&SessionError::Request(String::new()), "Login failed").unwrap();
    assert_eq!(notice.message, "Login failed");
}

#[test]
fn failure_notice_reports_missing_oauth_token() {
    let notice = failure_notice(&SessionError::MissingOAuthToken, "OAuth login failed").unwrap();
    assert_eq!(notice.message, "No token found");
}

#[test]
fn failure_notice_is_silent_when_superseded() {
    assert!(failure_notice(&SessionError::Superseded, "Login failed").is_none());
}
