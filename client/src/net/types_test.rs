use super::*;

fn full_login() -> LoginResponse {
    LoginResponse {
        access_token: Some("tok1".to_owned()),
        id: Some("u1".to_owned()),
        username: Some("alice".to_owned()),
        email: Some("a@b.com".to_owned()),
        message: Some("ok".to_owned()),
    }
}

// =============================================================
// User
// =============================================================

#[test]
fn user_deserializes_camel_case_optionals() {
    let json = r#"{"id":"u1","username":"alice","email":"a@b.com","authProvider":"google","profilePicture":"/p.png"}"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.auth_provider.as_deref(), Some("google"));
    assert_eq!(user.profile_picture.as_deref(), Some("/p.png"));
}

#[test]
fn user_accepts_snake_case_optionals() {
    let json = r#"{"id":"u1","username":"alice","email":"a@b.com","auth_provider":"github"}"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.auth_provider.as_deref(), Some("github"));
    assert!(user.profile_picture.is_none());
}

#[test]
fn user_requires_identity_fields() {
    assert!(serde_json::from_str::<User>(r#"{"id":"u1","username":"alice"}"#).is_err());
}

#[test]
fn user_omits_absent_optionals_when_serialized() {
    let user = User {
        id: "u1".to_owned(),
        username: "alice".to_owned(),
        email: "a@b.com".to_owned(),
        auth_provider: None,
        profile_picture: None,
    };
    let value = serde_json::to_value(&user).unwrap();
    assert!(value.get("authProvider").is_none());
    assert!(value.get("profilePicture").is_none());
}

// =============================================================
// LoginResponse
// =============================================================

#[test]
fn login_response_tolerates_missing_fields() {
    let response: LoginResponse =
        serde_json::from_str(r#"{"message":"Login successful","access_token":"tok"}"#).unwrap();
    assert_eq!(response.token(), Some("tok"));
    assert!(response.user().is_none());
    assert!(!response.is_complete());
}

#[test]
fn login_response_builds_user_from_identity_fields() {
    let user = full_login().user().unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "a@b.com");
    assert!(full_login().is_complete());
}

#[test]
fn login_response_blank_token_is_absent() {
    let response = LoginResponse { access_token: Some("   ".to_owned()), ..full_login() };
    assert!(response.token().is_none());
    assert!(!response.is_complete());
}

// =============================================================
// Credentials
// =============================================================

#[test]
fn credentials_debug_redacts_password() {
    let creds = Credentials { email: "a@b.com".to_owned(), password: "hunter2".to_owned() };
    let debug = format!("{creds:?}");
    assert!(debug.contains("a@b.com"));
    assert!(!debug.contains("hunter2"));
}

#[test]
fn registration_serializes_all_fields() {
    let reg = Registration {
        username: "alice".to_owned(),
        email: "a@b.com".to_owned(),
        password: "pw".to_owned(),
    };
    let value = serde_json::to_value(&reg).unwrap();
    assert_eq!(value["username"], "alice");
    assert_eq!(value["password"], "pw");
    assert!(!format!("{reg:?}").contains("\"pw\""));
}

// =============================================================
// OAuthProvider
// =============================================================

#[test]
fn oauth_provider_parses_case_insensitively() {
    assert_eq!("Google".parse::<OAuthProvider>(), Ok(OAuthProvider::Google));
    assert_eq!(" GITHUB ".parse::<OAuthProvider>(), Ok(OAuthProvider::GitHub));
    assert!("myspace".parse::<OAuthProvider>().is_err());
}

#[test]
fn oauth_provider_path_segment() {
    assert_eq!(OAuthProvider::Google.to_string(), "google");
    assert_eq!(OAuthProvider::GitHub.label(), "GitHub");
}
