use crate::{UserRole, UserSession};

#[test]
fn test_default_session_is_empty() {
    let session = UserSession::default();
    assert!(session.is_empty());
}

#[test]
fn test_populated_session_is_not_empty() {
    let session = UserSession {
        user_name: Some("alice".to_string()),
        ..UserSession::default()
    };
    assert!(!session.is_empty());

    let session = UserSession {
        authority: vec!["usage.read".to_string()],
        ..UserSession::default()
    };
    assert!(!session.is_empty());
}

#[test]
fn test_has_authority() {
    let session = UserSession {
        authority: vec!["usage.read".to_string(), "usage.export".to_string()],
        ..UserSession::default()
    };
    assert!(session.has_authority("usage.read"));
    assert!(session.has_authority("usage.export"));
    assert!(!session.has_authority("usage.admin"));
}

#[test]
fn test_session_deserializes_with_missing_fields() {
    let session: UserSession = serde_json::from_str(r#"{"role": "admin"}"#).unwrap();
    assert_eq!(session.role, Some(UserRole::Admin));
    assert!(session.user_name.is_none());
    assert!(session.authority.is_empty());
}
