use crate::UserRole;

use std::str::FromStr;

#[test]
fn test_user_role_as_str() {
    assert_eq!(UserRole::Admin.as_str(), "admin");
    assert_eq!(UserRole::User.as_str(), "user");
}

#[test]
fn test_user_role_from_str() {
    assert_eq!(UserRole::from_str("admin").unwrap(), UserRole::Admin);
    assert_eq!(UserRole::from_str("user").unwrap(), UserRole::User);
    assert!(UserRole::from_str("superuser").is_err());
    assert!(UserRole::from_str("Admin").is_err());
}

#[test]
fn test_user_role_serde_lowercase() {
    assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
    assert_eq!(
        serde_json::from_str::<UserRole>("\"user\"").unwrap(),
        UserRole::User
    );
}
