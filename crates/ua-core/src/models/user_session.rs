use crate::UserRole;

use serde::{Deserialize, Serialize};

/// The signed-in user's profile as held client-side.
///
/// The record is either fully empty (pre-login) or fully populated from a
/// single authoritative payload (login response or profile fetch). Partial
/// field updates are not supported anywhere; every mutation goes through
/// `ua_session::SessionStore::set_user`, which replaces the whole record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    /// Avatar URL, empty string and absent are treated alike by views
    pub avatar: Option<String>,
    pub user_name: Option<String>,
    pub email: Option<String>,
    /// Capability tags; order carries no meaning
    #[serde(default)]
    pub authority: Vec<String>,
    pub role: Option<UserRole>,
    pub id: Option<String>,
}

impl UserSession {
    /// True when no field has been populated (pre-login / post-logout).
    pub fn is_empty(&self) -> bool {
        self.avatar.is_none()
            && self.user_name.is_none()
            && self.email.is_none()
            && self.authority.is_empty()
            && self.role.is_none()
            && self.id.is_none()
    }

    /// Check whether the session carries a capability tag.
    pub fn has_authority(&self, tag: &str) -> bool {
        self.authority.iter().any(|a| a == tag)
    }
}
