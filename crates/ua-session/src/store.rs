use tokio::sync::watch;
use ua_core::UserSession;

/// Single owner of the signed-in user's session record.
///
/// The store has exactly two logical states: empty (initial) and populated.
/// Every mutation replaces the whole record; partial updates are not
/// expressible through this API. Consumers observe changes through
/// `subscribe()` receivers, which always see the latest record.
pub struct SessionStore {
    tx: watch::Sender<UserSession>,
}

impl SessionStore {
    /// Create a store holding the empty session.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(UserSession::default());
        Self { tx }
    }

    /// Replace the session record wholesale.
    ///
    /// Fields absent from `next` end up empty regardless of the prior
    /// state - this is a full replace, not a merge. Always succeeds; the
    /// payload is taken as-is from the authoritative source (login
    /// response or profile fetch) without validation.
    pub fn set_user(&self, next: UserSession) {
        log::debug!(
            "Session replaced: user={} role={}",
            next.user_name.as_deref().unwrap_or("-"),
            next.role.map(|r| r.as_str()).unwrap_or("-"),
        );
        self.tx.send_replace(next);
    }

    /// Reset to the empty session (logout).
    pub fn clear(&self) {
        log::debug!("Session cleared");
        self.tx.send_replace(UserSession::default());
    }

    /// Owned snapshot of the current record.
    pub fn current(&self) -> UserSession {
        self.tx.borrow().clone()
    }

    /// Subscribe to session changes.
    ///
    /// The receiver borrows the latest record; intermediate records may be
    /// skipped but a subscriber never observes a partially-replaced one.
    pub fn subscribe(&self) -> watch::Receiver<UserSession> {
        self.tx.subscribe()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
