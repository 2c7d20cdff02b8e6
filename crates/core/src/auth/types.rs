use serde::{Deserialize, Serialize};

/// What the identity provider knows about a signed-in account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub uid: String,
    pub email: String,
}

/// A session accepted by the gate. Only admins ever reach this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub uid: String,
    pub email: String,
    pub is_admin: bool,
}

impl AuthUser {
    /// Builds the admin session for an allow-listed principal.
    pub fn admin(principal: Principal) -> Self {
        Self {
            uid: principal.uid,
            email: principal.email,
            is_admin: true,
        }
    }
}

/// Session state as observed by the rest of the application.
///
/// There is deliberately no signed-in non-admin state: a principal outside
/// the allow-list is signed out again before anyone can observe it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No provider callback has been seen yet.
    #[default]
    Uninitialized,
    SignedOut,
    Admin(AuthUser),
}

impl SessionState {
    pub fn is_admin(&self) -> bool {
        matches!(self, SessionState::Admin(_))
    }

    pub fn user(&self) -> Option<&AuthUser> {
        match self {
            SessionState::Admin(user) => Some(user),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_from_principal() {
        let user = AuthUser::admin(Principal {
            uid: "u-1".to_string(),
            email: "boss@example.com".to_string(),
        });
        assert!(user.is_admin);
        assert_eq!(user.email, "boss@example.com");
    }

    #[test]
    fn test_session_state_accessors() {
        assert!(!SessionState::Uninitialized.is_admin());
        assert!(!SessionState::SignedOut.is_admin());
        assert!(SessionState::SignedOut.user().is_none());

        let state = SessionState::Admin(AuthUser {
            uid: "u-1".to_string(),
            email: "boss@example.com".to_string(),
            is_admin: true,
        });
        assert!(state.is_admin());
        assert_eq!(state.user().unwrap().uid, "u-1");
    }

    #[test]
    fn test_default_is_uninitialized() {
        assert_eq!(SessionState::default(), SessionState::Uninitialized);
    }
}
