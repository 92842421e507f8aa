use reel_model::UserRef;

/// Caller context, injected into the service at construction. Replaces
/// the ambient "current user" of a browser session with an explicit
/// value; a session without a token is treated exactly like no session.
#[derive(Debug, Clone)]
pub struct Session {
    user: Option<UserRef>,
    token: Option<String>,
    admin: bool,
}

impl Session {
    pub fn anonymous() -> Self {
        Self {
            user: None,
            token: None,
            admin: false,
        }
    }

    pub fn user(user: UserRef, token: impl Into<String>) -> Self {
        Self {
            user: Some(user),
            token: Some(token.into()),
            admin: false,
        }
    }

    pub fn admin(user: UserRef, token: impl Into<String>) -> Self {
        Self {
            user: Some(user),
            token: Some(token.into()),
            admin: true,
        }
    }

    pub fn has_credential(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// The credential, but only for admin sessions.
    pub fn admin_token(&self) -> Option<&str> {
        if self.admin { self.token() } else { None }
    }

    /// The session user, or the local-user sentinel when anonymous.
    pub fn effective_user(&self) -> UserRef {
        self.user.clone().unwrap_or_else(UserRef::local)
    }
}
