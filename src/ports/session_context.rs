//! Session context - explicit authentication state for backend calls.
//!
//! The identity-provider login flow happens elsewhere; this crate only
//! receives its product, a bearer token, and passes it to each port call.

use secrecy::{ExposeSecret, Secret};

use crate::domain::foundation::UserId;

/// Authenticated session handed to every port call.
#[derive(Debug, Clone)]
pub struct SessionContext {
    token: Secret<String>,
    user_id: Option<UserId>,
    registered: bool,
}

impl SessionContext {
    /// Creates a context from a bearer token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Secret::new(token.into()),
            user_id: None,
            registered: false,
        }
    }

    /// Creates a context from an already wrapped token.
    pub fn from_secret(token: Secret<String>) -> Self {
        Self {
            token,
            user_id: None,
            registered: false,
        }
    }

    /// Sets the backend user id.
    pub fn with_user(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Marks the user as registered with the backend.
    pub fn with_registered(mut self, registered: bool) -> Self {
        self.registered = registered;
        self
    }

    /// Exposes the token (for building the Authorization header).
    pub fn bearer_token(&self) -> &str {
        self.token.expose_secret()
    }

    pub fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }

    pub fn is_registered(&self) -> bool {
        self.registered
    }
}
