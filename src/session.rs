//! Session identity
//!
//! Which user is considered logged in. Held in memory only; a restart or
//! page reload starts logged out.

/// The logged-in user. Created on successful login, dropped on logout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    email: String,
}

impl Session {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}
