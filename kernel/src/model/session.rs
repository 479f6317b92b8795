use crate::model::{id::SessionId, user::User};
use chrono::{DateTime, Utc};

/// Opaque token the session provider hands to the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentSession {
    pub session_id: SessionId,
    pub user: User,
    pub expires_at: DateTime<Utc>,
}
