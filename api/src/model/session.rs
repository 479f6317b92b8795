use chrono::{DateTime, Utc};
use kernel::model::{
    id::{SessionId, UserId},
    session::CurrentSession,
    user::User,
};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session_id: SessionId,
    pub user: UserResponse,
    pub expires_at: DateTime<Utc>,
}

impl From<CurrentSession> for SessionResponse {
    fn from(value: CurrentSession) -> Self {
        let CurrentSession {
            session_id,
            user,
            expires_at,
        } = value;
        Self {
            session_id,
            user: user.into(),
            expires_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
            user_id,
            user_name,
            email,
        } = value;
        Self {
            user_id,
            user_name,
            email,
        }
    }
}
