use kernel::model::{
    id::{SessionId, UserId},
    session::CurrentSession,
    user::User,
};
use sqlx::types::chrono::{DateTime, Utc};

// A live session joined with the user who owns it
#[derive(sqlx::FromRow)]
pub struct SessionRow {
    pub session_id: SessionId,
    pub expires_at: DateTime<Utc>,
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
}

impl From<SessionRow> for CurrentSession {
    fn from(value: SessionRow) -> Self {
        let SessionRow {
            session_id,
            expires_at,
            user_id,
            user_name,
            email,
        } = value;
        CurrentSession {
            session_id,
            user: User {
                user_id,
                user_name,
                email,
            },
            expires_at,
        }
    }
}
