use crate::model::session::{CurrentSession, SessionToken};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait SessionRepository: Send + Sync {
    // Expired sessions are reported as absent.
    async fn find_current(&self, token: &SessionToken) -> AppResult<Option<CurrentSession>>;
    async fn delete(&self, token: &SessionToken) -> AppResult<()>;
}
