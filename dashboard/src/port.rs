use async_trait::async_trait;
use kernel::model::{
    event::EventEntry,
    id::{EventId, UserId},
    session::CurrentSession,
};
use shared::error::AppResult;

#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn current_session(&self) -> AppResult<Option<CurrentSession>>;
    async fn sign_out(&self) -> AppResult<()>;
}

/// Server-side operations the page calls.
#[async_trait]
pub trait EventGateway: Send + Sync {
    async fn get_events(&self, user_id: UserId) -> AppResult<Vec<EventEntry>>;
    async fn register_for_event(&self, event_id: EventId, user_id: UserId) -> bool;
}

pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

pub trait Navigator: Send + Sync {
    fn push(&self, route: &str);
}
