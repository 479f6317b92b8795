use crate::model::{
    event::{event::RegisterForEvent, Event},
    id::UserId,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Events the user is registered for, in registration order.
    /// `None` when no such user exists.
    async fn find_registered_events(&self, user_id: UserId) -> AppResult<Option<Vec<Event>>>;
    /// Adds the event to the user's registrations. Registering twice is a no-op.
    async fn connect_event(&self, event: RegisterForEvent) -> AppResult<()>;
}
