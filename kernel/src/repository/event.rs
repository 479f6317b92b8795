use crate::model::{
    event::{
        event::{CreateEvent, UpdateEvent},
        Event,
    },
    id::EventId,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: CreateEvent) -> AppResult<EventId>;
    async fn update(&self, event: UpdateEvent) -> AppResult<()>;
    // Whole catalog in storage order.
    async fn find_all(&self) -> AppResult<Vec<Event>>;
    async fn find_by_id(&self, event_id: EventId) -> AppResult<Option<Event>>;
}
