use crate::model::id::{EventId, UserId};
use chrono::{DateTime, Utc};
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateEvent {
    pub name: String,
    pub event_date: DateTime<Utc>,
    pub registrations_open: bool,
    pub event_url: Option<String>,
}

#[derive(Debug)]
pub struct UpdateEvent {
    pub event_id: EventId,
    pub registrations_open: Option<bool>,
    pub event_url: Option<String>,
}

#[derive(Debug, Clone, Copy, new)]
pub struct RegisterForEvent {
    pub event_id: EventId,
    pub user_id: UserId,
}
