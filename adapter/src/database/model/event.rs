use kernel::model::{event::Event, id::EventId};
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct EventRow {
    pub event_id: EventId,
    pub name: String,
    pub event_date: DateTime<Utc>,
    pub registrations_open: bool,
    pub event_url: Option<String>,
}

impl From<EventRow> for Event {
    fn from(value: EventRow) -> Self {
        let EventRow {
            event_id,
            name,
            event_date,
            registrations_open,
            event_url,
        } = value;
        Event {
            event_id,
            name,
            event_date,
            registrations_open,
            event_url,
        }
    }
}
