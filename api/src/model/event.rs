use kernel::model::{event::EventEntry, id::EventId};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsResponse {
    pub items: Vec<EventResponse>,
}

impl From<Vec<EventEntry>> for EventsResponse {
    fn from(value: Vec<EventEntry>) -> Self {
        Self {
            items: value.into_iter().map(EventResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: EventId,
    pub name: String,
    pub event_date: String,
    pub registered: bool,
    pub registrations_open: bool,
    pub event_url: Option<String>,
}

impl From<EventEntry> for EventResponse {
    fn from(value: EventEntry) -> Self {
        let EventEntry {
            event_id,
            name,
            event_date,
            registered,
            registrations_open,
            event_url,
        } = value;
        Self {
            id: event_id,
            name,
            event_date,
            registered,
            registrations_open,
            event_url,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponse {
    pub registered: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_in_camel_case() {
        let entry = EventEntry {
            event_id: EventId::new(),
            name: "Keynote".into(),
            event_date: "Mon Oct 19 2026".into(),
            registered: true,
            registrations_open: false,
            event_url: None,
        };
        let json = serde_json::to_value(EventsResponse::from(vec![entry.clone()])).unwrap();

        let item = &json["items"][0];
        assert_eq!(item["id"], entry.event_id.to_string());
        assert_eq!(item["eventDate"], "Mon Oct 19 2026");
        assert_eq!(item["registrationsOpen"], false);
        assert!(item["eventUrl"].is_null());
    }
}
