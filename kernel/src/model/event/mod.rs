use crate::model::id::EventId;
use chrono::{DateTime, Utc};

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub event_id: EventId,
    pub name: String,
    pub event_date: DateTime<Utc>,
    pub registrations_open: bool,
    pub event_url: Option<String>,
}

/// An event as one user sees it: display-ready date plus whether that user
/// is registered. Rebuilt on every fetch and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventEntry {
    pub event_id: EventId,
    pub name: String,
    pub event_date: String,
    pub registered: bool,
    pub registrations_open: bool,
    pub event_url: Option<String>,
}

impl EventEntry {
    pub fn from_event(event: Event, registered: bool) -> Self {
        let Event {
            event_id,
            name,
            event_date,
            registrations_open,
            event_url,
        } = event;
        Self {
            event_id,
            name,
            event_date: format_event_date(event_date),
            registered,
            registrations_open,
            event_url,
        }
    }
}

// "Mon Oct 19 2026"
pub fn format_event_date(date: DateTime<Utc>) -> String {
    date.format("%a %b %d %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_as_weekday_month_day_year() {
        let date = Utc.with_ymd_and_hms(2026, 3, 5, 18, 30, 0).unwrap();
        assert_eq!(format_event_date(date), "Thu Mar 05 2026");
    }

    #[test]
    fn entry_keeps_open_flag_and_url() {
        let event = Event {
            event_id: EventId::new(),
            name: "Keynote".into(),
            event_date: Utc.with_ymd_and_hms(2026, 10, 19, 0, 0, 0).unwrap(),
            registrations_open: false,
            event_url: Some("https://meet.example.com/keynote".into()),
        };
        let entry = EventEntry::from_event(event.clone(), true);
        assert_eq!(entry.event_id, event.event_id);
        assert_eq!(entry.event_date, "Mon Oct 19 2026");
        assert!(entry.registered);
        assert!(!entry.registrations_open);
        assert_eq!(entry.event_url, event.event_url);
    }
}
