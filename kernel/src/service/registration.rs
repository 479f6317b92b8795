use crate::{
    model::{
        event::{event::RegisterForEvent, Event, EventEntry},
        id::{EventId, UserId},
    },
    repository::{event::EventRepository, user::UserRepository},
};
use derive_new::new;
use shared::error::AppResult;
use std::{collections::HashSet, sync::Arc};

#[derive(Clone, new)]
pub struct EventRegistrationService {
    event_repository: Arc<dyn EventRepository>,
    user_repository: Arc<dyn UserRepository>,
}

impl EventRegistrationService {
    /// The whole catalog annotated for one user: their registrations first,
    /// then everything else. An unknown user sees the catalog unregistered.
    pub async fn get_events(&self, user_id: UserId) -> AppResult<Vec<EventEntry>> {
        let registered = self
            .user_repository
            .find_registered_events(user_id)
            .await?;
        let catalog = self.event_repository.find_all().await?;

        Ok(annotate_events(registered, catalog))
    }

    /// Registers the user for an open event. Returns `false` if the event is
    /// missing or closed, or if anything fails along the way.
    pub async fn register_for_event(&self, event_id: EventId, user_id: UserId) -> bool {
        let event = match self.event_repository.find_by_id(event_id).await {
            Ok(event) => event,
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    %event_id,
                    "failed to look up event for registration"
                );
                return false;
            }
        };

        match event {
            Some(event) if event.registrations_open => {}
            _ => return false,
        }

        match self
            .user_repository
            .connect_event(RegisterForEvent::new(event_id, user_id))
            .await
        {
            Ok(()) => {
                tracing::info!(%event_id, %user_id, "registered for event");
                true
            }
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    %event_id,
                    %user_id,
                    "failed to register for event"
                );
                false
            }
        }
    }
}

fn annotate_events(registered: Option<Vec<Event>>, catalog: Vec<Event>) -> Vec<EventEntry> {
    let Some(registered) = registered else {
        return catalog
            .into_iter()
            .map(|e| EventEntry::from_event(e, false))
            .collect();
    };

    let registered_ids: HashSet<EventId> = registered.iter().map(|e| e.event_id).collect();
    let mut entries: Vec<EventEntry> = registered
        .into_iter()
        .map(|e| EventEntry::from_event(e, true))
        .collect();
    entries.extend(
        catalog
            .into_iter()
            .filter(|e| !registered_ids.contains(&e.event_id))
            .map(|e| EventEntry::from_event(e, false)),
    );
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::event::event::{CreateEvent, UpdateEvent};
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use shared::error::AppError;
    use std::{collections::HashMap, sync::Mutex};

    #[derive(Default)]
    struct InMemoryStore {
        catalog: Mutex<Vec<Event>>,
        registrations: Mutex<HashMap<UserId, Vec<EventId>>>,
        fail_connect: bool,
        fail_find_all: bool,
    }

    impl InMemoryStore {
        fn with_catalog(catalog: Vec<Event>) -> Self {
            Self {
                catalog: Mutex::new(catalog),
                ..Default::default()
            }
        }

        fn add_user(&self, user_id: UserId) {
            self.registrations
                .lock()
                .unwrap()
                .entry(user_id)
                .or_default();
        }

        fn registration_count(&self, user_id: UserId) -> usize {
            self.registrations
                .lock()
                .unwrap()
                .get(&user_id)
                .map(Vec::len)
                .unwrap_or_default()
        }
    }

    #[async_trait]
    impl EventRepository for InMemoryStore {
        async fn create(&self, event: CreateEvent) -> AppResult<EventId> {
            let event_id = EventId::new();
            self.catalog.lock().unwrap().push(Event {
                event_id,
                name: event.name,
                event_date: event.event_date,
                registrations_open: event.registrations_open,
                event_url: event.event_url,
            });
            Ok(event_id)
        }

        async fn update(&self, _event: UpdateEvent) -> AppResult<()> {
            unimplemented!()
        }

        async fn find_all(&self) -> AppResult<Vec<Event>> {
            if self.fail_find_all {
                return Err(AppError::NoRowsAffectedError("catalog unavailable".into()));
            }
            Ok(self.catalog.lock().unwrap().clone())
        }

        async fn find_by_id(&self, event_id: EventId) -> AppResult<Option<Event>> {
            Ok(self
                .catalog
                .lock()
                .unwrap()
                .iter()
                .find(|e| e.event_id == event_id)
                .cloned())
        }
    }

    #[async_trait]
    impl UserRepository for InMemoryStore {
        async fn find_registered_events(
            &self,
            user_id: UserId,
        ) -> AppResult<Option<Vec<Event>>> {
            let registrations = self.registrations.lock().unwrap();
            let catalog = self.catalog.lock().unwrap();
            Ok(registrations.get(&user_id).map(|ids| {
                ids.iter()
                    .filter_map(|id| catalog.iter().find(|e| e.event_id == *id).cloned())
                    .collect()
            }))
        }

        async fn connect_event(&self, event: RegisterForEvent) -> AppResult<()> {
            if self.fail_connect {
                return Err(AppError::NoRowsAffectedError("connect failed".into()));
            }
            let mut registrations = self.registrations.lock().unwrap();
            let Some(ids) = registrations.get_mut(&event.user_id) else {
                return Err(AppError::EntityNotFound("user not found".into()));
            };
            if !ids.contains(&event.event_id) {
                ids.push(event.event_id);
            }
            Ok(())
        }
    }

    fn event(name: &str, day: u32, registrations_open: bool) -> Event {
        Event {
            event_id: EventId::new(),
            name: name.into(),
            event_date: Utc.with_ymd_and_hms(2026, 11, day, 9, 0, 0).unwrap(),
            registrations_open,
            event_url: None,
        }
    }

    fn service(store: &Arc<InMemoryStore>) -> EventRegistrationService {
        EventRegistrationService::new(store.clone(), store.clone())
    }

    #[tokio::test]
    async fn unregistered_user_sees_whole_catalog_once() {
        let catalog = vec![event("a", 1, true), event("b", 2, false), event("c", 3, true)];
        let store = Arc::new(InMemoryStore::with_catalog(catalog.clone()));
        let user_id = UserId::new();
        store.add_user(user_id);

        let entries = service(&store).get_events(user_id).await.unwrap();

        let ids: Vec<EventId> = entries.iter().map(|e| e.event_id).collect();
        let expected: Vec<EventId> = catalog.iter().map(|e| e.event_id).collect();
        assert_eq!(ids, expected);
        assert!(entries.iter().all(|e| !e.registered));
    }

    #[tokio::test]
    async fn unknown_user_is_tolerated() {
        let store = Arc::new(InMemoryStore::with_catalog(vec![event("a", 1, true)]));

        let entries = service(&store).get_events(UserId::new()).await.unwrap();

        assert_eq!(entries.len(), 1);
        assert!(!entries[0].registered);
    }

    #[tokio::test]
    async fn registered_events_come_first_without_duplicates() {
        let catalog = vec![
            event("a", 1, true),
            event("b", 2, true),
            event("c", 3, true),
            event("d", 4, true),
        ];
        let store = Arc::new(InMemoryStore::with_catalog(catalog.clone()));
        let user_id = UserId::new();
        store.add_user(user_id);
        let svc = service(&store);
        assert!(svc.register_for_event(catalog[2].event_id, user_id).await);
        assert!(svc.register_for_event(catalog[0].event_id, user_id).await);

        let entries = svc.get_events(user_id).await.unwrap();

        let names: Vec<(&str, bool)> = entries
            .iter()
            .map(|e| (e.name.as_str(), e.registered))
            .collect();
        assert_eq!(
            names,
            vec![("c", true), ("a", true), ("b", false), ("d", false)]
        );
    }

    #[tokio::test]
    async fn catalog_failure_propagates() {
        let store = Arc::new(InMemoryStore {
            fail_find_all: true,
            ..Default::default()
        });

        assert!(service(&store).get_events(UserId::new()).await.is_err());
    }

    #[tokio::test]
    async fn closed_or_missing_event_is_rejected_without_mutation() {
        let closed = event("closed", 1, false);
        let store = Arc::new(InMemoryStore::with_catalog(vec![closed.clone()]));
        let user_id = UserId::new();
        store.add_user(user_id);
        let svc = service(&store);

        assert!(!svc.register_for_event(closed.event_id, user_id).await);
        assert!(!svc.register_for_event(EventId::new(), user_id).await);
        assert_eq!(store.registration_count(user_id), 0);
    }

    #[tokio::test]
    async fn registering_twice_is_idempotent() {
        let open = event("open", 1, true);
        let store = Arc::new(InMemoryStore::with_catalog(vec![open.clone()]));
        let user_id = UserId::new();
        store.add_user(user_id);
        let svc = service(&store);

        assert!(svc.register_for_event(open.event_id, user_id).await);
        assert!(svc.register_for_event(open.event_id, user_id).await);
        assert_eq!(store.registration_count(user_id), 1);

        let entries = svc.get_events(user_id).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].registered);
    }

    #[tokio::test]
    async fn update_failure_becomes_false() {
        let open = event("open", 1, true);
        let store = Arc::new(InMemoryStore {
            catalog: Mutex::new(vec![open.clone()]),
            fail_connect: true,
            ..Default::default()
        });
        let user_id = UserId::new();
        store.add_user(user_id);

        assert!(!service(&store).register_for_event(open.event_id, user_id).await);
    }

    #[tokio::test]
    async fn unknown_user_cannot_register() {
        let open = event("open", 1, true);
        let store = Arc::new(InMemoryStore::with_catalog(vec![open.clone()]));

        assert!(!service(&store).register_for_event(open.event_id, UserId::new()).await);
    }

    #[tokio::test]
    async fn open_and_closed_scenario() {
        let a = event("a", 1, true);
        let b = event("b", 2, false);
        let store = Arc::new(InMemoryStore::with_catalog(vec![a.clone(), b.clone()]));
        let user_id = UserId::new();
        store.add_user(user_id);
        let svc = service(&store);

        let before = svc.get_events(user_id).await.unwrap();
        assert_eq!(before.len(), 2);
        assert!(before.iter().all(|e| !e.registered));

        assert!(svc.register_for_event(a.event_id, user_id).await);
        assert!(!svc.register_for_event(b.event_id, user_id).await);

        let after = svc.get_events(user_id).await.unwrap();
        assert_eq!(after[0].event_id, a.event_id);
        assert!(after[0].registered);
        assert_eq!(after[1].event_id, b.event_id);
        assert!(!after[1].registered);
    }
}
