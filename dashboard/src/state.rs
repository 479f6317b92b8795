use kernel::model::{
    event::EventEntry,
    id::EventId,
    session::CurrentSession,
    user::User,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Pending,
    Absent,
    Present(CurrentSession),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EventPartition {
    #[default]
    NotLoaded,
    Loaded {
        registered: Vec<EventEntry>,
        upcoming: Vec<EventEntry>,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Registering {
    #[default]
    Idle,
    InFlight(EventId),
}

#[derive(Debug)]
pub enum Action {
    SessionResolved(Option<CurrentSession>),
    EventsLoaded(Vec<EventEntry>),
    RegisterStarted(EventId),
    RegisterFinished { event_id: EventId, registered: bool },
}

/// Page state. Each slice only changes through [`DashboardState::reduce`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub session: SessionStatus,
    pub events: EventPartition,
    pub registering: Registering,
}

impl DashboardState {
    /// Applies one action. Returns `false` and leaves the state untouched
    /// when the action does not fit the current state.
    pub fn reduce(&mut self, action: Action) -> bool {
        match action {
            Action::SessionResolved(session) => {
                self.session = match session {
                    Some(session) => SessionStatus::Present(session),
                    None => SessionStatus::Absent,
                };
                true
            }
            Action::EventsLoaded(entries) => {
                if !matches!(self.session, SessionStatus::Present(_)) {
                    return false;
                }
                let (registered, upcoming): (Vec<_>, Vec<_>) =
                    entries.into_iter().partition(|e| e.registered);
                self.events = EventPartition::Loaded {
                    registered,
                    upcoming,
                };
                true
            }
            Action::RegisterStarted(event_id) => {
                let allowed = self
                    .upcoming()
                    .iter()
                    .find(|e| e.event_id == event_id)
                    .is_some_and(|e| self.can_register(e));
                if allowed {
                    self.registering = Registering::InFlight(event_id);
                }
                allowed
            }
            Action::RegisterFinished {
                event_id,
                registered,
            } => {
                if self.registering != Registering::InFlight(event_id) {
                    return false;
                }
                self.registering = Registering::Idle;
                if registered {
                    self.move_to_registered(event_id);
                }
                true
            }
        }
    }

    pub fn user(&self) -> Option<&User> {
        match &self.session {
            SessionStatus::Present(session) => Some(&session.user),
            _ => None,
        }
    }

    pub fn events_loading(&self) -> bool {
        matches!(self.events, EventPartition::NotLoaded)
    }

    pub fn registered(&self) -> &[EventEntry] {
        match &self.events {
            EventPartition::Loaded { registered, .. } => registered,
            EventPartition::NotLoaded => &[],
        }
    }

    pub fn upcoming(&self) -> &[EventEntry] {
        match &self.events {
            EventPartition::Loaded { upcoming, .. } => upcoming,
            EventPartition::NotLoaded => &[],
        }
    }

    pub fn can_register(&self, entry: &EventEntry) -> bool {
        self.registering == Registering::Idle && entry.registrations_open
    }

    // Remove from upcoming and append to registered in the same step, so the
    // event is never in both lists or in neither.
    fn move_to_registered(&mut self, event_id: EventId) {
        let EventPartition::Loaded {
            registered,
            upcoming,
        } = &mut self.events
        else {
            return;
        };
        if let Some(pos) = upcoming.iter().position(|e| e.event_id == event_id) {
            let mut entry = upcoming.remove(pos);
            entry.registered = true;
            registered.push(entry);
        }
    }
}
