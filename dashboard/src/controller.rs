use crate::{
    port::{EventGateway, Navigator, Notifier, SessionProvider},
    state::{Action, DashboardState},
};
use derive_new::new;
use kernel::model::id::EventId;
use shared::error::AppResult;
use std::sync::Arc;

pub const LOGIN_ROUTE: &str = "/login";
pub const LOGIN_FROM_DASHBOARD_ROUTE: &str = "/login?from=dashboard";

const REGISTERED_MESSAGE: &str = "Registered successfully!";
const REGISTRATION_FAILED_MESSAGE: &str = "Error while registering";

#[derive(new)]
pub struct DashboardController {
    #[new(default)]
    state: DashboardState,
    sessions: Arc<dyn SessionProvider>,
    events: Arc<dyn EventGateway>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl DashboardController {
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn into_state(self) -> DashboardState {
        self.state
    }

    /// Resolves the session, then loads events for its user. Without a
    /// session it navigates to login and fetches nothing.
    ///
    /// A failed event fetch is logged and the lists stay in their loading
    /// state. Only a failure to resolve the session is returned.
    pub async fn mount(&mut self) -> AppResult<()> {
        let session = self.sessions.current_session().await?;
        let user_id = session.as_ref().map(|s| s.user.user_id);
        self.state.reduce(Action::SessionResolved(session));

        let Some(user_id) = user_id else {
            self.navigator.push(LOGIN_FROM_DASHBOARD_ROUTE);
            return Ok(());
        };

        match self.events.get_events(user_id).await {
            Ok(entries) => {
                self.state.reduce(Action::EventsLoaded(entries));
            }
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    %user_id,
                    "failed to load events"
                );
            }
        }
        Ok(())
    }

    /// Handles a click on an upcoming event's Register button. Returns
    /// whether the registration went through; a click on a disabled button
    /// does nothing and returns `false`.
    pub async fn register(&mut self, event_id: EventId) -> bool {
        let Some(user_id) = self.state.user().map(|u| u.user_id) else {
            return false;
        };
        if !self.state.reduce(Action::RegisterStarted(event_id)) {
            return false;
        }

        let registered = self.events.register_for_event(event_id, user_id).await;
        if registered {
            self.notifier.success(REGISTERED_MESSAGE);
        } else {
            self.notifier.error(REGISTRATION_FAILED_MESSAGE);
        }
        self.state.reduce(Action::RegisterFinished {
            event_id,
            registered,
        });
        registered
    }

    pub async fn sign_out(&mut self) -> AppResult<()> {
        self.sessions.sign_out().await?;
        self.navigator.push(LOGIN_ROUTE);
        Ok(())
    }
}
