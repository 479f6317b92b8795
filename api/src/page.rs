//! Server-side implementations of the dashboard's ports, so the page can be
//! driven and rendered within a single request.

use async_trait::async_trait;
use axum::response::{Html, IntoResponse, Redirect, Response};
use dashboard::{
    port::{EventGateway, Navigator, SessionProvider},
    toast::ToastQueue,
    view, DashboardController,
};
use derive_new::new;
use kernel::model::{
    event::EventEntry,
    id::{EventId, UserId},
    session::{CurrentSession, SessionToken},
};
use kernel::service::EventRegistrationService;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};
use std::sync::{Arc, Mutex, PoisonError};

#[derive(new)]
pub struct RegistrySessionProvider {
    registry: AppRegistry,
    token: Option<SessionToken>,
}

#[async_trait]
impl SessionProvider for RegistrySessionProvider {
    async fn current_session(&self) -> AppResult<Option<CurrentSession>> {
        match &self.token {
            Some(token) => self.registry.session_repository().find_current(token).await,
            None => Ok(None),
        }
    }

    async fn sign_out(&self) -> AppResult<()> {
        let Some(token) = &self.token else {
            return Ok(());
        };
        match self.registry.session_repository().delete(token).await {
            // already gone
            Err(AppError::EntityNotFound(_)) => Ok(()),
            res => res,
        }
    }
}

#[derive(new)]
pub struct RegistryEventGateway {
    service: EventRegistrationService,
}

#[async_trait]
impl EventGateway for RegistryEventGateway {
    async fn get_events(&self, user_id: UserId) -> AppResult<Vec<EventEntry>> {
        self.service.get_events(user_id).await
    }

    async fn register_for_event(&self, event_id: EventId, user_id: UserId) -> bool {
        self.service.register_for_event(event_id, user_id).await
    }
}

/// Keeps the last route the page asked to navigate to.
#[derive(Default)]
pub struct PendingRedirect(Mutex<Option<String>>);

impl PendingRedirect {
    pub fn take(&self) -> Option<String> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).take()
    }
}

impl Navigator for PendingRedirect {
    fn push(&self, route: &str) {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = Some(route.into());
    }
}

pub struct DashboardPage {
    toasts: Arc<ToastQueue>,
    navigator: Arc<PendingRedirect>,
}

impl DashboardPage {
    pub fn controller(
        registry: &AppRegistry,
        token: Option<SessionToken>,
    ) -> (DashboardController, Self) {
        let toasts = Arc::new(ToastQueue::default());
        let navigator = Arc::new(PendingRedirect::default());
        let controller = DashboardController::new(
            Arc::new(RegistrySessionProvider::new(registry.clone(), token)),
            Arc::new(RegistryEventGateway::new(registry.registration_service())),
            toasts.clone(),
            navigator.clone(),
        );
        (controller, Self { toasts, navigator })
    }

    /// A redirect if the controller navigated away, otherwise the rendered page.
    pub fn respond(self, controller: &DashboardController) -> AppResult<Response> {
        if let Some(route) = self.navigator.take() {
            return Ok(Redirect::to(&route).into_response());
        }
        let html = view::render(controller.state(), &self.toasts.drain())?;
        Ok(Html(html).into_response())
    }
}
