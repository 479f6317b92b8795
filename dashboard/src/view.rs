use crate::{
    state::{DashboardState, SessionStatus},
    toast::Toast,
};
use askama::Template;
use kernel::model::id::EventId;
use shared::error::AppResult;

struct RegisteredRow<'a> {
    name: &'a str,
    event_date: &'a str,
    event_url: Option<&'a str>,
}

struct UpcomingRow<'a> {
    event_id: EventId,
    name: &'a str,
    event_date: &'a str,
    disabled: bool,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardTemplate<'a> {
    user_name: &'a str,
    registered: Vec<RegisteredRow<'a>>,
    upcoming: Vec<UpcomingRow<'a>>,
    events_loading: bool,
    toasts: Vec<&'a Toast>,
}

#[derive(Template)]
#[template(path = "loading.html")]
struct LoadingTemplate;

/// Renders the page for the current state. Until a session is present only
/// the loading screen is shown.
pub fn render(state: &DashboardState, toasts: &[Toast]) -> AppResult<String> {
    let SessionStatus::Present(session) = &state.session else {
        return Ok(LoadingTemplate.render()?);
    };

    let registered = state
        .registered()
        .iter()
        .map(|e| RegisteredRow {
            name: &e.name,
            event_date: &e.event_date,
            event_url: e.event_url.as_deref(),
        })
        .collect();
    let upcoming = state
        .upcoming()
        .iter()
        .map(|e| UpcomingRow {
            event_id: e.event_id,
            name: &e.name,
            event_date: &e.event_date,
            disabled: !state.can_register(e),
        })
        .collect();

    let page = DashboardTemplate {
        user_name: &session.user.user_name,
        registered,
        upcoming,
        events_loading: state.events_loading(),
        toasts: toasts.iter().collect(),
    };
    Ok(page.render()?)
}
