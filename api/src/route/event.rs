use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::event::{register_for_event, show_event_list};

pub fn build_event_routers() -> Router<AppRegistry> {
    let events_routers = Router::new()
        .route("/", get(show_event_list))
        .route("/:event_id/registrations", post(register_for_event));

    Router::new().nest("/events", events_routers)
}
