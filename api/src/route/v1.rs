use super::{event::build_event_routers, session::build_session_routers};
use axum::Router;
use registry::AppRegistry;

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_event_routers())
        .merge(build_session_routers());
    Router::new().nest("/api/v1", router)
}
