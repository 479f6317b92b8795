use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::dashboard::{register_from_dashboard, show_dashboard, sign_out_from_dashboard};

pub fn build_dashboard_routers() -> Router<AppRegistry> {
    let dashboard_routers = Router::new()
        .route("/", get(show_dashboard))
        .route("/events/:event_id/register", post(register_from_dashboard))
        .route("/sign-out", post(sign_out_from_dashboard));

    Router::new().nest("/dashboard", dashboard_routers)
}
