use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::session::{show_current_session, sign_out};

pub fn build_session_routers() -> Router<AppRegistry> {
    let session_routers = Router::new()
        .route("/", get(show_current_session))
        .route("/sign-out", post(sign_out));

    Router::new().nest("/session", session_routers)
}
