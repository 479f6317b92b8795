pub mod dashboard;
pub mod event;
pub mod health;
pub mod session;
pub mod v1;

use axum::Router;
use registry::AppRegistry;

pub fn build_routers() -> Router<AppRegistry> {
    Router::new()
        .merge(health::build_health_check_routers())
        .merge(v1::routes())
        .merge(dashboard::build_dashboard_routers())
}
