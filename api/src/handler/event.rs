use crate::{
    extractor::AuthorizedUser,
    model::event::{EventsResponse, RegistrationResponse},
};
use axum::{
    extract::{Path, State},
    Json,
};
use kernel::model::id::EventId;
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn show_event_list(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<EventsResponse>> {
    registry
        .registration_service()
        .get_events(user.id())
        .await
        .map(EventsResponse::from)
        .map(Json)
}

// Rejections are reported in the body, never as an error status.
pub async fn register_for_event(
    user: AuthorizedUser,
    Path(event_id): Path<EventId>,
    State(registry): State<AppRegistry>,
) -> Json<RegistrationResponse> {
    let registered = registry
        .registration_service()
        .register_for_event(event_id, user.id())
        .await;
    Json(RegistrationResponse { registered })
}
