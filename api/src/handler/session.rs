use crate::{extractor::AuthorizedUser, model::session::SessionResponse};
use axum::{extract::State, http::StatusCode, Json};
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn show_current_session(user: AuthorizedUser) -> Json<SessionResponse> {
    Json(user.session.into())
}

pub async fn sign_out(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .session_repository()
        .delete(&user.token)
        .await?;
    tracing::info!(session_id = %user.session.session_id, "signed out");
    Ok(StatusCode::NO_CONTENT)
}
