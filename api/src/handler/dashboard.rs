use crate::{extractor::MaybeSessionToken, page::DashboardPage};
use axum::{
    extract::{Path, State},
    response::Response,
};
use kernel::model::id::EventId;
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn show_dashboard(
    MaybeSessionToken(token): MaybeSessionToken,
    State(registry): State<AppRegistry>,
) -> AppResult<Response> {
    let (mut controller, page) = DashboardPage::controller(&registry, token);
    controller.mount().await?;
    page.respond(&controller)
}

// The page is rendered from the lists as they were after the register step,
// without fetching the events again.
pub async fn register_from_dashboard(
    MaybeSessionToken(token): MaybeSessionToken,
    Path(event_id): Path<EventId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Response> {
    let (mut controller, page) = DashboardPage::controller(&registry, token);
    controller.mount().await?;
    controller.register(event_id).await;
    page.respond(&controller)
}

pub async fn sign_out_from_dashboard(
    MaybeSessionToken(token): MaybeSessionToken,
    State(registry): State<AppRegistry>,
) -> AppResult<Response> {
    let (mut controller, page) = DashboardPage::controller(&registry, token);
    controller.sign_out().await?;
    page.respond(&controller)
}
