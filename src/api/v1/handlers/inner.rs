/*
 * Responsibility
 * - /inner 系 handler (inner_auth で装飾済み)
 * - 付いている marker と、ambient request から引いた user id を返す
 */
use axum::{Json, extract::State};

use crate::{
    api::v1::{dto::security::InnerResponse, extractors::InnerRoute},
    state::AppState,
};

pub async fn ping(InnerRoute(marker): InnerRoute) -> Json<InnerResponse> {
    Json(InnerResponse {
        inner_auth: marker,
        user_id: None,
    })
}

pub async fn user(
    State(state): State<AppState>,
    InnerRoute(marker): InnerRoute,
) -> Json<InnerResponse> {
    // request を渡さず ambient request から引く
    let user_id = state.security.user_id(None);

    Json(InnerResponse {
        inner_auth: marker,
        user_id,
    })
}
