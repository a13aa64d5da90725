/*
 * Responsibility
 * - /security 系 handler
 * - SecurityCtx をそのまま見せる (認可判定はしない)
 */
use axum::Json;
use serde_json::Value;

use crate::{
    api::v1::{dto::security::MeResponse, extractors::SecurityCtxExtractor},
    error::AppError,
};

pub async fn me(SecurityCtxExtractor(ctx): SecurityCtxExtractor) -> Json<MeResponse> {
    Json(MeResponse {
        user_id: ctx.user_id,
        username: ctx.user_name,
        user_key: ctx.user_key,
        has_token: ctx.token.is_some_and(|t| !t.is_empty()),
    })
}

pub async fn login_user(
    SecurityCtxExtractor(ctx): SecurityCtxExtractor,
) -> Result<Json<Value>, AppError> {
    ctx.login_user
        .map(Json)
        .ok_or(AppError::not_found("login user"))
}
