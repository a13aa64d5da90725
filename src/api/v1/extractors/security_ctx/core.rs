use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::security::RequestLike;
use crate::state::AppState;

use super::SecurityCtx;

/// Handler で SecurityCtx を受け取るための extractor
/// 値が無いフィールドは None のまま渡す（拒否はしない）
pub struct SecurityCtxExtractor(pub SecurityCtx);

impl FromRequestParts<AppState> for SecurityCtxExtractor
where
    AppState: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let req: &dyn RequestLike = &*parts;
        let ctx = SecurityCtx::resolve(&state.security, Some(req));

        tracing::debug!(
            user_id = ?ctx.user_id,
            has_token = ctx.token.is_some(),
            "security context resolved"
        );

        Ok(SecurityCtxExtractor(ctx))
    }
}
