/*
 * Responsibility
 * - inner_auth() で装飾された route の handler に InnerAuth を渡す
 * - 装飾し忘れは設定ミスなので 500 (AppError::Internal)
 */
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::security::InnerAuth;

pub struct InnerRoute(pub InnerAuth);

impl<S> FromRequestParts<S> for InnerRoute
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        InnerAuth::of(&*parts).map(InnerRoute).ok_or_else(|| {
            tracing::error!(path = %parts.uri.path(), "inner route without inner_auth marker");
            AppError::Internal
        })
    }
}
