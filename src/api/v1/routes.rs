/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - inner 系 route には inner_auth marker を付ける (判定は外部 guard)
 */
use axum::{Router, routing::get};

use crate::security::inner_auth;
use crate::state::AppState;

use crate::api::v1::handlers::{health::health, inner, security};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/security/me", get(security::me))
        .route("/security/login-user", get(security::login_user))
        .nest("/inner", inner_routes())
}

fn inner_routes() -> Router<AppState> {
    Router::new()
        .route("/ping", get(inner::ping).layer(inner_auth(false)))
        .route("/user", get(inner::user).layer(inner_auth(true)))
}
