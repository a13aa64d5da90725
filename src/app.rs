/*
 * Responsibility
 * - Config読み込み → tracing 初期化 → 依存生成 → Router 組み立て
 * - Middleware の適用 (gateway 属性 / ambient request / HTTP 共通)
 * - axum::serve() で起動
 */
use anyhow::Result;
use axum::Router;
use tracing_subscriber::EnvFilter;

use crate::{api, config::Config, middleware, state::AppState};

pub async fn run() -> Result<()> {
    let config = Config::from_env()?;
    init_tracing(&config);

    let state = AppState::from_config(&config);
    tracing::debug!(
        token_header = %state.security.token_header(),
        token_prefix = ?state.security.token_prefix(),
        "security context configured"
    );

    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, env = ?config.app_env, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState, config: &Config) -> Router {
    let router = Router::new().nest("/api/v1", api::v1::routes());

    // 後から layer したものが外側。実行順は gateway → request_context → handler
    let router = middleware::request_context::apply(router);
    let router = middleware::gateway::apply(router);

    middleware::http::apply(router.with_state(state), config)
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(!config.app_env.is_production())
        .init();
}
