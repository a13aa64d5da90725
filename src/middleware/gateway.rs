//! gateway が request header で渡してくるユーザー情報を RequestAttributes に載せる
//!
//! - 値の検証はしない (gateway の AuthFilter で検証済みという前提)
//! - 既に属性がある場合 (in-process の auth middleware が載せた等) は上書きしない

use axum::{
    Router,
    body::Body,
    http::Request,
    middleware::{self, Next},
    response::Response,
};
use serde_json::Value;

use crate::security::{RequestAttributes, RequestLike, constants::attrs};

pub fn apply<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(middleware::from_fn(populate_attributes))
}

async fn populate_attributes(mut req: Request<Body>, next: Next) -> Response {
    let mut attributes = req
        .extensions()
        .get::<RequestAttributes>()
        .cloned()
        .unwrap_or_default();

    for key in attrs::FORWARDED {
        if attributes.contains(key) {
            continue;
        }
        if let Some(raw) = req.header(key) {
            attributes.set(key, forwarded_value(key, &raw));
        }
    }

    tracing::debug!(count = attributes.len(), "gateway attributes populated");
    req.extensions_mut().insert(attributes);

    next.run(req).await
}

/// User id travels as a number when it parses, everything else as text.
fn forwarded_value(key: &str, raw: &str) -> Value {
    if key == attrs::USER_ID
        && let Ok(id) = raw.trim().parse::<i64>()
    {
        return Value::from(id);
    }
    Value::from(raw)
}
