/*
 * Responsibility
 * - 内部認証 (service-to-service) が必要な route に付けるメタデータ
 * - 付けるだけ。判定は外部の guard が InnerAuth::of() / current() で読み出して行う
 */
use std::task::{Context, Poll};

use axum::http::Request;
use serde::{Deserialize, Serialize};
use tower::{Layer, Service};

use super::{RequestLike, constants::INNER_AUTH_METADATA};
use crate::middleware::request_context::{RequestContextLayer, RequestContextService};
use crate::services::request_context;

/// Marker attached to routes that only accept inner (service-to-service) calls.
///
/// `is_user` additionally asks the guard to check that a user was resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InnerAuth {
    pub is_user: bool,
}

impl InnerAuth {
    pub const METADATA_KEY: &'static str = INNER_AUTH_METADATA;

    pub fn new(is_user: bool) -> Self {
        Self { is_user }
    }

    /// Marker carried by the request, if the matched route was decorated.
    pub fn of(req: &dyn RequestLike) -> Option<Self> {
        req.extensions().get::<Self>().copied()
    }

    /// Marker carried by the ambient request.
    pub fn current() -> Option<Self> {
        request_context::with_current(|req| Self::of(req))
    }
}

/// Decorates a route (or a whole router via `route_layer`) with the marker.
///
/// The ambient request, when one is bound, is re-captured after the marker is
/// attached, so both views agree.
///
/// ```ignore
/// Router::new()
///     .route("/inner/ping", get(ping).layer(inner_auth(false)))
///     .route("/inner/user", get(user).layer(inner_auth(true)));
/// ```
pub fn inner_auth(is_user: bool) -> InnerAuthLayer {
    InnerAuthLayer {
        marker: InnerAuth::new(is_user),
    }
}

#[derive(Clone, Copy, Debug)]
pub struct InnerAuthLayer {
    marker: InnerAuth,
}

impl InnerAuthLayer {
    pub fn marker(&self) -> InnerAuth {
        self.marker
    }
}

impl<S> Layer<S> for InnerAuthLayer {
    type Service = InnerAuthService<RequestContextService<S>>;

    fn layer(&self, inner: S) -> Self::Service {
        InnerAuthService {
            inner: RequestContextLayer::refresh().layer(inner),
            marker: self.marker,
        }
    }
}

#[derive(Clone, Debug)]
pub struct InnerAuthService<S> {
    inner: S,
    marker: InnerAuth,
}

impl<S, B> Service<Request<B>> for InnerAuthService<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<B>) -> Self::Future {
        req.extensions_mut().insert(self.marker);
        self.inner.call(req)
    }
}
