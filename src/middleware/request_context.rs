//! request ごとに ambient request の scope を張る
//!
//! - handler (および handler から呼ばれる service) は `SecurityContext` に
//!   request を渡さなくても、ここで capture した snapshot を参照できる
//! - snapshot は layer を通過した時点の request のコピー
//!   - router 全体には `apply` (= `RequestContextLayer::bind()`)
//!   - route 単位の layer (route_layer の auth middleware など) が後から載せる値は、
//!     その内側に `RequestContextLayer::refresh()` を置くと反映される
//!   - `inner_auth()` は内部で refresh するので、marker も ambient から見える

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use axum::{Router, http::Request};
use tower::{Layer, Service};

use crate::security::RequestSnapshot;
use crate::services::request_context;

pub fn apply<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(RequestContextLayer::bind())
}

#[derive(Clone, Copy, Debug)]
pub struct RequestContextLayer {
    refresh_only: bool,
}

impl RequestContextLayer {
    /// Always binds the request as the ambient one.
    pub fn bind() -> Self {
        Self {
            refresh_only: false,
        }
    }

    /// Re-captures the request only when an outer layer already bound one.
    pub fn refresh() -> Self {
        Self { refresh_only: true }
    }
}

impl<S> Layer<S> for RequestContextLayer {
    type Service = RequestContextService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestContextService {
            inner,
            refresh_only: self.refresh_only,
        }
    }
}

#[derive(Clone, Debug)]
pub struct RequestContextService<S> {
    inner: S,
    refresh_only: bool,
}

impl<S, B> Service<Request<B>> for RequestContextService<S>
where
    S: Service<Request<B>>,
    S::Future: Send + 'static,
    S::Response: 'static,
    S::Error: 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<S::Response, S::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<B>) -> Self::Future {
        let snapshot = (!self.refresh_only || request_context::is_bound())
            .then(|| RequestSnapshot::capture(&req));
        let fut = self.inner.call(req);

        Box::pin(async move {
            match snapshot {
                Some(snapshot) => request_context::scope(snapshot, fut).await,
                None => fut.await,
            }
        })
    }
}
