/*
 * Responsibility
 * - 「現在処理中の request」(ambient request) を task-local に保持する
 * - middleware::request_context が request ごとに scope を張る
 * - scope の外 (spawn された別 task 含む) からは見えない
 */
use std::future::Future;

use crate::security::{RequestLike, RequestSnapshot};

tokio::task_local! {
    static CURRENT_REQUEST: RequestSnapshot;
}

/// Runs `f` with `snapshot` as the ambient request.
pub async fn scope<F>(snapshot: RequestSnapshot, f: F) -> F::Output
where
    F: Future,
{
    CURRENT_REQUEST.scope(snapshot, f).await
}

pub fn sync_scope<F, R>(snapshot: RequestSnapshot, f: F) -> R
where
    F: FnOnce() -> R,
{
    CURRENT_REQUEST.sync_scope(snapshot, f)
}

/// Whether an ambient request is in scope.
pub fn is_bound() -> bool {
    CURRENT_REQUEST.try_with(|_| ()).is_ok()
}

/// Projects from the ambient request without cloning it.
///
/// Returns `None` when called outside of a request scope.
pub fn with_current<T>(f: impl FnOnce(&dyn RequestLike) -> Option<T>) -> Option<T> {
    match CURRENT_REQUEST.try_with(|req| f(req as &dyn RequestLike)) {
        Ok(value) => value,
        Err(_) => {
            tracing::debug!("no ambient request in scope");
            None
        }
    }
}

pub fn current() -> Option<RequestSnapshot> {
    with_current(|req| Some(RequestSnapshot::capture(req)))
}
