/*
 * Responsibility
 * - handler から見える「セキュリティコンテキスト」の型
 * - 値の取り出しは SecurityContext service に任せ、ここは結果を束ねるだけ
 */
use serde_json::Value;

use crate::security::RequestLike;
use crate::services::SecurityContext;

/// Everything the security context can tell about one request.
///
/// Every field is optional: upstream may not have set it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SecurityCtx {
    pub user_id: Option<i64>,
    pub user_name: Option<String>,
    pub user_key: Option<String>,
    pub token: Option<String>,
    pub login_user: Option<Value>,
}

impl SecurityCtx {
    pub fn resolve(security: &SecurityContext, req: Option<&dyn RequestLike>) -> Self {
        Self {
            user_id: security.user_id(req),
            user_name: security.user_name(req),
            user_key: security.user_key(req),
            token: security.token(req),
            login_user: security.login_user(req),
        }
    }
}
