use serde::Serialize;

use crate::security::InnerAuth;

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user_id: Option<i64>,
    pub username: Option<String>,
    pub user_key: Option<String>,
    // token itself is never echoed back
    pub has_token: bool,
}

#[derive(Debug, Serialize)]
pub struct InnerResponse {
    pub inner_auth: InnerAuth,
    pub user_id: Option<i64>,
}
