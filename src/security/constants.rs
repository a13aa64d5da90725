/*
 * Responsibility
 * - gateway / auth middleware と共有する名前の定義
 * - ここを変える場合は上流 (gateway の AuthFilter) 側も合わせること
 */

/// Request attribute keys set by the upstream gateway / auth middleware.
pub mod attrs {
    /// user session key
    pub const USER_KEY: &str = "user_key";
    pub const USER_ID: &str = "user_id";
    pub const USER_NAME: &str = "username";
    pub const LOGIN_USER: &str = "login_user";

    /// Attributes the gateway forwards as plain request headers.
    pub const FORWARDED: [&str; 3] = [USER_ID, USER_NAME, USER_KEY];
}

pub mod token {
    /// Header carrying the access token.
    pub const AUTHENTICATION: &str = "Authorization";
    /// Prefix the frontend puts in front of the token.
    pub const PREFIX: &str = "Bearer ";
}

/// Route metadata key for the inner (service-to-service) auth marker.
pub const INNER_AUTH_METADATA: &str = "inner_auth";
