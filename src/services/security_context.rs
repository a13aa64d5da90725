/*
 * Responsibility
 * - 現在の request から user id / username / user key / login user / token を取り出す
 * - request を省略した場合は ambient request (request_context) を参照する
 *
 * Notes
 * - 値は上流 (gateway の AuthFilter / auth middleware) が事前に設定している前提
 *   未設定なら None を返すだけで、検証はしない
 */
use axum::http::HeaderName;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::security::{
    RequestLike, RequestSnapshot,
    constants::{attrs, token},
};
use crate::services::request_context;

#[derive(Clone, Debug)]
pub struct SecurityContext {
    token_header: HeaderName,
    token_prefix: String,
}

impl Default for SecurityContext {
    fn default() -> Self {
        Self::new(
            HeaderName::from_static("authorization"),
            token::PREFIX.to_string(),
        )
    }
}

impl SecurityContext {
    pub fn new(token_header: HeaderName, token_prefix: impl Into<String>) -> Self {
        Self {
            token_header,
            token_prefix: token_prefix.into(),
        }
    }

    pub fn token_header(&self) -> &HeaderName {
        &self.token_header
    }

    pub fn token_prefix(&self) -> &str {
        &self.token_prefix
    }

    /// The given request, or the ambient one when `req` is `None`.
    pub fn request(&self, req: Option<&dyn RequestLike>) -> Option<RequestSnapshot> {
        self.project(req, |req| Some(RequestSnapshot::capture(req)))
    }

    /// User session key.
    pub fn user_key(&self, req: Option<&dyn RequestLike>) -> Option<String> {
        self.project(req, |req| text_attribute(req, attrs::USER_KEY))
    }

    pub fn user_id(&self, req: Option<&dyn RequestLike>) -> Option<i64> {
        self.project(req, |req| match req.attribute(attrs::USER_ID)? {
            Value::Number(n) => n.as_i64(),
            // gateway headers arrive as text
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
    }

    pub fn user_name(&self, req: Option<&dyn RequestLike>) -> Option<String> {
        self.project(req, |req| text_attribute(req, attrs::USER_NAME))
    }

    /// Login user record exactly as the populator stored it.
    pub fn login_user(&self, req: Option<&dyn RequestLike>) -> Option<Value> {
        self.project(req, |req| req.attribute(attrs::LOGIN_USER).cloned())
    }

    pub fn login_user_as<T>(&self, req: Option<&dyn RequestLike>) -> serde_json::Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        self.login_user(req).map(serde_json::from_value).transpose()
    }

    /// Access token with the configured prefix removed.
    pub fn token(&self, req: Option<&dyn RequestLike>) -> Option<String> {
        self.project(req, |req| {
            let raw = req.header(self.token_header.as_str());
            strip_token_prefix(raw.as_deref(), &self.token_prefix).map(str::to_owned)
        })
    }

    fn project<T>(
        &self,
        req: Option<&dyn RequestLike>,
        f: impl FnOnce(&dyn RequestLike) -> Option<T>,
    ) -> Option<T> {
        match req {
            Some(req) => f(req),
            None => request_context::with_current(f),
        }
    }
}

/// Strips `prefix` once when the token starts with it; anything else is returned as is.
pub fn strip_token_prefix<'a>(token: Option<&'a str>, prefix: &str) -> Option<&'a str> {
    match token {
        Some(t) if !t.is_empty() => Some(t.strip_prefix(prefix).unwrap_or(t)),
        other => other,
    }
}

fn text_attribute(req: &dyn RequestLike, key: &str) -> Option<String> {
    match req.attribute(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderValue, Request};
    use serde::Deserialize;
    use serde_json::json;

    use super::*;
    use crate::security::RequestAttributes;

    fn request(token: Option<&str>, attrs: RequestAttributes) -> Request<()> {
        let mut builder = Request::builder().uri("/api/v1/security/me");
        if let Some(token) = token {
            builder = builder.header("authorization", token);
        }
        let mut req = builder.body(()).unwrap();
        req.extensions_mut().insert(attrs);
        req
    }

    fn full_attrs() -> RequestAttributes {
        RequestAttributes::new()
            .with(attrs::USER_ID, 42)
            .with(attrs::USER_NAME, "alice")
            .with(attrs::USER_KEY, "3f2a-session")
            .with(
                attrs::LOGIN_USER,
                json!({ "userId": 42, "username": "alice", "roles": ["admin"] }),
            )
    }

    #[test]
    fn strips_prefix_at_start() {
        assert_eq!(strip_token_prefix(Some("Bearer abc"), "Bearer "), Some("abc"));
    }

    #[test]
    fn keeps_token_without_prefix() {
        assert_eq!(strip_token_prefix(Some("abc"), "Bearer "), Some("abc"));
        assert_eq!(
            strip_token_prefix(Some("xBearer abc"), "Bearer "),
            Some("xBearer abc")
        );
    }

    #[test]
    fn strips_only_once() {
        assert_eq!(
            strip_token_prefix(Some("Bearer Bearer abc"), "Bearer "),
            Some("Bearer abc")
        );
    }

    #[test]
    fn empty_and_absent_tokens_pass_through() {
        assert_eq!(strip_token_prefix(Some(""), "Bearer "), Some(""));
        assert_eq!(strip_token_prefix(None, "Bearer "), None);
    }

    #[test]
    fn reads_attributes_from_explicit_request() {
        let ctx = SecurityContext::default();
        let req = request(Some("Bearer tok-1"), full_attrs());

        assert_eq!(ctx.user_id(Some(&req)), Some(42));
        assert_eq!(ctx.user_name(Some(&req)).as_deref(), Some("alice"));
        assert_eq!(ctx.user_key(Some(&req)).as_deref(), Some("3f2a-session"));
        assert_eq!(ctx.token(Some(&req)).as_deref(), Some("tok-1"));
        assert_eq!(
            ctx.login_user(Some(&req)),
            Some(json!({ "userId": 42, "username": "alice", "roles": ["admin"] }))
        );
    }

    #[test]
    fn user_id_from_header_text() {
        let ctx = SecurityContext::default();
        let req = request(None, RequestAttributes::new().with(attrs::USER_ID, "42"));
        assert_eq!(ctx.user_id(Some(&req)), Some(42));

        let req = request(None, RequestAttributes::new().with(attrs::USER_ID, "abc"));
        assert_eq!(ctx.user_id(Some(&req)), None);
    }

    #[test]
    fn missing_fields_are_none() {
        let ctx = SecurityContext::default();
        let req = request(None, RequestAttributes::new());

        assert_eq!(ctx.user_id(Some(&req)), None);
        assert_eq!(ctx.user_name(Some(&req)), None);
        assert_eq!(ctx.user_key(Some(&req)), None);
        assert_eq!(ctx.login_user(Some(&req)), None);
        assert_eq!(ctx.token(Some(&req)), None);
    }

    #[test]
    fn empty_token_header_is_returned_empty() {
        let ctx = SecurityContext::default();
        let req = request(Some(""), RequestAttributes::new());
        assert_eq!(ctx.token(Some(&req)).as_deref(), Some(""));
    }

    #[test]
    fn empty_prefix_leaves_token_unchanged() {
        assert_eq!(strip_token_prefix(Some("Bearer abc"), ""), Some("Bearer abc"));

        let ctx = SecurityContext::new(HeaderName::from_static("authorization"), "");
        let req = request(Some("Bearer abc"), RequestAttributes::new());
        assert_eq!(ctx.token(Some(&req)).as_deref(), Some("Bearer abc"));
    }

    #[test]
    fn utf8_token_is_kept() {
        let ctx = SecurityContext::default();
        let mut req = request(None, RequestAttributes::new());
        req.headers_mut().insert(
            "authorization",
            HeaderValue::from_bytes("Bearer tök".as_bytes()).unwrap(),
        );
        assert_eq!(ctx.token(Some(&req)).as_deref(), Some("tök"));

        req.headers_mut().insert(
            "authorization",
            HeaderValue::from_bytes(b"Bearer t\xe9k").unwrap(),
        );
        assert_eq!(ctx.token(Some(&req)).as_deref(), Some("t\u{fffd}k"));
    }

    #[test]
    fn null_and_non_string_text_attributes() {
        let ctx = SecurityContext::default();
        let req = request(
            None,
            RequestAttributes::new()
                .with(attrs::USER_NAME, Value::Null)
                .with(attrs::USER_KEY, 123),
        );
        assert_eq!(ctx.user_name(Some(&req)), None);
        assert_eq!(ctx.user_key(Some(&req)).as_deref(), Some("123"));
    }

    #[test]
    fn fractional_user_id_is_none() {
        let ctx = SecurityContext::default();
        let req = request(None, RequestAttributes::new().with(attrs::USER_ID, 42.5));
        assert_eq!(ctx.user_id(Some(&req)), None);
    }

    #[test]
    fn custom_header_and_prefix() {
        let ctx = SecurityContext::new(HeaderName::from_static("x-access-token"), "Token ");
        let req = Request::builder()
            .header("x-access-token", "Token zzz")
            .header("authorization", "Bearer ignored")
            .body(())
            .unwrap();
        assert_eq!(ctx.token(Some(&req)).as_deref(), Some("zzz"));
    }

    #[test]
    fn typed_login_user() {
        #[derive(Debug, Deserialize, PartialEq)]
        #[serde(rename_all = "camelCase")]
        struct LoginUser {
            user_id: i64,
            username: String,
        }

        let ctx = SecurityContext::default();
        let req = request(None, full_attrs());
        let user: Option<LoginUser> = ctx.login_user_as(Some(&req)).unwrap();
        assert_eq!(
            user,
            Some(LoginUser {
                user_id: 42,
                username: "alice".into()
            })
        );

        let req = request(None, RequestAttributes::new().with(attrs::LOGIN_USER, "nope"));
        assert!(ctx.login_user_as::<LoginUser>(Some(&req)).is_err());
    }

    #[test]
    fn ambient_request_matches_explicit() {
        let ctx = SecurityContext::default();
        let req = request(Some("Bearer tok-2"), full_attrs());
        let explicit = (
            ctx.user_id(Some(&req)),
            ctx.user_name(Some(&req)),
            ctx.user_key(Some(&req)),
            ctx.token(Some(&req)),
            ctx.login_user(Some(&req)),
        );

        let ambient = request_context::sync_scope(RequestSnapshot::capture(&req), || {
            (
                ctx.user_id(None),
                ctx.user_name(None),
                ctx.user_key(None),
                ctx.token(None),
                ctx.login_user(None),
            )
        });

        assert_eq!(ambient, explicit);
        assert_eq!(ambient.0, Some(42));
    }

    #[test]
    fn no_ambient_request_yields_none() {
        let ctx = SecurityContext::default();
        assert!(ctx.request(None).is_none());
        assert_eq!(ctx.user_id(None), None);
        assert_eq!(ctx.token(None), None);
    }

    #[test]
    fn request_falls_back_to_ambient() {
        let ctx = SecurityContext::default();
        let req = request(None, full_attrs());
        let path = request_context::sync_scope(RequestSnapshot::capture(&req), || {
            ctx.request(None).map(|r| r.uri().path().to_string())
        });
        assert_eq!(path.as_deref(), Some("/api/v1/security/me"));
    }
}
