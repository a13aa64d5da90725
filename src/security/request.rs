/*
 * Responsibility
 * - accessor が読む「request」の抽象 (Request<B> / Parts / snapshot を同列に扱う)
 * - 読み取り専用。ここでは何も書き換えない
 */
use std::borrow::Cow;

use axum::http::{Extensions, HeaderMap, Method, Request, Uri, request::Parts};
use serde_json::Value;

use super::RequestAttributes;

/// Read-only view over an HTTP request.
pub trait RequestLike {
    fn method(&self) -> &Method;
    fn uri(&self) -> &Uri;
    fn headers(&self) -> &HeaderMap;
    fn extensions(&self) -> &Extensions;

    /// Header value as text. UTF-8 is decoded as is, other bytes lossily.
    fn header(&self, name: &str) -> Option<Cow<'_, str>> {
        self.headers()
            .get(name)
            .map(|v| String::from_utf8_lossy(v.as_bytes()))
    }

    fn attributes(&self) -> Option<&RequestAttributes> {
        self.extensions().get::<RequestAttributes>()
    }

    fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes().and_then(|attrs| attrs.get(key))
    }
}

impl<B> RequestLike for Request<B> {
    fn method(&self) -> &Method {
        Request::method(self)
    }

    fn uri(&self) -> &Uri {
        Request::uri(self)
    }

    fn headers(&self) -> &HeaderMap {
        Request::headers(self)
    }

    fn extensions(&self) -> &Extensions {
        Request::extensions(self)
    }
}

impl RequestLike for Parts {
    fn method(&self) -> &Method {
        &self.method
    }

    fn uri(&self) -> &Uri {
        &self.uri
    }

    fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}

/// Owned copy of everything but the body.
///
/// This is what the ambient request slot holds, and what
/// `SecurityContext::request` hands back.
#[derive(Clone, Debug)]
pub struct RequestSnapshot {
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    extensions: Extensions,
}

impl RequestSnapshot {
    pub fn capture(req: &dyn RequestLike) -> Self {
        Self {
            method: req.method().clone(),
            uri: req.uri().clone(),
            headers: req.headers().clone(),
            extensions: req.extensions().clone(),
        }
    }
}

impl RequestLike for RequestSnapshot {
    fn method(&self) -> &Method {
        &self.method
    }

    fn uri(&self) -> &Uri {
        &self.uri
    }

    fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}
