/*
 * Responsibility
 * - 上流 (gateway / auth middleware) が request に載せる名前付き属性の入れ物
 * - request extensions に 1 つだけ格納される
 */
use std::collections::HashMap;

use serde_json::Value;

/// Named request attributes, keyed by the constants in [`super::constants::attrs`].
///
/// Values are kept as JSON so that whatever the populator stored (a number, a
/// string, a whole login-user record) is handed back unmodified.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestAttributes(HashMap<String, Value>);

impl RequestAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the previous value, if any.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
