//! Request and response shapes for authenticated upstream calls

use std::fmt::Display;

use reqwest::Method;
use serde_json::Value;

/// A call against the HR backend, independent of whose tokens sign it
#[derive(Debug, Clone, PartialEq)]
pub struct DownstreamRequest {
    pub method: Method,
    /// Path relative to the upstream base URL, with a leading `/`
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl DownstreamRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Append a query parameter
    #[must_use]
    pub fn query(mut self, key: &str, value: impl Display) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Append a query parameter when present. Empty strings count as absent.
    #[must_use]
    pub fn query_opt<V: Display>(self, key: &str, value: Option<V>) -> Self {
        match value.map(|v| v.to_string()) {
            Some(v) if !v.is_empty() => self.query(key, v),
            _ => self,
        }
    }

    /// Attach a JSON body
    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// What upstream answered, passed through verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownstreamResponse {
    pub status: u16,
    pub body: String,
}

impl DownstreamResponse {
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }
}
