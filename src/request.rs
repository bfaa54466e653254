//! Incoming HTTP request type.

use std::collections::HashMap;

/// An incoming HTTP request as seen by a handler.
///
/// The gateway is read-only, so the body is never buffered: a handler gets the
/// raw query string and the matched, percent-decoded path parameters.
pub struct Request {
    pub(crate) query: Option<String>,
    pub(crate) params: HashMap<String, String>,
}

impl Request {
    pub(crate) fn new(parts: &http::request::Parts, params: HashMap<String, String>) -> Self {
        Self {
            query: parts.uri.query().map(str::to_owned),
            params,
        }
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/cars/{id}`, `req.param("id")` on `/cars/42` returns `Some("42")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Returns the first value of a query-string parameter, percent- and
    /// `+`-decoded. `/cars?search=Range+Rover` yields `Some("Range Rover")`.
    pub fn query(&self, key: &str) -> Option<String> {
        let raw = self.query.as_deref()?;
        url::form_urlencoded::parse(raw.as_bytes())
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }
}
