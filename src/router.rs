//! Radix-tree request router.
//!
//! One tree per HTTP method. O(path-length) lookup. You register a path, you
//! get a handler. Cross-origin headers and the per-request trace line are
//! applied here, so every response leaving the router carries them.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use matchit::Router as MatchitRouter;
use percent_encoding::percent_decode_str;

use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::middleware::{Cors, trace};
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

/// The application router.
///
/// Build it once at startup and pass it to [`Server::serve`](crate::Server::serve).
/// Each [`Router::on`] call returns `self` so registrations chain naturally.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
    cors: Option<Cors>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new(), cors: None }
    }

    /// Register a handler for a method + path pair. Returns `self` for chaining.
    ///
    /// Path parameters use `{name}` syntax and are read with `req.param("name")`.
    ///
    /// # Panics
    ///
    /// Panics if `path` conflicts with an already registered route. Routes are
    /// registered at startup, so this surfaces as a programming error.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    /// Shorthand for `on(Method::Get, …)`.
    pub fn get(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::Get, path, handler)
    }

    /// Attach cross-origin headers to every response and answer `OPTIONS`
    /// preflights on any path.
    pub fn cors(mut self, cors: Cors) -> Self {
        self.cors = Some(cors);
        self
    }

    /// Routes one request and produces one response.
    ///
    /// The request body is never read; every route this service exposes is a
    /// read. Used by the server for each hyper request and directly by tests.
    pub async fn handle(&self, req: http::Request<()>) -> Response {
        let started = Instant::now();
        let (parts, ()) = req.into_parts();
        let path = parts.uri.path().to_owned();

        let mut response = match self.route(&parts.method, &path) {
            Some(Routed { handler, params, head }) => {
                let mut response = handler.call(Request::new(&parts, params)).await;
                if head {
                    response.body.clear();
                }
                response
            }
            None => self.unrouted(&parts.method, &path),
        };

        if let Some(cors) = &self.cors {
            cors.apply(&mut response);
        }

        trace::record(&parts.method, &path, response.status_code(), started.elapsed());
        response
    }

    /// Finds the handler for `method` on `path`. `HEAD` falls back to the
    /// `GET` route and has its body stripped afterwards.
    fn route(&self, method: &http::Method, path: &str) -> Option<Routed> {
        let method = Method::try_from(method).ok()?;
        if let Some((handler, params)) = self.lookup(method, path) {
            return Some(Routed { handler, params, head: false });
        }
        if method != Method::Head {
            return None;
        }
        self.lookup(Method::Get, path)
            .map(|(handler, params)| Routed { handler, params, head: true })
    }

    /// The answer when no handler matched: a CORS preflight, `405` when the
    /// path exists under another method, `404` otherwise.
    fn unrouted(&self, method: &http::Method, path: &str) -> Response {
        match (&self.cors, Method::try_from(method)) {
            (Some(cors), Ok(Method::Options)) => cors.preflight(),
            _ if self.is_routed(path) => Response::status(Status::MethodNotAllowed),
            _ => Response::status(Status::NotFound),
        }
    }

    /// Path parameters come out of matchit still percent-encoded; they are
    /// decoded here so handlers see `a b` for `/cars/a%20b`. Sequences that
    /// do not decode to UTF-8 are replaced rather than rejected.
    fn lookup(
        &self,
        method: Method,
        path: &str,
    ) -> Option<(BoxedHandler, HashMap<String, String>)> {
        let tree = self.routes.get(&method)?;
        let matched = tree.at(path).ok()?;
        let handler = Arc::clone(matched.value);
        let params = matched.params.iter()
            .map(|(k, v)| (k.to_owned(), percent_decode_str(v).decode_utf8_lossy().into_owned()))
            .collect();
        Some((handler, params))
    }

    fn is_routed(&self, path: &str) -> bool {
        self.routes.values().any(|tree| tree.at(path).is_ok())
    }
}

struct Routed {
    handler: BoxedHandler,
    params: HashMap<String, String>,
    head: bool,
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}
