//! Middleware layer.
//!
//! Cross-cutting concerns the router applies to every request:
//!
//! - [`Cors`] — cross-origin headers for browser clients, plus `OPTIONS`
//!   preflight answers.
//! - [`trace`] — one log line per request with method, path, status, latency.

mod cors;
pub(crate) mod trace;

pub use cors::Cors;
