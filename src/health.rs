//! Liveness and readiness probe handlers.
//!
//! | Probe | Path | Question |
//! |---|---|---|
//! | **Liveness** | `/healthz` | Is the process alive? Failure → restart. |
//! | **Readiness** | `/readyz` | Can the gateway take traffic? Failure → pulled from the load balancer. |
//!
//! Neither probe touches the backing store: a store outage shows up as `500`s
//! on `/cars`, not as the gateway being restarted or drained.

use crate::{Request, Response};

/// Always `200 OK` with body `"ok"`.
pub async fn liveness(_req: Request) -> Response {
    Response::text("ok")
}

/// `200 OK` with body `"ready"` once the router is serving, which is only
/// possible after configuration has loaded.
pub async fn readiness(_req: Request) -> Response {
    Response::text("ready")
}
