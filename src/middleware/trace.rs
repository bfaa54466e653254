//! Per-request trace line.

use std::time::Duration;

use tracing::{info, warn};

use crate::status::Status;

/// Logs one finished request. Server errors go out at `warn` so they survive
/// a quieter filter.
pub(crate) fn record(method: &http::Method, path: &str, status: Status, elapsed: Duration) {
    let status = status.as_u16();
    let latency_ms = elapsed.as_secs_f64() * 1000.0;

    if status >= 500 {
        warn!(%method, path, status, latency_ms, "request failed");
    } else {
        info!(%method, path, status, latency_ms, "request");
    }
}
