//! HTTP status codes the gateway answers with, as a typed enum.
//!
//! ```rust
//! use car_gateway::{Response, Status};
//!
//! Response::status(Status::NoContent);
//!
//! Response::builder()
//!     .status(Status::NotFound)
//!     .text("Car not found");
//! ```

use http::StatusCode;

/// The subset of RFC 9110 status codes this service produces.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    // ── 2xx Success ───────────────────────────────────────────────────────────
    Ok,                            // 200
    NoContent,                     // 204

    // ── 4xx Client errors ─────────────────────────────────────────────────────
    BadRequest,                    // 400
    NotFound,                      // 404
    MethodNotAllowed,              // 405

    // ── 5xx Server errors ─────────────────────────────────────────────────────
    InternalServerError,           // 500
}

impl Status {
    pub fn as_u16(self) -> u16 {
        match self {
            Self::Ok                  => 200,
            Self::NoContent           => 204,
            Self::BadRequest          => 400,
            Self::NotFound            => 404,
            Self::MethodNotAllowed    => 405,
            Self::InternalServerError => 500,
        }
    }
}

impl From<Status> for StatusCode {
    fn from(s: Status) -> StatusCode {
        match s {
            Status::Ok                  => StatusCode::OK,
            Status::NoContent           => StatusCode::NO_CONTENT,
            Status::BadRequest          => StatusCode::BAD_REQUEST,
            Status::NotFound            => StatusCode::NOT_FOUND,
            Status::MethodNotAllowed    => StatusCode::METHOD_NOT_ALLOWED,
            Status::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
