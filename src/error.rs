//! Unified error type.
//!
//! Startup failures (configuration, binding the listener) and per-request
//! failures (bad identifier, missing record, backing-store trouble) share one
//! enum. Per-request variants know their HTTP status and render themselves as
//! a plain-text response, so handlers can return `Result<_, Error>`.

use thiserror::Error;

use crate::response::{IntoResponse, Response};
use crate::status::Status;

#[derive(Error, Debug)]
pub enum Error {
    #[error("missing required environment variable {key}")]
    ConfigurationMissing { key: &'static str },

    #[error("invalid value {value:?} for environment variable {key}")]
    ConfigurationInvalid { key: &'static str, value: String },

    #[error("{0}")]
    InvalidArgument(&'static str),

    #[error("Car not found")]
    NotFound,

    #[error("failed to fetch from backing store: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("backing store answered with status {0}")]
    UpstreamStatus(u16),

    #[error("failed to decode backing store response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The HTTP status a request failing with this error is answered with.
    pub fn status(&self) -> Status {
        match self {
            Self::InvalidArgument(_) => Status::BadRequest,
            Self::NotFound => Status::NotFound,
            Self::Transport(_)
            | Self::UpstreamStatus(_)
            | Self::Decode(_)
            | Self::ConfigurationMissing { .. }
            | Self::ConfigurationInvalid { .. }
            | Self::Io(_) => Status::InternalServerError,
        }
    }

    /// Text sent to the client. Server-side failures get a fixed message; the
    /// detail goes to the log instead.
    fn client_message(&self) -> String {
        match self {
            Self::InvalidArgument(_) | Self::NotFound => self.to_string(),
            Self::Transport(_) | Self::UpstreamStatus(_) => "Failed to fetch from backing store".to_owned(),
            Self::Decode(_) => "Failed to decode JSON".to_owned(),
            _ => "Internal server error".to_owned(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == Status::InternalServerError {
            tracing::error!(error = %self, "request failed");
        }
        Response::builder().status(status).text(self.client_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_errors_map_to_statuses() {
        assert_eq!(Error::InvalidArgument("identifier required").status(), Status::BadRequest);
        assert_eq!(Error::NotFound.status(), Status::NotFound);
        assert_eq!(Error::UpstreamStatus(401).status(), Status::InternalServerError);
    }

    #[test]
    fn not_found_renders_plain_text() {
        let res = Error::NotFound.into_response();
        assert_eq!(res.status_code(), Status::NotFound);
        assert_eq!(res.body(), b"Car not found");
        assert_eq!(res.header("content-type"), Some("text/plain; charset=utf-8"));
    }

    #[test]
    fn decode_error_hides_detail_from_client() {
        let err: Error = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        let res = err.into_response();
        assert_eq!(res.status_code(), Status::InternalServerError);
        assert_eq!(res.body(), b"Failed to decode JSON");
    }
}
