//! Cross-origin resource sharing.

use crate::response::Response;
use crate::status::Status;

/// Cross-origin policy attached to a [`Router`](crate::Router).
#[derive(Clone, Debug)]
pub struct Cors {
    allow_origin: String,
    allow_methods: String,
    allow_headers: String,
}

impl Cors {
    /// Any origin may read any response. The browser frontend is served from a
    /// different host than this gateway, and nothing here is credentialed on
    /// the client side.
    pub fn permissive() -> Self {
        Self {
            allow_origin: "*".to_owned(),
            allow_methods: "GET, HEAD, OPTIONS".to_owned(),
            allow_headers: "content-type".to_owned(),
        }
    }

    pub(crate) fn apply(&self, response: &mut Response) {
        response.set_header("access-control-allow-origin", &self.allow_origin);
    }

    pub(crate) fn preflight(&self) -> Response {
        Response::builder()
            .status(Status::NoContent)
            .header("access-control-allow-methods", &self.allow_methods)
            .header("access-control-allow-headers", &self.allow_headers)
            .header("access-control-max-age", "86400")
            .no_body()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_sets_any_origin() {
        let mut res = Response::text("ok");
        Cors::permissive().apply(&mut res);
        assert_eq!(res.header("access-control-allow-origin"), Some("*"));
    }

    #[test]
    fn preflight_has_no_body() {
        let res = Cors::permissive().preflight();
        assert_eq!(res.status_code(), Status::NoContent);
        assert!(res.body().is_empty());
        assert_eq!(res.header("access-control-allow-methods"), Some("GET, HEAD, OPTIONS"));
    }
}
