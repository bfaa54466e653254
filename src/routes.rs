//! The gateway's HTTP surface.
//!
//! | route | success | failure |
//! |---|---|---|
//! | `GET /cars[?search=…]` | `200` JSON array | `500` |
//! | `GET /cars/{id}` | `200` JSON object | `400` empty id, `404`, `500` |
//! | `GET /healthz`, `GET /readyz` | `200` | — |

use std::sync::Arc;

use crate::car::Car;
use crate::error::Result;
use crate::health;
use crate::inventory::Inventory;
use crate::middleware::Cors;
use crate::request::Request;
use crate::response::Json;
use crate::router::Router;
use crate::store::RecordSource;

/// Builds the application router around `inventory`.
pub fn app<S: RecordSource + 'static>(inventory: Inventory<S>) -> Router {
    let inventory = Arc::new(inventory);
    let listing = Arc::clone(&inventory);
    let lookup = Arc::clone(&inventory);
    let empty_lookup = inventory;

    Router::new()
        .get("/cars", move |req: Request| {
            let inventory = Arc::clone(&listing);
            async move { list_cars(&inventory, req).await }
        })
        // matchit does not bind `{id}` to an empty segment, so `/cars/` is
        // routed on its own and reported as a missing identifier.
        .get("/cars/", move |req: Request| {
            let inventory = Arc::clone(&empty_lookup);
            async move { get_car(&inventory, req).await }
        })
        .get("/cars/{id}", move |req: Request| {
            let inventory = Arc::clone(&lookup);
            async move { get_car(&inventory, req).await }
        })
        .get("/healthz", health::liveness)
        .get("/readyz", health::readiness)
        .cors(Cors::permissive())
}

async fn list_cars<S: RecordSource>(inventory: &Inventory<S>, req: Request) -> Result<Json<Vec<Car>>> {
    let search = req.query("search");
    inventory.list(search.as_deref()).await.map(Json)
}

async fn get_car<S: RecordSource>(inventory: &Inventory<S>, req: Request) -> Result<Json<Car>> {
    let id = req.param("id").unwrap_or_default();
    inventory.resolve(id).await.map(Json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::tests::{FakeSource, car};
    use crate::status::Status;

    fn get(uri: &str) -> http::Request<()> {
        http::Request::get(uri).body(()).unwrap()
    }

    #[tokio::test]
    async fn empty_id_is_bad_request() {
        let app = app(Inventory::new(FakeSource::with(vec![car(1, "X")])));

        let res = app.handle(get("/cars/")).await;
        assert_eq!(res.status_code(), Status::BadRequest);
        assert_eq!(res.body(), b"identifier required");
        assert_eq!(res.header("access-control-allow-origin"), Some("*"));
    }

    #[tokio::test]
    async fn search_parameter_is_decoded() {
        let app = app(Inventory::new(FakeSource::with(vec![])));

        let res = app.handle(get("/cars?search=Range%20Rover")).await;
        assert_eq!(res.status_code(), Status::Ok);
        assert_eq!(res.body(), b"[]");
        assert_eq!(res.header("content-type"), Some("application/json"));
    }

    #[tokio::test]
    async fn health_probes_answer() {
        let app = app(Inventory::new(FakeSource::default()));
        assert_eq!(app.handle(get("/healthz")).await.body(), b"ok");
        assert_eq!(app.handle(get("/readyz")).await.body(), b"ready");
    }
}
