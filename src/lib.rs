//! # car-gateway
//!
//! A small HTTP gateway that serves a car inventory to browser clients from a
//! Supabase / PostgREST table.
//!
//! Two requests are translated:
//!
//! - `GET /cars?search=…` → `or=(name.ilike.*…*,brand.ilike.*…*)`, or
//!   `select=*` without a term. The store's JSON array is passed through.
//! - `GET /cars/{id}` → `id=eq.{id}`. The array is collapsed to its first
//!   element, or `404` when empty.
//!
//! Everything is read-only and stateless: configuration is loaded once,
//! wrapped in an [`Inventory`], and shared by the route handlers.
//!
//! ```rust,no_run
//! use car_gateway::{Config, Inventory, PostgrestStore, Server, routes};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), car_gateway::Error> {
//!     let config = Config::from_env()?;
//!     let app = routes::app(Inventory::new(PostgrestStore::new(&config)));
//!     Server::bind(config.listen_addr()).serve(app).await
//! }
//! ```

mod car;
mod config;
mod error;
mod handler;
mod inventory;
mod method;
mod query;
mod request;
mod response;
mod router;
mod server;
mod status;
mod store;

pub mod health;
pub mod logger;
pub mod middleware;
pub mod routes;

pub use car::Car;
pub use config::Config;
pub use error::{Error, Result};
pub use handler::Handler;
pub use inventory::Inventory;
pub use method::Method;
pub use query::{Filter, Query};
pub use request::Request;
pub use response::{IntoResponse, Json, Response};
pub use router::Router;
pub use server::Server;
pub use status::Status;
pub use store::{PostgrestStore, RecordSource};
