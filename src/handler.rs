//! Handler trait and type erasure.
//!
//! The router stores handlers of different concrete types in one map, so each
//! one is wrapped in an `Arc<dyn ErasedHandler>`:
//!
//! ```text
//! async fn list_cars(req: Request) -> Response { … }   ← or a capturing closure
//!        ↓ router.on(Method::Get, "/cars", list_cars)
//! Arc::new(FnHandler(list_cars))                       ← BoxedHandler
//!        ↓ handler.call(req) at request time
//! Box::pin(async { fut.await.into_response() })        ← BoxFuture
//! ```
//!
//! Closures that capture shared state work too, as long as they are
//! `Fn(Request) -> impl Future` and the state is `Send + Sync`:
//!
//! ```rust,ignore
//! let inventory = Arc::new(inventory);
//! router.on(Method::Get, "/cars", move |req| {
//!     let inventory = Arc::clone(&inventory);
//!     async move { routes::list_cars(&inventory, req).await }
//! });
//! ```

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::request::Request;
use crate::response::{IntoResponse, Response};

/// A heap-allocated, type-erased future that resolves to a [`Response`].
pub(crate) type BoxFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

#[doc(hidden)]
pub trait ErasedHandler {
    fn call(&self, req: Request) -> BoxFuture;
}

/// A type-erased handler shared across concurrent requests.
#[doc(hidden)]
pub type BoxedHandler = Arc<dyn ErasedHandler + Send + Sync + 'static>;

/// Implemented for every valid route handler.
///
/// Sealed: satisfied automatically by any `Fn(Request) -> impl Future<Output =
/// impl IntoResponse>` that is `Send + Sync + 'static`.
pub trait Handler: private::Sealed + Send + Sync + 'static {
    #[doc(hidden)]
    fn into_boxed_handler(self) -> BoxedHandler;
}

mod private {
    pub trait Sealed {}
}

impl<F, Fut, R> private::Sealed for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
}

impl<F, Fut, R> Handler for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn into_boxed_handler(self) -> BoxedHandler {
        Arc::new(FnHandler(self))
    }
}

/// Bridges a concrete handler `F` to the trait-object world.
struct FnHandler<F>(F);

impl<F, Fut, R> ErasedHandler for FnHandler<F>
where
    F: Fn(Request) -> Fut + Send + Sync,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn call(&self, req: Request) -> BoxFuture {
        let fut = (self.0)(req);
        Box::pin(async move { fut.await.into_response() })
    }
}
