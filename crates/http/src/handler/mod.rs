//! Request handler abstraction.
//!
//! A [`Handler`] turns one [`Request`] into one [`Response`]. Business-level
//! failures are expressed as responses (400, 404, 500, ...), so handlers do not
//! return errors to the connection.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::protocol::{Request, Response};

#[async_trait]
pub trait Handler: Send + Sync {
    async fn call(&self, req: Request) -> Response;
}

#[async_trait]
impl<H: Handler + ?Sized> Handler for Arc<H> {
    async fn call(&self, req: Request) -> Response {
        self.as_ref().call(req).await
    }
}

/// A [`Handler`] backed by an async function, see [`make_handler`].
#[derive(Debug)]
pub struct HandlerFn<F> {
    f: F,
}

#[async_trait]
impl<F, Fut> Handler for HandlerFn<F>
where
    F: Fn(Request) -> Fut + Send + Sync,
    Fut: Future<Output = Response> + Send + 'static,
{
    async fn call(&self, req: Request) -> Response {
        (self.f)(req).await
    }
}

/// Wraps an async function into a [`Handler`].
///
/// ```
/// use mini_http::handler::make_handler;
/// use mini_http::protocol::{Request, Response};
///
/// let handler = make_handler(|req: Request| async move { Response::ok("text/plain", req.path().to_owned()) });
/// ```
pub fn make_handler<F, Fut>(f: F) -> HandlerFn<F>
where
    F: Fn(Request) -> Fut,
    Fut: Future<Output = Response>,
{
    HandlerFn { f }
}
