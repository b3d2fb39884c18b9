use std::path::PathBuf;

use async_trait::async_trait;
use mini_http::handler::Handler;
use mini_http::protocol::{Method, Request, Response};
use tracing::debug;

use crate::handlers;

/// The built-in routes, matched in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Root,
    Echo,
    UserAgent,
    GetFile,
    PostFile,
    NotFound,
}

impl Route {
    pub fn resolve(method: Method, path: &str) -> Self {
        match (method, path) {
            (_, "/") => Route::Root,
            (_, path) if path.starts_with("/echo") => Route::Echo,
            (_, "/user-agent") => Route::UserAgent,
            (Method::Get, path) if path.starts_with("/files/") => Route::GetFile,
            (Method::Post, path) if path.starts_with("/files/") => Route::PostFile,
            _ => Route::NotFound,
        }
    }
}

/// Dispatches requests to the route handlers.
#[derive(Debug, Clone)]
pub struct Router {
    directory: PathBuf,
}

impl Router {
    /// Creates a router serving the file routes out of `directory`.
    pub fn new<P: Into<PathBuf>>(directory: P) -> Self {
        Self { directory: directory.into() }
    }
}

#[async_trait]
impl Handler for Router {
    async fn call(&self, req: Request) -> Response {
        let route = Route::resolve(req.method(), req.path());
        debug!(?route, "matched route");

        match route {
            Route::Root => handlers::root(),
            Route::Echo => handlers::echo(&req),
            Route::UserAgent => handlers::user_agent(&req),
            Route::GetFile => handlers::get_file(&self.directory, &req).await,
            Route::PostFile => handlers::post_file(&self.directory, &req).await,
            Route::NotFound => Response::not_found(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_routes() {
        assert_eq!(Route::resolve(Method::Get, "/"), Route::Root);
        assert_eq!(Route::resolve(Method::Post, "/"), Route::Root);
        assert_eq!(Route::resolve(Method::Get, "/echo/abc"), Route::Echo);
        assert_eq!(Route::resolve(Method::Get, "/echo"), Route::Echo);
        assert_eq!(Route::resolve(Method::Get, "/user-agent"), Route::UserAgent);
        assert_eq!(Route::resolve(Method::Get, "/files/a"), Route::GetFile);
        assert_eq!(Route::resolve(Method::Post, "/files/a"), Route::PostFile);
        assert_eq!(Route::resolve(Method::Get, "/files"), Route::NotFound);
        assert_eq!(Route::resolve(Method::Get, "/index.html"), Route::NotFound);
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let router = Router::new(".");

        let response = router.call(Request::new(Method::Get, "/unknown", "HTTP/1.1")).await;

        assert_eq!(response, Response::not_found());
    }
}
