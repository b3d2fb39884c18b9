//! A small HTTP/1.1 protocol layer with a hand-written parser and encoder
//!
//! This crate turns the raw byte stream of a TCP connection into structured
//! requests and serializes responses back, on top of tokio and
//! `tokio_util::codec`. It deliberately implements only a subset of HTTP/1.1:
//! `GET` and `POST`, `Content-Length` framed bodies and gzip response
//! compression.
//!
//! # Example
//!
//! ```no_run
//! use mini_http::connection::HttpConnection;
//! use mini_http::handler::make_handler;
//! use mini_http::protocol::{Request, Response};
//! use tokio::net::TcpListener;
//! use tracing::{error, info, warn};
//!
//! #[tokio::main]
//! async fn main() {
//!     let tcp_listener = match TcpListener::bind("127.0.0.1:4221").await {
//!         Ok(tcp_listener) => tcp_listener,
//!         Err(e) => {
//!             error!(cause = %e, "bind server error");
//!             return;
//!         }
//!     };
//!
//!     loop {
//!         let (tcp_stream, _remote_addr) = match tcp_listener.accept().await {
//!             Ok(stream_and_addr) => stream_and_addr,
//!             Err(e) => {
//!                 warn!(cause = %e, "failed to accept");
//!                 continue;
//!             }
//!         };
//!
//!         tokio::spawn(async move {
//!             let handler = make_handler(|req: Request| async move {
//!                 let path = req.path().to_owned();
//!                 Response::ok("text/plain", path)
//!             });
//!             let (reader, writer) = tcp_stream.into_split();
//!             match HttpConnection::new(reader, writer).process(&handler).await {
//!                 Ok(()) => info!("finished process, connection shutdown"),
//!                 Err(e) => error!("service has error, cause {}, connection shutdown", e),
//!             }
//!         });
//!     }
//! }
//! ```
//!
//! # Architecture
//!
//! - [`protocol`]: `Request`, `Response`, `Headers`, `Method` and error types
//! - [`codec`]: `RequestDecoder` and `ResponseEncoder`
//! - [`encoding`]: gzip content negotiation for responses
//! - [`connection`]: the per-connection request/response loop
//! - [`handler`]: the handler trait the connection calls
//!
//! # Limitations
//!
//! - No chunked transfer encoding, HTTP/2 or TLS
//! - One request is fully handled before the next one is read
//! - Maximum line length: 8KB
//! - Maximum number of headers: 64

pub mod codec;
pub mod connection;
pub mod encoding;
pub mod handler;
pub mod protocol;

mod utils;
pub(crate) use utils::ensure;
