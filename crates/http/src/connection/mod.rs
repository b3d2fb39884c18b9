//! HTTP connection handling module
//!
//! [`HttpConnection`] drives one connection: it decodes a request, hands it to
//! a [`Handler`](crate::handler::Handler), encodes the response and repeats
//! until the peer closes the stream. Requests on one connection are processed
//! strictly one after the other.

mod http_connection;

pub use http_connection::HttpConnection;
