//! HTTP request representation.
//!
//! A [`Request`] is produced once per exchange by the
//! [`RequestDecoder`](crate::codec::RequestDecoder) and handed to a handler by
//! value. It is read-only once decoded.

use bytes::Bytes;
use http::header::CONTENT_LENGTH;

use crate::protocol::{Headers, Method};

/// A fully received HTTP request: request line, headers and body.
///
/// The body is empty unless the request carried a `Content-Length` header, in
/// which case its length is exactly the declared value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: Method,
    path: String,
    version: String,
    headers: Headers,
    body: Bytes,
}

impl Request {
    /// Creates a request without headers or body.
    pub fn new<P: Into<String>, V: Into<String>>(method: Method, path: P, version: V) -> Self {
        Self { method, path: path.into(), version: version.into(), headers: Headers::new(), body: Bytes::new() }
    }

    pub fn with_header<N: AsRef<str>, V: Into<String>>(mut self, name: N, value: V) -> Self {
        self.headers.set(name, value);
        self
    }

    /// Attaches a body and sets a matching `Content-Length` header.
    pub fn with_body<B: Into<Bytes>>(mut self, body: B) -> Self {
        let body = body.into();
        self.headers.set(CONTENT_LENGTH, body.len().to_string());
        self.body = body;
        self
    }

    pub(crate) fn headers_mut(&mut self) -> &mut Headers {
        &mut self.headers
    }

    pub(crate) fn set_body(&mut self, body: Bytes) {
        self.body = body;
    }

    pub fn method(&self) -> Method {
        self.method
    }

    /// The raw request target, not URL-decoded, including the leading slash.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The protocol token of the request line, e.g. `HTTP/1.1`.
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Shorthand for `self.headers().get(name)`.
    pub fn header<N: AsRef<str>>(&self, name: N) -> Option<&str> {
        self.headers.get(name)
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn into_body(self) -> Bytes {
        self.body
    }
}
