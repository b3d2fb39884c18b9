//! HTTP response representation and the factory functions handlers use to
//! build one.

use bytes::Bytes;
use http::StatusCode;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE};

use crate::protocol::Headers;

/// Protocol token used by responses unless a handler overrides it.
const HTTP_11: &str = "HTTP/1.1";

/// An HTTP response, consumed exactly once by the
/// [`ResponseEncoder`](crate::codec::ResponseEncoder).
///
/// The encoder writes the headers as they are. Whoever sets a non-empty body
/// is responsible for a matching `Content-Length`; [`Response::with_body`] and
/// the factory functions below do this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    version: String,
    status: u16,
    reason: String,
    headers: Headers,
    body: Bytes,
}

impl Response {
    /// Creates an `HTTP/1.1` response with the canonical reason phrase of
    /// `status`, no headers and an empty body.
    pub fn new(status: StatusCode) -> Self {
        Self {
            version: HTTP_11.to_owned(),
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_owned(),
            headers: Headers::new(),
            body: Bytes::new(),
        }
    }

    /// An empty response that still announces `Content-Length: 0`.
    pub fn empty(status: StatusCode) -> Self {
        Self::new(status).with_header(CONTENT_LENGTH, "0")
    }

    pub fn ok<B: Into<Bytes>>(content_type: &str, body: B) -> Self {
        Self::new(StatusCode::OK).with_body(content_type, body)
    }

    pub fn created() -> Self {
        Self::empty(StatusCode::CREATED)
    }

    pub fn bad_request(msg: &str) -> Self {
        Self::new(StatusCode::BAD_REQUEST).with_body(mime::TEXT_PLAIN.as_ref(), Bytes::copy_from_slice(msg.as_bytes()))
    }

    pub fn not_found() -> Self {
        Self::empty(StatusCode::NOT_FOUND)
    }

    pub fn internal_error(msg: &str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR)
            .with_body(mime::TEXT_PLAIN.as_ref(), Bytes::copy_from_slice(msg.as_bytes()))
    }

    pub fn with_version<V: Into<String>>(mut self, version: V) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_header<N: AsRef<str>, V: Into<String>>(mut self, name: N, value: V) -> Self {
        self.headers.set(name, value);
        self
    }

    /// Sets the body together with its `Content-Type` and `Content-Length`.
    pub fn with_body<B: Into<Bytes>>(mut self, content_type: &str, body: B) -> Self {
        let body = body.into();
        self.headers.set(CONTENT_TYPE, content_type);
        self.headers.set(CONTENT_LENGTH, body.len().to_string());
        self.body = body;
        self
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut Headers {
        &mut self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Replaces the body only; framing headers are left to the caller.
    pub fn set_body(&mut self, body: Bytes) {
        self.body = body;
    }
}
