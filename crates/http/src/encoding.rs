//! Response content-encoding negotiation.
//!
//! A client lists the codings it accepts in `Accept-Encoding`. When `gzip` is
//! among them, [`negotiate`] compresses the response body and rewrites the
//! framing headers to match. Compression failures never fail the exchange:
//! the response is sent uncompressed instead.

use std::io;
use std::io::Write;

use bytes::Bytes;
use flate2::Compression;
use flate2::write::GzEncoder;
use http::header::{ACCEPT_ENCODING, CONTENT_ENCODING, CONTENT_LENGTH};
use tracing::{error, trace};

use crate::protocol::{Request, Response};

const GZIP: &str = "gzip";

/// Compresses `response` if `request` accepts gzip, otherwise returns it as is.
///
/// `Accept-Encoding` is split on `", "` and must contain the exact token
/// `gzip`. On success the body is replaced, `Content-Encoding: gzip` is set and
/// `Content-Length` is recomputed, empty bodies included. Responses that already
/// carry a `Content-Encoding` are left alone.
pub fn negotiate(mut response: Response, request: &Request) -> Response {
    if !accepts_gzip(request) {
        return response;
    }

    // response has already encoded
    if response.headers().contains(CONTENT_ENCODING) {
        return response;
    }

    let compressed = match gzip(response.body()) {
        Ok(compressed) => compressed,
        Err(e) => {
            error!(cause = %e, "failed to compress body, sending it uncompressed");
            return response;
        }
    };

    trace!(from = response.body().len(), to = compressed.len(), "compressed response body");

    let headers = response.headers_mut();
    headers.set(CONTENT_ENCODING, GZIP);
    headers.set(CONTENT_LENGTH, compressed.len().to_string());
    response.set_body(compressed);
    response
}

fn accepts_gzip(request: &Request) -> bool {
    request.header(ACCEPT_ENCODING).is_some_and(|value| value.split(", ").any(|token| token == GZIP))
}

fn gzip(data: &[u8]) -> io::Result<Bytes> {
    let mut encoder = GzEncoder::new(Vec::with_capacity(data.len() / 2 + 32), Compression::default());
    encoder.write_all(data)?;
    encoder.finish().map(Bytes::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::Method;
    use flate2::read::GzDecoder;
    use std::io::Read;

    fn request(accept_encoding: Option<&str>) -> Request {
        let request = Request::new(Method::Get, "/echo/abc", "HTTP/1.1");
        match accept_encoding {
            Some(value) => request.with_header("accept-encoding", value),
            None => request,
        }
    }

    fn gunzip(data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        GzDecoder::new(data).read_to_end(&mut out).unwrap();
        out
    }

    #[test]
    fn compress_when_gzip_accepted() {
        let response = negotiate(Response::ok("text/plain", "abc"), &request(Some("gzip")));

        assert_eq!(response.headers().get("Content-Encoding"), Some("gzip"));
        assert_eq!(response.headers().get("Content-Type"), Some("text/plain"));
        assert_eq!(response.headers().get("Content-Length"), Some(response.body().len().to_string().as_str()));
        assert_eq!(gunzip(response.body()), b"abc");
    }

    #[test]
    fn gzip_among_other_encodings() {
        let response = negotiate(Response::ok("text/plain", "abc"), &request(Some("deflate, gzip, br")));

        assert_eq!(response.headers().get("Content-Encoding"), Some("gzip"));
        assert_eq!(gunzip(response.body()), b"abc");
    }

    #[test]
    fn unchanged_without_gzip() {
        for accept_encoding in [None, Some("deflate"), Some("invalid-encoding-1, invalid-encoding-2"), Some("gzip;q=1.0")] {
            let original = Response::ok("text/plain", "abc");

            let response = negotiate(original.clone(), &request(accept_encoding));

            assert_eq!(response, original, "accept-encoding {accept_encoding:?}");
        }
    }

    #[test]
    fn empty_body_is_compressed() {
        let response = negotiate(Response::ok("application/octet-stream", ""), &request(Some("gzip")));

        assert_eq!(response.headers().get("Content-Encoding"), Some("gzip"));
        assert!(!response.body().is_empty());
        assert_eq!(response.headers().get("Content-Length"), Some(response.body().len().to_string().as_str()));
        assert!(gunzip(response.body()).is_empty());
    }

    #[test]
    fn already_encoded_is_not_compressed_twice() {
        let original = Response::ok("text/plain", "abc").with_header("content-encoding", "br");

        let response = negotiate(original.clone(), &request(Some("gzip")));

        assert_eq!(response, original);
    }
}
