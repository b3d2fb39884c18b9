//! HTTP response encoder implementation.
//!
//! Serializes a [`Response`] as
//!
//! ```text
//! version SP status SP reason CRLF
//! *( name ": " value CRLF )
//! CRLF
//! body
//! ```
//!
//! The headers are written as the handler left them. In particular the encoder
//! neither adds nor corrects `Content-Length`.

use std::io;
use std::io::Write;

use bytes::{BufMut, BytesMut};
use tokio_util::codec::Encoder;

use crate::protocol::{Response, SendError};

/// Initial buffer size allocated for the status line and headers
const INIT_HEADER_SIZE: usize = 4 * 1024;

/// Encoder for HTTP responses implementing the [`Encoder`] trait.
#[derive(Debug, Default)]
pub struct ResponseEncoder;

impl ResponseEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl Encoder<Response> for ResponseEncoder {
    type Error = SendError;

    /// Encodes the whole response into `dst`.
    ///
    /// # Errors
    ///
    /// Formatting into memory cannot fail; errors only surface once the
    /// framed writer flushes `dst` to the underlying stream.
    fn encode(&mut self, item: Response, dst: &mut BytesMut) -> Result<(), Self::Error> {
        dst.reserve(INIT_HEADER_SIZE + item.body().len());

        write!(FastWrite(dst), "{} {} {}\r\n", item.version(), item.status(), item.reason())?;
        item.headers().encode(dst);
        dst.put_slice(b"\r\n");
        dst.put_slice(item.body());
        Ok(())
    }
}

/// Fast writer implementation for writing to BytesMut.
///
/// This avoids going through an intermediate `String` when formatting the
/// status line, since we've already reserved enough space.
struct FastWrite<'a>(&'a mut BytesMut);

impl Write for FastWrite<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.put_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    fn encode(response: Response) -> BytesMut {
        let mut dst = BytesMut::new();
        ResponseEncoder::new().encode(response, &mut dst).unwrap();
        dst
    }

    #[test]
    fn echo_response() {
        let dst = encode(Response::ok("text/plain", "abc"));

        assert_eq!(&dst[..], b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 3\r\n\r\nabc");
    }

    #[test]
    fn response_without_headers() {
        let dst = encode(Response::new(StatusCode::OK));

        assert_eq!(&dst[..], b"HTTP/1.1 200 OK\r\n\r\n");
    }

    #[test]
    fn version_is_echoed() {
        let dst = encode(Response::created().with_version("HTTP/1.0"));

        assert_eq!(&dst[..], b"HTTP/1.0 201 Created\r\nContent-Length: 0\r\n\r\n");
    }

    #[test]
    fn content_length_is_not_recomputed() {
        let mut response = Response::ok("text/plain", "abc");
        response.set_body("abcdef".into());

        let dst = encode(response);

        assert_eq!(&dst[..], b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 3\r\n\r\nabcdef");
    }
}
