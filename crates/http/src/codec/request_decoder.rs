//! HTTP request decoder module
//!
//! This module turns the raw byte stream of a connection into [`Request`]s.
//! Decoding is line oriented and streaming: the decoder consumes complete
//! CRLF-terminated lines from the buffer as they arrive and keeps its progress
//! between calls, so it can be driven by [`tokio_util::codec::FramedRead`].
//!
//! # Grammar
//!
//! ```text
//! request-line = method SP path SP version CRLF
//! header-line  = name ": " value CRLF
//! request      = request-line *header-line CRLF [ body ]
//! ```
//!
//! The body is present only when a `Content-Length` header is, and is exactly
//! that many bytes long. Chunked transfer coding is not supported.
//!
//! # Example
//!
//! ```
//! use bytes::BytesMut;
//! use mini_http::codec::RequestDecoder;
//! use tokio_util::codec::Decoder;
//!
//! let mut decoder = RequestDecoder::new();
//! let mut buffer = BytesMut::from("GET / HTTP/1.1\r\n\r\n");
//! let request = decoder.decode(&mut buffer).unwrap().unwrap();
//! assert_eq!(request.path(), "/");
//! ```

use std::mem;

use bytes::BytesMut;
use http::header::CONTENT_LENGTH;
use thiserror::Error;
use tokio_util::codec::Decoder;
use tracing::trace;

use crate::ensure;
use crate::protocol::{Method, ParseError, Request};

/// Maximum length in bytes of a single request or header line, CRLF included
const MAX_LINE_BYTES: usize = 8 * 1024;

/// Maximum number of distinct headers allowed in a request
const MAX_HEADER_NUM: usize = 64;

/// Progress of the request currently being decoded.
#[derive(Debug, Default)]
enum DecodeState {
    /// Waiting for the request line; nothing of the next request consumed yet.
    #[default]
    RequestLine,
    /// Request line parsed, collecting header lines.
    Headers(Request),
    /// Headers complete, waiting for `length` body bytes.
    Body { request: Request, length: usize },
}

/// A decoder that produces one [`Request`] per complete HTTP request.
///
/// # Returns from [`Decoder::decode`]
///
/// - `Ok(Some(request))`: a request including its whole body was decoded
/// - `Ok(None)`: more data is needed
/// - `Err(_)`: the request is malformed; the connection should be closed
///
/// When the stream ends, [`Decoder::decode_eof`] distinguishes a clean end
/// (nothing of a new request received, `Ok(None)`) from a truncated request.
#[derive(Debug, Default)]
pub struct RequestDecoder {
    state: DecodeState,
}

impl RequestDecoder {
    /// Creates a new `RequestDecoder` instance
    pub fn new() -> Self {
        Self::default()
    }
}

impl Decoder for RequestDecoder {
    type Item = Request;
    type Error = ParseError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        loop {
            match mem::take(&mut self.state) {
                DecodeState::RequestLine => {
                    let Some(line) = next_line(src).map_err(ParseError::malformed_request_line)? else {
                        return Ok(None);
                    };
                    let request = parse_request_line(&line)?;
                    trace!(method = %request.method(), path = request.path(), "parsed request line");
                    self.state = DecodeState::Headers(request);
                }

                DecodeState::Headers(mut request) => {
                    let Some(line) = next_line(src).map_err(ParseError::malformed_header_line)? else {
                        self.state = DecodeState::Headers(request);
                        return Ok(None);
                    };

                    // blank line ends the header section
                    if line.is_empty() {
                        match content_length(&request)? {
                            Some(length) => self.state = DecodeState::Body { request, length },
                            None => return Ok(Some(request)),
                        }
                        continue;
                    }

                    let (name, value) = parse_header_line(&line)?;
                    let headers = request.headers_mut();
                    ensure!(
                        headers.len() < MAX_HEADER_NUM || headers.contains(name),
                        ParseError::too_many_headers(MAX_HEADER_NUM)
                    );
                    headers.set(name, value);
                    self.state = DecodeState::Headers(request);
                }

                DecodeState::Body { mut request, length } => {
                    if src.len() < length {
                        self.state = DecodeState::Body { request, length };
                        return Ok(None);
                    }

                    trace!(body_size = length, "parsed body");
                    request.set_body(src.split_to(length).freeze());
                    return Ok(Some(request));
                }
            }
        }
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if let Some(request) = self.decode(buf)? {
            return Ok(Some(request));
        }

        match &self.state {
            DecodeState::RequestLine if buf.is_empty() => Ok(None),
            DecodeState::RequestLine => Err(ParseError::malformed_request_line(LineError::MissingCrlf)),
            DecodeState::Headers(_) => Err(ParseError::malformed_header_line("unexpected end of stream")),
            DecodeState::Body { length, .. } => Err(ParseError::truncated_body(*length as u64, buf.len() as u64)),
        }
    }
}

#[derive(Debug, Error)]
enum LineError {
    #[error("line is not terminated by CRLF")]
    MissingCrlf,

    #[error("line exceeds the limit of {MAX_LINE_BYTES} bytes")]
    TooLong,

    #[error("line is not valid utf-8: {0}")]
    NotUtf8(#[from] std::str::Utf8Error),
}

/// Splits the next CRLF-terminated line off the buffer, without the terminator.
///
/// Returns `Ok(None)` if no complete line is buffered yet.
fn next_line(src: &mut BytesMut) -> Result<Option<String>, LineError> {
    let Some(end) = src.iter().position(|b| *b == b'\n') else {
        ensure!(src.len() <= MAX_LINE_BYTES, LineError::TooLong);
        return Ok(None);
    };
    ensure!(end < MAX_LINE_BYTES, LineError::TooLong);

    let line = src.split_to(end + 1);
    let line = line.strip_suffix(b"\r\n").ok_or(LineError::MissingCrlf)?;
    Ok(Some(std::str::from_utf8(line)?.to_owned()))
}

fn parse_request_line(line: &str) -> Result<Request, ParseError> {
    let tokens = line.split(' ').collect::<Vec<_>>();
    let [method, path, version] = tokens[..] else {
        return Err(ParseError::malformed_request_line(format!("expected 3 tokens but found {}", tokens.len())));
    };
    ensure!(
        tokens.iter().all(|token| !token.is_empty()),
        ParseError::malformed_request_line(format!("empty token in {line:?}"))
    );

    let method = Method::try_from(method)?;
    Ok(Request::new(method, path, version))
}

fn parse_header_line(line: &str) -> Result<(&str, &str), ParseError> {
    match line.split_once(": ") {
        Some(("", _)) => Err(ParseError::malformed_header_line("empty header name")),
        Some(header) => Ok(header),
        None => Err(ParseError::malformed_header_line(format!("missing \": \" separator in {line:?}"))),
    }
}

/// Reads the declared body length, if any.
fn content_length(request: &Request) -> Result<Option<usize>, ParseError> {
    let Some(value) = request.header(CONTENT_LENGTH) else {
        return Ok(None);
    };

    let length = value
        .parse::<u64>()
        .map_err(|e| ParseError::invalid_content_length(format!("value {value:?} is not u64: {e}")))?;

    usize::try_from(length)
        .map(Some)
        .map_err(|e| ParseError::invalid_content_length(format!("value {length} is too large: {e}")))
}
