//! HTTP codec module for decoding requests and encoding responses
//!
//! Both halves plug into [`tokio_util::codec`]:
//!
//! - [`RequestDecoder`]: a line-oriented state machine turning the byte stream
//!   of a connection into [`Request`](crate::protocol::Request)s
//! - [`ResponseEncoder`]: serializes a [`Response`](crate::protocol::Response)
//!   into the write buffer
//!
//! # Example
//!
//! ```
//! use bytes::BytesMut;
//! use mini_http::codec::{RequestDecoder, ResponseEncoder};
//! use mini_http::protocol::Response;
//! use tokio_util::codec::{Decoder, Encoder};
//!
//! let mut buffer = BytesMut::from("GET /echo/abc HTTP/1.1\r\n\r\n");
//! let request = RequestDecoder::new().decode(&mut buffer).unwrap().unwrap();
//!
//! let echo = request.path().trim_start_matches("/echo/").to_owned();
//! let mut output = BytesMut::new();
//! ResponseEncoder::new().encode(Response::ok("text/plain", echo), &mut output).unwrap();
//! assert!(output.ends_with(b"\r\n\r\nabc"));
//! ```

mod request_decoder;
mod response_encoder;

pub use request_decoder::RequestDecoder;
pub use response_encoder::ResponseEncoder;
