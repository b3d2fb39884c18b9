//! Core HTTP protocol types.
//!
//! - [`Method`]: the supported request methods
//! - [`Headers`]: ordered header container with canonical names
//! - [`Request`]: a decoded request, owned by the caller for one exchange
//! - [`Response`]: a handler-built response, consumed once by the encoder
//! - [`HttpError`], [`ParseError`], [`SendError`]: error types per direction

mod method;
pub use method::Method;

mod headers;
pub use headers::Headers;

mod request;
pub use request::Request;

mod response;
pub use response::Response;

mod error;
pub use error::HttpError;
pub use error::ParseError;
pub use error::SendError;
