//! An echo and file server on top of [`mini_http`].
//!
//! | route | behaviour |
//! |---|---|
//! | `/` | `200 OK` |
//! | `/echo/<text>` | replies `<text>`, gzip-compressed when accepted |
//! | `/user-agent` | replies the `User-Agent` header |
//! | `GET /files/<name>` | serves `<name>` from the configured directory |
//! | `POST /files/<name>` | stores the request body as `<name>` |

pub mod config;
pub mod handlers;
pub mod router;
pub mod server;

pub use config::Config;
pub use router::Router;
pub use server::{Server, ServerError};
