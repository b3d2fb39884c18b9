//! Business logic of the built-in routes.
//!
//! Handlers never fail the connection: every outcome, including I/O errors on
//! the file routes, is reported as an HTTP response.

use std::io;
use std::path::{Component, Path, PathBuf};

use http::StatusCode;
use http::header::USER_AGENT;
use mini_http::encoding::negotiate;
use mini_http::protocol::{Request, Response};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::error;

const ECHO_PREFIX: &str = "/echo/";
const FILES_PREFIX: &str = "/files/";

pub fn root() -> Response {
    Response::empty(StatusCode::OK)
}

/// Replies with the path segment after `/echo/`.
pub fn echo(req: &Request) -> Response {
    match req.path().strip_prefix(ECHO_PREFIX) {
        Some(data) if !data.is_empty() => negotiate(Response::ok(mime::TEXT_PLAIN.as_ref(), data.to_owned()), req),
        _ => Response::bad_request("empty path"),
    }
}

/// Replies with the request's `User-Agent` header.
pub fn user_agent(req: &Request) -> Response {
    match req.header(USER_AGENT) {
        Some(user_agent) if !user_agent.is_empty() => Response::ok(mime::TEXT_PLAIN.as_ref(), user_agent.to_owned()),
        _ => Response::bad_request("empty User-Agent"),
    }
}

pub async fn get_file(root: &Path, req: &Request) -> Response {
    let Some(path) = file_path(root, req.path()) else {
        return Response::bad_request("invalid file name");
    };

    match tokio::fs::read(&path).await {
        Ok(data) => negotiate(Response::ok(mime::APPLICATION_OCTET_STREAM.as_ref(), data), req),
        Err(e) => {
            if e.kind() != io::ErrorKind::NotFound {
                error!(cause = %e, path = %path.display(), "something is wrong with reading file");
            }
            Response::not_found()
        }
    }
}

pub async fn post_file(root: &Path, req: &Request) -> Response {
    let Some(path) = file_path(root, req.path()) else {
        return Response::bad_request("invalid file name");
    };

    let mut file = match File::create(&path).await {
        Ok(file) => file,
        Err(e) => {
            error!(cause = %e, path = %path.display(), "failed to create file");
            return Response::internal_error("failed to create file");
        }
    };

    if let Err(e) = write_all(&mut file, req.body()).await {
        error!(cause = %e, path = %path.display(), "failed to save file");
        return Response::internal_error("failed to save file");
    }

    Response::created().with_version(req.version())
}

async fn write_all(file: &mut File, data: &[u8]) -> io::Result<()> {
    file.write_all(data).await?;
    file.flush().await
}

/// Maps `/files/<name>` onto `root`, refusing names that would leave it.
fn file_path(root: &Path, request_path: &str) -> Option<PathBuf> {
    let name = Path::new(request_path.strip_prefix(FILES_PREFIX)?);

    let mut components = name.components().peekable();
    components.peek()?;
    components.all(|c| matches!(c, Component::Normal(_))).then(|| root.join(name))
}
