use futures::{SinkExt, StreamExt};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_util::codec::{FramedRead, FramedWrite};
use tracing::{debug, error, info, warn};

use crate::codec::{RequestDecoder, ResponseEncoder};
use crate::handler::Handler;
use crate::protocol::{HttpError, ParseError, Request, Response, SendError};

/// An HTTP connection that reads requests and writes responses
///
/// `HttpConnection` handles the full lifecycle of a connection:
/// - Reading and decoding requests
/// - Invoking the handler, one request at a time
/// - Encoding and flushing responses
///
/// # Type Parameters
///
/// * `R`: The async readable stream type
/// * `W`: The async writable stream type
#[derive(Debug)]
pub struct HttpConnection<R, W> {
    framed_read: FramedRead<R, RequestDecoder>,
    framed_write: FramedWrite<W, ResponseEncoder>,
}

impl<R, W> HttpConnection<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            framed_read: FramedRead::with_capacity(reader, RequestDecoder::new(), 8 * 1024),
            framed_write: FramedWrite::new(writer, ResponseEncoder::new()),
        }
    }

    /// Reads the next request from the stream.
    ///
    /// Returns `Ok(None)` when the peer closed the stream before starting a new
    /// request, which is the normal way for a connection to end.
    pub async fn parse_request(&mut self) -> Result<Option<Request>, ParseError> {
        self.framed_read.next().await.transpose()
    }

    /// Encodes `response` and flushes it to the stream.
    pub async fn send_response(&mut self, response: Response) -> Result<(), SendError> {
        self.framed_write.send(response).await
    }

    /// Serves requests until the peer closes the stream.
    ///
    /// A malformed request is answered with `400 Bad Request` when possible,
    /// then the parse error is returned and the connection should be dropped.
    pub async fn process<H>(mut self, handler: &H) -> Result<(), HttpError>
    where
        H: Handler + ?Sized,
    {
        loop {
            let request = match self.parse_request().await {
                Ok(Some(request)) => request,

                Ok(None) => {
                    info!("cant read more request, break this connection down");
                    return Ok(());
                }

                Err(e) => {
                    error!(cause = %e, "can't receive next request");
                    if !matches!(e, ParseError::Io { .. }) {
                        if let Err(send_error) = self.send_response(Response::bad_request(&e.to_string())).await {
                            warn!(cause = %send_error, "failed to send bad request response");
                        }
                    }
                    return Err(e.into());
                }
            };

            debug!(method = %request.method(), path = request.path(), "new request");

            let response = handler.call(request).await;

            debug!(status = response.status(), "send response");
            self.send_response(response).await?;
        }
    }
}
