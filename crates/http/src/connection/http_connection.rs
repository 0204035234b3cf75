use std::sync::Arc;

use bytes::Bytes;
use futures::{SinkExt, StreamExt};
use http::{Request, Response};
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tokio_util::codec::{FramedRead, FramedWrite};
use tracing::{debug, error, trace};

use crate::codec::{RequestDecoder, ResponseEncoder};
use crate::handler::Handler;
use crate::protocol::{HttpError, ParseError, SendError, response_keep_alive};

/// Initial capacity of the read buffer shared by all requests of a connection
const READ_BUFFER_SIZE: usize = 8 * 1024;

/// An HTTP connection that serves requests until the exchange ends
///
/// `HttpConnection` owns both halves of one client connection and drives the
/// session through [`HttpConnection::process`]:
/// - Reading and decoding the next request into a connection-scoped buffer
/// - Handing it to a [`Handler`]
/// - Writing the response back
/// - Looping while both sides keep the connection alive
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

/// Where a session is in its read, dispatch, write cycle.
#[derive(Debug)]
enum SessionState {
    Reading,
    Dispatching(Request<Bytes>),
    Writing(Response<Bytes>),
    Closing(Result<(), HttpError>),
}

impl<R, W> HttpConnection<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            framed_read: FramedRead::with_capacity(reader, RequestDecoder::new(), READ_BUFFER_SIZE),
            framed_write: FramedWrite::new(writer, ResponseEncoder::new()),
        }
    }

    /// Reads the next request.
    ///
    /// Returns `Ok(None)` when the peer closed the connection between requests. A
    /// connection closed in the middle of a request is an error.
    pub async fn read_request(&mut self) -> Result<Option<Request<Bytes>>, ParseError> {
        self.framed_read.next().await.transpose()
    }

    /// Encodes `response` and flushes it to the peer.
    pub async fn write_response(&mut self, response: Response<Bytes>) -> Result<(), SendError> {
        self.framed_write.send(response).await
    }

    /// Serves requests with `handler` until the session ends, then half-closes the
    /// connection.
    ///
    /// The session ends without error when the peer closes the connection between
    /// requests, or after a response that does not keep the connection alive. Any
    /// read or write failure ends it with that error; it has already been logged.
    pub async fn process<H>(mut self, handler: Arc<H>) -> Result<(), HttpError>
    where
        H: Handler + ?Sized,
    {
        let mut state = SessionState::Reading;
        loop {
            state = match state {
                SessionState::Reading => match self.read_request().await {
                    Ok(Some(request)) => {
                        trace!(method = %request.method(), uri = %request.uri(), "received request");
                        SessionState::Dispatching(request)
                    }
                    Ok(None) => {
                        debug!("peer closed the connection");
                        SessionState::Closing(Ok(()))
                    }
                    Err(e) => {
                        error!(cause = %e, "read");
                        SessionState::Closing(Err(e.into()))
                    }
                },

                SessionState::Dispatching(request) => SessionState::Writing(handler.call(&request)),

                SessionState::Writing(response) => {
                    let must_close = !response_keep_alive(&response);
                    match self.write_response(response).await {
                        Ok(()) if must_close => {
                            debug!("response does not keep the connection alive");
                            SessionState::Closing(Ok(()))
                        }
                        Ok(()) => SessionState::Reading,
                        Err(e) => {
                            error!(cause = %e, "write");
                            SessionState::Closing(Err(e.into()))
                        }
                    }
                }

                SessionState::Closing(result) => {
                    if let Err(e) = self.framed_write.get_mut().shutdown().await {
                        trace!(cause = %e, "shutdown send direction");
                    }
                    return result;
                }
            };
        }
    }
}
