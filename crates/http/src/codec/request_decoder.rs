//! HTTP request decoder module
//!
//! Decodes one complete request, header section and `Content-Length` body, per
//! call that has enough buffered data. Bytes past the end of a request stay in the
//! buffer, so pipelined requests come out one after another in arrival order.
//!
//! # Example
//!
//! ```
//! use canned_http::codec::RequestDecoder;
//! use tokio_util::codec::Decoder;
//! use bytes::BytesMut;
//!
//! let mut decoder = RequestDecoder::new();
//! let mut buffer = BytesMut::from("GET /test HTTP/1.1\r\nHost: localhost\r\n\r\n");
//! let request = decoder.decode(&mut buffer).unwrap().unwrap();
//! assert_eq!(request.uri().path(), "/test");
//! ```

use crate::codec::header::HeaderDecoder;
use crate::ensure;
use crate::protocol::{ParseError, RequestHeader};
use bytes::{Bytes, BytesMut};
use http::Request;
use std::io;
use tokio_util::codec::Decoder;
use tracing::trace;

/// Maximum size in bytes allowed for a request body
const MAX_BODY_BYTES: u64 = 1024 * 1024;

/// A decoder for HTTP requests that handles both headers and body
///
/// The decoder operates in two phases:
/// 1. Header parsing: decodes the request header using [`HeaderDecoder`]
/// 2. Body collection: waits until the whole `Content-Length` body is buffered
///
/// # State Machine
///
/// - `pending == None`: currently parsing headers
/// - `pending == Some(_)`: header parsed, waiting for body bytes
#[derive(Debug, Default)]
pub struct RequestDecoder {
    header_decoder: HeaderDecoder,
    pending: Option<(RequestHeader, usize)>,
}

impl RequestDecoder {
    /// Creates a new `RequestDecoder` instance
    pub fn new() -> Self {
        Self::default()
    }
}

impl Decoder for RequestDecoder {
    type Item = Request<Bytes>;
    type Error = ParseError;

    /// Attempts to decode an HTTP request from the provided buffer
    ///
    /// - `Ok(Some(request))`: a complete request, body included
    /// - `Ok(None)`: need more data to proceed
    /// - `Err(_)`: the bytes are not a request we accept
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if self.pending.is_none() {
            let Some((header, payload_size)) = self.header_decoder.decode(src)? else {
                return Ok(None);
            };

            let length = payload_size.len();
            ensure!(length <= MAX_BODY_BYTES, ParseError::too_large_body(length, MAX_BODY_BYTES));
            let length = usize::try_from(length).map_err(|_e| ParseError::too_large_body(length, MAX_BODY_BYTES))?;
            self.pending = Some((header, length));
        }

        match self.pending.take() {
            Some((header, length)) if src.len() >= length => {
                let body = src.split_to(length).freeze();
                trace!(body_size = length, "decoded request");
                Ok(Some(header.body(body)))
            }
            pending => {
                if let Some((_, length)) = &pending {
                    src.reserve(length - src.len());
                }
                self.pending = pending;
                Ok(None)
            }
        }
    }

    /// Decodes what is left once the peer has closed its side.
    ///
    /// An empty buffer with no request in progress is a clean end of stream. A
    /// partial header, or a header whose body never fully arrived, is an
    /// unexpected EOF.
    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        match self.decode(src)? {
            Some(request) => Ok(Some(request)),
            None if src.is_empty() && self.pending.is_none() => Ok(None),
            None => {
                self.pending = None;
                Err(ParseError::io(io::ErrorKind::UnexpectedEof))
            }
        }
    }
}
