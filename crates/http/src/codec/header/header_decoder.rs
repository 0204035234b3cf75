//! HTTP header decoder implementation for parsing HTTP request headers
//!
//! This module decodes the request line and header fields from raw bytes into a
//! [`RequestHeader`], and works out how many body bytes follow.
//!
//! # Limits
//!
//! - Maximum number of headers: 64
//! - Maximum header size: 8KB
//! - Only HTTP/1.0 and HTTP/1.1
//! - Request bodies must be framed by `Content-Length`; `Transfer-Encoding` is rejected
//!
//! # Implementation Details
//!
//! 1. Parse raw bytes using `httparse`
//! 2. Record header name/value byte ranges
//! 3. Split the header section off the buffer and build `http::Request` from slices of it
//! 4. Determine the payload size from `Content-Length`

use std::mem::MaybeUninit;

use bytes::BytesMut;
use http::header::{CONTENT_LENGTH, TRANSFER_ENCODING};
use http::{HeaderName, HeaderValue, Request};
use httparse::{Error, Status};
use tokio_util::codec::Decoder;
use tracing::trace;

use crate::ensure;

use crate::protocol::{ParseError, PayloadSize, RequestHeader, RequestTarget};

/// Maximum number of headers allowed in a request
const MAX_HEADER_NUM: usize = 64;

/// Maximum size in bytes allowed for the entire header section
const MAX_HEADER_BYTES: usize = 8 * 1024;

/// Decoder for HTTP request headers implementing the [`Decoder`] trait.
///
/// On success the header section is removed from the source buffer; any body or
/// pipelined request bytes stay behind for the next stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderDecoder;

impl Decoder for HeaderDecoder {
    type Item = (RequestHeader, PayloadSize);
    type Error = ParseError;

    /// Attempts to decode HTTP headers from the provided bytes buffer.
    ///
    /// - `Ok(Some((header, payload_size)))` if a complete header was parsed
    /// - `Ok(None)` if more data is needed
    /// - `Err(ParseError)` if parsing failed
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        // "GET / HTTP/1.1\r\n" is the shortest request line we can complete on
        if src.len() < 14 {
            return Ok(None);
        }

        let mut req = httparse::Request::new(&mut []);
        // SAFETY: an array of `MaybeUninit` does not require initialization.
        let mut headers: [MaybeUninit<httparse::Header>; MAX_HEADER_NUM] =
            unsafe { MaybeUninit::uninit().assume_init() };

        let parsed_result = req.parse_with_uninit_headers(src, &mut headers).map_err(|e| match e {
            Error::TooManyHeaders => ParseError::too_many_headers(MAX_HEADER_NUM),
            Error::Version => ParseError::InvalidVersion(None),
            e => ParseError::invalid_header(e.to_string()),
        });

        match parsed_result? {
            Status::Complete(body_offset) => {
                trace!(header_size = body_offset, "parsed request header");
                ensure!(body_offset <= MAX_HEADER_BYTES, ParseError::too_large_header(body_offset, MAX_HEADER_BYTES));

                let header_count = req.headers.len();
                ensure!(header_count <= MAX_HEADER_NUM, ParseError::too_many_headers(header_count));

                let mut header_index: [HeaderIndex; MAX_HEADER_NUM] = EMPTY_HEADER_INDEX_ARRAY;
                HeaderIndex::record(src, req.headers, &mut header_index);

                let version = match req.version {
                    Some(0) => http::Version::HTTP_10,
                    Some(1) => http::Version::HTTP_11,
                    _ => return Err(ParseError::InvalidVersion(req.version)),
                };

                let target = req.path.ok_or(ParseError::InvalidUri)?;
                let mut header_builder = Request::builder()
                    .method(req.method.ok_or(ParseError::InvalidMethod)?)
                    .uri(target)
                    .version(version)
                    .extension(RequestTarget::new(target));

                let headers = header_builder.headers_mut().ok_or(ParseError::InvalidUri)?;
                headers.reserve(header_count);

                let header_bytes = src.split_to(body_offset).freeze();
                for index in &header_index[..header_count] {
                    let name = HeaderName::from_bytes(&header_bytes[index.name.0..index.name.1])
                        .map_err(|e| ParseError::invalid_header(e.to_string()))?;
                    let value = HeaderValue::from_maybe_shared(header_bytes.slice(index.value.0..index.value.1))
                        .map_err(|e| ParseError::invalid_header(e.to_string()))?;

                    headers.append(name, value);
                }

                // the builder only fails on an invalid method or uri, both checked by httparse
                // except for uri forms `http::Uri` refuses
                let header = RequestHeader::from(header_builder.body(()).map_err(|_e| ParseError::InvalidUri)?);
                let payload_size = parse_payload(&header)?;

                Ok(Some((header, payload_size)))
            }
            Status::Partial => {
                ensure!(src.len() <= MAX_HEADER_BYTES, ParseError::too_large_header(src.len(), MAX_HEADER_BYTES));
                Ok(None)
            }
        }
    }
}

/// Stores the byte range positions of a header's name and value within the original buffer.
#[derive(Clone, Copy)]
struct HeaderIndex {
    name: (usize, usize),
    value: (usize, usize),
}

const EMPTY_HEADER_INDEX: HeaderIndex = HeaderIndex { name: (0, 0), value: (0, 0) };

const EMPTY_HEADER_INDEX_ARRAY: [HeaderIndex; MAX_HEADER_NUM] = [EMPTY_HEADER_INDEX; MAX_HEADER_NUM];

impl HeaderIndex {
    fn record(bytes: &[u8], headers: &[httparse::Header<'_>], indices: &mut [HeaderIndex]) {
        let bytes_ptr = bytes.as_ptr() as usize;
        for (header, indices) in headers.iter().zip(indices.iter_mut()) {
            let name_start = header.name.as_ptr() as usize - bytes_ptr;
            let name_end = name_start + header.name.len();
            indices.name = (name_start, name_end);
            let value_start = header.value.as_ptr() as usize - bytes_ptr;
            let value_end = value_start + header.value.len();
            indices.value = (value_start, value_end);
        }
    }
}

/// Determines how many body bytes follow the header section.
///
/// refer: <https://www.rfc-editor.org/rfc/rfc9112.html#name-message-body-length>
///
/// Any `Transfer-Encoding` is refused. Repeated `Content-Length` fields must agree.
fn parse_payload(header: &RequestHeader) -> Result<PayloadSize, ParseError> {
    if let Some(te_value) = header.headers().get(TRANSFER_ENCODING) {
        return Err(ParseError::unsupported_transfer_encoding(String::from_utf8_lossy(te_value.as_bytes())));
    }

    let mut length = None;
    for cl_value in header.headers().get_all(CONTENT_LENGTH) {
        let cl_str = cl_value.to_str().map_err(|_e| ParseError::invalid_content_length("value can't to_str"))?;

        let current = cl_str
            .trim()
            .parse::<u64>()
            .map_err(|_e| ParseError::invalid_content_length(format!("value {cl_str} is not u64")))?;

        match length {
            Some(previous) if previous != current => {
                return Err(ParseError::invalid_content_length(format!("conflicting values {previous} and {current}")));
            }
            _ => length = Some(current),
        }
    }

    Ok(length.map_or_else(PayloadSize::new_empty, PayloadSize::new_length))
}
