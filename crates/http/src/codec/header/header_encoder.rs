//! HTTP header encoder implementation for serializing HTTP response headers
//!
//! Writes the status line and header fields of a response, and sets the
//! `Content-Length` header from the size of the body that follows.

use crate::protocol::{PayloadSize, ResponseHead, SendError};

use bytes::{BufMut, BytesMut};

use http::{HeaderValue, Version, header};
use std::io;
use std::io::Write;
use tokio_util::codec::Encoder;
use tracing::error;

/// Initial buffer size allocated for header serialization
const INIT_HEADER_SIZE: usize = 4 * 1024;

/// Encoder for HTTP response headers implementing the [`Encoder`] trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderEncoder;

impl Encoder<(ResponseHead, PayloadSize)> for HeaderEncoder {
    type Error = SendError;

    /// Encodes HTTP response headers into the provided bytes buffer.
    ///
    /// # Errors
    ///
    /// Returns error if the response version is neither HTTP/1.0 nor HTTP/1.1.
    fn encode(&mut self, item: (ResponseHead, PayloadSize), dst: &mut BytesMut) -> Result<(), Self::Error> {
        let (mut header, payload_size) = item;

        let version = match header.version() {
            Version::HTTP_11 => "HTTP/1.1",
            Version::HTTP_10 => "HTTP/1.0",
            v => {
                error!(http_version = ?v, "unsupported http version");
                return Err(SendError::unsupported_version(format!("{v:?}")));
            }
        };

        dst.reserve(INIT_HEADER_SIZE);
        write!(
            FastWrite(dst),
            "{} {} {}\r\n",
            version,
            header.status().as_str(),
            header.status().canonical_reason().unwrap_or_default()
        )?;

        let content_length = match payload_size {
            PayloadSize::Length(n) => HeaderValue::from(n),
            PayloadSize::Empty => HeaderValue::from_static("0"),
        };
        header.headers_mut().insert(header::CONTENT_LENGTH, content_length);

        for (header_name, header_value) in header.headers() {
            dst.put_slice(header_name.as_ref());
            dst.put_slice(b": ");
            dst.put_slice(header_value.as_ref());
            dst.put_slice(b"\r\n");
        }
        dst.put_slice(b"\r\n");
        Ok(())
    }
}

/// Writer over `BytesMut` used for the formatted status line.
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
    use http::{Response, StatusCode};

    #[test]
    fn encode_http11_head() {
        let head = Response::builder()
            .status(StatusCode::BAD_REQUEST)
            .header(header::CONTENT_TYPE, "text/html")
            .body(())
            .unwrap();

        let mut dst = BytesMut::new();
        HeaderEncoder.encode((head, PayloadSize::Length(3)), &mut dst).unwrap();

        assert_eq!(&dst[..], b"HTTP/1.1 400 Bad Request\r\ncontent-type: text/html\r\ncontent-length: 3\r\n\r\n");
    }

    #[test]
    fn encode_http10_head_replaces_content_length() {
        let head = Response::builder()
            .version(Version::HTTP_10)
            .status(StatusCode::OK)
            .header(header::CONTENT_LENGTH, "99")
            .body(())
            .unwrap();

        let mut dst = BytesMut::new();
        HeaderEncoder.encode((head, PayloadSize::Empty), &mut dst).unwrap();

        assert_eq!(&dst[..], b"HTTP/1.0 200 OK\r\ncontent-length: 0\r\n\r\n");
    }

    #[test]
    fn reject_http2_head() {
        let head = Response::builder().version(Version::HTTP_2).body(()).unwrap();

        let result = HeaderEncoder.encode((head, PayloadSize::Empty), &mut BytesMut::new());
        assert!(matches!(result, Err(SendError::UnsupportedVersion { .. })));
    }
}
