//! HTTP codec module for encoding and decoding HTTP messages
//!
//! This module plugs into `tokio_util::codec::{FramedRead, FramedWrite}`:
//!
//! - [`RequestDecoder`]: decodes complete incoming requests (`http::Request<Bytes>`)
//!   - header parsing via the `header` module
//! - [`ResponseEncoder`]: encodes complete outgoing responses (`http::Response<Bytes>`)
//!
//! # Example
//!
//! ```
//! use canned_http::codec::{RequestDecoder, ResponseEncoder};
//! use tokio_util::codec::{Decoder, Encoder};
//! use bytes::{Bytes, BytesMut};
//!
//! let mut request_buffer = BytesMut::from("GET / HTTP/1.1\r\n\r\n");
//! let request = RequestDecoder::new().decode(&mut request_buffer).unwrap().unwrap();
//!
//! let response = http::Response::builder().version(request.version()).body(Bytes::from_static(b"bar")).unwrap();
//! let mut response_buffer = BytesMut::new();
//! ResponseEncoder::new().encode(response, &mut response_buffer).unwrap();
//! assert!(response_buffer.ends_with(b"\r\n\r\nbar"));
//! ```

mod header;
mod request_decoder;
mod response_encoder;

pub use request_decoder::RequestDecoder;
pub use response_encoder::ResponseEncoder;
