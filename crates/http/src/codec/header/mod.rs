//! HTTP header processing module for encoding and decoding headers
//!
//! - [`HeaderDecoder`]: decodes the request line and header fields, and sizes the body
//! - [`HeaderEncoder`]: encodes the status line and header fields of a response

mod header_decoder;
mod header_encoder;

pub use header_decoder::HeaderDecoder;
pub use header_encoder::HeaderEncoder;
