//! Core HTTP protocol abstractions.
//!
//! This module provides the types shared by the codec and the connection loop:
//!
//! - **Request Processing** ([`request`]): [`RequestHeader`], [`RequestTarget`] and [`request_target`]
//! - **Payload sizing** ([`payload`]): [`PayloadSize`] for `Content-Length` framed bodies
//! - **Keep-alive** ([`keep_alive`]): persistence negotiation for HTTP/1.0 and HTTP/1.1
//! - **Error Handling** ([`error`]): [`HttpError`], [`ParseError`] and [`SendError`]
//!
//! Requests and responses themselves are plain `http::Request<Bytes>` and
//! `http::Response<Bytes>`: bodies are small static strings, so they are read and
//! written in one piece.

mod payload;
pub use payload::PayloadSize;

mod request;
pub use request::RequestHeader;
pub use request::RequestTarget;
pub use request::request_target;

mod response;
pub use response::ResponseHead;

mod keep_alive;
pub use keep_alive::is_keep_alive;
pub use keep_alive::request_keep_alive;
pub use keep_alive::response_keep_alive;
pub use keep_alive::set_keep_alive;

mod error;
pub use error::HttpError;
pub use error::ParseError;
pub use error::SendError;
