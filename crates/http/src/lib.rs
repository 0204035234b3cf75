//! HTTP/1.x transport for the canned static-route server
//!
//! This crate reads requests off a TCP connection, hands each one to a synchronous
//! handler and writes the response back, keeping the connection open for as long
//! as HTTP/1.x keep-alive negotiation allows.
//!
//! # Features
//!
//! - HTTP/1.0 and HTTP/1.1 request decoding on top of `httparse`
//! - `Content-Length` request bodies, read in full
//! - Keep-alive and pipelined requests on one connection
//! - Half-close of the send direction when a session ends
//!
//! # Example
//!
//! ```no_run
//! use bytes::Bytes;
//! use canned_http::connection::HttpConnection;
//! use canned_http::handler::make_handler;
//! use canned_http::protocol::{request_keep_alive, set_keep_alive};
//! use http::{Request, Response, StatusCode};
//! use std::sync::Arc;
//! use tokio::net::TcpListener;
//! use tracing::{error, info, warn};
//!
//! #[tokio::main]
//! async fn main() {
//!     let tcp_listener = match TcpListener::bind("127.0.0.1:8080").await {
//!         Ok(tcp_listener) => tcp_listener,
//!         Err(e) => {
//!             error!(cause = %e, "bind server error");
//!             return;
//!         }
//!     };
//!
//!     let handler = Arc::new(make_handler(hello_world));
//!
//!     loop {
//!         let (tcp_stream, _remote_addr) = match tcp_listener.accept().await {
//!             Ok(stream_and_addr) => stream_and_addr,
//!             Err(e) => {
//!                 warn!(cause = %e, "failed to accept");
//!                 continue;
//!             }
//!         };
//!
//!         let handler = handler.clone();
//!
//!         tokio::spawn(async move {
//!             let (reader, writer) = tcp_stream.into_split();
//!             let connection = HttpConnection::new(reader, writer);
//!             if connection.process(handler).await.is_ok() {
//!                 info!("finished process, connection shutdown");
//!             }
//!         });
//!     }
//! }
//!
//! fn hello_world(request: &Request<Bytes>) -> Response<Bytes> {
//!     let mut response = Response::builder()
//!         .status(StatusCode::OK)
//!         .version(request.version())
//!         .body(Bytes::from_static(b"Hello World!"))
//!         .unwrap();
//!     set_keep_alive(&mut response, request_keep_alive(request));
//!     response
//! }
//! ```
//!
//! # Architecture
//!
//! - [`connection`]: the per-connection read, dispatch, write loop
//! - [`protocol`]: request header, keep-alive negotiation and error types
//! - [`codec`]: request decoding and response encoding
//! - [`handler`]: the handler trait
//!
//! # Error Handling
//!
//! - [`protocol::HttpError`]: why a session ended abnormally
//! - [`protocol::ParseError`]: the next request could not be read
//! - [`protocol::SendError`]: the response could not be written
//!
//! # Limitations
//!
//! - HTTP/1.x only, no TLS
//! - No chunked transfer encoding in either direction
//! - Maximum header size: 8KB
//! - Maximum number of headers: 64
//! - Maximum request body: 1MB

pub mod codec;
pub mod connection;
pub mod handler;
pub mod protocol;

mod utils;
pub(crate) use utils::ensure;
