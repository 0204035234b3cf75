//! HTTP connection handling module
//!
//! [`HttpConnection`] runs one client session: it reads requests through a
//! buffer that lives as long as the connection, dispatches each one to a
//! [`Handler`](crate::handler::Handler), writes the response, and repeats while the
//! response keeps the connection alive.
//!
//! Every read or write failure ends the session. The send direction is always
//! shut down before [`HttpConnection::process`] returns.

mod http_connection;

pub use http_connection::HttpConnection;
