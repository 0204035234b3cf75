//! Maps a request onto the route table.
//!
//! The method is never looked at: any request whose target equals a route path
//! gets that route's body. Both matched and unmatched requests are answered with
//! `400 Bad Request`, a `text/html` content type and the request's keep-alive
//! choice.

use std::sync::Arc;

use bytes::Bytes;
use canned_http::handler::Handler;
use canned_http::protocol::{request_keep_alive, request_target, set_keep_alive};
use http::header::{CONTENT_TYPE, SERVER};
use http::{HeaderValue, Request, Response, StatusCode, Version};
use tracing::debug;

use crate::router::RouteTable;

/// Body of the response sent when no route matches.
pub const ILLEGAL_REQUEST_TARGET: &str = "Illegal request-target";

/// Value of the `Server` header carried by the fallback response.
pub const SERVER_NAME: &str = concat!("canned-http/", env!("CARGO_PKG_VERSION"));

/// Answers requests from a shared, read-only [`RouteTable`].
#[derive(Debug, Clone)]
pub struct Dispatcher {
    routes: Arc<RouteTable>,
}

impl Dispatcher {
    pub fn new(routes: impl Into<Arc<RouteTable>>) -> Self {
        Self { routes: routes.into() }
    }

    pub fn dispatch<T>(&self, request: &Request<T>) -> Response<Bytes> {
        dispatch(request, &self.routes)
    }
}

impl Handler for Dispatcher {
    fn call(&self, req: &Request<Bytes>) -> Response<Bytes> {
        self.dispatch(req)
    }
}

/// Builds the response for `request`: the first matching route's body, or the
/// fallback response.
pub fn dispatch<T>(request: &Request<T>, routes: &RouteTable) -> Response<Bytes> {
    let target = request_target(request);
    let keep_alive = request_keep_alive(request);

    match routes.lookup(&target) {
        Some(body) => {
            debug!(method = %request.method(), target = %target, "route matched");
            // matched routes answer 400 as well, clients rely on the status
            build_response(request.version(), keep_alive, Bytes::copy_from_slice(body.as_bytes()))
        }
        None => {
            debug!(method = %request.method(), target = %target, "no route matched");
            let body = Bytes::from_static(ILLEGAL_REQUEST_TARGET.as_bytes());
            let mut response = build_response(request.version(), keep_alive, body);
            response.headers_mut().insert(SERVER, HeaderValue::from_static(SERVER_NAME));
            response
        }
    }
}

fn build_response(version: Version, keep_alive: bool, body: Bytes) -> Response<Bytes> {
    let mut response = Response::new(body);
    *response.status_mut() = StatusCode::BAD_REQUEST;
    *response.version_mut() = version;
    response.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static("text/html"));
    set_keep_alive(&mut response, keep_alive);
    response
}
