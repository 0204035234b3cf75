//! Connection persistence negotiation for HTTP/1.0 and HTTP/1.1.
//!
//! The rules follow RFC 9112 section 9.3:
//!
//! - an HTTP/1.1 message is persistent unless a `Connection` option is `close`
//! - an HTTP/1.0 message is persistent only if a `Connection` option is `keep-alive`
//!
//! Options are comma separated and compared case-insensitively.

use http::header::CONNECTION;
use http::{HeaderMap, HeaderValue, Request, Response, Version};

const CLOSE: &str = "close";
const KEEP_ALIVE: &str = "keep-alive";

/// Returns true if a message with this version and headers keeps the connection open.
pub fn is_keep_alive(version: Version, headers: &HeaderMap) -> bool {
    match version {
        Version::HTTP_11 => !has_connection_option(headers, CLOSE),
        Version::HTTP_10 => has_connection_option(headers, KEEP_ALIVE),
        _ => false,
    }
}

#[inline]
pub fn request_keep_alive<T>(request: &Request<T>) -> bool {
    is_keep_alive(request.version(), request.headers())
}

#[inline]
pub fn response_keep_alive<T>(response: &Response<T>) -> bool {
    is_keep_alive(response.version(), response.headers())
}

/// Rewrites the `Connection` header of `response` so that it signals `keep_alive`
/// under the response's own version.
///
/// Options other than `close` and `keep-alive` are preserved. Only the option the
/// version does not imply by default is written: `close` for HTTP/1.1,
/// `keep-alive` for HTTP/1.0.
pub fn set_keep_alive<T>(response: &mut Response<T>, keep_alive: bool) {
    let version = response.version();
    let headers = response.headers_mut();

    let mut options: Vec<String> = headers
        .get_all(CONNECTION)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|option| !option.is_empty())
        .filter(|option| !option.eq_ignore_ascii_case(CLOSE) && !option.eq_ignore_ascii_case(KEEP_ALIVE))
        .map(str::to_owned)
        .collect();

    match (version, keep_alive) {
        (Version::HTTP_11, false) => options.push(CLOSE.to_owned()),
        (Version::HTTP_10, true) => options.push(KEEP_ALIVE.to_owned()),
        _ => {}
    }

    headers.remove(CONNECTION);
    if options.is_empty() {
        return;
    }

    // options come from valid header values or the constants above
    if let Ok(value) = HeaderValue::from_str(&options.join(", ")) {
        headers.insert(CONNECTION, value);
    }
}

fn has_connection_option(headers: &HeaderMap, option: &str) -> bool {
    headers
        .get_all(CONNECTION)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .any(|candidate| candidate.trim().eq_ignore_ascii_case(option))
}
