//! HTTP request header handling implementation.
//!
//! [`RequestHeader`] holds a decoded request line and header fields until the body
//! has been read. [`RequestTarget`] keeps the request-target as the client sent it,
//! since `http::Uri` renders some forms back differently.

use std::borrow::Cow;

use http::{HeaderMap, Request, Uri, Version};

/// Represents a decoded HTTP request header, before its body is attached.
#[derive(Debug)]
pub struct RequestHeader {
    inner: Request<()>,
}

impl RequestHeader {
    /// Attaches a body to this header, converting it into a full `Request<T>`.
    pub fn body<T>(self, body: T) -> Request<T> {
        self.inner.map(|_| body)
    }

    pub fn version(&self) -> Version {
        self.inner.version()
    }

    pub fn headers(&self) -> &HeaderMap {
        self.inner.headers()
    }
}

impl From<Request<()>> for RequestHeader {
    #[inline]
    fn from(inner: Request<()>) -> Self {
        Self { inner }
    }
}

/// The request-target exactly as it appeared on the request line.
///
/// Stored as a request extension by the decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTarget(String);

impl RequestTarget {
    pub fn new(target: impl Into<String>) -> Self {
        Self(target.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Returns the request-target of `request` as sent by the client.
///
/// Requests from the decoder carry a [`RequestTarget`] extension, which is used
/// verbatim. Otherwise origin-form (`/path?query`) and asterisk-form (`*`)
/// targets are borrowed from the uri and other forms are rendered from their
/// parsed components.
pub fn request_target<T>(request: &Request<T>) -> Cow<'_, str> {
    match request.extensions().get::<RequestTarget>() {
        Some(target) => Cow::Borrowed(target.as_str()),
        None => uri_target(request.uri()),
    }
}

fn uri_target(uri: &Uri) -> Cow<'_, str> {
    match (uri.scheme(), uri.authority(), uri.path_and_query()) {
        (None, None, Some(path_and_query)) => Cow::Borrowed(path_and_query.as_str()),
        _ => Cow::Owned(uri.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(uri: &str) -> Request<()> {
        Request::builder().uri(uri).body(()).unwrap()
    }

    #[test]
    fn target_keeps_query_string() {
        assert_eq!(request_target(&request("/index/?a=1&b=2&a=3")), "/index/?a=1&b=2&a=3");
        assert_eq!(request_target(&request("/test")), "/test");
    }

    #[test]
    fn target_of_asterisk_form() {
        assert_eq!(request_target(&request("*")), "*");
    }

    #[test]
    fn target_extension_wins_over_uri() {
        let request = Request::builder()
            .uri("http://example.com")
            .extension(RequestTarget::new("http://example.com"))
            .body(())
            .unwrap();

        assert_eq!(request_target(&request), "http://example.com");
    }

    #[test]
    fn header_attaches_body() {
        let header = RequestHeader::from(Request::builder().uri("/foo").version(Version::HTTP_10).body(()).unwrap());
        assert_eq!(header.version(), Version::HTTP_10);

        let request = header.body("payload");
        assert_eq!(request.uri(), "/foo");
        assert_eq!(request.body(), &"payload");
    }
}
