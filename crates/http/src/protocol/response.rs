use http::Response;

/// The status line and header fields of a response, before the body is attached.
pub type ResponseHead = Response<()>;
