//! Request handler trait and utilities.
//!
//! A [`Handler`] turns a fully read request into a response. It runs inline on the
//! connection task between reading and writing, so it must not block on I/O.

use bytes::Bytes;
use http::{Request, Response};

#[cfg_attr(test, mockall::automock)]
pub trait Handler: Send + Sync {
    fn call(&self, req: &Request<Bytes>) -> Response<Bytes>;
}

#[derive(Debug)]
pub struct HandlerFn<F> {
    f: F,
}

impl<F> Handler for HandlerFn<F>
where
    F: Fn(&Request<Bytes>) -> Response<Bytes> + Send + Sync,
{
    fn call(&self, req: &Request<Bytes>) -> Response<Bytes> {
        (self.f)(req)
    }
}

/// Wraps a plain function or closure as a [`Handler`].
pub fn make_handler<F>(f: F) -> HandlerFn<F>
where
    F: Fn(&Request<Bytes>) -> Response<Bytes> + Send + Sync,
{
    HandlerFn { f }
}
