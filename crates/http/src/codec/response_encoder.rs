use crate::codec::header::HeaderEncoder;
use crate::protocol::{PayloadSize, SendError};
use bytes::{Bytes, BytesMut};
use http::Response;
use tokio_util::codec::Encoder;

/// Encodes a complete response: status line, headers with `Content-Length`, then the body.
#[derive(Debug, Default)]
pub struct ResponseEncoder {
    header_encoder: HeaderEncoder,
}

impl ResponseEncoder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Encoder<Response<Bytes>> for ResponseEncoder {
    type Error = SendError;

    fn encode(&mut self, item: Response<Bytes>, dst: &mut BytesMut) -> Result<(), Self::Error> {
        let (parts, body) = item.into_parts();
        let payload_size = PayloadSize::new_length(body.len() as u64);

        self.header_encoder.encode((Response::from_parts(parts, ()), payload_size), dst)?;
        dst.extend_from_slice(&body);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{StatusCode, header};

    #[test]
    fn encode_full_response() {
        let response = Response::builder()
            .status(StatusCode::BAD_REQUEST)
            .header(header::CONTENT_TYPE, "text/html")
            .body(Bytes::from_static(b"bar"))
            .unwrap();

        let mut dst = BytesMut::new();
        ResponseEncoder::new().encode(response, &mut dst).unwrap();

        assert_eq!(&dst[..], b"HTTP/1.1 400 Bad Request\r\ncontent-type: text/html\r\ncontent-length: 3\r\n\r\nbar");
    }

    #[test]
    fn encode_empty_body() {
        let response = Response::builder().status(StatusCode::OK).body(Bytes::new()).unwrap();

        let mut dst = BytesMut::new();
        ResponseEncoder::new().encode(response, &mut dst).unwrap();

        assert_eq!(&dst[..], b"HTTP/1.1 200 OK\r\ncontent-length: 0\r\n\r\n");
    }
}
