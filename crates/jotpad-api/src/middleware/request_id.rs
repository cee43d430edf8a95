//! Request correlation ids.

use axum::http::Request;
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Header carrying the request id, in both directions.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Generates time-ordered UUIDv7 request ids.
#[derive(Clone, Copy, Default)]
pub struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

/// Read the request id set by `SetRequestIdLayer`, if any.
pub fn request_id_of<B>(request: &Request<B>) -> Option<&str> {
    request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn test_generates_v7_ids() {
        let request = Request::new(Body::empty());
        let id = MakeRequestUuidV7
            .make_request_id(&request)
            .expect("id should be generated");
        let parsed = Uuid::parse_str(id.header_value().to_str().unwrap()).unwrap();
        assert_eq!(parsed.get_version_num(), 7);
    }

    #[test]
    fn test_ids_are_unique() {
        let request = Request::new(Body::empty());
        let mut maker = MakeRequestUuidV7;
        let a = maker.make_request_id(&request).unwrap();
        let b = maker.make_request_id(&request).unwrap();
        assert_ne!(a.header_value(), b.header_value());
    }

    #[test]
    fn test_request_id_of_reads_header() {
        let request = Request::builder()
            .header(REQUEST_ID_HEADER, "abc")
            .body(Body::empty())
            .unwrap();
        assert_eq!(request_id_of(&request), Some("abc"));
        assert_eq!(request_id_of(&Request::new(Body::empty())), None);
    }
}
