//! Request handlers for the pagination service.

mod pagination;

pub use pagination::*;

use axum::body::Body;
use axum::http::{HeaderMap, HeaderValue, Response, StatusCode};

use crate::context::RequestContext;

/// Creates the headers every response carries.
pub fn common_headers(ctx: &RequestContext) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(&ctx.request_id) {
        headers.insert("x-request-id", value);
    }
    headers.insert(
        "server",
        HeaderValue::from_static(concat!("cert-paging/", env!("CARGO_PKG_VERSION"))),
    );
    headers
}

/// Builds a response with the given status, headers, and body.
pub fn build_response(status: StatusCode, headers: HeaderMap, body: Body) -> Response<Body> {
    let mut response = Response::new(body);
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    response
}
