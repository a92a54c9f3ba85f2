//! Pagination window handlers.

use axum::{
    body::Body,
    http::{header, HeaderValue, Response, StatusCode},
};
use tracing::debug;

use crate::config::Config;
use crate::context::{RequestContext, WindowParams};
use crate::error::{ErrorCode, PagingError, PagingResult};

use super::{build_response, common_headers};

/// GET /pagination - Compute the page window and links for a listing page.
pub async fn get_pagination(ctx: &RequestContext, config: &Config) -> PagingResult<Response<Body>> {
    let params = WindowParams::from_context(ctx, config)?;
    let pagination = params.paginate()?;

    debug!(
        request_id = %ctx.request_id,
        page = pagination.page,
        total_pages = pagination.total_pages,
        window = pagination.window.len(),
        "Computed page window"
    );

    let json = serde_json::to_vec(&pagination).map_err(|e| {
        PagingError::with_message(ErrorCode::InternalError, format!("Failed to encode response: {e}"))
    })?;

    let mut headers = common_headers(ctx);
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Ok(build_response(StatusCode::OK, headers, Body::from(json)))
}
