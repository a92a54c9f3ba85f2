//! Request routing for the pagination service.

use axum::{
    body::Body,
    extract::{Query, State},
    http::{Method, Response, Uri},
    response::IntoResponse,
    routing::get,
    Router,
};
use std::collections::HashMap;
use std::sync::Arc;

use crate::config::Config;
use crate::context::RequestContext;
use crate::error::{ErrorCode, PagingError};
use crate::handlers;

/// Application state shared between handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

/// Creates the main router for the service.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/pagination",
            get(pagination_handler).fallback(method_not_allowed),
        )
        .fallback(not_found)
        .with_state(state)
}

/// Handler for page window requests.
async fn pagination_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
) -> Response<Body> {
    let ctx = RequestContext::new(method, uri, query);

    match handlers::get_pagination(&ctx, &state.config).await {
        Ok(response) => response,
        Err(e) => e.with_request_id(&ctx.request_id).into_response(),
    }
}

async fn method_not_allowed(method: Method) -> Response<Body> {
    PagingError::with_message(
        ErrorCode::UnsupportedHttpVerb,
        format!("Method {method} is not supported on this resource."),
    )
    .into_response()
}

async fn not_found(uri: Uri) -> Response<Body> {
    PagingError::with_message(
        ErrorCode::ResourceNotFound,
        format!("No resource at {}.", uri.path()),
    )
    .into_response()
}
