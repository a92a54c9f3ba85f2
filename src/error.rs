//! Pagination service error types and error response formatting.

use axum::{
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Error codes surfaced by the pagination service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Window computation
    InvalidArgument,

    // Request errors
    InvalidQueryParameterValue,
    MissingRequiredQueryParameter,
    OutOfRangeQueryParameterValue,
    ResourceNotFound,
    UnsupportedHttpVerb,

    // Server errors
    InternalError,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidArgument => "InvalidArgument",
            ErrorCode::InvalidQueryParameterValue => "InvalidQueryParameterValue",
            ErrorCode::MissingRequiredQueryParameter => "MissingRequiredQueryParameter",
            ErrorCode::OutOfRangeQueryParameterValue => "OutOfRangeQueryParameterValue",
            ErrorCode::ResourceNotFound => "ResourceNotFound",
            ErrorCode::UnsupportedHttpVerb => "UnsupportedHttpVerb",
            ErrorCode::InternalError => "InternalError",
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            ErrorCode::InvalidArgument
            | ErrorCode::InvalidQueryParameterValue
            | ErrorCode::MissingRequiredQueryParameter
            | ErrorCode::OutOfRangeQueryParameterValue => StatusCode::BAD_REQUEST,

            // 404 Not Found
            ErrorCode::ResourceNotFound => StatusCode::NOT_FOUND,

            // 405 Method Not Allowed
            ErrorCode::UnsupportedHttpVerb => StatusCode::METHOD_NOT_ALLOWED,

            // 500 Internal Server Error
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the default message for this error code.
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::InvalidArgument => "One of the pagination arguments is invalid.",
            ErrorCode::InvalidQueryParameterValue => {
                "An invalid value was specified for one of the query parameters."
            }
            ErrorCode::MissingRequiredQueryParameter => {
                "A required query parameter was not specified."
            }
            ErrorCode::OutOfRangeQueryParameterValue => {
                "A query parameter is outside the permitted range."
            }
            ErrorCode::ResourceNotFound => "The specified resource does not exist.",
            ErrorCode::UnsupportedHttpVerb => {
                "The resource doesn't support the specified HTTP verb."
            }
            ErrorCode::InternalError => {
                "The server encountered an internal error. Please retry the request."
            }
        }
    }
}

/// Pagination error with code and message.
#[derive(Debug, Error)]
#[error("{code:?}: {message}")]
pub struct PagingError {
    pub code: ErrorCode,
    pub message: String,
    pub request_id: Option<String>,
}

impl PagingError {
    /// Creates a new error with the given code and default message.
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.default_message().to_string(),
            code,
            request_id: None,
        }
    }

    /// Creates a new error with a custom message.
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            request_id: None,
        }
    }

    /// Sets the request ID for this error.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }
}

/// JSON body of an error response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody<'a> {
    code: &'static str,
    message: &'a str,
    request_id: &'a str,
    time: String,
}

impl IntoResponse for PagingError {
    fn into_response(self) -> Response {
        let status = self.code.status_code();
        let request_id = self
            .request_id
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        let time = chrono::Utc::now()
            .format("%Y-%m-%dT%H:%M:%S%.3fZ")
            .to_string();

        let body = ErrorBody {
            code: self.code.as_str(),
            message: &self.message,
            request_id: &request_id,
            time,
        };

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert("x-error-code", HeaderValue::from_static(self.code.as_str()));
        if let Ok(value) = HeaderValue::from_str(&request_id) {
            headers.insert("x-request-id", value);
        }

        (status, headers, Json(body)).into_response()
    }
}

/// Result type alias for pagination operations.
pub type PagingResult<T> = Result<T, PagingError>;
