//! Request context extraction and handling.

use axum::http::{Method, Uri};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

use crate::config::Config;
use crate::error::{ErrorCode, PagingError, PagingResult};
use crate::pagination::{Pagination, WindowShape};

/// Extracted request context containing all relevant information.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique request ID.
    pub request_id: String,
    /// HTTP method.
    pub method: Method,
    /// Request URI.
    pub uri: Uri,
    /// Query parameters.
    pub query_params: HashMap<String, String>,
    /// Request timestamp.
    pub timestamp: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(method: Method, uri: Uri, query_params: HashMap<String, String>) -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            method,
            uri,
            query_params,
            timestamp: Utc::now(),
        }
    }

    /// Returns the value of a query parameter. Blank values count as absent.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query_params
            .get(name)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    }

    /// Returns a query parameter parsed as a signed integer.
    pub fn int_param(&self, name: &str) -> PagingResult<Option<i64>> {
        self.query_param(name)
            .map(|value| {
                value.parse::<i64>().map_err(|_| {
                    debug!(name, value, "Rejected non-integer query parameter");
                    PagingError::with_message(
                        ErrorCode::InvalidQueryParameterValue,
                        format!("Query parameter '{name}' must be an integer, got '{value}'."),
                    )
                })
            })
            .transpose()
    }

    /// Returns a query parameter parsed as a non-negative count.
    pub fn uint_param(&self, name: &str) -> PagingResult<Option<u64>> {
        self.query_param(name)
            .map(|value| {
                value.parse::<u64>().map_err(|_| {
                    debug!(name, value, "Rejected non-count query parameter");
                    PagingError::with_message(
                        ErrorCode::InvalidQueryParameterValue,
                        format!(
                            "Query parameter '{name}' must be a non-negative integer, got '{value}'."
                        ),
                    )
                })
            })
            .transpose()
    }
}

/// Where the page count comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCount {
    Pages(i64),
    Items { total_items: u64, page_size: u64 },
}

/// Query parameters for a window request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowParams {
    pub page: i64,
    pub shape: WindowShape,
    pub count: PageCount,
}

impl WindowParams {
    /// Parses `page`, `radius` or `size`, and `total_pages` or
    /// `total_items` with `page_size`.
    pub fn from_context(ctx: &RequestContext, config: &Config) -> PagingResult<Self> {
        let page = ctx.int_param("page")?.unwrap_or(1);

        let shape = match (ctx.int_param("radius")?, ctx.int_param("size")?) {
            (Some(_), Some(_)) => {
                return Err(PagingError::with_message(
                    ErrorCode::InvalidQueryParameterValue,
                    "Specify either 'radius' or 'size', not both.",
                ))
            }
            (Some(radius), None) => {
                if radius > config.max_radius {
                    return Err(out_of_range("radius", config.max_radius));
                }
                WindowShape::Radius(radius)
            }
            (None, Some(size)) => {
                if size > config.max_window_size() {
                    return Err(out_of_range("size", config.max_window_size()));
                }
                WindowShape::Size(size)
            }
            (None, None) => WindowShape::Radius(config.default_radius),
        };

        let count = match (
            ctx.int_param("total_pages")?,
            ctx.uint_param("total_items")?,
            ctx.uint_param("page_size")?,
        ) {
            (Some(total_pages), None, None) => PageCount::Pages(total_pages),
            (None, Some(total_items), Some(page_size)) => PageCount::Items {
                total_items,
                page_size,
            },
            (None, Some(_), None) => {
                return Err(PagingError::with_message(
                    ErrorCode::MissingRequiredQueryParameter,
                    "Query parameter 'page_size' is required with 'total_items'.",
                ))
            }
            (None, None, _) => {
                return Err(PagingError::with_message(
                    ErrorCode::MissingRequiredQueryParameter,
                    "Query parameter 'total_pages' or 'total_items' is required.",
                ))
            }
            _ => {
                return Err(PagingError::with_message(
                    ErrorCode::InvalidQueryParameterValue,
                    "Specify either 'total_pages' or 'total_items', not both.",
                ))
            }
        };

        Ok(Self { page, shape, count })
    }

    /// Builds the view-model for these parameters.
    pub fn paginate(&self) -> PagingResult<Pagination> {
        match self.count {
            PageCount::Pages(total_pages) => {
                Pagination::from_total_pages(self.page, self.shape, total_pages)
            }
            PageCount::Items {
                total_items,
                page_size,
            } => Pagination::from_items(self.page, self.shape, total_items, page_size),
        }
    }
}

fn out_of_range(name: &str, max: i64) -> PagingError {
    PagingError::with_message(
        ErrorCode::OutOfRangeQueryParameterValue,
        format!("Query parameter '{name}' must not exceed {max}."),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(query: &[(&str, &str)]) -> RequestContext {
        let query_params = query
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RequestContext::new(Method::GET, Uri::from_static("/pagination"), query_params)
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        let params = WindowParams::from_context(&ctx(&[("total_pages", "7")]), &config).unwrap();
        assert_eq!(params.page, 1);
        assert_eq!(params.shape, WindowShape::Radius(config.default_radius));
        assert_eq!(params.count, PageCount::Pages(7));
    }

    #[test]
    fn test_blank_page_defaults_to_first() {
        let params = WindowParams::from_context(
            &ctx(&[("page", " "), ("total_pages", "3")]),
            &Config::default(),
        )
        .unwrap();
        assert_eq!(params.page, 1);
    }

    #[test]
    fn test_items_and_size() {
        let params = WindowParams::from_context(
            &ctx(&[("page", "4"), ("size", "5"), ("total_items", "81"), ("page_size", "20")]),
            &Config::default(),
        )
        .unwrap();
        assert_eq!(params.shape, WindowShape::Size(5));
        assert_eq!(
            params.count,
            PageCount::Items {
                total_items: 81,
                page_size: 20
            }
        );
        assert_eq!(params.paginate().unwrap().total_pages, 5);
    }

    #[test]
    fn test_non_integer_page() {
        let err = WindowParams::from_context(
            &ctx(&[("page", "two"), ("total_pages", "3")]),
            &Config::default(),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidQueryParameterValue);
    }

    #[test]
    fn test_missing_page_count() {
        let err = WindowParams::from_context(&ctx(&[("page", "2")]), &Config::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingRequiredQueryParameter);

        let err = WindowParams::from_context(&ctx(&[("total_items", "10")]), &Config::default())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingRequiredQueryParameter);
    }

    #[test]
    fn test_conflicting_parameters() {
        let err = WindowParams::from_context(
            &ctx(&[("radius", "2"), ("size", "5"), ("total_pages", "3")]),
            &Config::default(),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidQueryParameterValue);

        let err = WindowParams::from_context(
            &ctx(&[("total_pages", "3"), ("total_items", "30"), ("page_size", "10")]),
            &Config::default(),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidQueryParameterValue);
    }

    #[test]
    fn test_radius_above_limit() {
        let config = Config {
            max_radius: 4,
            ..Config::default()
        };
        let err = WindowParams::from_context(&ctx(&[("radius", "5"), ("total_pages", "3")]), &config)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::OutOfRangeQueryParameterValue);

        let err = WindowParams::from_context(&ctx(&[("size", "10"), ("total_pages", "3")]), &config)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::OutOfRangeQueryParameterValue);
    }

    #[test]
    fn test_negative_radius_reaches_window() {
        let params = WindowParams::from_context(
            &ctx(&[("radius", "-1"), ("total_pages", "3")]),
            &Config::default(),
        )
        .unwrap();
        assert_eq!(params.paginate().unwrap_err().code, ErrorCode::InvalidArgument);
    }
}
