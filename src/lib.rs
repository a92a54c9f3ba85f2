//! cert-paging: pagination windows for the hardware certification catalog.
//!
//! Listing pages (desktop, server, IoT, SoC) show a run of page links around
//! the current page. This crate computes that run as a pure function and
//! serves it over HTTP for the rendering layer.
//!
//! # Example
//!
//! ```
//! use cert_paging::pagination::compute_window;
//!
//! let window = compute_window(9, 2, 10).unwrap();
//! assert_eq!(window.to_vec(), vec![6, 7, 8, 9, 10]);
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod handlers;
pub mod pagination;
pub mod router;
pub mod server;

// Re-exports for convenience
pub use config::{Args, Config, DEFAULT_MAX_RADIUS, DEFAULT_PORT, DEFAULT_RADIUS};
pub use error::{ErrorCode, PagingError, PagingResult};
pub use pagination::{compute_window, compute_window_of_size, PageWindow, Pagination};
pub use server::{PagingServer, PagingServerBuilder};
