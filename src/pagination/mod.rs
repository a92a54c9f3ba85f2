//! Pagination windows and the view-model built on them.

mod view;
mod window;

pub use view::*;
pub use window::*;
