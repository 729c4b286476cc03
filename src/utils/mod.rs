//! Shared utility functions.
//!
//! - [`content_length`] - Length extraction from HTTP response headers

pub mod content_length;

pub use content_length::{header_content_length, parse_content_range_total, range_response_total};
