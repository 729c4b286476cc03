//! HTTP module containing client setup and resource probing.
//!
//! - [`client`] - HTTP client creation and middleware configuration
//! - [`probe`] - Size and reachability discovery before planning

pub mod client;
pub mod probe;

pub use client::{create_http_client, HttpClientConfig};
pub use probe::{probe, Probe};
