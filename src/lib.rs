//! Splitfetch downloads a single HTTP(S) resource as several byte ranges
//! fetched in parallel, then stitches them back together.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use splitfetch::{download::Download, downloader::DownloaderBuilder, Error};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let reqwest_rs = "https://github.com/seanmonstar/reqwest/archive/refs/tags/v0.11.9.zip";
//! let download = Download::try_from(reqwest_rs)?;
//! let downloader = DownloaderBuilder::new()
//!     .directory(PathBuf::from("output"))
//!     .segments(8)
//!     .build();
//! let summary = downloader.download(&download).await?;
//! println!("{} bytes", summary.size());
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`download`] - The `Download` request, the probed `Resource` and the `Summary`
//! - [`downloader`] - The `Downloader` pipeline and its `DownloaderBuilder`
//! - [`segment`] - Range planning and per-segment outcomes
//! - [`workspace`] - Scoped scratch directory holding segment files
//! - [`fetch`] - Concurrent range requests
//! - [`assemble`] - Ordered concatenation into the final file
//! - [`http`] - HTTP client setup and resource probing
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`progress`] - Progress bar styling and display management
//! - [`utils`] - Header parsing helpers

pub mod assemble;
pub mod download;
pub mod downloader;
pub mod error;
pub mod fetch;
pub mod http;
pub mod progress;
pub mod segment;
pub mod utils;
pub mod workspace;

pub use assemble::assemble;
pub use download::{Download, Resource, Summary};
pub use downloader::{Downloader, DownloaderBuilder};
pub use error::{Error, Result};
pub use http::{create_http_client, probe, HttpClientConfig, Probe};
pub use progress::{ProgressBarOpts, StyleOptions};
pub use segment::{plan, Segment, SegmentOutcome, SegmentState};
pub use utils::content_length::{header_content_length, parse_content_range_total, range_response_total};
pub use workspace::Workspace;
