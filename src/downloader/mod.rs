//! Downloader module containing the pipeline, its builder and configuration.
//!
//! - `downloader` - Core Downloader struct running one segmented download
//! - `builder` - DownloaderBuilder for flexible configuration using the builder pattern
//! - `config` - Configuration structures and callback types
//!
//! ```rust
//! use splitfetch::downloader::DownloaderBuilder;
//!
//! // Create a downloader with hidden progress bars
//! let downloader = DownloaderBuilder::hidden().segments(4).build();
//! assert_eq!(downloader.segments(), 4);
//! ```

pub mod builder;
pub mod config;
pub mod downloader;

pub use builder::DownloaderBuilder;
pub use config::{DownloaderConfig, SegmentCallback, DEFAULT_SEGMENTS};
pub use downloader::Downloader;
