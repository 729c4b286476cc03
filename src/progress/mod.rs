//! Progress bar styling and display.
//!
//! - `style` - Progress bar styling options and templates
//! - `display` - Main and per-segment bar coordination
//!
//! ```rust
//! use splitfetch::downloader::DownloaderBuilder;
//! use splitfetch::progress::{ProgressBarOpts, StyleOptions};
//!
//! let downloader = DownloaderBuilder::new()
//!     .style_options(StyleOptions::new(
//!         ProgressBarOpts::with_pip_style(),
//!         ProgressBarOpts::hidden(),
//!     ))
//!     .build();
//! ```

pub(crate) mod display;
pub(crate) mod style;

pub use display::ProgressDisplay;
pub use style::{ProgressBarOpts, StyleOptions};
