//! Download request and result types.
//!
//! - [`download`] - The [`Download`] request and the probed [`Resource`]
//! - [`summary`] - The [`Summary`] of a finished download
//!
//! ```rust
//! use splitfetch::download::Download;
//! use std::convert::TryFrom;
//!
//! let download = Download::try_from("https://example.com/file.zip")?;
//! assert_eq!(download.filename, "file.zip");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod download;
pub mod summary;

pub use download::{Download, Resource};
pub use summary::Summary;
