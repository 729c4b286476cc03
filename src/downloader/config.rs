//! Configuration structures and defaults for the downloader.
//!
//! ```rust
//! use splitfetch::downloader::SegmentCallback;
//! use splitfetch::segment::{SegmentOutcome, SegmentState};
//!
//! let callback: SegmentCallback = Box::new(|outcome: &SegmentOutcome| {
//!     match outcome.state() {
//!         SegmentState::Complete { bytes, .. } => println!("✓ {} ({} bytes)", outcome.segment(), bytes),
//!         SegmentState::Failed(msg) => println!("✗ {}: {}", outcome.segment(), msg),
//!         _ => {}
//!     }
//! });
//! ```

use crate::segment::SegmentOutcome;
use crate::StyleOptions;

use reqwest::header::HeaderMap;
use std::env::{current_dir, temp_dir};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Callback invoked with every segment outcome once it is terminal.
pub type SegmentCallback = Box<dyn Fn(&SegmentOutcome) + Send + Sync>;

/// Default number of segments a resource is split into.
pub const DEFAULT_SEGMENTS: usize = 10;

/// Configuration structure for the downloader
#[derive(Clone)]
pub struct DownloaderConfig {
    /// Directory where to store the downloaded files.
    pub directory: PathBuf,
    /// Number of segments fetched in parallel.
    pub segments: usize,
    /// Custom HTTP headers.
    pub headers: Option<HeaderMap>,
    /// Optional proxy for every request.
    pub proxy: Option<reqwest::Proxy>,
    /// Per-request timeout.
    pub timeout: Option<Duration>,
    /// Use range requests to get content length instead of HEAD requests.
    pub use_range_for_content_length: bool,
    /// Replace an existing destination file.
    pub overwrite: bool,
    /// Directory in which workspaces are created.
    pub workspace_root: PathBuf,
    /// Downloader style options.
    pub style_options: StyleOptions,
    /// Callback for when each segment reaches a terminal state.
    pub on_segment_complete: Option<Arc<SegmentCallback>>,
}

impl std::fmt::Debug for DownloaderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownloaderConfig")
            .field("directory", &self.directory)
            .field("segments", &self.segments)
            .field("headers", &self.headers)
            .field("proxy", &self.proxy)
            .field("timeout", &self.timeout)
            .field(
                "use_range_for_content_length",
                &self.use_range_for_content_length,
            )
            .field("overwrite", &self.overwrite)
            .field("workspace_root", &self.workspace_root)
            .field("style_options", &self.style_options)
            .field("on_segment_complete", &self.on_segment_complete.is_some())
            .finish()
    }
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        Self {
            directory: current_dir().unwrap_or_default(),
            segments: DEFAULT_SEGMENTS,
            headers: None,
            proxy: None,
            timeout: None,
            use_range_for_content_length: false,
            overwrite: false,
            workspace_root: temp_dir(),
            style_options: StyleOptions::default(),
            on_segment_complete: None,
        }
    }
}
