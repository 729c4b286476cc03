//! Download summary functionality.
//!
//! A [`Summary`] is returned by a successful download. It keeps the request,
//! where the artifact landed, how large it is and how each segment went.

use super::download::Download;
use crate::segment::SegmentOutcome;

use reqwest::StatusCode;
use std::path::{Path, PathBuf};

/// Represents a [`Download`] summary.
#[derive(Debug, Clone)]
pub struct Summary {
    /// Downloaded item.
    download: Download,
    /// HTTP status code of the probe.
    statuscode: StatusCode,
    /// Final artifact location.
    path: PathBuf,
    /// Download size in bytes.
    size: u64,
    /// Per-segment outcomes, ordered by index.
    segments: Vec<SegmentOutcome>,
}

impl Summary {
    /// Create a new [`Download`] [`Summary`].
    pub fn new(download: Download, statuscode: StatusCode, path: PathBuf, size: u64) -> Self {
        Self {
            download,
            statuscode,
            path,
            size,
            segments: Vec::new(),
        }
    }

    /// Attach the segment outcomes.
    pub fn with_segments(self, segments: Vec<SegmentOutcome>) -> Self {
        Self { segments, ..self }
    }

    /// Get the probe status.
    pub fn statuscode(&self) -> StatusCode {
        self.statuscode
    }

    /// Get the summary's size.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Get the final artifact location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get a reference to the summary's download.
    pub fn download(&self) -> &Download {
        &self.download
    }

    /// Get the per-segment outcomes.
    pub fn segments(&self) -> &[SegmentOutcome] {
        &self.segments
    }
}
