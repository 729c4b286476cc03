//! Scratch storage for in-flight segments.
//!
//! A [`Workspace`] is a freshly created, uniquely named directory holding one
//! `section-<index>.tmp` file per segment. It belongs to a single download and
//! is removed when released or dropped, whichever happens first, so every exit
//! path of the pipeline (success, failure, cancellation) cleans it up.

use crate::error::{Error, Result};

use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::{debug, warn};

const PREFIX: &str = ".splitfetch-";

/// Scoped scratch directory for one download.
#[derive(Debug)]
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Create a new isolated workspace inside `root`.
    pub fn acquire(root: &Path) -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix(PREFIX)
            .tempdir_in(root)
            .map_err(|e| Error::storage(root, e))?;
        debug!("Acquired workspace {:?}", dir.path());
        Ok(Self { dir })
    }

    /// Location of the workspace directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Location of the file holding segment `index`.
    pub fn segment_path(&self, index: usize) -> PathBuf {
        self.dir.path().join(format!("section-{}.tmp", index))
    }

    /// Remove the workspace and everything in it.
    pub fn release(self) -> Result<()> {
        let path = self.dir.path().to_path_buf();
        debug!("Releasing workspace {:?}", path);
        self.dir.close().map_err(|e| {
            warn!("Failed to remove workspace {:?}: {}", path, e);
            Error::storage(path, e)
        })
    }
}
