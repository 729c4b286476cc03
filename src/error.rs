//! Error handling for splitfetch.
//!
//! Every stage of the pipeline reports failures through the single [`Error`]
//! enum. Segment failures are never surfaced on their own: the fetch
//! coordinator wraps the first one in [`Error::IncompleteDownload`].

use reqwest::StatusCode;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can happen when using splitfetch.
#[derive(Error, Debug)]
pub enum Error {
    /// Error from an underlying system.
    #[error("Internal error: {0}")]
    Internal(String),

    /// The caller supplied an unusable value (segment count, target directory, ...).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error from the underlying URL parser or the expected URL format.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The probe could not reach the resource at all.
    #[error("URL {url} is not reachable")]
    Unreachable {
        url: String,
        #[source]
        source: reqwest_middleware::Error,
    },

    /// The server answered with a status outside of the 2xx range.
    #[error("Unexpected status {status} for {url}")]
    UnexpectedStatus { url: String, status: StatusCode },

    /// The probe response did not carry a usable length.
    #[error("Invalid content length: {0}")]
    InvalidContentLength(String),

    /// Network level failure while a request or a response body was in flight.
    #[error("Transport error")]
    Transport {
        #[from]
        source: reqwest_middleware::Error,
    },

    /// I/O failure on the workspace or on the destination file.
    #[error("Storage error on {path:?}")]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The server did not return exactly the requested byte range.
    #[error("Segment {index} expected {expected} bytes but received {actual}")]
    RangeMismatch {
        index: usize,
        expected: u64,
        actual: u64,
    },

    /// At least one segment failed; carries the first failure observed.
    #[error("Download incomplete: segment {index} failed")]
    IncompleteDownload {
        index: usize,
        #[source]
        source: Box<Error>,
    },

    /// The caller cancelled the download.
    #[error("Download cancelled")]
    Cancelled,
}

impl Error {
    /// Build a [`Error::Storage`] for `path`.
    pub fn storage(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Storage {
            path: path.into(),
            source,
        }
    }

    /// Return the segment failure wrapped by [`Error::IncompleteDownload`], if any.
    pub fn segment_error(&self) -> Option<&Error> {
        match self {
            Error::IncompleteDownload { source, .. } => Some(&**source),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        Error::Transport {
            source: reqwest_middleware::Error::Reqwest(source),
        }
    }
}

/// Result type alias for operations that can fail with a splitfetch error.
pub type Result<T> = std::result::Result<T, Error>;
