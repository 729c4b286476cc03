//! Core downloader implementation.
//!
//! [`Downloader`] runs the whole segmented pipeline for one [`Download`]:
//! validation, probe, plan, workspace, concurrent fetch, assembly and cleanup.
//!
//! ```rust,no_run
//! use splitfetch::downloader::DownloaderBuilder;
//! use splitfetch::download::Download;
//! use std::convert::TryFrom;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let downloader = DownloaderBuilder::new().segments(8).build();
//! let download = Download::try_from("https://example.com/file.iso")?;
//!
//! let summary = downloader.download(&download).await?;
//! println!("{} bytes written to {:?}", summary.size(), summary.path());
//! # Ok(())
//! # }
//! ```

use super::config::DownloaderConfig;
use crate::assemble::assemble;
use crate::download::{Download, Resource, Summary};
use crate::error::{Error, Result};
use crate::fetch::FetchCoordinator;
use crate::http::{create_http_client, probe, HttpClientConfig};
use crate::progress::ProgressDisplay;
use crate::segment::plan;
use crate::workspace::Workspace;

use reqwest::header::HeaderMap;
use std::fmt;
use std::fmt::Debug;
use std::future::{pending, Future};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Represents the download controller.
///
/// A downloader can be created via its builder:
///
/// ```rust
/// # fn main()  {
/// use splitfetch::downloader::DownloaderBuilder;
///
/// let d = DownloaderBuilder::new().build();
/// # }
/// ```
#[derive(Clone)]
pub struct Downloader {
    config: DownloaderConfig,
}

impl Debug for Downloader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Downloader")
            .field("config", &self.config)
            .finish()
    }
}

impl Downloader {
    /// Creates a new Downloader with the given configuration.
    pub(crate) fn new(config: DownloaderConfig) -> Self {
        Self { config }
    }

    /// Gets the directory where files will be downloaded.
    pub fn directory(&self) -> &PathBuf {
        &self.config.directory
    }

    /// Gets the number of segments per download.
    pub fn segments(&self) -> usize {
        self.config.segments
    }

    /// Gets the custom headers.
    pub fn headers(&self) -> Option<&HeaderMap> {
        self.config.headers.as_ref()
    }

    /// Gets the request timeout.
    pub fn timeout(&self) -> Option<Duration> {
        self.config.timeout
    }

    /// Gets whether to use range requests for content length.
    pub fn use_range_for_content_length(&self) -> bool {
        self.config.use_range_for_content_length
    }

    /// Gets whether to overwrite existing files.
    pub fn overwrite(&self) -> bool {
        self.config.overwrite
    }

    /// Gets the directory in which workspaces are created.
    pub fn workspace_root(&self) -> &Path {
        &self.config.workspace_root
    }

    /// Download `download` into the configured directory.
    pub async fn download(&self, download: &Download) -> Result<Summary> {
        self.download_until(download, pending()).await
    }

    /// Download `download`, giving up as soon as `cancel` resolves.
    ///
    /// On cancellation the in-flight requests are dropped, the workspace and
    /// any partially assembled file are removed, and [`Error::Cancelled`] is
    /// returned.
    pub async fn download_until<F>(&self, download: &Download, cancel: F) -> Result<Summary>
    where
        F: Future<Output = ()>,
    {
        tokio::select! {
            biased;
            _ = cancel => {
                info!("Download of {} cancelled", download.url);
                Err(Error::Cancelled)
            }
            result = self.run(download) => result,
        }
    }

    async fn run(&self, download: &Download) -> Result<Summary> {
        let destination = self.validate(download)?;

        let client = create_http_client(HttpClientConfig {
            proxy: self.config.proxy.clone(),
            headers: self.config.headers.clone(),
            timeout: self.config.timeout,
        })?;

        let probed = probe(
            &client,
            &download.url,
            self.config.use_range_for_content_length,
        )
        .await?;
        if !probed.accept_ranges {
            warn!(
                "{} announces no range support, segments will likely be rejected",
                download.url
            );
        }

        let resource = Resource::new(download, probed.total_size, self.config.segments);
        let segments = plan(resource.total_size, resource.segment_count);
        info!(
            "Downloading {} ({} bytes) in {} segments",
            resource.url,
            resource.total_size,
            segments.len()
        );

        let workspace = Workspace::acquire(&self.config.workspace_root)?;

        let progress = ProgressDisplay::new(self.config.style_options.clone(), segments.len());
        let outcomes = FetchCoordinator::new(&client, &progress)
            .on_segment_complete(self.config.on_segment_complete.clone())
            .run(&resource, &segments, &workspace)
            .await;
        progress.finish();
        let outcomes = outcomes?;

        let size = assemble(&segments, &workspace, &destination, self.config.overwrite).await?;
        if let Err(e) = workspace.release() {
            debug!("Workspace cleanup after success incomplete: {}", e);
        }

        info!("Saved {} ({} bytes) to {:?}", resource.url, size, destination);
        Ok(Summary::new(download.clone(), probed.status, destination, size).with_segments(outcomes))
    }

    /// Check the request against the configuration and return the destination path.
    fn validate(&self, download: &Download) -> Result<PathBuf> {
        if self.config.segments == 0 {
            return Err(Error::Validation(
                "the segment count must be at least 1".into(),
            ));
        }

        match download.url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(Error::InvalidUrl(format!(
                    "unsupported scheme \"{}\" in {}",
                    scheme, download.url
                )))
            }
        }

        if !self.config.directory.is_dir() {
            return Err(Error::Validation(format!(
                "{:?} is not an existing directory",
                self.config.directory
            )));
        }

        let destination = self.config.directory.join(&download.filename);
        if destination.exists() && !self.config.overwrite {
            return Err(Error::Validation(format!(
                "{:?} already exists",
                destination
            )));
        }

        Ok(destination)
    }
}
