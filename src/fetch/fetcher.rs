//! Retrieval of a single segment.
//!
//! The fetcher issues one `GET` with a `Range` header covering the segment
//! and streams the body into the segment file of the workspace. A failed
//! attempt is final: nothing here retries.

use crate::download::Resource;
use crate::error::{Error, Result};
use crate::segment::{Segment, SegmentOutcome};
use crate::utils::content_length::header_content_length;
use crate::workspace::Workspace;

use futures::StreamExt;
use indicatif::ProgressBar;
use reqwest::header::RANGE;
use reqwest_middleware::ClientWithMiddleware;
use std::path::Path;
use tokio::{fs::File, io::AsyncWriteExt};
use tracing::debug;

/// Fetches segments of one resource into one workspace.
pub struct SegmentFetcher<'a> {
    client: &'a ClientWithMiddleware,
    resource: &'a Resource,
    workspace: &'a Workspace,
}

impl<'a> SegmentFetcher<'a> {
    pub fn new(
        client: &'a ClientWithMiddleware,
        resource: &'a Resource,
        workspace: &'a Workspace,
    ) -> Self {
        Self {
            client,
            resource,
            workspace,
        }
    }

    /// Fetch `segment` and report its terminal outcome.
    ///
    /// On failure the outcome is [`SegmentState::Failed`] and the error is
    /// returned alongside it so that the caller can aggregate it.
    ///
    /// [`SegmentState::Failed`]: crate::segment::SegmentState::Failed
    pub async fn fetch(&self, segment: Segment, pb: &ProgressBar) -> (SegmentOutcome, Option<Error>) {
        let outcome = SegmentOutcome::new(segment).start();
        let path = self.workspace.segment_path(segment.index);

        match self.download(&segment, &path, pb).await {
            Ok(bytes) => {
                debug!("Segment {} complete: {} bytes", segment, bytes);
                (outcome.complete(path, bytes), None)
            }
            Err(e) => {
                debug!("Segment {} failed: {}", segment, e);
                (outcome.fail(&e), Some(e))
            }
        }
    }

    async fn download(&self, segment: &Segment, path: &Path, pb: &ProgressBar) -> Result<u64> {
        let expected = segment.len();

        debug!("Fetching segment {} of {}", segment, self.resource.url);
        let res = self
            .client
            .get(self.resource.url.clone())
            .header(RANGE, segment.range_header())
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(Error::UnexpectedStatus {
                url: self.resource.url.to_string(),
                status,
            });
        }

        // Bail out before reading a body that cannot be the requested range.
        if let Some(announced) = header_content_length(res.headers()) {
            if announced != expected {
                return Err(Error::RangeMismatch {
                    index: segment.index,
                    expected,
                    actual: announced,
                });
            }
        }

        let mut file = File::create(path)
            .await
            .map_err(|e| Error::storage(path, e))?;

        let mut written: u64 = 0;
        let mut stream = res.bytes_stream();
        while let Some(item) = stream.next().await {
            let mut chunk = item?;
            let chunk_size = chunk.len() as u64;
            written += chunk_size;
            if written > expected {
                return Err(Error::RangeMismatch {
                    index: segment.index,
                    expected,
                    actual: written,
                });
            }

            file.write_all_buf(&mut chunk)
                .await
                .map_err(|e| Error::storage(path, e))?;
            pb.inc(chunk_size);
        }

        file.flush().await.map_err(|e| Error::storage(path, e))?;

        if written != expected {
            return Err(Error::RangeMismatch {
                index: segment.index,
                expected,
                actual: written,
            });
        }

        Ok(written)
    }
}
