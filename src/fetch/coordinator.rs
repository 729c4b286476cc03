//! Concurrent execution of every planned segment.
//!
//! All segment fetches start together and are polled concurrently inside the
//! caller's task. The coordinator is the only writer of the outcome table and
//! of the first-error slot; it keeps draining until every fetch has reached a
//! terminal state, so a failing segment never leaves others running unobserved.

use super::fetcher::SegmentFetcher;
use crate::download::Resource;
use crate::downloader::SegmentCallback;
use crate::error::{Error, Result};
use crate::progress::ProgressDisplay;
use crate::segment::{Segment, SegmentOutcome};
use crate::workspace::Workspace;

use futures::stream::{self, StreamExt};
use reqwest_middleware::ClientWithMiddleware;
use std::sync::Arc;
use tracing::{debug, warn};

/// Runs the fetchers of one download and aggregates their outcomes.
pub struct FetchCoordinator<'a> {
    client: &'a ClientWithMiddleware,
    progress: &'a ProgressDisplay,
    on_segment_complete: Option<Arc<SegmentCallback>>,
}

impl<'a> FetchCoordinator<'a> {
    pub fn new(client: &'a ClientWithMiddleware, progress: &'a ProgressDisplay) -> Self {
        Self {
            client,
            progress,
            on_segment_complete: None,
        }
    }

    /// Invoke `callback` with every terminal segment outcome, in completion order.
    pub fn on_segment_complete(mut self, callback: Option<Arc<SegmentCallback>>) -> Self {
        self.on_segment_complete = callback;
        self
    }

    /// Fetch every segment of `resource` into `workspace`.
    ///
    /// Returns the outcomes in the order of `segments` when all of them are
    /// complete. Otherwise returns [`Error::IncompleteDownload`] carrying the
    /// first failure, once the remaining fetches have finished too.
    pub async fn run(
        &self,
        resource: &Resource,
        segments: &[Segment],
        workspace: &Workspace,
    ) -> Result<Vec<SegmentOutcome>> {
        let mut outcomes: Vec<SegmentOutcome> =
            segments.iter().copied().map(SegmentOutcome::new).collect();
        if segments.is_empty() {
            return Ok(outcomes);
        }

        let fetcher = SegmentFetcher::new(self.client, resource, workspace);
        let fetcher = &fetcher;
        let progress = self.progress;

        debug!("Starting {} segment fetches", segments.len());
        // Outcomes are stored by position in `segments`, which may be any
        // subset of a plan.
        let mut results = stream::iter(segments.iter().copied().enumerate())
            .map(move |(position, segment)| async move {
                let pb = progress.create_child_progress(segment.len(), 0);
                let (outcome, error) = fetcher.fetch(segment, &pb).await;
                progress.finish_child(pb);
                (position, outcome, error)
            })
            .buffer_unordered(segments.len());

        let mut first_error: Option<(usize, Error)> = None;
        while let Some((position, outcome, error)) = results.next().await {
            let index = outcome.segment().index;
            progress.increment_main();

            if let Some(ref callback) = self.on_segment_complete {
                callback(&outcome);
            }

            if let Some(e) = error {
                warn!("Segment {} failed: {}", outcome.segment(), e);
                if first_error.is_none() {
                    first_error = Some((index, e));
                }
            }

            outcomes[position] = outcome;
        }

        match first_error {
            Some((index, source)) => Err(Error::IncompleteDownload {
                index,
                source: Box::new(source),
            }),
            None => Ok(outcomes),
        }
    }
}
