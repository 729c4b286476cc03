//! Per-segment fetch state.

use super::plan::Segment;
use std::path::PathBuf;

/// Lifecycle of a single segment fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentState {
    /// Not started yet.
    Pending,
    /// The range request has been issued.
    InFlight,
    /// The body was fully persisted to the workspace.
    Complete {
        /// Location of the segment file.
        path: PathBuf,
        /// Number of bytes written.
        bytes: u64,
    },
    /// The fetch failed with the given message.
    Failed(String),
}

/// Represents the outcome of a [`Segment`] fetch.
#[derive(Debug, Clone)]
pub struct SegmentOutcome {
    segment: Segment,
    state: SegmentState,
}

impl SegmentOutcome {
    /// Create a pending outcome for `segment`.
    pub fn new(segment: Segment) -> Self {
        Self {
            segment,
            state: SegmentState::Pending,
        }
    }

    /// Get the planned segment.
    pub fn segment(&self) -> &Segment {
        &self.segment
    }

    /// Get the current state.
    pub fn state(&self) -> &SegmentState {
        &self.state
    }

    /// `true` once the state is [`SegmentState::Complete`] or [`SegmentState::Failed`].
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.state,
            SegmentState::Complete { .. } | SegmentState::Failed(_)
        )
    }

    /// Bytes written, for a complete segment.
    pub fn bytes(&self) -> Option<u64> {
        match self.state {
            SegmentState::Complete { bytes, .. } => Some(bytes),
            _ => None,
        }
    }

    /// Mark the fetch as started.
    ///
    /// Terminal outcomes are left untouched: a segment never goes back in flight.
    pub fn start(self) -> Self {
        match self.state {
            SegmentState::Pending => Self {
                state: SegmentState::InFlight,
                ..self
            },
            _ => self,
        }
    }

    /// Mark the segment as complete.
    pub fn complete(self, path: PathBuf, bytes: u64) -> Self {
        self.finish(SegmentState::Complete { path, bytes })
    }

    /// Mark the segment as failed with a message.
    pub fn fail(self, msg: impl std::fmt::Display) -> Self {
        self.finish(SegmentState::Failed(msg.to_string()))
    }

    fn finish(self, state: SegmentState) -> Self {
        if self.is_terminal() {
            return self;
        }
        Self { state, ..self }
    }
}
