//! Segment retrieval.
//!
//! - [`fetcher`] - One range request per segment, persisted to the workspace
//! - [`coordinator`] - Concurrent execution and error aggregation

pub mod coordinator;
pub mod fetcher;

pub use coordinator::FetchCoordinator;
pub use fetcher::SegmentFetcher;
