//! Segment planning and per-segment outcomes.
//!
//! A resource of `total_size` bytes is split by [`plan`] into contiguous,
//! inclusive [`Segment`]s. Each segment is fetched once and its result is
//! tracked as a [`SegmentOutcome`].
//!
//! ```rust
//! use splitfetch::segment::plan;
//!
//! let segments = plan(1000, 3);
//! assert_eq!(segments[1].range_header(), "bytes=334-667");
//! ```

pub mod outcome;
pub mod plan;

pub use outcome::{SegmentOutcome, SegmentState};
pub use plan::{plan, Segment};
