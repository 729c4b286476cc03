//! Segment type and range planning.

use std::fmt;

/// One planned byte range of the resource.
///
/// Offsets are inclusive, matching the HTTP `Range` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    /// Position of the segment in the plan.
    pub index: usize,
    /// First byte of the range.
    pub start: u64,
    /// Last byte of the range.
    pub end: u64,
}

impl Segment {
    /// Number of bytes covered by this segment.
    ///
    /// A hand-built segment with `end < start` covers nothing; one spanning
    /// the whole `u64` range saturates at `u64::MAX`.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> u64 {
        match self.end.checked_sub(self.start) {
            Some(span) => span.saturating_add(1),
            None => 0,
        }
    }

    /// HTTP `Range` header value: `bytes=start-end`.
    pub fn range_header(&self) -> String {
        format!("bytes={}-{}", self.start, self.end)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} [{}, {}]", self.index, self.start, self.end)
    }
}

/// Split `total_size` bytes into `segment_count` contiguous segments.
///
/// Every segment but the last spans `total_size / segment_count + 1` bytes and
/// the last one absorbs whatever is left, e.g. `plan(1000, 3)` yields
/// `[0, 333]`, `[334, 667]` and `[668, 999]`. The stride is shortened when
/// keeping it would leave a later segment without bytes.
///
/// Degenerate inputs:
/// * `total_size == 0` gives an empty plan: an inclusive `Range` header
///   cannot express zero bytes, so there is no request to plan;
/// * `segment_count == 0` gives an empty plan;
/// * `segment_count > total_size` is clamped to `total_size` one-byte segments.
pub fn plan(total_size: u64, segment_count: usize) -> Vec<Segment> {
    if total_size == 0 || segment_count == 0 {
        return Vec::new();
    }

    let count = (segment_count as u64).min(total_size);
    let stride = total_size / count + 1;

    let mut segments = Vec::with_capacity(count as usize);
    let mut start = 0u64;
    for i in 0..count {
        let end = if i == count - 1 {
            total_size - 1
        } else {
            // Leave at least one byte to each of the segments still to come.
            let later = count - i - 1;
            let len = stride.min(total_size - start - later);
            start + len - 1
        };
        segments.push(Segment {
            index: i as usize,
            start,
            end,
        });
        start = end + 1;
    }

    segments
}
