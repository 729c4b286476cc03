//! Content length extraction utilities.
//!
//! Lengths are always read from the raw headers: for `HEAD` responses the
//! body is empty, so `Response::content_length` cannot be trusted there.

use reqwest::header::{HeaderMap, CONTENT_LENGTH, CONTENT_RANGE};

/// Parse the `Content-Length` header, if present and numeric.
///
/// ```rust
/// use reqwest::header::{HeaderMap, HeaderValue, CONTENT_LENGTH};
/// use splitfetch::utils::header_content_length;
///
/// let mut headers = HeaderMap::new();
/// headers.insert(CONTENT_LENGTH, HeaderValue::from_static("2048"));
/// assert_eq!(header_content_length(&headers), Some(2048));
/// ```
pub fn header_content_length(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
}

/// Parse Content-Range header to extract total size.
///
/// Content-Range header format: "bytes start-end/total"
///
/// ```rust
/// use splitfetch::utils::parse_content_range_total;
///
/// let total = parse_content_range_total("bytes 0-1023/2048");
/// assert_eq!(total, Some(2048));
/// ```
pub fn parse_content_range_total(content_range: &str) -> Option<u64> {
    let (_, total) = content_range.split_once('/')?;
    total.trim().parse::<u64>().ok()
}

/// Total resource size as announced by the answer to a range request.
///
/// Uses the `Content-Range` total when the server honoured the range, and
/// falls back to `Content-Length` when it answered with the full body.
pub fn range_response_total(headers: &HeaderMap) -> Option<u64> {
    match headers.get(CONTENT_RANGE) {
        Some(value) => value.to_str().ok().and_then(parse_content_range_total),
        None => header_content_length(headers),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_parse_content_range_total() {
        assert_eq!(parse_content_range_total("bytes 0-1023/2048"), Some(2048));
        assert_eq!(parse_content_range_total("bytes 200-1023/5000"), Some(5000));
        assert_eq!(parse_content_range_total("bytes 0-0/1"), Some(1));
        assert_eq!(parse_content_range_total("bytes */1000"), Some(1000));
        assert_eq!(parse_content_range_total("bytes 0-0/*"), None);
        assert_eq!(parse_content_range_total("invalid"), None);
        assert_eq!(parse_content_range_total("bytes 0-1023"), None);
        assert_eq!(parse_content_range_total(""), None);
    }

    #[test]
    fn test_parse_content_range_total_edge_cases() {
        assert_eq!(parse_content_range_total("bytes 0-1023/ 2048 "), Some(2048));
        assert_eq!(parse_content_range_total("bytes 0-0/0"), Some(0));
        assert_eq!(
            parse_content_range_total("bytes 0-1023/999999999999"),
            Some(999999999999)
        );
    }

    #[test]
    fn test_header_content_length() {
        let mut headers = HeaderMap::new();
        assert_eq!(header_content_length(&headers), None);

        headers.insert(CONTENT_LENGTH, HeaderValue::from_static("abc"));
        assert_eq!(header_content_length(&headers), None);

        headers.insert(CONTENT_LENGTH, HeaderValue::from_static("1000"));
        assert_eq!(header_content_length(&headers), Some(1000));
    }

    #[test]
    fn test_range_response_total_prefers_content_range() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_LENGTH, HeaderValue::from_static("1"));
        headers.insert(CONTENT_RANGE, HeaderValue::from_static("bytes 0-0/4096"));
        assert_eq!(range_response_total(&headers), Some(4096));

        headers.remove(CONTENT_RANGE);
        assert_eq!(range_response_total(&headers), Some(1));
    }
}
