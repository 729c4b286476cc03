//! Resource discovery before planning.
//!
//! The probe checks that the resource is reachable, that it answers with a
//! 2xx status and that its total size is known. By default a `HEAD` request
//! is used; some servers only report accurate sizes on range requests, in
//! which case a `GET` with `Range: bytes=0-0` reads the total from
//! `Content-Range`.

use crate::error::{Error, Result};
use crate::utils::content_length::{header_content_length, range_response_total};

use reqwest::{
    header::{HeaderMap, ACCEPT_RANGES, RANGE},
    StatusCode, Url,
};
use reqwest_middleware::ClientWithMiddleware;
use tracing::debug;

/// What the probe learned about a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    /// Status of the probe response.
    pub status: StatusCode,
    /// Total size of the resource in bytes.
    pub total_size: u64,
    /// `false` when the server explicitly refuses range requests.
    pub accept_ranges: bool,
}

/// Discover the size of the resource at `url`.
///
/// Fails with [`Error::Unreachable`] when no response is received,
/// [`Error::UnexpectedStatus`] on a non-2xx answer, and
/// [`Error::InvalidContentLength`] when no usable length is announced.
pub async fn probe(client: &ClientWithMiddleware, url: &Url, use_range: bool) -> Result<Probe> {
    let request = if use_range {
        client.get(url.clone()).header(RANGE, "bytes=0-0")
    } else {
        client.head(url.clone())
    };

    debug!("Probing {}", url);
    let res = request.send().await.map_err(|source| Error::Unreachable {
        url: url.to_string(),
        source,
    })?;

    let status = res.status();
    if !status.is_success() {
        return Err(Error::UnexpectedStatus {
            url: url.to_string(),
            status,
        });
    }

    let headers = res.headers();
    let total_size = if use_range {
        range_response_total(headers)
    } else {
        header_content_length(headers)
    }
    .ok_or_else(|| {
        Error::InvalidContentLength(format!("no usable length announced for {}", url))
    })?;

    let probe = Probe {
        status,
        total_size,
        accept_ranges: accepts_ranges(headers),
    };
    debug!("Probe result for {}: {:?}", url, probe);
    Ok(probe)
}

fn accepts_ranges(headers: &HeaderMap) -> bool {
    match headers.get(ACCEPT_RANGES) {
        Some(x) if x == "none" => false,
        _ => true,
    }
}
