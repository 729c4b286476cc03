use std::fs;
use std::path::Path;
use tempfile::TempDir;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use splitfetch::{Download, DownloaderBuilder};
use splitfetch::progress::{ProgressBarOpts, StyleOptions};
use splitfetch::HttpClientConfig;
use tracing_subscriber::EnvFilter;

// Common test constants
pub const TEST_DOMAIN: &str = "http://domain.com/file.zip";
pub const TEST_USER_AGENT: &str = "splitfetch-test-agent";

/// Route library logs to the test output, filtered by `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates test file content of specified size
pub fn create_test_content(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

/// Asserts that a file exists at the given path
pub fn assert_file_exists(path: &Path) {
    assert!(path.exists(), "File should exist at path: {:?}", path);
}

/// Asserts that a file has the expected size
pub fn assert_file_size(path: &Path, expected_size: u64) {
    let metadata = fs::metadata(path).expect("Failed to get file metadata");
    assert_eq!(
        metadata.len(),
        expected_size,
        "File size mismatch at path: {:?}",
        path
    );
}

/// Asserts that `dir` holds no entry at all
pub fn assert_dir_empty(dir: &Path) {
    let entries: Vec<_> = fs::read_dir(dir)
        .expect("Failed to read directory")
        .flatten()
        .map(|e| e.path())
        .collect();
    assert!(entries.is_empty(), "Directory {:?} not empty: {:?}", dir, entries);
}

// === Download Creation Helpers ===

/// Creates a test download from the common test domain
pub fn create_test_download() -> Download {
    Download::try_from(TEST_DOMAIN).expect("Failed to create test download")
}

// === HTTP Configuration Helpers ===

/// Creates test headers with common user agent
pub fn create_test_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(TEST_USER_AGENT));
    headers
}

/// Creates a test HTTP client configuration
pub fn create_test_http_config() -> HttpClientConfig {
    HttpClientConfig {
        proxy: None,
        headers: Some(create_test_headers()),
        timeout: None,
    }
}

// === Progress Bar Helpers ===

/// Creates default test progress bar options
pub fn create_test_progress_opts() -> ProgressBarOpts {
    ProgressBarOpts::new(None, None, true, false)
}

/// Creates custom progress bar options with template and chars
pub fn create_custom_progress_opts(template: &str, chars: &str) -> ProgressBarOpts {
    ProgressBarOpts::new(
        Some(template.to_string()),
        Some(chars.to_string()),
        true,
        false
    )
}

/// Creates default test style options
pub fn create_test_style_options() -> StyleOptions {
    StyleOptions::new(create_test_progress_opts(), ProgressBarOpts::with_pip_style())
}

// === Downloader Builder Helpers ===

/// Hidden downloader writing into `directory` and creating workspaces in `workspace_root`
pub fn create_test_downloader_builder(
    directory: &Path,
    workspace_root: &Path,
    segments: usize,
) -> DownloaderBuilder {
    DownloaderBuilder::hidden()
        .directory(directory.to_path_buf())
        .workspace_root(workspace_root.to_path_buf())
        .segments(segments)
}

// === Content Range Testing Helpers ===

/// Creates test content range headers for testing
pub fn create_test_content_range_headers() -> Vec<(&'static str, Option<u64>)> {
    vec![
        ("bytes 0-1023/2048", Some(2048)),
        ("bytes 200-1023/5000", Some(5000)),
        ("bytes 0-0/1", Some(1)),
        ("invalid", None),
        ("bytes 0-1023", None),
        ("bytes */*", None),
        ("", None),
    ]
}
