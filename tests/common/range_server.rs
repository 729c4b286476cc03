//! Minimal HTTP/1.1 server that supports HEAD and Range GET for integration tests.
//!
//! Serves a single static body on every path. Every response carries
//! `Connection: close`, so each request arrives on a fresh connection.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RangeServerOptions {
    /// Status answered to HEAD requests.
    pub head_status: u16,
    /// If false, GET ignores Range and always returns 200 with the full body.
    pub support_ranges: bool,
    /// A ranged GET starting at this offset is answered with 500.
    pub fail_at: Option<u64>,
    /// A ranged GET starting at this offset gets its connection closed unanswered.
    pub drop_at: Option<u64>,
    /// Delay before answering a ranged GET starting at the given offset.
    pub delays: Vec<(u64, Duration)>,
    /// Delay applied to every GET without a dedicated entry in `delays`.
    pub default_delay: Option<Duration>,
}

impl Default for RangeServerOptions {
    fn default() -> Self {
        Self {
            head_status: 200,
            support_ranges: true,
            fail_at: None,
            drop_at: None,
            delays: Vec::new(),
            default_delay: None,
        }
    }
}

/// Handle on a running server.
pub struct RangeServer {
    base: String,
    gets: Arc<AtomicUsize>,
    heads: Arc<AtomicUsize>,
}

impl RangeServer {
    /// URL of `filename` on this server.
    pub fn url(&self, filename: &str) -> String {
        format!("{}{}", self.base, filename)
    }

    /// Number of GET requests received so far.
    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    /// Number of HEAD requests received so far.
    pub fn heads(&self) -> usize {
        self.heads.load(Ordering::SeqCst)
    }
}

/// Starts a server in a background thread serving `body`. The server runs
/// until the process exits.
pub fn start(body: Vec<u8>) -> RangeServer {
    start_with_options(body, RangeServerOptions::default())
}

/// Like `start` but allows customizing server behavior.
pub fn start_with_options(body: Vec<u8>, opts: RangeServerOptions) -> RangeServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    let opts = Arc::new(opts);
    let gets = Arc::new(AtomicUsize::new(0));
    let heads = Arc::new(AtomicUsize::new(0));

    let (g, h) = (Arc::clone(&gets), Arc::clone(&heads));
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            let opts = Arc::clone(&opts);
            let (g, h) = (Arc::clone(&g), Arc::clone(&h));
            thread::spawn(move || handle(stream, &body, &opts, &g, &h));
        }
    });

    RangeServer {
        base: format!("http://127.0.0.1:{}/", port),
        gets,
        heads,
    }
}

fn read_head(stream: &mut TcpStream) -> Option<String> {
    let mut request = Vec::new();
    let mut buf = [0u8; 4096];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return None,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }
    String::from_utf8(request).ok()
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        206 => "Partial Content",
        404 => "Not Found",
        416 => "Range Not Satisfiable",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

fn respond(stream: &mut TcpStream, status: u16, headers: &[(&str, String)], body: &[u8]) {
    let mut head = format!("HTTP/1.1 {} {}\r\n", status, reason(status));
    for (name, value) in headers {
        head.push_str(&format!("{}: {}\r\n", name, value));
    }
    head.push_str("Connection: close\r\n\r\n");
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(body);
    let _ = stream.flush();
}

fn handle(
    mut stream: TcpStream,
    body: &[u8],
    opts: &RangeServerOptions,
    gets: &AtomicUsize,
    heads: &AtomicUsize,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(5)));
    let request = match read_head(&mut stream) {
        Some(r) => r,
        None => return,
    };
    let (method, range) = parse_request(&request);
    let total = body.len() as u64;

    if method.eq_ignore_ascii_case("HEAD") {
        heads.fetch_add(1, Ordering::SeqCst);
        let headers = [
            ("Content-Length", total.to_string()),
            ("Accept-Ranges", "bytes".to_string()),
        ];
        if opts.head_status == 200 {
            respond(&mut stream, 200, &headers, &[]);
        } else {
            respond(&mut stream, opts.head_status, &[("Content-Length", "0".into())], &[]);
        }
        return;
    }

    if !method.eq_ignore_ascii_case("GET") {
        respond(&mut stream, 405, &[("Content-Length", "0".into())], &[]);
        return;
    }
    gets.fetch_add(1, Ordering::SeqCst);

    let start = range.map(|(s, _)| s);
    let delay = start
        .and_then(|s| opts.delays.iter().find(|(o, _)| *o == s).map(|(_, d)| *d))
        .or(opts.default_delay);
    if let Some(delay) = delay {
        thread::sleep(delay);
    }

    if start.is_some() && start == opts.drop_at {
        return;
    }
    if start.is_some() && start == opts.fail_at {
        respond(&mut stream, 500, &[("Content-Length", "0".into())], &[]);
        return;
    }

    match range {
        Some((start, end_incl)) if opts.support_ranges => {
            let end_incl = end_incl.min(total.saturating_sub(1));
            if start >= total || start > end_incl {
                respond(
                    &mut stream,
                    416,
                    &[
                        ("Content-Length", "0".into()),
                        ("Content-Range", format!("bytes */{}", total)),
                    ],
                    &[],
                );
                return;
            }
            let slice = &body[start as usize..=end_incl as usize];
            respond(
                &mut stream,
                206,
                &[
                    ("Content-Length", slice.len().to_string()),
                    ("Content-Range", format!("bytes {}-{}/{}", start, end_incl, total)),
                    ("Accept-Ranges", "bytes".into()),
                ],
                slice,
            );
        }
        _ => respond(
            &mut stream,
            200,
            &[("Content-Length", total.to_string())],
            body,
        ),
    }
}

/// Returns (method, optional (start, end_inclusive) for Range: bytes=X-Y).
fn parse_request(request: &str) -> (&str, Option<(u64, u64)>) {
    let mut lines = request.lines();
    let method = lines
        .next()
        .and_then(|l| l.split_whitespace().next())
        .unwrap_or("");
    let mut range = None;
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("range") {
                range = parse_range(value.trim());
            }
        }
    }
    (method, range)
}

fn parse_range(value: &str) -> Option<(u64, u64)> {
    let spec = value.strip_prefix("bytes=")?;
    let (start, end) = spec.split_once('-')?;
    Some((start.trim().parse().ok()?, end.trim().parse().ok()?))
}
