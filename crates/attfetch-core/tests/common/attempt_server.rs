//! Minimal HTTP/1.1 server that serves a scripted sequence of responses.
//!
//! Each incoming request consumes the next entry of the script (the last
//! entry repeats once the script is exhausted). Records the request count and
//! the Authorization header of every request so tests can assert on both.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

/// One scripted response.
#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl CannedResponse {
    pub fn new(status: u16, body: &[u8]) -> Self {
        Self {
            status,
            body: body.to_vec(),
        }
    }
}

/// Handle to a running scripted server.
pub struct ServerHandle {
    /// Base URL, e.g. "http://127.0.0.1:12345/".
    pub url: String,
    hits: Arc<AtomicUsize>,
    auth: Arc<Mutex<Vec<Option<String>>>>,
}

impl ServerHandle {
    /// Number of requests served so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Authorization header of each request, in order (None when absent).
    pub fn auth_headers(&self) -> Vec<Option<String>> {
        self.auth.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread serving `script`. The server runs
/// until the process exits.
pub fn start(script: Vec<CannedResponse>) -> ServerHandle {
    assert!(!script.is_empty(), "script must have at least one response");
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let hits = Arc::new(AtomicUsize::new(0));
    let auth = Arc::new(Mutex::new(Vec::new()));

    let handle = ServerHandle {
        url: format!("http://127.0.0.1:{}/", port),
        hits: Arc::clone(&hits),
        auth: Arc::clone(&auth),
    };

    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let n = hits.fetch_add(1, Ordering::SeqCst);
            let response = script.get(n).unwrap_or_else(|| script.last().unwrap());
            handle_conn(stream, response, &auth);
        }
    });

    handle
}

fn handle_conn(
    mut stream: std::net::TcpStream,
    response: &CannedResponse,
    auth: &Mutex<Vec<Option<String>>>,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));

    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    auth.lock().unwrap().push(authorization_header(request));

    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        response.status,
        reason(response.status),
        response.body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&response.body);
}

fn authorization_header(request: &str) -> Option<String> {
    for line in request.lines().skip(1) {
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("authorization") {
                return Some(value.trim().to_string());
            }
        }
    }
    None
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        204 => "No Content",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Status",
    }
}
