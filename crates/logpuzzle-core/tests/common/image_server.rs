//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a fixed map of path -> body for GET requests; unknown paths get 404.
//! Can be told to answer the first N requests with 503 to exercise retry.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone, Copy, Default)]
pub struct ImageServerOptions {
    /// Number of initial requests answered with 503 Service Unavailable.
    pub fail_first: usize,
}

/// Handle to a running server. The server thread runs until the process exits.
pub struct ImageServer {
    /// e.g. "127.0.0.1:12345"
    pub authority: String,
    hits: Arc<AtomicUsize>,
}

impl ImageServer {
    /// Absolute URL of `path` (must start with `/`).
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.authority, path)
    }

    /// Total requests received so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

pub fn start(files: Vec<(&str, Vec<u8>)>) -> ImageServer {
    start_with_options(files, ImageServerOptions::default())
}

pub fn start_with_options(files: Vec<(&str, Vec<u8>)>, opts: ImageServerOptions) -> ImageServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let files: Arc<HashMap<String, Vec<u8>>> = Arc::new(
        files
            .into_iter()
            .map(|(p, b)| (p.to_string(), b))
            .collect(),
    );
    let hits = Arc::new(AtomicUsize::new(0));
    let server_hits = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let n = server_hits.fetch_add(1, Ordering::SeqCst);
            let fail = n < opts.fail_first;
            let files = Arc::clone(&files);
            thread::spawn(move || handle(stream, &files, fail));
        }
    });
    ImageServer {
        authority: format!("127.0.0.1:{}", port),
        hits,
    }
}

fn handle(mut stream: std::net::TcpStream, files: &HashMap<String, Vec<u8>>, fail: bool) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let mut parts = request.lines().next().unwrap_or("").split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("");

    if fail {
        let _ = stream.write_all(
            b"HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );
        return;
    }
    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(
            b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );
        return;
    }
    match files.get(path) {
        Some(body) => {
            let header = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: image/jpeg\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let _ = stream.write_all(header.as_bytes());
            let _ = stream.write_all(body);
        }
        None => {
            let _ = stream.write_all(
                b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            );
        }
    }
}
