//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a fixed route table: each path maps to a body or a forced error
//! status. Unknown paths get 404. GET only.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

/// What the server returns for one path.
#[derive(Debug, Clone)]
pub enum Route {
    /// 200 with the given body.
    Body(Vec<u8>),
    /// Error status with a small placeholder body.
    Error(u16),
}

impl Route {
    pub fn body(text: &str) -> Self {
        Route::Body(text.as_bytes().to_vec())
    }
}

/// Starts a server in a background thread serving `routes` (keyed by path
/// without the leading '/'). Returns the base URL ending in '/'
/// (e.g. "http://127.0.0.1:12345/"). The server runs until the process exits.
pub fn start(routes: HashMap<String, Route>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes = Arc::new(routes);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            thread::spawn(move || handle(stream, &routes));
        }
    });
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: std::net::TcpStream, routes: &HashMap<String, Route>) {
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
    let (method, path) = parse_request_line(request);
    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\n\r\n");
        return;
    }

    let (status, body): (u16, Vec<u8>) = match routes.get(path.trim_start_matches('/')) {
        Some(Route::Body(body)) => (200, body.clone()),
        Some(Route::Error(status)) => (*status, format!("error {}\n", status).into_bytes()),
        None => (404, b"not found\n".to_vec()),
    };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        reason(status),
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(&body);
}

/// Returns (method, path) from the request line.
fn parse_request_line(request: &str) -> (&str, &str) {
    let line = request.lines().next().unwrap_or("");
    let mut parts = line.split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("/");
    (method, path)
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Error",
    }
}
