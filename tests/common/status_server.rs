//! Minimal HTTP/1.1 server for the CLI tests.
//!
//! Answers by path with a fixed status and records the request line
//! ("HEAD /ok") of everything it receives, so tests can check which method
//! the prober used.
//!
//! Routes:
//! - `/ok`      200
//! - `/missing` 404
//! - `/moved`   301 redirect to `/ok`
//! - `/teapot`  418
//! - anything else 404

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

pub struct StatusServer {
    /// Base URL without a trailing slash, e.g. "http://127.0.0.1:12345"
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StatusServer {
    /// Request lines received so far, in arrival order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Methods of every request received so far
    pub fn methods(&self) -> Vec<String> {
        self.requests()
            .iter()
            .filter_map(|line| line.split_whitespace().next().map(str::to_string))
            .collect()
    }
}

/// Starts the server in a background thread. It runs until the process exits.
pub fn start() -> StatusServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let requests = Arc::new(Mutex::new(Vec::new()));

    let recorded = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let recorded = Arc::clone(&recorded);
            thread::spawn(move || handle(stream, &recorded));
        }
    });

    StatusServer {
        base_url: format!("http://127.0.0.1:{}", port),
        requests,
    }
}

/// A local URL nothing is listening on
pub fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: TcpStream, recorded: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    let request = match read_head(&mut stream) {
        Some(request) => request,
        None => return,
    };
    let request_line = request.lines().next().unwrap_or("").to_string();
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or("").to_string();
    let path = parts.next().unwrap_or("/").to_string();
    recorded.lock().unwrap().push(format!("{} {}", method, path));

    let (status, extra_headers) = match path.as_str() {
        "/ok" => ("200 OK", String::new()),
        "/moved" => ("301 Moved Permanently", "Location: /ok\r\n".to_string()),
        "/teapot" => ("418 I'm a teapot", String::new()),
        _ => ("404 Not Found", String::new()),
    };

    let body: &[u8] = if method.eq_ignore_ascii_case("GET") {
        b"hello"
    } else {
        b""
    };
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n{}\r\n",
        status,
        if method.eq_ignore_ascii_case("HEAD") { 5 } else { body.len() },
        extra_headers
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body);
    let _ = stream.flush();
}

// Reads until the end of the request headers
fn read_head(stream: &mut TcpStream) -> Option<String> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    String::from_utf8(buf).ok()
}
