//! Minimal HTTP/1.1 server standing in for the GitHub license endpoint.
//!
//! Serves canned JSON bodies by request path and records every request so tests
//! can assert which repositories were queried and with which headers.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

/// One received request: path plus raw header lines.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

pub struct LicenseServer {
    /// Base URL without trailing slash (e.g. "http://127.0.0.1:12345").
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl LicenseServer {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.path).collect()
    }
}

/// Starts a server in a background thread. `routes` maps request path to
/// (status line, JSON body); unknown paths get GitHub's 404 body.
pub fn start(routes: &[(&str, &str, &str)]) -> LicenseServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<HashMap<String, (String, String)>> = Arc::new(
        routes
            .iter()
            .map(|(path, status, body)| (path.to_string(), (status.to_string(), body.to_string())))
            .collect(),
    );
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            handle(stream, &routes, &recorded);
        }
    });
    LicenseServer {
        base_url: format!("http://127.0.0.1:{}", port),
        requests,
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    routes: &HashMap<String, (String, String)>,
    recorded: &Mutex<Vec<RecordedRequest>>,
) {
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
    let req = parse_request(request);
    let (status, body) = routes.get(&req.path).cloned().unwrap_or_else(|| {
        (
            "404 Not Found".to_string(),
            r#"{"message":"Not Found","documentation_url":"https://docs.github.com/rest"}"#
                .to_string(),
        )
    });
    recorded.lock().unwrap().push(req);
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
}

fn parse_request(request: &str) -> RecordedRequest {
    let mut lines = request.lines();
    let mut parts = lines.next().unwrap_or("").split_whitespace();
    let method = parts.next().unwrap_or("").to_string();
    let path = parts.next().unwrap_or("").to_string();
    let mut headers = Vec::new();
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.push((name.trim().to_string(), value.trim().to_string()));
        }
    }
    RecordedRequest {
        method,
        path,
        headers,
    }
}
