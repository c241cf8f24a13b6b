//! Canned-response HTTP server for tests.
//!
//! No mock-HTTP crate: the stub binds a real `TcpListener`, speaks just
//! enough HTTP/1.1 for one request per connection, and answers from a fixed
//! route table. Responses always close the connection.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

#[derive(Debug, Clone)]
struct Route {
    method: String,
    path: String,
    status: u16,
    body: String,
    delay: Option<Duration>,
}

pub struct StubServerBuilder {
    routes: Vec<Route>,
}

impl StubServerBuilder {
    /// Register a canned response for `method path`.
    pub fn route(mut self, method: &str, path: &str, status: u16, body: &str) -> Self {
        self.routes.push(Route {
            method: method.to_string(),
            path: path.to_string(),
            status,
            body: body.to_string(),
            delay: None,
        });
        self
    }

    /// Register a response that is held back for `delay_ms` before being
    /// written, for exercising client timeouts.
    pub fn route_with_delay(
        mut self,
        method: &str,
        path: &str,
        status: u16,
        body: &str,
        delay_ms: u64,
    ) -> Self {
        self.routes.push(Route {
            method: method.to_string(),
            path: path.to_string(),
            status,
            body: body.to_string(),
            delay: Some(Duration::from_millis(delay_ms)),
        });
        self
    }

    pub fn start(self) -> StubServer {
        StubServer::start_with(self.routes)
    }
}

/// A running stub service on an ephemeral localhost port.
pub struct StubServer {
    addr: SocketAddr,
    base_url: String,
    shutdown: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl StubServer {
    pub fn builder() -> StubServerBuilder {
        StubServerBuilder { routes: Vec::new() }
    }

    fn start_with(routes: Vec<Route>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind stub server");
        let addr = listener.local_addr().expect("Failed to read stub address");
        let shutdown = Arc::new(AtomicBool::new(false));

        let flag = Arc::clone(&shutdown);
        let routes = Arc::new(routes);
        let handle = thread::spawn(move || {
            for stream in listener.incoming() {
                if flag.load(Ordering::SeqCst) {
                    break;
                }
                let Ok(stream) = stream else { continue };
                let routes = Arc::clone(&routes);
                thread::spawn(move || handle_connection(stream, &routes));
            }
        });

        Self {
            addr,
            base_url: format!("http://{}", addr),
            shutdown,
            handle: Some(handle),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::SeqCst);
        // Wake the accept loop so it observes the flag.
        let _ = TcpStream::connect(self.addr);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn handle_connection(mut stream: TcpStream, routes: &[Route]) {
    let Ok(read_half) = stream.try_clone() else {
        return;
    };
    let mut reader = BufReader::new(read_half);

    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    let mut parts = request_line.split_whitespace();
    let (Some(method), Some(raw_path)) = (parts.next(), parts.next()) else {
        return;
    };
    let path = raw_path.split('?').next().unwrap_or(raw_path).to_string();
    let method = method.to_string();

    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    break;
                }
                if let Some(value) = line
                    .strip_prefix("Content-Length:")
                    .or_else(|| line.strip_prefix("content-length:"))
                {
                    content_length = value.trim().parse().unwrap_or(0);
                }
            }
            Err(_) => return,
        }
    }

    // Drain the request body before answering.
    if content_length > 0 {
        let mut body = vec![0u8; content_length];
        let _ = reader.read_exact(&mut body);
    }

    let (status, body, delay) = match routes
        .iter()
        .find(|r| r.method.eq_ignore_ascii_case(&method) && r.path == path)
    {
        Some(route) => (route.status, route.body.clone(), route.delay),
        None => (404, r#"{"error":"not found"}"#.to_string(), None),
    };

    if let Some(delay) = delay {
        thread::sleep(delay);
    }

    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason(status),
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        400 => "Bad Request",
        404 => "Not Found",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Status",
    }
}
