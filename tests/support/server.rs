//! Minimal canned-response HTTP server for hermetic tests.
//!
//! Each expected request gets one connection: read the request, reply with
//! the canned response, close. Every CLI invocation under test is a fresh
//! process with a fresh connection, so connection reuse never matters.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

/// A canned response.
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn ok(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
        }
    }

    /// The service's answer for unknown keys and wrong passphrases alike.
    pub fn not_found() -> Self {
        Self {
            status: 404,
            body: r#"{"message":"Unknown secret"}"#.to_string(),
        }
    }
}

/// One request as the server saw it.
pub struct Request {
    pub method: String,
    pub path: String,
    pub authorization: String,
    pub body: String,
}

/// A loopback HTTP server that plays back canned responses in order.
pub struct Server {
    url: String,
    handle: JoinHandle<Vec<Request>>,
}

impl Server {
    /// Bind a listener and serve the given responses, one per connection.
    pub fn start(responses: Vec<Response>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind stub server");
        let addr = listener.local_addr().expect("failed to read local addr");
        let url = format!("http://{addr}");

        let handle = thread::spawn(move || {
            let mut seen = Vec::new();
            for response in &responses {
                let (stream, _) = listener.accept().expect("stub server accept failed");
                seen.push(serve_one(stream, response));
            }
            seen
        });

        Self { url, handle }
    }

    /// Base URL to point `WICK_HOST` at.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Wait for all expected requests and return them in arrival order.
    pub fn finish(self) -> Vec<Request> {
        self.handle.join().expect("stub server thread panicked")
    }
}

fn serve_one(stream: TcpStream, response: &Response) -> Request {
    let mut reader = BufReader::new(stream);

    let mut request_line = String::new();
    reader
        .read_line(&mut request_line)
        .expect("failed to read request line");
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut authorization = String::new();
    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).expect("failed to read header");
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            match name.to_ascii_lowercase().as_str() {
                "authorization" => authorization = value.trim().to_string(),
                "content-length" => content_length = value.trim().parse().unwrap_or(0),
                _ => {}
            }
        }
    }

    let mut body = vec![0u8; content_length];
    reader
        .read_exact(&mut body)
        .expect("failed to read request body");

    let reply = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        response.status,
        reason(response.status),
        response.body.len(),
        response.body
    );
    let mut stream = reader.into_inner();
    stream
        .write_all(reply.as_bytes())
        .expect("failed to write response");
    let _ = stream.flush();

    Request {
        method,
        path,
        authorization,
        body: String::from_utf8_lossy(&body).into_owned(),
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        _ => "Error",
    }
}
