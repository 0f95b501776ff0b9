//! Loopback HTTP servers for exercising the fetch path offline.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

use once_cell::sync::Lazy;

use crate::config::{self, ScraperConfig};

static REGISTRY_SERVER: Lazy<String> = Lazy::new(|| serve_forever("404 Not Found", "gone"));

fn bind(status: &str, body: &str) -> (TcpListener, String, String) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    (listener, base_url, response)
}

fn respond(mut stream: TcpStream, response: &str) {
    // Drain the request head so closing the socket doesn't reset it.
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }

    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

/// Serves a single canned response and returns the server's base URL.
pub fn serve_once(status: &str, body: &str) -> String {
    let (listener, base_url, response) = bind(status, body);

    thread::spawn(move || {
        if let Ok((stream, _)) = listener.accept() {
            respond(stream, &response);
        }
    });

    base_url
}

fn serve_forever(status: &str, body: &str) -> String {
    let (listener, base_url, response) = bind(status, body);

    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            respond(stream, &response);
        }
    });

    base_url
}

pub fn config_for(base_url: String) -> ScraperConfig {
    ScraperConfig {
        base_url,
        timeout_secs: 5,
        ..Default::default()
    }
}

/// Points the process-wide config at a local server answering 404.
///
/// Call before the first registry dispatch so the toolbelt singletons never
/// see the real site.
pub fn install_registry_config() {
    config::install(config_for(REGISTRY_SERVER.clone()));
}
