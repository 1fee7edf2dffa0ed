//! Fixed-response HTTP/1.1 server for driving the `gdfetch` binary.
//!
//! Answers every request with the same status and body, closes the
//! connection, and records request targets.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

pub struct HttpServer {
    base: String,
    targets: Arc<Mutex<Vec<String>>>,
}

impl HttpServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub fn hits(&self) -> usize {
        self.targets.lock().unwrap().len()
    }

    /// Request targets (path + query) in arrival order.
    pub fn targets(&self) -> Vec<String> {
        self.targets.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread; it runs until the process exits.
pub fn start(status: &str, body: Vec<u8>) -> HttpServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let head = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        body.len()
    );
    let response = Arc::new([head.into_bytes(), body].concat());
    let targets = Arc::new(Mutex::new(Vec::new()));
    {
        let targets = Arc::clone(&targets);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let response = Arc::clone(&response);
                let targets = Arc::clone(&targets);
                thread::spawn(move || handle(stream, &response, &targets));
            }
        });
    }
    HttpServer {
        base: format!("http://127.0.0.1:{}", port),
        targets,
    }
}

fn handle(mut stream: TcpStream, response: &[u8], targets: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = String::from_utf8_lossy(&buf[..n]);
    let target = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    targets.lock().unwrap().push(target);
    let _ = stream.write_all(response);
}
