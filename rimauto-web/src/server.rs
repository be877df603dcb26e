//! Static file server for the built Mini App bundle.
//!
//! Serves `dist/` with an SPA fallback: unknown paths get `index.html` so
//! client-side routes survive a reload. Development convenience only; in
//! production the bundle sits behind the main reverse proxy.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};

fn main() {
    let port = std::env::var("RIMAUTO_PORT").unwrap_or_else(|_| "8080".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = match TcpListener::bind(&addr) {
        Ok(listener) => listener,
        Err(err) => {
            eprintln!("failed to bind {addr}: {err}");
            std::process::exit(1);
        }
    };

    println!("RimAuto Mini App served at http://{addr}");
    println!("Serving from dist/ directory");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream),
            Err(err) => eprintln!("connection error: {err}"),
        }
    }
}

fn handle_client(mut stream: TcpStream) {
    let buf_reader = BufReader::new(&mut stream);
    let request_line = match buf_reader.lines().next() {
        Some(Ok(line)) => line,
        _ => return,
    };

    let full_path = request_line.split_whitespace().nth(1).unwrap_or("/");
    let path = full_path.split('?').next().unwrap_or(full_path);

    let file_path = resolve(path);
    let content_type = content_type_of(&file_path);

    match fs::read(&file_path) {
        Ok(body) => {
            let header = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nCache-Control: no-cache\r\n\r\n",
                body.len()
            );
            let _ = stream.write_all(header.as_bytes());
            let _ = stream.write_all(&body);
        }
        Err(_) => {
            let body = b"404 Not Found";
            let header = format!(
                "HTTP/1.1 404 Not Found\r\nContent-Type: text/plain\r\nContent-Length: {}\r\n\r\n",
                body.len()
            );
            let _ = stream.write_all(header.as_bytes());
            let _ = stream.write_all(body);
        }
    }
}

/// Map a request path into `dist/`, falling back to `index.html` for
/// client-side routes (anything without a file extension).
fn resolve(path: &str) -> PathBuf {
    if path == "/" || path.is_empty() {
        return PathBuf::from("dist/index.html");
    }
    let mut candidate = PathBuf::from("dist");
    candidate.push(path.trim_start_matches('/'));
    if candidate.is_file() {
        candidate
    } else if candidate.extension().is_some() {
        // Real asset that is simply missing: let it 404
        candidate
    } else {
        PathBuf::from("dist/index.html")
    }
}

fn content_type_of(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("css") => "text/css",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}
