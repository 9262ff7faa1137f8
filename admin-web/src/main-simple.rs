//! Static file server for the buyback admin page
//!
//! Serves the built WASM app and the contract descriptor JSONs from the
//! dist/ directory on port 8080, so the page and its `./build/contracts/`
//! fetches share an origin.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Component, Path, PathBuf};

const ADDR: &str = "127.0.0.1:8080";
const DIST: &str = "dist";

fn main() {
    let listener = TcpListener::bind(ADDR).expect("Failed to bind to port 8080");

    println!("Buyback admin server running at http://{ADDR}");
    println!("Serving from {DIST}/ directory");
    println!("Press Ctrl+C to stop\n");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream),
            Err(e) => eprintln!("Connection error: {e}"),
        }
    }
}

fn handle_client(mut stream: TcpStream) {
    let buf_reader = BufReader::new(&mut stream);
    let request_line = match buf_reader.lines().next() {
        Some(Ok(line)) => line,
        _ => {
            eprintln!("Failed to read request line");
            return;
        }
    };

    let full_path = request_line.split_whitespace().nth(1).unwrap_or("/");
    // The deploy redirect lands back here with ?buyback=<address>; the
    // query string belongs to the client-side app, not the file lookup.
    let path = full_path.split_once('?').map(|(p, _)| p).unwrap_or(full_path);

    let file_path = resolve_path(path);
    let (status, body) = match fs::read(&file_path) {
        Ok(contents) => ("200 OK", contents),
        Err(_) => match fs::read(Path::new(DIST).join("index.html")) {
            Ok(contents) => ("200 OK", contents),
            Err(_) => {
                eprintln!("File not found: {}", file_path.display());
                ("404 NOT FOUND", b"<h1>404 Not Found</h1>".to_vec())
            }
        },
    };

    let headers = format!(
        "HTTP/1.1 {status}\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
        content_type(&file_path),
        body.len()
    );
    if let Err(e) = stream
        .write_all(headers.as_bytes())
        .and_then(|_| stream.write_all(&body))
        .and_then(|_| stream.flush())
    {
        eprintln!("Failed to write response: {e}");
    }
}

/// Map a request path to a file under dist/, falling back to index.html for
/// directories and client-side routes.
fn resolve_path(path: &str) -> PathBuf {
    let trimmed = path.trim_start_matches('/');
    // Never serve outside dist/, whatever the request line says.
    let escapes = Path::new(trimmed)
        .components()
        .any(|c| matches!(c, Component::ParentDir));
    if trimmed.is_empty() || escapes {
        return PathBuf::from(DIST).join("index.html");
    }
    let file_path = PathBuf::from(DIST).join(trimmed);
    if file_path.is_dir() || !file_path.exists() {
        PathBuf::from(DIST).join("index.html")
    } else {
        file_path
    }
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_path_rejects_traversal() {
        let index = Path::new(DIST).join("index.html");
        assert_eq!(resolve_path("/../Cargo.toml"), index);
        assert_eq!(resolve_path("/build/../../etc/passwd"), index);
        assert_eq!(resolve_path("/.."), index);
    }

    #[test]
    fn test_resolve_path_root_serves_index() {
        assert_eq!(resolve_path("/"), Path::new(DIST).join("index.html"));
        assert_eq!(resolve_path(""), Path::new(DIST).join("index.html"));
    }

    #[test]
    fn test_content_type() {
        assert_eq!(content_type(Path::new("dist/index.html")), "text/html; charset=utf-8");
        assert_eq!(content_type(Path::new("dist/app.wasm")), "application/wasm");
        assert_eq!(
            content_type(Path::new("dist/build/contracts/Buyback.json")),
            "application/json"
        );
        assert_eq!(content_type(Path::new("dist/favicon")), "application/octet-stream");
    }
}
