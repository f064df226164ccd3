//! End-to-end tests for the per-connection state machine, driven over an
//! in-memory duplex stream.

use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use webserv::http::connection::{Connection, READ_CHUNK};

fn site() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>hi</h1>").unwrap();
    std::fs::write(dir.path().join("data.json"), "{\"a\":1}").unwrap();
    std::fs::write(dir.path().join("notes.txt"), "plain notes").unwrap();
    std::fs::write(dir.path().join(".secret"), "hidden").unwrap();
    std::fs::create_dir(dir.path().join("sub")).unwrap();
    std::fs::write(dir.path().join("sub").join("page.html"), "<p>sub</p>").unwrap();
    dir
}

/// Sends `request`, half-closes, and returns everything the server wrote
/// before closing the connection.
async fn exchange(root: PathBuf, request: &[u8]) -> String {
    let (mut client, server) = tokio::io::duplex(256 * 1024);

    client.write_all(request).await.unwrap();
    client.shutdown().await.unwrap();

    Connection::new(server, Arc::new(root)).run().await.unwrap();

    let mut out = Vec::new();
    client.read_to_end(&mut out).await.unwrap();
    String::from_utf8(out).unwrap()
}

#[tokio::test]
async fn test_serves_existing_html() {
    let dir = site();
    let resp = exchange(dir.path().to_path_buf(), b"GET /index.html HTTP/1.1\n").await;

    assert_eq!(resp, "HTTP/1.1 200 OK\nContent-Type: text/html;\n\n<h1>hi</h1>");
}

#[tokio::test]
async fn test_root_serves_index() {
    let dir = site();
    let resp = exchange(
        dir.path().to_path_buf(),
        b"GET / HTTP/1.1\r\nHost: localhost:8080\r\nAccept: */*\r\n\r\n",
    )
    .await;

    assert!(resp.starts_with("HTTP/1.1 200 OK\n"));
    assert!(resp.ends_with("\n\n<h1>hi</h1>"));
}

#[tokio::test]
async fn test_content_type_follows_extension() {
    let dir = site();

    let resp = exchange(dir.path().to_path_buf(), b"GET /data.json HTTP/1.1\n").await;
    assert_eq!(resp, "HTTP/1.1 200 OK\nContent-Type: application/json;\n\n{\"a\":1}");

    let resp = exchange(dir.path().to_path_buf(), b"GET /notes.txt HTTP/1.1\n").await;
    assert_eq!(resp, "HTTP/1.1 200 OK\nContent-Type: text/plain;\n\nplain notes");
}

#[tokio::test]
async fn test_serves_nested_file() {
    let dir = site();
    let resp = exchange(dir.path().to_path_buf(), b"GET /sub/page.html HTTP/1.1\n").await;

    assert!(resp.ends_with("<p>sub</p>"));
}

#[tokio::test]
async fn test_any_supported_verb_serves_file() {
    let dir = site();
    let resp = exchange(dir.path().to_path_buf(), b"delete /index.html HTTP/1.1\n").await;

    assert!(resp.starts_with("HTTP/1.1 200 OK"));
}

#[tokio::test]
async fn test_missing_file_is_404() {
    let dir = site();
    let resp = exchange(dir.path().to_path_buf(), b"GET /missing.html HTTP/1.1\n").await;

    assert_eq!(
        resp,
        "HTTP/1.1 404 Not Found\nContent-Type: text/plain;\n\nFile not found"
    );
}

#[tokio::test]
async fn test_unknown_verb_is_400() {
    let dir = site();
    let resp = exchange(dir.path().to_path_buf(), b"WIBBLE / HTTP/1.1\n").await;

    assert_eq!(
        resp,
        "HTTP/1.1 400 Bad Request\nContent-Type: text/plain;\n\nBad request"
    );
}

#[tokio::test]
async fn test_empty_request_is_400() {
    let dir = site();
    let resp = exchange(dir.path().to_path_buf(), b"").await;

    assert!(resp.starts_with("HTTP/1.1 400 Bad Request"));
}

#[tokio::test]
async fn test_traversal_never_leaves_root() {
    let dir = site();
    let root = dir.path().join("sub");
    let resp = exchange(root, b"GET /../index.html HTTP/1.1\n").await;

    assert!(resp.starts_with("HTTP/1.1 500 Internal Server Error"));
    assert!(!resp.contains("<h1>hi</h1>"));
}

#[tokio::test]
async fn test_etc_passwd_is_not_served() {
    let dir = site();
    let resp = exchange(dir.path().to_path_buf(), b"GET /../../etc/passwd HTTP/1.1\n").await;

    assert_eq!(
        resp,
        "HTTP/1.1 500 Internal Server Error\nContent-Type: text/plain;\n\nInternal error"
    );
}

#[tokio::test]
async fn test_hidden_file_is_500() {
    let dir = site();
    let resp = exchange(dir.path().to_path_buf(), b"GET /.secret HTTP/1.1\n").await;

    assert_eq!(
        resp,
        "HTTP/1.1 500 Internal Server Error\nContent-Type: text/plain;\n\nInternal error"
    );
}

#[tokio::test]
async fn test_directory_is_500_without_detail() {
    let dir = site();
    let resp = exchange(dir.path().to_path_buf(), b"GET /sub HTTP/1.1\n").await;

    assert!(resp.starts_with("HTTP/1.1 500 Internal Server Error"));
    assert!(resp.ends_with("\n\nInternal error"));
}

#[tokio::test]
async fn test_request_spanning_several_chunks() {
    let dir = site();
    let mut request = b"GET /index.html HTTP/1.1\nX-Padding: ".to_vec();
    request.extend(std::iter::repeat_n(b'a', READ_CHUNK * 3));
    request.extend_from_slice(b"\n\n");

    let resp = exchange(dir.path().to_path_buf(), &request).await;

    assert_eq!(resp, "HTTP/1.1 200 OK\nContent-Type: text/html;\n\n<h1>hi</h1>");
}

#[tokio::test]
async fn test_request_of_exactly_one_chunk_completes_on_half_close() {
    let dir = site();
    let mut request = b"GET /index.html HTTP/1.1\nX-Padding: ".to_vec();
    let padding = READ_CHUNK - request.len() - 1;
    request.extend(std::iter::repeat_n(b'a', padding));
    request.push(b'\n');
    assert_eq!(request.len(), READ_CHUNK);

    let resp = exchange(dir.path().to_path_buf(), &request).await;

    assert!(resp.starts_with("HTTP/1.1 200 OK"));
}

#[tokio::test]
async fn test_connection_is_closed_after_response() {
    let dir = site();
    let (mut client, server) = tokio::io::duplex(4096);

    client.write_all(b"GET /index.html HTTP/1.1\n").await.unwrap();

    // No half-close from the client: the short read ends the request.
    let handle = tokio::spawn(Connection::new(server, Arc::new(dir.path().to_path_buf())).run());

    let mut out = Vec::new();
    client.read_to_end(&mut out).await.unwrap();
    handle.await.unwrap().unwrap();

    assert!(out.ends_with(b"<h1>hi</h1>"));

    // The server side is gone; nothing more arrives.
    let mut extra = [0u8; 16];
    assert_eq!(client.read(&mut extra).await.unwrap(), 0);
}
