//! End-to-end tests driving the worker pool over real sockets.

use std::net::SocketAddr;
use std::path::PathBuf;

use shoal::config::Config;
use shoal::server::{listener, pool};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

fn temp_root(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("shoal-server-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Binds an ephemeral port and spawns the pool over it.
fn spawn_pool(root: PathBuf, workers: usize) -> SocketAddr {
    let listener = listener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let cfg = Config {
        listen_addr: addr.to_string(),
        workers,
        root: root.to_string_lossy().into_owned(),
    };
    drop(tokio::spawn(pool::run(listener, cfg)));

    addr
}

/// Sends raw bytes and collects the whole response; returning at all
/// proves the server closed the connection.
async fn roundtrip(addr: SocketAddr, raw: &[u8]) -> Vec<u8> {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(raw).await.unwrap();

    let mut response = Vec::new();
    let _ = stream.read_to_end(&mut response).await.unwrap();
    response
}

fn body_of(response: &[u8]) -> &[u8] {
    let separator = response
        .windows(2)
        .position(|w| w == b"\n\n")
        .expect("no header/body separator in response");
    &response[separator + 2..]
}

fn status_line_of(response: &[u8]) -> String {
    let end = response
        .iter()
        .position(|&b| b == b'\n')
        .expect("no status line");
    String::from_utf8_lossy(&response[..end]).into_owned()
}

#[tokio::test]
async fn test_get_existing_file_over_the_wire() {
    let root = temp_root("get");
    let content = b"0123456789012345678901234567890123456789ab"; // 42 bytes
    std::fs::write(root.join("index.html"), content).unwrap();

    let addr = spawn_pool(root, 2);
    let response = roundtrip(addr, b"GET /index.html HTTP/1.1\r\n\r\n").await;

    assert_eq!(status_line_of(&response), "HTTP/1.1 200 OK");
    let text = String::from_utf8_lossy(&response);
    assert!(text.contains("Content-Length: 42\n"));
    assert!(text.contains("Content-Type: text/html\n"));
    assert_eq!(body_of(&response), content);
}

#[tokio::test]
async fn test_get_missing_file_over_the_wire() {
    let root = temp_root("missing");
    let addr = spawn_pool(root, 2);

    let response = roundtrip(addr, b"GET /missing.html HTTP/1.1\r\n\r\n").await;

    assert_eq!(status_line_of(&response), "HTTP/1.1 404 Not Found");
    assert_eq!(
        body_of(&response),
        b"<html><body><h1>File not found</h1></body></html>"
    );
}

#[tokio::test]
async fn test_malformed_request_gets_400_and_a_closed_connection() {
    let root = temp_root("malformed");
    let addr = spawn_pool(root, 2);

    // No URI token at all. roundtrip() returning proves the server still
    // closed the socket.
    let response = roundtrip(addr, b"GET").await;

    assert_eq!(status_line_of(&response), "HTTP/1.1 400 Bad Request");
}

#[tokio::test]
async fn test_put_gets_405_over_the_wire() {
    let root = temp_root("put");
    std::fs::write(root.join("file.html"), b"data").unwrap();
    let addr = spawn_pool(root, 2);

    let response = roundtrip(addr, b"PUT /file.html HTTP/1.1\r\n\r\n").await;

    assert_eq!(status_line_of(&response), "HTTP/1.1 405 Method Not Allowed");
}

#[tokio::test]
async fn test_repeated_get_is_byte_identical() {
    let root = temp_root("repeat");
    std::fs::write(root.join("stable.html"), b"unchanging content").unwrap();
    let addr = spawn_pool(root, 2);

    let first = roundtrip(addr, b"GET /stable.html HTTP/1.1\r\n\r\n").await;
    let second = roundtrip(addr, b"GET /stable.html HTTP/1.1\r\n\r\n").await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_five_concurrent_clients_get_distinct_files() {
    let root = temp_root("concurrent");
    for i in 0..5 {
        std::fs::write(
            root.join(format!("file{i}.html")),
            format!("contents of file number {i}"),
        )
        .unwrap();
    }

    let addr = spawn_pool(root, 5);

    let mut clients = Vec::new();
    for i in 0..5 {
        clients.push(tokio::spawn(async move {
            let request = format!("GET /file{i}.html HTTP/1.1\r\n\r\n");
            let response = roundtrip(addr, request.as_bytes()).await;
            (i, response)
        }));
    }

    for client in clients {
        let (i, response) = client.await.unwrap();
        assert_eq!(status_line_of(&response), "HTTP/1.1 200 OK");
        assert_eq!(
            body_of(&response),
            format!("contents of file number {i}").as_bytes()
        );
    }
}

#[tokio::test]
async fn test_pool_survives_a_client_that_sends_nothing() {
    let root = temp_root("silent");
    std::fs::write(root.join("after.html"), b"still serving").unwrap();
    let addr = spawn_pool(root, 1);

    // Connect and immediately hang up without sending a request.
    let stream = TcpStream::connect(addr).await.unwrap();
    drop(stream);

    // The single worker must still answer the next client.
    let response = roundtrip(addr, b"GET /after.html HTTP/1.1\r\n\r\n").await;
    assert_eq!(status_line_of(&response), "HTTP/1.1 200 OK");
    assert_eq!(body_of(&response), b"still serving");
}

#[tokio::test]
async fn test_bind_conflict_is_an_error() {
    let first = listener::bind("127.0.0.1:0").unwrap();
    let addr = first.local_addr().unwrap();

    let second = listener::bind(&addr.to_string());
    assert!(second.is_err());
}
