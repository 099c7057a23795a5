//! Common utilities for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use rmcp::model::{CallToolResult, RawContent};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use dexpaprika_mcp::{DexPaprikaClient, DexPaprikaServer};

/// A minimal HTTP stub standing in for the DexPaprika API.
///
/// Serves one canned status and body for every request and records each
/// request target (path plus query) in arrival order, so tests can assert
/// both on what the gateway sent and on how it classified the reply.
pub struct StubApi {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubApi {
    /// Spawn a stub returning `status` with `body` for every request.
    pub async fn spawn(status: u16, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub listener");
        let addr = listener.local_addr().expect("stub local addr");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = requests.clone();
        let response = http_response(status, body);

        tokio::spawn(async move {
            loop {
                let (mut socket, _) = match listener.accept().await {
                    Ok(conn) => conn,
                    Err(_) => break,
                };
                let recorded = recorded.clone();
                let response = response.clone();
                tokio::spawn(async move {
                    let mut head = Vec::new();
                    let mut chunk = [0u8; 1024];
                    // GET requests have no body; the head is all there is.
                    loop {
                        match socket.read(&mut chunk).await {
                            Ok(0) => return,
                            Ok(n) => {
                                head.extend_from_slice(&chunk[..n]);
                                if head.windows(4).any(|window| window == b"\r\n\r\n") {
                                    break;
                                }
                            }
                            Err(_) => return,
                        }
                    }
                    if let Some(target) = request_target(&head) {
                        recorded.lock().unwrap().push(target);
                    }
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        Self { base_url: format!("http://{}", addr), requests }
    }

    /// A server whose gateway talks to this stub.
    pub fn server(&self) -> DexPaprikaServer {
        DexPaprikaServer::with_client(self.client())
    }

    /// A bare gateway client pointed at this stub.
    pub fn client(&self) -> DexPaprikaClient {
        DexPaprikaClient::with_base_url(&self.base_url).expect("stub client")
    }

    /// Request targets (path plus query) seen so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests the stub has served.
    pub fn hits(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

/// Extract the text payload from a tool result.
pub fn result_text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        RawContent::Text(text) => &text.text,
        other => panic!("expected text content, got {:?}", other),
    }
}

/// A base URL that refuses connections (for transport-failure tests).
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind throwaway listener");
    let addr = listener.local_addr().expect("throwaway local addr");
    drop(listener);
    format!("http://{}", addr)
}

fn http_response(status: u16, body: &str) -> String {
    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        410 => "Gone",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        _ => "Status",
    };
    format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    )
}

fn request_target(head: &[u8]) -> Option<String> {
    let head = String::from_utf8_lossy(head);
    let request_line = head.lines().next()?;
    request_line.split_whitespace().nth(1).map(str::to_string)
}
