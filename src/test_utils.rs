//! Shared test utilities and Mother pattern factories.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use crate::agent::{AgentResponse, WalletAgent};
use crate::client::IndexerTransport;
use crate::constants::NATIVE_ASSET_ID;
use crate::domain::{AgentRequest, FetchError, Operation, OperationError};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

/// Indexer response bodies.
pub struct JsonMother;

impl JsonMother {
    /// A well-formed balances response with the given `(amount, assetId)` nodes.
    #[must_use]
    pub fn balances(nodes: &[(&str, &str)]) -> Value {
        let nodes: Vec<Value> = nodes
            .iter()
            .map(|(amount, asset_id)| json!({ "amount": amount, "assetId": asset_id }))
            .collect();
        json!({ "data": { "balances": { "nodes": nodes } } })
    }

    /// One ETH plus a non-native token, native id in mixed case.
    #[must_use]
    pub fn eth_and_usdc() -> Value {
        let native = NATIVE_ASSET_ID.to_uppercase();
        Self::balances(&[
            ("1000000000", native.as_str()),
            ("2500000", "0x286c479da40dc953bddc3bb4c453b608bba2e0ac483b077bd475174115395e6b"),
        ])
    }

    #[must_use]
    pub fn empty() -> Value {
        Self::balances(&[])
    }

    #[must_use]
    pub fn missing_nodes() -> Value {
        json!({ "data": { "balances": {} } })
    }

    #[must_use]
    pub fn graphql_error(message: &str) -> Value {
        json!({ "data": null, "errors": [{ "message": message }] })
    }
}

/// Submitted form values.
pub struct FormMother;

impl FormMother {
    #[must_use]
    pub fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    /// Every field of `op` filled with its placeholder.
    #[must_use]
    pub fn complete(op: Operation) -> HashMap<String, String> {
        op.fields()
            .iter()
            .map(|field| (field.id.to_string(), field.placeholder.to_string()))
            .collect()
    }
}

// ============================================================================
// Mock Transport
// ============================================================================

/// Transport that returns a canned reply and records every request.
pub struct MockTransport {
    reply: Mutex<Option<Result<Value, FetchError>>>,
    pub requests: Mutex<Vec<(String, Value)>>,
}

impl MockTransport {
    #[must_use]
    pub fn replying(body: Value) -> Self {
        Self {
            reply: Mutex::new(Some(Ok(body))),
            requests: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn failing(err: FetchError) -> Self {
        Self {
            reply: Mutex::new(Some(Err(err))),
            requests: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl IndexerTransport for MockTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, FetchError> {
        self.requests
            .lock()
            .unwrap()
            .push((url.to_string(), body.clone()));
        self.reply
            .lock()
            .unwrap()
            .take()
            .expect("MockTransport replies only once")
    }
}

// ============================================================================
// Mock Wallet Agent
// ============================================================================

/// Agent that records calls and answers with a fixed outcome.
pub struct MockAgent {
    outcome: Result<AgentResponse, String>,
    pub calls: Mutex<Vec<AgentRequest>>,
}

impl MockAgent {
    #[must_use]
    pub fn succeeding(response: AgentResponse) -> Self {
        Self {
            outcome: Ok(response),
            calls: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl WalletAgent for MockAgent {
    async fn call(&self, request: &AgentRequest) -> Result<AgentResponse, OperationError> {
        self.calls.lock().unwrap().push(request.clone());
        self.outcome.clone().map_err(OperationError::agent)
    }
}

// ============================================================================
// One-shot HTTP Server
// ============================================================================

/// Serves a single raw HTTP response on a loopback port and returns its URL.
pub async fn serve_once(status_line: &'static str, body: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });

    format!("http://{addr}/v1/graphql")
}

/// Drain headers and body so the client never sees a reset.
async fn read_request(socket: &mut tokio::net::TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = socket.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            return;
        }
        buf.extend_from_slice(&chunk[..n]);

        let Some(header_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let headers = String::from_utf8_lossy(&buf[..header_end]).to_ascii_lowercase();
        let content_length = headers
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0);
        if buf.len() >= header_end + 4 + content_length {
            return;
        }
    }
}
