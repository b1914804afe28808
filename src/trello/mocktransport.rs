//! # Mock transport
//!
//! [`MockTransport`] implements [`Transport`] entirely in memory. Register
//! canned responses per method and path, run the code under test, then
//! inspect what was sent.
//!
//! ```
//! use serde_json::json;
//! use trello_client::trello::client::Client;
//! use trello_client::trello::member::Member;
//! use trello_client::trello::mocktransport::MockTransport;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let transport = MockTransport::new()
//!     .on_get("/members/jsmith", json!({ "id": "abc123", "username": "jsmith" }));
//! let client = Client::new(transport);
//!
//! let member = Member::find(&client, "jsmith").await.unwrap();
//! assert_eq!(member.id(), Some("abc123"));
//! assert_eq!(client.transport().call_count().await, 1);
//! # }
//! ```
//!
//! Several responses registered for the same route are served in order;
//! the last one keeps answering once the others are used up. Routes with
//! no registered response answer with a 404 status.

use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::trello::error::TransportError;
use crate::trello::transport::{Method, Transport};

type Reply = Result<Value, TransportError>;

/// One call observed by the mock.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    /// Path relative to the API root.
    pub path: String,
    /// Query parameters, empty for PUT and POST.
    pub query: Vec<(String, String)>,
    /// JSON body, `None` for GET.
    pub body: Option<Value>,
}

/// In-memory [`Transport`] with programmable replies.
#[derive(Debug, Default)]
pub struct MockTransport {
    routes: Mutex<HashMap<(Method, String), VecDeque<Reply>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    /// A transport with no registered routes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply for `method` on `path`.
    pub fn expect(mut self, method: Method, path: &str, reply: Reply) -> Self {
        self.routes
            .get_mut()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
        self
    }

    /// Queue a successful GET reply.
    pub fn on_get(self, path: &str, json: Value) -> Self {
        self.expect(Method::Get, path, Ok(json))
    }

    /// Queue a successful PUT reply.
    pub fn on_put(self, path: &str, json: Value) -> Self {
        self.expect(Method::Put, path, Ok(json))
    }

    /// Queue a successful POST reply.
    pub fn on_post(self, path: &str, json: Value) -> Self {
        self.expect(Method::Post, path, Ok(json))
    }

    /// Queue a failure for `method` on `path`.
    pub fn fail(self, method: Method, path: &str, error: TransportError) -> Self {
        self.expect(method, path, Err(error))
    }

    /// Every request seen so far, in order.
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().await.clone()
    }

    /// Number of requests seen so far.
    pub async fn call_count(&self) -> usize {
        self.requests.lock().await.len()
    }

    async fn reply(&self, request: RecordedRequest) -> Reply {
        let key = (request.method, request.path.clone());
        self.requests.lock().await.push(request);

        let mut routes = self.routes.lock().await;
        match routes.get_mut(&key) {
            Some(queue) if queue.len() > 1 => queue
                .pop_front()
                .unwrap_or_else(|| Err(not_registered(&key.1))),
            Some(queue) => queue
                .front()
                .cloned()
                .unwrap_or_else(|| Err(not_registered(&key.1))),
            None => Err(not_registered(&key.1)),
        }
    }
}

fn not_registered(path: &str) -> TransportError {
    TransportError::Status {
        status: 404,
        body: format!("no mock response registered for {path}"),
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, TransportError> {
        self.reply(RecordedRequest {
            method: Method::Get,
            path: path.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body: None,
        })
        .await
    }

    async fn put(&self, path: &str, body: &Value) -> Result<Value, TransportError> {
        self.reply(RecordedRequest {
            method: Method::Put,
            path: path.to_string(),
            query: Vec::new(),
            body: Some(body.clone()),
        })
        .await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, TransportError> {
        self.reply(RecordedRequest {
            method: Method::Post,
            path: path.to_string(),
            query: Vec::new(),
            body: Some(body.clone()),
        })
        .await
    }
}
