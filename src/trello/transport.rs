use async_trait::async_trait;
use serde_json::Value;

use crate::trello::error::TransportError;

/// HTTP verb of a transport call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Read a resource or collection.
    Get,
    /// Update an existing resource.
    Put,
    /// Create a new resource.
    Post,
}

/// The network boundary of the resource layer.
///
/// Paths are relative to the API root and look like `/members/jsmith` or
/// `/members/jsmith/boards`. Implementations own connection handling,
/// authentication, retries and timeouts.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a GET with the given query parameters.
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, TransportError>;

    /// Issue a PUT with a JSON body.
    async fn put(&self, path: &str, body: &Value) -> Result<Value, TransportError>;

    /// Issue a POST with a JSON body.
    async fn post(&self, path: &str, body: &Value) -> Result<Value, TransportError>;
}
