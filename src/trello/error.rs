//! Error types shared by every Trello resource.

/// Failure reported by a [`Transport`](crate::trello::transport::Transport).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransportError {
    /// The request never produced a response.
    #[error("Request failed: {0}")]
    Request(String),
    /// The service answered with a non-success status.
    #[error("Trello API error ({status}): {body}")]
    Status { status: u16, body: String },
    /// The response body was not valid JSON.
    #[error("Failed to parse JSON: {0}")]
    Decode(String),
}

impl TransportError {
    /// True when the service reported that the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, TransportError::Status { status: 404, .. })
    }
}

/// Errors surfaced by the resource layer.
#[derive(Debug, thiserror::Error)]
pub enum TrelloError {
    /// One or more mandatory fields are empty.
    #[error("{resource} is missing required fields: {}", .missing.join(", "))]
    Validation {
        resource: &'static str,
        missing: Vec<&'static str>,
    },
    /// A lookup by id or alternate key matched nothing.
    #[error("{resource} '{key}' not found")]
    NotFound { resource: &'static str, key: String },
    /// Network or transport failure, passed through unchanged.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// A response did not have the shape expected for hydration.
    #[error("Unable to deserialize {resource}: {reason}")]
    Deserialization {
        resource: &'static str,
        reason: String,
    },
    /// A filter string is not a member of the relationship's filter set.
    #[error("Invalid filter '{value}' for {relationship}")]
    InvalidFilter {
        relationship: &'static str,
        value: String,
    },
    /// A field name is not part of the resource schema.
    #[error("{resource} has no field named '{field}'")]
    UnknownField {
        resource: &'static str,
        field: String,
    },
    /// Configuration could not be loaded or is incomplete.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TrelloError>;
