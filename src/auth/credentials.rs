use crate::trello::client::Client;
use crate::trello::error::{Result, TrelloError};
use crate::trello::member::Member;
use crate::trello::transport::Transport;

const AUTHORIZE_URL: &str = "https://trello.com/1/authorize";

/// Trello developer API key and user token.
#[derive(Clone)]
pub struct Credentials {
    pub key: String,
    pub token: String,
}

impl Credentials {
    /// Create credentials from an API key and a user token.
    pub fn new(key: &str, token: &str) -> Self {
        Self {
            key: key.to_string(),
            token: token.to_string(),
        }
    }

    /// Fail if either part is blank.
    pub fn ensure_complete(&self) -> Result<()> {
        if self.key.trim().is_empty() {
            return Err(TrelloError::Config("Trello API key is empty".to_string()));
        }
        if self.token.trim().is_empty() {
            return Err(TrelloError::Config("Trello token is empty".to_string()));
        }
        Ok(())
    }

    /// Query parameters that authenticate a request.
    pub fn query_pairs(&self) -> [(&'static str, &str); 2] {
        [("key", self.key.as_str()), ("token", self.token.as_str())]
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Access requested when authorizing an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Read,
    Write,
    Account,
}

impl Scope {
    fn as_str(self) -> &'static str {
        match self {
            Scope::Read => "read",
            Scope::Write => "write",
            Scope::Account => "account",
        }
    }
}

/// Parameters of the token authorization page.
#[derive(Debug, Clone)]
pub struct AuthorizeRequest {
    /// Application name shown to the user.
    pub app_name: String,
    pub scopes: Vec<Scope>,
    /// `1hour`, `1day`, `30days` or `never`.
    pub expiration: String,
}

impl Default for AuthorizeRequest {
    fn default() -> Self {
        Self {
            app_name: "trello-client".to_string(),
            scopes: vec![Scope::Read],
            expiration: "30days".to_string(),
        }
    }
}

/// URL a user visits to grant a token to the application owning `key`.
pub fn authorize_url(key: &str, request: &AuthorizeRequest) -> String {
    let scope = request
        .scopes
        .iter()
        .map(|scope| scope.as_str())
        .collect::<Vec<_>>()
        .join(",");

    format!(
        "{}?key={}&name={}&scope={}&expiration={}&response_type=token",
        AUTHORIZE_URL,
        urlencoding::encode(key),
        urlencoding::encode(&request.app_name),
        urlencoding::encode(&scope),
        urlencoding::encode(&request.expiration),
    )
}

/// Resolve the member that owns the client's token.
pub async fn verify_credentials<T: Transport>(client: &Client<T>) -> Result<Member> {
    Member::find(client, "me").await
}
