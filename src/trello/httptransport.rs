use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;

use crate::auth::credentials::Credentials;
use crate::config::ClientConfig;
use crate::trello::error::{Result, TransportError, TrelloError};
use crate::trello::transport::Transport;
use crate::LogLevel;

/// reqwest-backed transport for the Trello REST API.
pub struct HttpTransport {
    client: Client,
    base_url: String,
    credentials: Credentials,
    log_level: LogLevel,
}

impl HttpTransport {
    /// Create a new transport for the given base URL and credentials.
    pub fn new(base_url: &str, credentials: Credentials, log_level: LogLevel) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
            log_level,
        }
    }

    /// Build a transport from configuration, applying the request timeout.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let credentials = config.credentials()?;

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| TrelloError::Config(format!("Unable to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            credentials,
            log_level: config.log_level,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send(&self, request: RequestBuilder) -> std::result::Result<Value, TransportError> {
        let resp = request
            .query(&self.credentials.query_pairs())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            log::debug!("Trello API error ({}): {}", status, body);
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let json: Value = resp
            .json()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))?;

        if matches!(self.log_level, LogLevel::Debug) {
            log::debug!("Response: {}", json);
        }

        Ok(json)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> std::result::Result<Value, TransportError> {
        let url = self.url(path);

        if matches!(self.log_level, LogLevel::Debug) {
            log::debug!("GET {} {:?}", url, query);
        }

        self.send(self.client.get(&url).query(query)).await
    }

    async fn put(&self, path: &str, body: &Value) -> std::result::Result<Value, TransportError> {
        let url = self.url(path);

        if matches!(self.log_level, LogLevel::Debug) {
            log::debug!("PUT {} {}", url, body);
        }

        self.send(self.client.put(&url).json(body)).await
    }

    async fn post(&self, path: &str, body: &Value) -> std::result::Result<Value, TransportError> {
        let url = self.url(path);

        if matches!(self.log_level, LogLevel::Debug) {
            log::debug!("POST {} {}", url, body);
        }

        self.send(self.client.post(&url).json(body)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path() {
        let transport = HttpTransport::new(
            "https://api.trello.com/1/",
            Credentials::new("key", "token"),
            LogLevel::Information,
        );
        assert_eq!(
            transport.url("/members/jsmith"),
            "https://api.trello.com/1/members/jsmith"
        );
    }
}
