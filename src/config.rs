use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::auth::credentials::Credentials;
use crate::trello::error::{Result, TrelloError};
use crate::LogLevel;

pub const DEFAULT_BASE_URL: &str = "https://api.trello.com/1";

/// Settings for connecting to the Trello API.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub log_level: LogLevel,
    /// Per-request timeout enforced by the HTTP transport.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            key: String::new(),
            token: String::new(),
            log_level: LogLevel::default(),
            timeout_secs: None,
        }
    }
}

impl ClientConfig {
    /// Read configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            TrelloError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;
        serde_json::from_str(&contents)
            .map_err(|e| TrelloError::Config(format!("Invalid {}: {e}", path.display())))
    }

    /// Read `trello-client/config.json` from the user's config directory.
    pub fn load_default() -> Result<Self> {
        let path = default_config_path()
            .ok_or_else(|| TrelloError::Config("No config directory available".to_string()))?;
        Self::load(&path)
    }

    /// Override fields from `TRELLO_API_KEY`, `TRELLO_TOKEN` and `TRELLO_BASE_URL`.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(key) = lookup("TRELLO_API_KEY") {
            self.key = key;
        }
        if let Some(token) = lookup("TRELLO_TOKEN") {
            self.token = token;
        }
        if let Some(base_url) = lookup("TRELLO_BASE_URL") {
            self.base_url = base_url;
        }
        self
    }

    /// Credentials from this configuration, rejecting blank values.
    pub fn credentials(&self) -> Result<Credentials> {
        let credentials = Credentials::new(&self.key, &self.token);
        credentials.ensure_complete()?;
        Ok(credentials)
    }
}

/// Location of the default configuration file.
pub fn default_config_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push("trello-client");
    path.push("config.json");
    Some(path)
}
