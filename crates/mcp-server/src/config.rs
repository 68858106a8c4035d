//! Process configuration for the Webflow MCP server.
//!
//! Everything is read once at startup; request handling never touches the
//! environment.

use std::env;
use std::fmt;

use thiserror::Error;

/// Required Webflow API token (site token or OAuth access token).
pub const TOKEN_ENV: &str = "WEBFLOW_API_TOKEN";
/// Optional Data API base URL override, for tests and proxies.
pub const HOST_ENV: &str = "WEBFLOW_API_HOST";

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("WEBFLOW_API_TOKEN is not set; export a Webflow API token before starting the server")]
    MissingToken,
}

pub struct WebflowConfig {
    pub api_token: String,
    pub api_host: Option<String>,
}

impl WebflowConfig {
    /// Read the configuration from the process environment. A missing or
    /// blank token is fatal; the caller exits before serving.
    pub fn from_env() -> Result<Self, StartupError> {
        let api_token = env::var(TOKEN_ENV)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(StartupError::MissingToken)?;
        let api_host = env::var(HOST_ENV)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        Ok(Self {
            api_token,
            api_host,
        })
    }
}

impl fmt::Debug for WebflowConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebflowConfig")
            .field("api_token", &"<redacted>")
            .field("api_host", &self.api_host)
            .finish()
    }
}
