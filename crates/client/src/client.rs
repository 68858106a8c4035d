//! HTTP client for the Webflow Data API v2.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;

use crate::error::{Result, WebflowError};
use crate::models::{Collection, Site};

/// Production Webflow Data API endpoint.
pub const DEFAULT_API_HOST: &str = "https://api.webflow.com/v2";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("webflow-client/", env!("CARGO_PKG_VERSION"));

/// Read-only view of a Webflow account.
///
/// Tool handlers consume this trait rather than [`WebflowClient`] directly so
/// they can run against canned account data in tests.
#[async_trait]
pub trait WebflowApi: Send + Sync {
    /// Fetch one site by id. `Ok(None)` means the site does not exist.
    async fn site(&self, site_id: &str) -> Result<Option<Site>>;

    /// List every site the API token can access.
    async fn sites(&self) -> Result<Vec<Site>>;

    /// List the CMS collections of a site.
    async fn collections(&self, site_id: &str) -> Result<Vec<Collection>>;
}

/// `reqwest`-backed [`WebflowApi`] implementation.
#[derive(Clone)]
pub struct WebflowClient {
    http: Client,
    base_url: String,
    api_token: String,
}

impl WebflowClient {
    /// Client against the production API host.
    pub fn new(api_token: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_token, DEFAULT_API_HOST)
    }

    /// Client against a custom host (tests, proxies). A trailing slash on
    /// `base_url` is tolerated.
    pub fn with_base_url(
        api_token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            http,
            base_url,
            api_token: api_token.into(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get(&self, path: &str) -> Result<Response> {
        let url = self.endpoint(path);
        log::debug!("GET {url}");
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.api_token)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        Ok(response)
    }
}

/// Consume a non-success response into the error carrying its status and body.
async fn error_from(response: Response) -> WebflowError {
    let status = response.status().as_u16();
    let message = response.text().await.unwrap_or_default();
    WebflowError::Api { status, message }
}

// List endpoints wrap their records in a single-key envelope. A missing or
// null list means "zero records", not a malformed response.
#[derive(Deserialize)]
struct SitesEnvelope {
    sites: Option<Vec<Site>>,
}

#[derive(Deserialize)]
struct CollectionsEnvelope {
    collections: Option<Vec<Collection>>,
}

#[async_trait]
impl WebflowApi for WebflowClient {
    async fn site(&self, site_id: &str) -> Result<Option<Site>> {
        let response = self.get(&format!("/sites/{site_id}")).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(error_from(response).await);
        }
        Ok(Some(response.json::<Site>().await?))
    }

    async fn sites(&self) -> Result<Vec<Site>> {
        let response = self.get("/sites").await?;
        if !response.status().is_success() {
            return Err(error_from(response).await);
        }
        let envelope = response.json::<SitesEnvelope>().await?;
        Ok(envelope.sites.unwrap_or_default())
    }

    async fn collections(&self, site_id: &str) -> Result<Vec<Collection>> {
        let response = self.get(&format!("/sites/{site_id}/collections")).await?;
        if !response.status().is_success() {
            return Err(error_from(response).await);
        }
        let envelope = response.json::<CollectionsEnvelope>().await?;
        Ok(envelope.collections.unwrap_or_default())
    }
}

impl fmt::Debug for WebflowClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebflowClient")
            .field("base_url", &self.base_url)
            .field("api_token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_path() {
        let client = WebflowClient::new("token").expect("client");
        assert_eq!(client.endpoint("/sites"), "https://api.webflow.com/v2/sites");
    }

    #[test]
    fn trailing_slash_on_base_url_is_tolerated() {
        let client =
            WebflowClient::with_base_url("token", "http://localhost:9999/").expect("client");
        assert_eq!(
            client.endpoint("/sites/abc"),
            "http://localhost:9999/sites/abc"
        );
    }

    #[test]
    fn debug_output_redacts_the_token() {
        let client = WebflowClient::new("super-secret-token").expect("client");
        let debug = format!("{client:?}");
        assert!(!debug.contains("super-secret-token"), "token leaked: {debug}");
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn list_envelopes_tolerate_null_and_missing_lists() {
        let missing: SitesEnvelope = serde_json::from_str("{}").expect("missing list");
        assert!(missing.sites.is_none());

        let null: CollectionsEnvelope =
            serde_json::from_str(r#"{"collections": null}"#).expect("null list");
        assert!(null.collections.is_none());
    }
}
