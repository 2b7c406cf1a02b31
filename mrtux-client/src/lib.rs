//! MRTUX Jenkins Client
//!
//! A small HTTP gateway to the Jenkins REST API: connectivity checks, CSRF
//! crumb retrieval and pipeline job creation from templates.
//!
//! Every request carries Basic auth built from the configured username and
//! API token. TLS certificate verification is disabled so self-signed
//! Jenkins instances work out of the box.
//!
//! # Example
//!
//! ```no_run
//! use mrtux_client::JenkinsClient;
//! use mrtux_core::ServerConfig;
//! use mrtux_core::domain::job::JobParameters;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load("configs/configs.yaml")?;
//!     let client = JenkinsClient::new(config)?;
//!
//!     client.check_connection().await?;
//!
//!     let params = JobParameters {
//!         product_name: "billing".to_string(),
//!         git_repo: client.build_git_url("PROD", "billing"),
//!         git_branch: "main".to_string(),
//!         helm_deploy: "billing".to_string(),
//!     };
//!     let message = client
//!         .create_job("billing", "templates/jenkins/springboot.groovy", &params)
//!         .await?;
//!     println!("{message}");
//!     Ok(())
//! }
//! ```

mod api;
mod connection;
mod crumb;
pub mod error;
mod jobs;

// Re-export commonly used types
pub use api::JenkinsApi;
pub use error::{ClientError, Result};
pub use mrtux_core::dto::crumb::CsrfToken;

use mrtux_core::ServerConfig;
use reqwest::{Client, RequestBuilder};
use std::time::Duration;

/// Request timeout used by [`JenkinsClient::new`]
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the Jenkins REST API
///
/// Built once from the loaded [`ServerConfig`] and passed by reference to
/// whatever needs to talk to Jenkins.
#[derive(Debug, Clone)]
pub struct JenkinsClient {
    /// Base URL of the Jenkins server, without trailing slash
    base_url: String,
    /// Connection and credential settings
    config: ServerConfig,
    /// HTTP client instance
    client: Client,
}

impl JenkinsClient {
    /// Create a client with the default 30 second timeout
    pub fn new(config: ServerConfig) -> Result<Self> {
        Self::with_timeout(config, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom request timeout
    ///
    /// The cookie store keeps the session a crumb is bound to alive between
    /// the crumb request and the request that uses it.
    pub fn with_timeout(config: ServerConfig, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(true)
            .cookie_store(true)
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self::with_client(config, client))
    }

    /// Create a client around a preconfigured reqwest [`Client`]
    pub fn with_client(config: ServerConfig, client: Client) -> Self {
        Self {
            base_url: config.jenkins_url.trim_end_matches('/').to_string(),
            config,
            client,
        }
    }

    /// Get the base URL of the Jenkins server
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Full clone URL for a repository, see [`ServerConfig::git_url`]
    pub fn build_git_url(&self, folder: &str, repo_name: &str) -> String {
        self.config.git_url(folder, repo_name)
    }

    // =============================================================================
    // Request Builders
    // =============================================================================

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Authenticated GET
    fn get(&self, path: &str) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        self.client
            .get(url)
            .basic_auth(&self.config.username, Some(&self.config.api_token))
    }

    /// Authenticated POST
    fn post(&self, path: &str) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        self.client
            .post(url)
            .basic_auth(&self.config.username, Some(&self.config.api_token))
    }
}

/// Read a response body for an error report
async fn error_body(response: reqwest::Response) -> String {
    response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string())
}
