//! Server configuration
//!
//! Connection settings for the Jenkins server and the git host, loaded once
//! from a YAML file at startup and read-only afterwards.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid YAML for a server configuration
    #[error("failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A required key is absent or empty
    #[error("missing required config field `{0}`")]
    MissingField(&'static str),
}

/// Jenkins and git connection settings
///
/// Keys follow the on-disk YAML layout:
///
/// ```yaml
/// jenkins_url: https://ci.example.com
/// git_base_url: https://git.example.com
/// jenkins_username: bob
/// jenkins_password: secret
/// api_token: t0k
/// ```
#[derive(Clone, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the Jenkins server
    pub jenkins_url: String,

    /// Base URL repositories are cloned from
    #[serde(default)]
    pub git_base_url: String,

    /// Jenkins account used for Basic auth
    #[serde(rename = "jenkins_username")]
    pub username: String,

    /// API token paired with `username`
    pub api_token: String,

    /// Accepted for compatibility with existing config files; never sent
    #[serde(default, rename = "jenkins_password")]
    pub password: Option<String>,
}

impl ServerConfig {
    /// Load and validate a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_yaml(&content).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        tracing::debug!(
            path = %path.display(),
            jenkins_url = %config.jenkins_url,
            "Loaded server configuration"
        );

        Ok(config)
    }

    /// Parse a configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self =
            serde_yaml::from_str(content).map_err(|source| ConfigError::Parse {
                path: PathBuf::new(),
                source,
            })?;

        config.jenkins_url = config.jenkins_url.trim_end_matches('/').to_string();
        config.validate()?;

        Ok(config)
    }

    /// Checks that every required field is present
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jenkins_url.trim().is_empty() {
            return Err(ConfigError::MissingField("jenkins_url"));
        }
        if self.username.trim().is_empty() {
            return Err(ConfigError::MissingField("jenkins_username"));
        }
        if self.api_token.trim().is_empty() {
            return Err(ConfigError::MissingField("api_token"));
        }
        Ok(())
    }

    /// Full clone URL of a repository: `{git_base_url}/{folder}/{repo}.git`
    ///
    /// Neither segment is validated or escaped.
    pub fn git_url(&self, folder: &str, repo_name: &str) -> String {
        format!("{}/{}/{}.git", self.git_base_url, folder, repo_name)
    }
}

// Credentials stay out of logs and panic messages.
impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("jenkins_url", &self.jenkins_url)
            .field("git_base_url", &self.git_base_url)
            .field("username", &self.username)
            .field("api_token", &"<redacted>")
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
