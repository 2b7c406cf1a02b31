//! Error types for the Jenkins client

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to Jenkins
#[derive(Debug, Error)]
pub enum ClientError {
    /// The underlying HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// Transport-level failure (DNS, refused connection, TLS, timeout)
    #[error("failed to connect to Jenkins: {0}")]
    Connection(#[from] reqwest::Error),

    /// Jenkins answered 401
    #[error("authentication failed: invalid credentials")]
    Authentication,

    /// Jenkins answered with a status the operation does not expect
    #[error("jenkins returned status {status}: {body}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Response body as returned by Jenkins
        body: String,
    },

    /// The pipeline template could not be read
    #[error("failed to read template file {path:?}: {source}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Jenkins rejected `createItem` with 400
    #[error("job creation failed: job '{job}' already exists or invalid config")]
    DuplicateOrInvalidJob {
        /// Name of the job that was rejected
        job: String,
    },
}

impl ClientError {
    /// Create a server error from status code and body
    pub fn server(status: u16, body: impl Into<String>) -> Self {
        Self::Server {
            status,
            body: body.into(),
        }
    }

    /// HTTP status behind this error, if Jenkins answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication => Some(401),
            Self::DuplicateOrInvalidJob { .. } => Some(400),
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this error means Jenkins could not be reached
    pub fn is_connection_error(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ClientError::Authentication.to_string(),
            "authentication failed: invalid credentials"
        );
        assert_eq!(
            ClientError::server(503, "down").to_string(),
            "jenkins returned status 503: down"
        );
        assert_eq!(
            ClientError::DuplicateOrInvalidJob {
                job: "demo".to_string()
            }
            .to_string(),
            "job creation failed: job 'demo' already exists or invalid config"
        );
    }

    #[test]
    fn test_status() {
        assert_eq!(ClientError::Authentication.status(), Some(401));
        assert_eq!(ClientError::server(502, "").status(), Some(502));
        let err = ClientError::TemplateRead {
            path: PathBuf::from("x.groovy"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(err.status(), None);
        assert!(!err.is_connection_error());
    }
}
