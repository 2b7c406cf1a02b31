//! Connectivity check

use reqwest::StatusCode;

use crate::JenkinsClient;
use crate::error::{ClientError, Result};

impl JenkinsClient {
    /// Verify that Jenkins is reachable and accepts the credentials
    ///
    /// Sends one authenticated `GET /api/json`. No retries.
    ///
    /// # Errors
    /// - [`ClientError::Connection`] if the request never got an answer
    /// - [`ClientError::Authentication`] on 401
    /// - [`ClientError::Server`] on any other status but 200
    pub async fn check_connection(&self) -> Result<()> {
        let response = self.get("/api/json").send().await?;
        let status = response.status();

        if status == StatusCode::OK {
            tracing::debug!("Jenkins connection check passed");
            return Ok(());
        }

        let body = if status == StatusCode::UNAUTHORIZED {
            String::new()
        } else {
            crate::error_body(response).await
        };
        Err(connection_error(status.as_u16(), body))
    }
}

/// Classify a non-200 answer to the connectivity check
fn connection_error(status: u16, body: String) -> ClientError {
    match status {
        401 => ClientError::Authentication,
        _ => {
            tracing::warn!(status, "Unexpected status from Jenkins");
            ClientError::server(status, body)
        }
    }
}
