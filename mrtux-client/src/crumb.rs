//! CSRF crumb retrieval

use mrtux_core::dto::crumb::CsrfToken;
use reqwest::StatusCode;

use crate::JenkinsClient;

impl JenkinsClient {
    /// Fetch a CSRF crumb from the crumb issuer
    ///
    /// Plenty of Jenkins installations run without CSRF protection, so every
    /// failure here (transport error, non-200 status, unreadable or
    /// malformed body, missing crumb) yields `None` instead of an error.
    pub async fn fetch_crumb(&self) -> Option<CsrfToken> {
        let response = match self.get("/crumbIssuer/api/json").send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!(error = %e, "Crumb request failed, continuing without CSRF token");
                return None;
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            tracing::debug!(
                status = status.as_u16(),
                "Crumb issuer unavailable, continuing without CSRF token"
            );
            return None;
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!(error = %e, "Failed to read crumb response");
                return None;
            }
        };

        let token = CsrfToken::from_json(&body);
        match &token {
            Some(token) => tracing::debug!(header = %token.header_name, "Obtained CSRF crumb"),
            None => tracing::debug!("Crumb issuer response carried no crumb"),
        }
        token
    }
}
