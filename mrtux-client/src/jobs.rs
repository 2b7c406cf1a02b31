//! Job creation

use mrtux_core::domain::job::JobParameters;
use mrtux_core::dto::crumb::CsrfToken;
use mrtux_core::job_config::JobConfigDocument;
use mrtux_core::template;
use reqwest::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use std::path::Path;

use crate::JenkinsClient;
use crate::error::{ClientError, Result};

impl JenkinsClient {
    // =============================================================================
    // Job Creation
    // =============================================================================

    /// Create a pipeline job from a template
    ///
    /// Reads the template, renders it with `params`, wraps it in a pipeline
    /// job document and posts it to `createItem`. A CSRF crumb is attached
    /// when the server hands one out; its absence never stops the request.
    ///
    /// # Arguments
    /// * `job_name` - Name of the new job, sent URL-encoded
    /// * `template_path` - Pipeline template file
    /// * `params` - Values for the template placeholders
    ///
    /// # Returns
    /// A message naming the created job
    ///
    /// # Example
    /// ```no_run
    /// # use mrtux_client::JenkinsClient;
    /// # use mrtux_core::domain::job::JobParameters;
    /// # async fn example(client: JenkinsClient) -> anyhow::Result<()> {
    /// let params = JobParameters {
    ///     product_name: "demo".to_string(),
    ///     ..Default::default()
    /// };
    /// let message = client
    ///     .create_job("demo", "templates/jenkins/nodejs.groovy", &params)
    ///     .await?;
    /// assert_eq!(message, "Job 'demo' created successfully");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_job(
        &self,
        job_name: &str,
        template_path: impl AsRef<Path>,
        params: &JobParameters,
    ) -> Result<String> {
        let template_path = template_path.as_ref();
        let template_text = tokio::fs::read_to_string(template_path)
            .await
            .map_err(|source| ClientError::TemplateRead {
                path: template_path.to_path_buf(),
                source,
            })?;

        let script = template::render(&template_text, params);
        let document = JobConfigDocument::new(&script);

        let crumb = self.fetch_crumb().await;

        let mut request = self
            .post("/createItem")
            .query(&[("name", job_name)])
            .header(CONTENT_TYPE, "application/xml")
            .body(document.into_string());

        if let Some((name, value)) = crumb.as_ref().and_then(crumb_header) {
            request = request.header(name, value);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = crate::error_body(response).await;

        let message = create_job_outcome(job_name, status, body)?;
        tracing::info!(job = job_name, status, "Created Jenkins job");
        Ok(message)
    }
}

/// Typed header for a crumb; `None` drops the crumb instead of failing the request
fn crumb_header(token: &CsrfToken) -> Option<(HeaderName, HeaderValue)> {
    let name = HeaderName::from_bytes(token.header_name.as_bytes());
    let value = HeaderValue::from_str(&token.value);
    match (name, value) {
        (Ok(name), Ok(value)) => Some((name, value)),
        _ => {
            tracing::debug!(header = %token.header_name, "Unusable CSRF crumb, sending without it");
            None
        }
    }
}

/// Map a `createItem` status onto the operation result
///
/// 200 and 201 succeed, 400 means the job exists or the document was
/// rejected, anything else is a server error.
fn create_job_outcome(job_name: &str, status: u16, body: String) -> Result<String> {
    match status {
        200 | 201 => Ok(format!("Job '{}' created successfully", job_name)),
        400 => Err(ClientError::DuplicateOrInvalidJob {
            job: job_name.to_string(),
        }),
        _ => {
            tracing::warn!(job = job_name, status, "Unexpected status from createItem");
            Err(ClientError::server(status, body))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(header_name: &str, value: &str) -> CsrfToken {
        CsrfToken {
            header_name: header_name.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_crumb_header() {
        let (name, value) = crumb_header(&token("Jenkins-Crumb", "c1")).unwrap();
        assert_eq!(name.as_str(), "jenkins-crumb");
        assert_eq!(value, "c1");
    }

    #[test]
    fn test_unusable_crumb_is_dropped() {
        assert!(crumb_header(&token("Jenkins Crumb", "c1")).is_none());
        assert!(crumb_header(&token("Jenkins-Crumb", "c1\nX-Evil: 1")).is_none());
    }

    #[test]
    fn test_success_statuses() {
        assert_eq!(
            create_job_outcome("demo", 200, String::new()).unwrap(),
            "Job 'demo' created successfully"
        );
        assert!(create_job_outcome("demo", 201, String::new()).is_ok());
    }

    #[test]
    fn test_bad_request_is_duplicate_or_invalid() {
        let err = create_job_outcome("demo", 400, "exists".to_string()).unwrap_err();
        assert!(matches!(err, ClientError::DuplicateOrInvalidJob { job } if job == "demo"));
    }

    #[test]
    fn test_classification_is_total_and_exclusive() {
        for status in 100..600u16 {
            let outcome = create_job_outcome("demo", status, String::new());
            match status {
                200 | 201 => assert!(outcome.is_ok(), "{status}"),
                400 => assert!(
                    matches!(outcome, Err(ClientError::DuplicateOrInvalidJob { .. })),
                    "{status}"
                ),
                _ => assert!(
                    matches!(outcome, Err(ClientError::Server { status: s, .. }) if s == status),
                    "{status}"
                ),
            }
        }
    }
}
