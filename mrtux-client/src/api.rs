//! Gateway trait
//!
//! Front ends talk to Jenkins through [`JenkinsApi`] so they can be driven
//! by a fake in tests.

use async_trait::async_trait;
use mrtux_core::domain::job::JobParameters;
use std::path::Path;

use crate::JenkinsClient;
use crate::error::Result;

/// Operations the front ends need from a Jenkins server
#[async_trait]
pub trait JenkinsApi: Send + Sync {
    /// Base URL of the server, for display
    fn server_url(&self) -> &str;

    /// Verify reachability and credentials
    async fn check_connection(&self) -> Result<()>;

    /// Create a pipeline job from a template file
    async fn create_job(
        &self,
        job_name: &str,
        template_path: &Path,
        params: &JobParameters,
    ) -> Result<String>;
}

#[async_trait]
impl JenkinsApi for JenkinsClient {
    fn server_url(&self) -> &str {
        self.base_url()
    }

    async fn check_connection(&self) -> Result<()> {
        JenkinsClient::check_connection(self).await
    }

    async fn create_job(
        &self,
        job_name: &str,
        template_path: &Path,
        params: &JobParameters,
    ) -> Result<String> {
        JenkinsClient::create_job(self, job_name, template_path, params).await
    }
}
