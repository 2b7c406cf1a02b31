//! Job domain types

use serde::{Deserialize, Serialize};

use crate::config::ServerConfig;

/// Values substituted into a pipeline template
///
/// Built per job-creation request and consumed immediately by
/// [`crate::template::render`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobParameters {
    /// Replaces `{{PRODUCT_NAME}}`
    pub product_name: String,
    /// Replaces `{{GIT_REPO}}`
    pub git_repo: String,
    /// Replaces `{{GIT_BRANCH}}`
    pub git_branch: String,
    /// Replaces `{{HELM_DEPLOY}}`
    pub helm_deploy: String,
}

/// Resolved answers to the job questionnaire
///
/// See [`crate::domain::prompt::job_prompt_steps`] for how each field is
/// collected and defaulted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobAnswers {
    pub job_name: String,
    pub repo_name: String,
    pub folder: String,
    pub branch: String,
    pub helm_deploy: String,
}

impl JobAnswers {
    /// Turn the answers into a job name and template parameters
    ///
    /// The job name doubles as the product name, and the repository URL is
    /// built from the configured git base URL.
    pub fn into_request(self, config: &ServerConfig) -> (String, JobParameters) {
        let params = JobParameters {
            product_name: self.job_name.clone(),
            git_repo: config.git_url(&self.folder, &self.repo_name),
            git_branch: self.branch,
            helm_deploy: self.helm_deploy,
        };
        (self.job_name, params)
    }
}
