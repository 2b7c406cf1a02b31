//! Shared fixtures for the front-end tests

use async_trait::async_trait;
use mrtux_client::{ClientError, JenkinsApi};
use mrtux_core::ServerConfig;
use mrtux_core::domain::job::JobParameters;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Records calls instead of talking to Jenkins
#[derive(Default)]
pub struct FakeJenkins {
    pub fail_connection: bool,
    pub created: Mutex<Vec<(String, PathBuf, JobParameters)>>,
}

#[async_trait]
impl JenkinsApi for FakeJenkins {
    fn server_url(&self) -> &str {
        "https://ci.example.com"
    }

    async fn check_connection(&self) -> mrtux_client::Result<()> {
        if self.fail_connection {
            Err(ClientError::Authentication)
        } else {
            Ok(())
        }
    }

    async fn create_job(
        &self,
        job_name: &str,
        template_path: &Path,
        params: &JobParameters,
    ) -> mrtux_client::Result<String> {
        self.created.lock().unwrap().push((
            job_name.to_string(),
            template_path.to_path_buf(),
            params.clone(),
        ));
        Ok(format!("Job '{}' created successfully", job_name))
    }
}

pub fn server() -> ServerConfig {
    ServerConfig::from_yaml(
        "jenkins_url: https://ci.example.com\ngit_base_url: https://git.example.com\njenkins_username: bob\napi_token: t0k\n",
    )
    .unwrap()
}

/// Two selectable templates plus a hidden base template
pub fn templates() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("nodejs.groovy"), "{{PRODUCT_NAME}}").unwrap();
    std::fs::write(dir.path().join("springboot.groovy"), "{{PRODUCT_NAME}}").unwrap();
    std::fs::write(dir.path().join("base_template.groovy"), "").unwrap();
    dir
}
