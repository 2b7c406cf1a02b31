//! Job command handlers
//!
//! Creates a job from command-line flags. The flags feed the same
//! questionnaire the interactive menu walks, so defaults and validation
//! behave identically.

use anyhow::{Context, Result};
use clap::Args;
use mrtux_client::JenkinsApi;
use mrtux_core::ServerConfig;
use mrtux_core::catalog::TemplateCatalog;
use mrtux_core::domain::job::JobAnswers;
use mrtux_core::domain::prompt::{JobField, PromptStep};

use crate::config::Config;
use crate::display;

/// Arguments of `mrtux create`
#[derive(Args, Debug, Clone, Default)]
pub struct CreateArgs {
    /// Name of the new job (also used as the product name)
    #[arg(short, long)]
    pub job_name: String,

    /// Repository name inside the git folder
    #[arg(short, long)]
    pub repo: String,

    /// Git folder holding the repository [default: PROD]
    #[arg(short, long)]
    pub folder: Option<String>,

    /// Branch the pipeline builds [default: main]
    #[arg(short, long)]
    pub branch: Option<String>,

    /// Helm release name
    #[arg(long, default_value = "")]
    pub helm_deploy: String,

    /// Template name as shown by `mrtux templates`
    #[arg(short, long)]
    pub template: String,
}

impl CreateArgs {
    /// Raw answer for a questionnaire step
    fn answer(&self, step: &PromptStep) -> String {
        match step.field {
            JobField::JobName => self.job_name.clone(),
            JobField::RepoName => self.repo.clone(),
            JobField::Folder => self.folder.clone().unwrap_or_default(),
            JobField::Branch => self.branch.clone().unwrap_or_default(),
            JobField::HelmDeploy => self.helm_deploy.clone(),
        }
    }
}

/// Create a job without prompting
pub async fn create_job(
    api: &dyn JenkinsApi,
    server: &ServerConfig,
    config: &Config,
    args: CreateArgs,
) -> Result<()> {
    let answers = JobAnswers::collect(|step| args.answer(step))?;

    let catalog = TemplateCatalog::discover(&config.templates_dir)
        .context("Template selection failed")?;
    let template = catalog
        .find(&args.template)
        .context("Template selection failed")?;

    let (job_name, params) = answers.into_request(server);

    let mut stdout = std::io::stdout();
    display::print_job_summary(&mut stdout, &job_name, &params)?;

    let message = api
        .create_job(&job_name, &template.path, &params)
        .await
        .context("Job creation failed")?;

    display::print_success(&mut stdout, &message)?;
    Ok(())
}
