//! Commands module
//!
//! Non-interactive counterparts of the menu actions, for scripts and CI.

mod job;
mod server;
mod template;

use anyhow::Result;
use clap::Subcommand;
use mrtux_client::JenkinsApi;
use mrtux_core::ServerConfig;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Check that Jenkins is reachable and the credentials are accepted
    Check,
    /// List the selectable pipeline templates
    Templates,
    /// Create a pipeline job from a template
    Create(job::CreateArgs),
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `api` - Gateway to the Jenkins server
/// * `server` - The loaded server configuration
/// * `config` - The CLI configuration
pub async fn handle_command(
    command: Commands,
    api: &dyn JenkinsApi,
    server: &ServerConfig,
    config: &Config,
) -> Result<()> {
    match command {
        Commands::Check => server::check_connection(api).await,
        Commands::Templates => template::list_templates(&config.templates_dir),
        Commands::Create(args) => job::create_job(api, server, config, args).await,
    }
}
