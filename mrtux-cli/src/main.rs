//! MRTUX CLI
//!
//! Creates Jenkins pipeline jobs from templates. Without a subcommand it
//! runs the interactive menu; the subcommands expose the same operations
//! for scripts.

mod commands;
mod config;
mod display;
mod menu;
#[cfg(test)]
mod test_support;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use mrtux_client::JenkinsClient;
use mrtux_core::ServerConfig;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mrtux")]
#[command(about = "MRTUX Jenkins job manager", long_about = None)]
struct Cli {
    /// Path to the YAML file with Jenkins connection settings
    #[arg(long, env = "MRTUX_CONFIG", default_value = "configs/configs.yaml")]
    config: PathBuf,

    /// Directory containing pipeline templates
    #[arg(long, env = "MRTUX_TEMPLATES_DIR", default_value = "templates/jenkins")]
    templates_dir: PathBuf,

    /// Request timeout in seconds
    #[arg(
        long,
        env = "MRTUX_TIMEOUT",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout: u64,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = Config {
        config_path: cli.config,
        templates_dir: cli.templates_dir,
        timeout: Duration::from_secs(cli.timeout),
    };

    let server = ServerConfig::load(&config.config_path).context("Error reading config")?;
    tracing::info!(jenkins_url = %server.jenkins_url, "Configuration loaded");

    let client = JenkinsClient::with_timeout(server.clone(), config.timeout)?;

    match cli.command {
        Some(command) => handle_command(command, &client, &server, &config).await,
        None => menu::run_interactive(&client, &server, &config).await,
    }
}

/// Route logs to stderr so they never interleave with prompts on stdout
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "mrtux_cli=debug,mrtux_client=debug,mrtux_core=debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
