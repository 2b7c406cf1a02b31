//! Server command handlers

use anyhow::{Context, Result};
use colored::*;
use mrtux_client::JenkinsApi;

/// Run one connectivity check; errors exit non-zero
pub async fn check_connection(api: &dyn JenkinsApi) -> Result<()> {
    api.check_connection()
        .await
        .context("Connection failed")?;

    println!("{}", "✅ Jenkins connection successful!".green().bold());
    println!("🌐 Server: {}", api.server_url().cyan());

    Ok(())
}
