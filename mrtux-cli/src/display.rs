//! Terminal output shared by the menu and the subcommands

use colored::*;
use mrtux_core::catalog::TemplateCatalog;
use mrtux_core::domain::job::JobParameters;
use std::io::{self, Write};

pub const RULE_WIDTH: usize = 50;

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Print the menu header with the server the session talks to
pub fn print_banner(out: &mut impl Write, jenkins_url: &str, username: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", rule())?;
    writeln!(out, "{}", "🚀 MRTUX JENKINS MANAGER".bold())?;
    writeln!(out, "{}", rule())?;
    writeln!(out, "📍 Jenkins URL: {}", jenkins_url.cyan())?;
    writeln!(out, "👤 Username: {}", username.cyan())?;
    writeln!(out)?;
    writeln!(out, "Action list:")?;
    writeln!(out, "1. ✅ Check Jenkins connection")?;
    writeln!(out, "2. ✅ Add new job")?;
    writeln!(out, "0. ❌ Exit")
}

/// Print the numbered template list
pub fn print_templates(out: &mut impl Write, catalog: &TemplateCatalog) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "Available templates:".bold())?;
    for (i, entry) in catalog.entries().iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, entry.name)?;
    }
    Ok(())
}

/// Echo the values a job is about to be created with
pub fn print_job_summary(
    out: &mut impl Write,
    job_name: &str,
    params: &JobParameters,
) -> io::Result<()> {
    writeln!(out, "🔄 Creating job '{}' with:", job_name.bold())?;
    writeln!(out, "   📦 Product: {}", params.product_name)?;
    writeln!(out, "   🔗 Repository: {}", params.git_repo)?;
    writeln!(out, "   🌿 Branch: {}", params.git_branch)?;
    writeln!(out, "   ⚓ Helm Deploy: {}", params.helm_deploy)
}

pub fn print_success(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{}", format!("✅ {}", message).green())
}

pub fn print_failure(
    out: &mut impl Write,
    context: &str,
    error: impl std::fmt::Display,
) -> io::Result<()> {
    writeln!(out, "{} {}", format!("❌ {}:", context).red(), error)
}
