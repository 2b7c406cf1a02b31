//! Template command handlers

use anyhow::Result;
use colored::*;
use mrtux_core::catalog::TemplateCatalog;
use std::path::Path;

/// List selectable templates with their paths
pub fn list_templates(templates_dir: &Path) -> Result<()> {
    let catalog = TemplateCatalog::discover(templates_dir)?;

    println!(
        "{}",
        format!("Found {} template(s):", catalog.len()).bold()
    );
    for entry in catalog.entries() {
        println!(
            "  {} {} {}",
            "▸".cyan(),
            entry.name.bold(),
            entry.path.display().to_string().dimmed()
        );
    }

    Ok(())
}
