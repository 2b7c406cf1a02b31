//! Configuration module
//!
//! Handles CLI configuration: where the server settings and templates live
//! and how long a request may take.

use std::path::PathBuf;
use std::time::Duration;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// YAML file holding the Jenkins connection settings
    pub config_path: PathBuf,
    /// Directory scanned for pipeline templates
    pub templates_dir: PathBuf,
    /// Per-request timeout
    pub timeout: Duration,
}
