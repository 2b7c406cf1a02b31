//! Template catalog
//!
//! Finds the selectable pipeline templates in a directory. Base templates
//! (file names containing `_template`) are building blocks for other
//! templates and are never offered for selection.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Extension a file needs to be picked up as a template
pub const TEMPLATE_EXTENSION: &str = "groovy";

/// Substring marking a file as a non-selectable base template
pub const BASE_TEMPLATE_MARKER: &str = "_template";

/// Errors raised while listing or choosing templates
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read templates directory {path:?}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no templates found in {0:?}")]
    Empty(PathBuf),

    #[error("invalid template choice '{0}'")]
    InvalidChoice(String),
}

/// A selectable template file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    /// File name without the extension
    pub name: String,
    pub path: PathBuf,
}

/// Selectable templates of one directory, sorted by file name
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    entries: Vec<TemplateEntry>,
}

impl TemplateCatalog {
    /// Scan `dir` for templates
    ///
    /// # Errors
    /// Returns an error if:
    /// - The directory cannot be read
    /// - No selectable template is found
    pub fn discover(dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();
        let read_err = |source: std::io::Error| CatalogError::ReadDir {
            path: dir.to_path_buf(),
            source,
        };

        let mut entries = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(read_err)? {
            let entry = entry.map_err(read_err)?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy().into_owned();
            if is_selectable(&file_name) {
                let name = file_name
                    .strip_suffix(&format!(".{TEMPLATE_EXTENSION}"))
                    .unwrap_or(&file_name)
                    .to_string();
                entries.push(TemplateEntry { name, path });
            }
        }

        if entries.is_empty() {
            return Err(CatalogError::Empty(dir.to_path_buf()));
        }

        entries.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
        tracing::debug!(dir = %dir.display(), count = entries.len(), "Discovered templates");

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[TemplateEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pick a template by its 1-based menu number
    pub fn select(&self, choice: &str) -> Result<&TemplateEntry, CatalogError> {
        choice
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| self.entries.get(index))
            .ok_or_else(|| CatalogError::InvalidChoice(choice.trim().to_string()))
    }

    /// Pick a template by display name
    pub fn find(&self, name: &str) -> Result<&TemplateEntry, CatalogError> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .ok_or_else(|| CatalogError::InvalidChoice(name.to_string()))
    }
}

fn is_selectable(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .is_some_and(|ext| ext == TEMPLATE_EXTENSION)
        && !file_name.contains(BASE_TEMPLATE_MARKER)
}
