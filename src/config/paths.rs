//! Path resolution for swot configuration and data files.
//!
//! Everything lives in `~/.swot/`:
//! - `config.yaml` - Settings file
//! - `study.json` - Recorded study time

use std::path::PathBuf;

use crate::error::SwotError;

/// Paths to swot configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.swot/`
    pub root: PathBuf,
    /// Settings file: `~/.swot/config.yaml`
    pub config_file: PathBuf,
    /// Data file: `~/.swot/study.json`
    pub data_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, SwotError> {
        let home = std::env::var("HOME")
            .map_err(|_| SwotError::Config("could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".swot")))
    }

    /// Create paths with a custom root directory (useful for testing and
    /// the `--dir` / `SWOT_DIR` override).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            data_file: root.join("study.json"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), SwotError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                SwotError::Config(format!("failed to create directory {:?}: {e}", self.root))
            })?;
        }
        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            log::warn!("no home directory, falling back to ./.swot");
            Self::with_root(PathBuf::from(".swot"))
        })
    }
}
