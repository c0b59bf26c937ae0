//! Persistence for recorded study time.
//!
//! The whole module log is one JSON document (`{ "name": [hours, ...] }`)
//! rewritten atomically on every save. There is no version field and no
//! append log; the last full write wins.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::SwotError;

/// Module name -> recorded session durations in hours, oldest first.
///
/// A `BTreeMap` keeps key order deterministic, so saving an unmodified
/// loaded log reproduces the file byte for byte.
pub type ModuleLog = BTreeMap<String, Vec<f64>>;

/// Storage for the module log.
///
/// Owns only the backing file path; the tracker owns the in-memory log
/// and remains the source of truth even when a save fails.
#[derive(Debug, Clone)]
pub struct ModuleStore {
    path: PathBuf,
}

impl ModuleStore {
    /// Create a store backed by the given file.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the module log.
    ///
    /// A missing file yields an empty log. A file that exists but does not
    /// parse is an error - recorded data is never silently discarded.
    ///
    /// # Errors
    ///
    /// Returns `SwotError::CorruptData` if the file cannot be parsed, or
    /// `SwotError::Io` if it cannot be read.
    pub fn load(&self) -> Result<ModuleLog, SwotError> {
        if !self.path.exists() {
            log::debug!("no data file at {:?}, starting empty", self.path);
            return Ok(ModuleLog::new());
        }

        let content = std::fs::read_to_string(&self.path).map_err(SwotError::Io)?;
        serde_json::from_str(&content)
            .map_err(|e| SwotError::CorruptData(format!("{}: {e}", self.path.display())))
    }

    /// Write the whole log out, replacing the previous file atomically.
    ///
    /// The log is serialized to a temp file in the same directory and
    /// renamed into place, so a crash mid-write never leaves a truncated
    /// data file behind.
    ///
    /// # Errors
    ///
    /// Returns `SwotError::Persistence` if serialization or any write step
    /// fails. The caller's in-memory log is not rolled back.
    pub fn save(&self, modules: &ModuleLog) -> Result<(), SwotError> {
        let content = serde_json::to_string_pretty(modules)
            .map_err(|e| SwotError::Persistence(format!("serialization failed: {e}")))?;

        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        if !dir.exists() {
            std::fs::create_dir_all(dir).map_err(|e| {
                SwotError::Persistence(format!("could not create {}: {e}", dir.display()))
            })?;
        }

        let mut tmp = tempfile::NamedTempFile::new_in(dir)
            .map_err(|e| SwotError::Persistence(format!("could not create temp file: {e}")))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| SwotError::Persistence(format!("could not write temp file: {e}")))?;
        tmp.flush()
            .map_err(|e| SwotError::Persistence(format!("could not flush temp file: {e}")))?;
        tmp.persist(&self.path).map_err(|e| {
            SwotError::Persistence(format!("could not replace {}: {}", self.path.display(), e.error))
        })?;

        log::debug!("saved {} modules to {:?}", modules.len(), self.path);
        Ok(())
    }
}
