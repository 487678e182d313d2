//! Path resolution for fitshift configuration files.
//!
//! All fitshift data is stored in `~/.fitshift/`:
//! - `config.yaml` - Main configuration file
//! - `catalogs/` - User exercise catalogs (YAML files)

use std::path::PathBuf;

use crate::error::FitshiftError;

/// Paths to fitshift configuration directories.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.fitshift/`
    pub root: PathBuf,
    /// Config file: `~/.fitshift/config.yaml`
    pub config_file: PathBuf,
    /// Catalogs directory: `~/.fitshift/catalogs/`
    pub catalogs: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, FitshiftError> {
        let home = std::env::var("HOME").map_err(|_| {
            FitshiftError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".fitshift")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            catalogs: root.join("catalogs"),
            root,
        }
    }

    /// Ensure all directories exist, creating them if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), FitshiftError> {
        for dir in [&self.root, &self.catalogs] {
            if !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    FitshiftError::Config(format!(
                        "Failed to create directory {}: {e}",
                        dir.display()
                    ))
                })?;
            }
        }

        Ok(())
    }

    /// Resolve a catalog path, trying `catalogs/` for bare file names.
    #[must_use]
    pub fn resolve_catalog(&self, path: &std::path::Path) -> PathBuf {
        if path.is_absolute() || path.exists() {
            return path.to_path_buf();
        }
        let candidate = self.catalogs.join(path);
        if candidate.exists() {
            candidate
        } else {
            path.to_path_buf()
        }
    }
}
