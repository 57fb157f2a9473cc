//! Path management for mortgage-cli
//!
//! Provides XDG-compliant path resolution for configuration and saved
//! scenarios.
//!
//! ## Path Resolution Order
//!
//! 1. `MORTGAGE_CLI_DATA_DIR` environment variable (if set)
//! 2. Platform config directory via `directories` (e.g. `~/.config/mortgage-cli`)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::MortgageError;

/// Manages all paths used by mortgage-cli
#[derive(Debug, Clone)]
pub struct MortgagePaths {
    /// Base directory for all mortgage-cli data
    base_dir: PathBuf,
}

impl MortgagePaths {
    /// Create a new MortgagePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, MortgageError> {
        let base_dir = if let Ok(custom) = std::env::var("MORTGAGE_CLI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            let dirs = ProjectDirs::from("", "", "mortgage-cli").ok_or_else(|| {
                MortgageError::Config("Could not determine a home directory".into())
            })?;
            dirs.config_dir().to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Create MortgagePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the directory holding saved scenarios
    pub fn scenario_dir(&self) -> PathBuf {
        self.base_dir.join("scenarios")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), MortgageError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| MortgageError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.scenario_dir()).map_err(|e| {
            MortgageError::Io(format!("Failed to create scenario directory: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_with_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MortgagePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), &temp_dir.path().to_path_buf());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.scenario_dir(), temp_dir.path().join("scenarios"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested");
        let paths = MortgagePaths::with_base_dir(base.clone());

        paths.ensure_directories().unwrap();
        assert!(base.exists());
        assert!(paths.scenario_dir().exists());
    }
}
