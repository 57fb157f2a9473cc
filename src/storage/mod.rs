//! Scenario persistence
//!
//! Saved scenarios live as one JSON file each under the scenario directory,
//! keyed by a slug of the scenario name.

use std::path::PathBuf;

use crate::config::MortgagePaths;
use crate::error::{MortgageError, MortgageResult};
use crate::models::scenario::slugify;
use crate::models::Scenario;

/// File-backed store for saved scenarios
#[derive(Debug, Clone)]
pub struct ScenarioStore {
    dir: PathBuf,
}

impl ScenarioStore {
    /// Create a store rooted at the configured scenario directory
    pub fn new(paths: &MortgagePaths) -> MortgageResult<Self> {
        paths.ensure_directories()?;
        Ok(Self {
            dir: paths.scenario_dir(),
        })
    }

    fn file_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.json", slugify(name)))
    }

    /// Save a scenario, failing if one with the same name already exists
    pub fn save(&self, scenario: &Scenario) -> MortgageResult<PathBuf> {
        let path = self.file_for(&scenario.name);
        if path.exists() {
            return Err(MortgageError::scenario_exists(&scenario.name));
        }

        let contents = serde_json::to_string_pretty(scenario)?;
        std::fs::write(&path, contents)
            .map_err(|e| MortgageError::Io(format!("Failed to write scenario file: {}", e)))?;

        Ok(path)
    }

    /// Load a scenario by name
    pub fn load(&self, name: &str) -> MortgageResult<Scenario> {
        let path = self.file_for(name);
        if !path.exists() {
            return Err(MortgageError::scenario_not_found(name));
        }

        let contents = std::fs::read_to_string(&path)
            .map_err(|e| MortgageError::Io(format!("Failed to read scenario file: {}", e)))?;

        Ok(serde_json::from_str(&contents)?)
    }

    /// List all saved scenarios, oldest first
    ///
    /// Unreadable or malformed files are skipped.
    pub fn list(&self) -> MortgageResult<Vec<Scenario>> {
        let mut scenarios = Vec::new();

        let entries = std::fs::read_dir(&self.dir)
            .map_err(|e| MortgageError::Io(format!("Failed to read scenario directory: {}", e)))?;

        for entry in entries {
            let entry = entry
                .map_err(|e| MortgageError::Io(format!("Failed to read directory entry: {}", e)))?;
            let path = entry.path();

            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            let Ok(contents) = std::fs::read_to_string(&path) else {
                continue;
            };
            if let Ok(scenario) = serde_json::from_str::<Scenario>(&contents) {
                scenarios.push(scenario);
            }
        }

        scenarios.sort_by_key(|s| s.created_at);
        Ok(scenarios)
    }

    /// Delete a saved scenario by name
    pub fn delete(&self, name: &str) -> MortgageResult<()> {
        let path = self.file_for(name);
        if !path.exists() {
            return Err(MortgageError::scenario_not_found(name));
        }

        std::fs::remove_file(&path)
            .map_err(|e| MortgageError::Io(format!("Failed to delete scenario file: {}", e)))?;

        Ok(())
    }
}
