//! User settings for mortgage-cli
//!
//! Manages user preferences and the lending policy constants used by the
//! calculators. Everything the underwriting math treats as a threshold lives
//! here rather than being hard-coded.

use serde::{Deserialize, Serialize};

use super::paths::MortgagePaths;
use crate::error::MortgageError;

/// Lending policy thresholds used by the calculators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LendingPolicy {
    /// LTV percentage above which PMI is required
    #[serde(default = "default_pmi_ltv_threshold")]
    pub pmi_ltv_threshold: f64,

    /// Annual PMI cost as a fraction of the loan amount
    #[serde(default = "default_pmi_annual_rate")]
    pub pmi_annual_rate: f64,

    /// Maximum recommended debt-to-income ratio (fraction of gross income)
    #[serde(default = "default_max_dti")]
    pub max_dti: f64,

    /// Annual property tax rate assumed for affordability (fraction of price)
    #[serde(default = "default_property_tax_rate")]
    pub property_tax_rate: f64,

    /// Annual homeowner's insurance rate assumed for affordability
    #[serde(default = "default_insurance_rate")]
    pub insurance_rate: f64,

    /// Loan terms (in years) accepted by the validator
    #[serde(default = "default_allowed_terms")]
    pub allowed_terms: Vec<u32>,

    /// Ceiling on the annual interest rate accepted by the validator (percent)
    #[serde(default = "default_max_interest_rate")]
    pub max_interest_rate: f64,
}

fn default_pmi_ltv_threshold() -> f64 {
    80.0
}

fn default_pmi_annual_rate() -> f64 {
    0.005
}

fn default_max_dti() -> f64 {
    0.43
}

fn default_property_tax_rate() -> f64 {
    0.0125
}

fn default_insurance_rate() -> f64 {
    0.0035
}

fn default_allowed_terms() -> Vec<u32> {
    vec![10, 15, 20, 30]
}

fn default_max_interest_rate() -> f64 {
    25.0
}

impl Default for LendingPolicy {
    fn default() -> Self {
        Self {
            pmi_ltv_threshold: default_pmi_ltv_threshold(),
            pmi_annual_rate: default_pmi_annual_rate(),
            max_dti: default_max_dti(),
            property_tax_rate: default_property_tax_rate(),
            insurance_rate: default_insurance_rate(),
            allowed_terms: default_allowed_terms(),
            max_interest_rate: default_max_interest_rate(),
        }
    }
}

/// User settings for mortgage-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Lending policy thresholds
    #[serde(default)]
    pub policy: LendingPolicy,

    /// Whether the mock rate provider adds small market-style fluctuations.
    /// When false the provider returns the same rates on every call.
    #[serde(default)]
    pub rate_jitter: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            policy: LendingPolicy::default(),
            rate_jitter: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &MortgagePaths) -> Result<Self, MortgageError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| MortgageError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                MortgageError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &MortgagePaths) -> Result<(), MortgageError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| MortgageError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| MortgageError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
