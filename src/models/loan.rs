//! Loan models
//!
//! The loan type taxonomy and the validated terms record the calculators
//! operate on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type of mortgage loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanType {
    /// Conventional conforming loan
    Conventional,
    /// Federal Housing Administration loan
    Fha,
    /// Veterans Affairs loan
    Va,
    /// US Department of Agriculture rural loan
    Usda,
    /// Non-conforming loan above agency limits
    Jumbo,
}

impl LoanType {
    /// All known loan types, in display order
    pub const ALL: [LoanType; 5] = [
        Self::Conventional,
        Self::Fha,
        Self::Va,
        Self::Usda,
        Self::Jumbo,
    ];

    /// Parse a loan type from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "conventional" => Some(Self::Conventional),
            "fha" => Some(Self::Fha),
            "va" => Some(Self::Va),
            "usda" => Some(Self::Usda),
            "jumbo" => Some(Self::Jumbo),
            _ => None,
        }
    }
}

impl Default for LoanType {
    fn default() -> Self {
        Self::Conventional
    }
}

impl fmt::Display for LoanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conventional => write!(f, "Conventional"),
            Self::Fha => write!(f, "FHA"),
            Self::Va => write!(f, "VA"),
            Self::Usda => write!(f, "USDA"),
            Self::Jumbo => write!(f, "Jumbo"),
        }
    }
}

/// Validated terms of a fixed-rate loan
///
/// Construct through [`crate::validate::loan_terms`] so that the range
/// constraints have been checked before the calculators see the values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Loan principal amount
    pub principal: f64,

    /// Annual interest rate as a percentage (e.g. 4.5 for 4.5%)
    pub annual_rate: f64,

    /// Loan term in years
    pub term_years: u32,
}

impl LoanTerms {
    /// Create loan terms without validation
    pub fn new(principal: f64, annual_rate: f64, term_years: u32) -> Self {
        Self {
            principal,
            annual_rate,
            term_years,
        }
    }

    /// Number of monthly payments over the term
    pub fn months(&self) -> u32 {
        self.term_years * 12
    }

    /// Periodic (monthly) rate as a decimal fraction
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate / 100.0 / 12.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loan_type_parse() {
        assert_eq!(LoanType::parse("conventional"), Some(LoanType::Conventional));
        assert_eq!(LoanType::parse("FHA"), Some(LoanType::Fha));
        assert_eq!(LoanType::parse("va"), Some(LoanType::Va));
        assert_eq!(LoanType::parse("balloon"), None);
    }

    #[test]
    fn test_loan_type_display() {
        assert_eq!(LoanType::Conventional.to_string(), "Conventional");
        assert_eq!(LoanType::Fha.to_string(), "FHA");
    }

    #[test]
    fn test_terms_derived_values() {
        let terms = LoanTerms::new(300_000.0, 4.5, 30);
        assert_eq!(terms.months(), 360);
        assert!((terms.monthly_rate() - 0.00375).abs() < 1e-12);
    }
}
