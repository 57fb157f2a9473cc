//! Affordability models

use serde::{Deserialize, Serialize};

/// Validated inputs for an affordability estimate
///
/// Construct through [`crate::validate::affordability_input`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffordabilityInput {
    /// Gross monthly income
    pub monthly_income: f64,

    /// Existing monthly debt obligations
    pub monthly_debts: f64,

    /// Available down payment
    pub down_payment: f64,

    /// Target annual interest rate as a percentage
    pub annual_rate: f64,

    /// Target loan term in years
    pub term_years: u32,
}

/// Result of an affordability estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffordabilityEstimate {
    /// Maximum affordable home price (loan plus down payment)
    pub max_price: f64,

    /// Maximum loan amount supportable at the DTI ceiling
    pub max_loan: f64,

    /// Monthly amount available for principal and interest after taxes
    /// and insurance are set aside
    pub monthly_budget: f64,
}
