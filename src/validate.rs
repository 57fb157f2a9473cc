//! Input validation
//!
//! Turns raw numeric input into normalized records, failing on the first
//! offending field. Values that pass here are safe for the calculators;
//! range constraints (allowed terms, rate ceiling) come from the lending
//! policy rather than hard-coded constants.

use crate::config::LendingPolicy;
use crate::error::{MortgageError, MortgageResult};
use crate::models::{AffordabilityInput, LoanTerms};

/// Validate a currency or rate amount that must be strictly positive
pub fn positive_amount(field: &'static str, value: f64) -> MortgageResult<f64> {
    if !value.is_finite() {
        return Err(MortgageError::validation(field, "must be a number"));
    }
    if value <= 0.0 {
        return Err(MortgageError::validation(field, "must be positive"));
    }
    Ok(value)
}

/// Validate a currency amount that may be zero
pub fn non_negative_amount(field: &'static str, value: f64) -> MortgageResult<f64> {
    if !value.is_finite() {
        return Err(MortgageError::validation(field, "must be a number"));
    }
    if value < 0.0 {
        return Err(MortgageError::validation(field, "must not be negative"));
    }
    Ok(value)
}

/// Validate an annual interest rate in percent against the policy ceiling
pub fn interest_rate(value: f64, policy: &LendingPolicy) -> MortgageResult<f64> {
    if !value.is_finite() {
        return Err(MortgageError::validation("rate", "must be a number"));
    }
    if value < 0.0 {
        return Err(MortgageError::validation("rate", "must not be negative"));
    }
    if value > policy.max_interest_rate {
        return Err(MortgageError::validation(
            "rate",
            format!("must be at most {}%", policy.max_interest_rate),
        ));
    }
    Ok(value)
}

/// Validate a loan term against the policy's allowed set
pub fn loan_term(value: u32, policy: &LendingPolicy) -> MortgageResult<u32> {
    if !policy.allowed_terms.contains(&value) {
        let allowed = policy
            .allowed_terms
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(MortgageError::validation(
            "term",
            format!("must be one of {{{}}} years", allowed),
        ));
    }
    Ok(value)
}

/// Validate and normalize loan terms
///
/// Checks fields in order (principal, rate, term) and reports the first
/// violated constraint.
pub fn loan_terms(
    principal: f64,
    annual_rate: f64,
    term_years: u32,
    policy: &LendingPolicy,
) -> MortgageResult<LoanTerms> {
    let principal = positive_amount("principal", principal)?;
    let annual_rate = interest_rate(annual_rate, policy)?;
    let term_years = loan_term(term_years, policy)?;

    Ok(LoanTerms::new(principal, annual_rate, term_years))
}

/// Validate and normalize affordability inputs
pub fn affordability_input(
    monthly_income: f64,
    monthly_debts: f64,
    down_payment: f64,
    annual_rate: f64,
    term_years: u32,
    policy: &LendingPolicy,
) -> MortgageResult<AffordabilityInput> {
    let monthly_income = positive_amount("income", monthly_income)?;
    let monthly_debts = non_negative_amount("debts", monthly_debts)?;
    let down_payment = non_negative_amount("down payment", down_payment)?;
    let annual_rate = interest_rate(annual_rate, policy)?;
    let term_years = loan_term(term_years, policy)?;

    Ok(AffordabilityInput {
        monthly_income,
        monthly_debts,
        down_payment,
        annual_rate,
        term_years,
    })
}
