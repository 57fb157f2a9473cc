//! Underwriting ratios: loan-to-value, debt-to-income, PMI

use crate::config::LendingPolicy;
use crate::error::{MortgageError, MortgageResult};

/// Loan-to-value ratio as a percentage
///
/// # Errors
///
/// Returns a domain error when the appraised value is zero or negative.
pub fn loan_to_value(loan_amount: f64, property_value: f64) -> MortgageResult<f64> {
    if !property_value.is_finite() || property_value <= 0.0 {
        return Err(MortgageError::domain("appraised value must be positive"));
    }
    if !loan_amount.is_finite() || loan_amount < 0.0 {
        return Err(MortgageError::domain("loan amount must be non-negative"));
    }

    Ok(loan_amount / property_value * 100.0)
}

/// Debt-to-income ratio as a percentage
///
/// `monthly_obligations` is the sum of existing debt payments and any
/// proposed housing payment.
///
/// # Errors
///
/// Returns a domain error when gross monthly income is zero or negative.
pub fn debt_to_income(monthly_income: f64, monthly_obligations: f64) -> MortgageResult<f64> {
    if !monthly_income.is_finite() || monthly_income <= 0.0 {
        return Err(MortgageError::domain("gross monthly income must be positive"));
    }
    if !monthly_obligations.is_finite() || monthly_obligations < 0.0 {
        return Err(MortgageError::domain(
            "monthly obligations must be non-negative",
        ));
    }

    Ok(monthly_obligations / monthly_income * 100.0)
}

/// Annual PMI cost for a loan
///
/// PMI applies only when the loan-to-value ratio exceeds the policy
/// threshold; below or at the threshold the cost is zero.
pub fn pmi_annual(
    loan_amount: f64,
    property_value: f64,
    policy: &LendingPolicy,
) -> MortgageResult<f64> {
    let ltv = loan_to_value(loan_amount, property_value)?;

    if ltv <= policy.pmi_ltv_threshold {
        return Ok(0.0);
    }

    Ok(loan_amount * policy.pmi_annual_rate)
}
