//! Monthly payment arithmetic
//!
//! Standard fixed-rate amortizing payment formula with an explicit
//! zero-rate guard.

use crate::error::{MortgageError, MortgageResult};

/// Calculate the monthly payment for a fixed-rate loan
///
/// Uses `M = P * r(1+r)^n / ((1+r)^n - 1)` on the periodic (monthly) rate,
/// degrading to straight-line `P / n` when the rate is zero.
///
/// # Errors
///
/// Returns a domain error when the principal is not positive, the rate is
/// negative or non-finite, or the term is zero.
pub fn monthly_payment(principal: f64, annual_rate: f64, term_years: u32) -> MortgageResult<f64> {
    check_loan_inputs(principal, annual_rate, term_years)?;

    let months = f64::from(term_years * 12);
    let monthly_rate = annual_rate / 100.0 / 12.0;

    if monthly_rate == 0.0 {
        return Ok(principal / months);
    }

    let growth = (1.0 + monthly_rate).powi((term_years * 12) as i32);
    let denominator = growth - 1.0;
    if denominator == 0.0 {
        return Err(MortgageError::domain(
            "rate too small to amortize over the given term",
        ));
    }

    Ok(principal * (monthly_rate * growth) / denominator)
}

/// Total interest paid over the life of the loan
pub fn total_interest(principal: f64, annual_rate: f64, term_years: u32) -> MortgageResult<f64> {
    let payment = monthly_payment(principal, annual_rate, term_years)?;
    Ok(payment * f64::from(term_years * 12) - principal)
}

/// Total cost of the loan: principal plus all interest
pub fn total_cost(principal: f64, annual_rate: f64, term_years: u32) -> MortgageResult<f64> {
    Ok(principal + total_interest(principal, annual_rate, term_years)?)
}

pub(crate) fn check_loan_inputs(
    principal: f64,
    annual_rate: f64,
    term_years: u32,
) -> MortgageResult<()> {
    if !principal.is_finite() || principal <= 0.0 {
        return Err(MortgageError::domain("principal must be positive"));
    }
    if !annual_rate.is_finite() || annual_rate < 0.0 {
        return Err(MortgageError::domain("interest rate must be non-negative"));
    }
    if term_years == 0 {
        return Err(MortgageError::domain("term must be at least one year"));
    }
    Ok(())
}
