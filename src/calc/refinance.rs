//! Refinance savings analysis

use serde::{Deserialize, Serialize};

use crate::error::MortgageResult;

use super::payment::monthly_payment;

/// Outcome of comparing a current loan against a refinance offer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RefinanceAnalysis {
    /// Monthly payment on the current loan
    pub current_payment: f64,

    /// Monthly payment after refinancing
    pub new_payment: f64,

    /// Monthly payment reduction (negative when the new payment is higher)
    pub monthly_savings: f64,

    /// Total savings over the loan life, net of closing costs
    pub lifetime_savings: f64,

    /// Months until closing costs are recouped; `None` when the refinance
    /// never pays for itself
    pub break_even_months: Option<f64>,
}

/// Compare the remaining term of a current loan against a refinance offer
///
/// # Errors
///
/// Returns a domain error when either loan's inputs are invalid.
pub fn refinance_savings(
    current_principal: f64,
    current_rate: f64,
    current_term_remaining: u32,
    new_rate: f64,
    new_term: u32,
    closing_costs: f64,
) -> MortgageResult<RefinanceAnalysis> {
    let current_payment =
        monthly_payment(current_principal, current_rate, current_term_remaining)?;
    let new_payment = monthly_payment(current_principal, new_rate, new_term)?;

    let current_total = current_payment * f64::from(current_term_remaining * 12);
    let new_total = new_payment * f64::from(new_term * 12);

    let monthly_savings = current_payment - new_payment;
    let lifetime_savings = current_total - new_total - closing_costs;

    let break_even_months = if monthly_savings > 0.0 {
        Some(closing_costs / monthly_savings)
    } else {
        None
    };

    Ok(RefinanceAnalysis {
        current_payment,
        new_payment,
        monthly_savings,
        lifetime_savings,
        break_even_months,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_rate_produces_savings() {
        let analysis = refinance_savings(250_000.0, 6.5, 25, 5.0, 25, 4_000.0).unwrap();
        assert!(analysis.monthly_savings > 0.0);
        assert!(analysis.new_payment < analysis.current_payment);
        let months = analysis.break_even_months.unwrap();
        assert!((months - 4_000.0 / analysis.monthly_savings).abs() < 1e-9);
    }

    #[test]
    fn test_higher_rate_never_breaks_even() {
        let analysis = refinance_savings(250_000.0, 4.0, 25, 6.0, 25, 4_000.0).unwrap();
        assert!(analysis.monthly_savings < 0.0);
        assert_eq!(analysis.break_even_months, None);
    }

    #[test]
    fn test_lifetime_savings_nets_out_closing_costs() {
        let with_costs = refinance_savings(200_000.0, 7.0, 20, 5.5, 20, 5_000.0).unwrap();
        let free = refinance_savings(200_000.0, 7.0, 20, 5.5, 20, 0.0).unwrap();
        assert!((free.lifetime_savings - with_costs.lifetime_savings - 5_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_loan_inputs_propagate() {
        assert!(refinance_savings(0.0, 6.5, 25, 5.0, 25, 0.0).is_err());
        assert!(refinance_savings(250_000.0, 6.5, 0, 5.0, 25, 0.0).is_err());
    }
}
