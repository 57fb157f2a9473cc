//! Maximum affordable price estimation
//!
//! Inverts the payment formula against the policy DTI ceiling to find the
//! largest loan whose payment keeps debt-to-income at or below the ceiling.

use crate::config::LendingPolicy;
use crate::error::{MortgageError, MortgageResult};
use crate::models::{AffordabilityEstimate, AffordabilityInput};

/// Estimate the maximum affordable home price
///
/// The monthly budget is the DTI-ceiling share of income minus existing
/// debts, reduced by the monthly property tax and insurance accrual
/// (PITI). The remainder is the principal-and-interest budget, which the
/// inverted annuity formula converts into a maximum loan. A non-positive
/// budget clamps the loan to zero, leaving the down payment as the entire
/// affordable price.
///
/// # Errors
///
/// Returns a domain error when income is not positive or the term is zero.
pub fn max_affordable_price(
    input: &AffordabilityInput,
    policy: &LendingPolicy,
) -> MortgageResult<AffordabilityEstimate> {
    if !input.monthly_income.is_finite() || input.monthly_income <= 0.0 {
        return Err(MortgageError::domain("gross monthly income must be positive"));
    }
    if input.term_years == 0 {
        return Err(MortgageError::domain("term must be at least one year"));
    }

    // Maximum monthly payment available for principal, interest, taxes,
    // and insurance
    let max_piti = input.monthly_income * policy.max_dti - input.monthly_debts;

    let monthly_tax_rate = policy.property_tax_rate / 12.0;
    let monthly_insurance_rate = policy.insurance_rate / 12.0;
    let monthly_budget = max_piti / (1.0 + monthly_tax_rate + monthly_insurance_rate);

    if monthly_budget <= 0.0 {
        return Ok(AffordabilityEstimate {
            max_price: input.down_payment,
            max_loan: 0.0,
            monthly_budget: 0.0,
        });
    }

    let monthly_rate = input.annual_rate / 100.0 / 12.0;
    let months = f64::from(input.term_years * 12);

    let max_loan = if monthly_rate == 0.0 {
        monthly_budget * months
    } else {
        monthly_budget * ((1.0 - (1.0 + monthly_rate).powf(-months)) / monthly_rate)
    };

    Ok(AffordabilityEstimate {
        max_price: max_loan + input.down_payment,
        max_loan,
        monthly_budget,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::payment::monthly_payment;

    fn input(income: f64, debts: f64, down: f64, rate: f64, term: u32) -> AffordabilityInput {
        AffordabilityInput {
            monthly_income: income,
            monthly_debts: debts,
            down_payment: down,
            annual_rate: rate,
            term_years: term,
        }
    }

    #[test]
    fn test_example_household_affords_over_300k() {
        // $6,000/mo income, $1,000/mo debts, $60,000 down, 4.5%, 30 years
        let policy = LendingPolicy::default();
        let estimate =
            max_affordable_price(&input(6_000.0, 1_000.0, 60_000.0, 4.5, 30), &policy).unwrap();
        assert!(estimate.max_price > 300_000.0);
        assert!((estimate.max_price - estimate.max_loan - 60_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_max_loan_payment_stays_within_budget() {
        let policy = LendingPolicy::default();
        let estimate =
            max_affordable_price(&input(8_000.0, 500.0, 40_000.0, 6.0, 30), &policy).unwrap();

        // The payment on the max loan equals the monthly budget (inverse of
        // the payment formula)
        let payment = monthly_payment(estimate.max_loan, 6.0, 30).unwrap();
        assert!((payment - estimate.monthly_budget).abs() < 0.01);
    }

    #[test]
    fn test_zero_rate_budget_times_months() {
        let policy = LendingPolicy::default();
        let estimate =
            max_affordable_price(&input(5_000.0, 0.0, 10_000.0, 0.0, 15), &policy).unwrap();
        assert!((estimate.max_loan - estimate.monthly_budget * 180.0).abs() < 1e-6);
    }

    #[test]
    fn test_overcommitted_household_clamps_to_down_payment() {
        // Debts already exceed the DTI-ceiling share of income
        let policy = LendingPolicy::default();
        let estimate =
            max_affordable_price(&input(3_000.0, 2_000.0, 25_000.0, 5.0, 30), &policy).unwrap();
        assert_eq!(estimate.max_loan, 0.0);
        assert_eq!(estimate.max_price, 25_000.0);
    }

    #[test]
    fn test_non_positive_income_is_domain_error() {
        let policy = LendingPolicy::default();
        assert!(
            max_affordable_price(&input(0.0, 0.0, 0.0, 4.5, 30), &policy)
                .unwrap_err()
                .is_domain()
        );
    }

    #[test]
    fn test_tighter_ceiling_affords_less() {
        let relaxed = LendingPolicy::default();
        let strict = LendingPolicy {
            max_dti: 0.28,
            ..LendingPolicy::default()
        };

        let i = input(6_000.0, 500.0, 20_000.0, 5.5, 30);
        let a = max_affordable_price(&i, &relaxed).unwrap();
        let b = max_affordable_price(&i, &strict).unwrap();
        assert!(b.max_price < a.max_price);
    }
}
