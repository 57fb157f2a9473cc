//! Amortization schedule generation

use crate::error::MortgageResult;
use crate::models::{AmortizationRow, AmortizationSchedule};

use super::payment::monthly_payment;

/// Generate a complete amortization schedule
///
/// Produces one row per month from period 1 through the final period, each
/// computed from the prior remaining balance. The final row absorbs any
/// floating-point drift into its principal portion so the closing balance is
/// exactly zero.
pub fn amortization_schedule(
    principal: f64,
    annual_rate: f64,
    term_years: u32,
) -> MortgageResult<AmortizationSchedule> {
    let payment = monthly_payment(principal, annual_rate, term_years)?;
    let monthly_rate = annual_rate / 100.0 / 12.0;
    let months = term_years * 12;

    let mut rows = Vec::with_capacity(months as usize);
    let mut remaining = principal;

    for period in 1..=months {
        let interest = remaining * monthly_rate;
        let mut principal_portion = payment - interest;
        remaining -= principal_portion;

        // Absorb rounding drift into the final payment
        if period == months {
            principal_portion += remaining;
            remaining = 0.0;
        }

        rows.push(AmortizationRow {
            period,
            payment,
            interest,
            principal: principal_portion,
            remaining_balance: remaining,
        });
    }

    Ok(AmortizationSchedule::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_has_one_row_per_month() {
        let schedule = amortization_schedule(300_000.0, 4.5, 30).unwrap();
        assert_eq!(schedule.len(), 360);
        assert_eq!(schedule.rows()[0].period, 1);
        assert_eq!(schedule.final_row().unwrap().period, 360);
    }

    #[test]
    fn test_final_balance_is_exactly_zero() {
        let schedule = amortization_schedule(300_000.0, 4.5, 30).unwrap();
        assert_eq!(schedule.final_row().unwrap().remaining_balance, 0.0);
    }

    #[test]
    fn test_principal_portions_sum_to_principal() {
        let schedule = amortization_schedule(250_000.0, 6.25, 15).unwrap();
        assert!((schedule.total_principal() - 250_000.0).abs() < 0.01);
    }

    #[test]
    fn test_rows_balance_payment_parts() {
        let schedule = amortization_schedule(180_000.0, 5.0, 20).unwrap();
        for row in schedule.rows() {
            assert!((row.interest + row.principal - row.payment).abs() < 0.01);
        }
    }

    #[test]
    fn test_balance_is_monotonically_non_increasing() {
        let schedule = amortization_schedule(300_000.0, 4.5, 30).unwrap();
        let mut prev = f64::INFINITY;
        for row in schedule.rows() {
            assert!(row.remaining_balance <= prev);
            prev = row.remaining_balance;
        }
    }

    #[test]
    fn test_zero_rate_schedule() {
        // $1,200 at 0% over 12 months: 12 equal rows of 100 principal
        let schedule = amortization_schedule(1_200.0, 0.0, 1).unwrap();
        assert_eq!(schedule.len(), 12);
        for row in schedule.rows() {
            assert!((row.payment - 100.0).abs() < 1e-9);
            assert!((row.principal - 100.0).abs() < 1e-9);
            assert_eq!(row.interest, 0.0);
        }
        assert_eq!(schedule.final_row().unwrap().remaining_balance, 0.0);
    }

    #[test]
    fn test_invalid_inputs_propagate() {
        assert!(amortization_schedule(-1.0, 4.5, 30).is_err());
        assert!(amortization_schedule(100.0, 4.5, 0).is_err());
    }
}
