//! Amortization schedule models

use serde::{Deserialize, Serialize};

/// One payment period in an amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// 1-based payment number
    pub period: u32,

    /// Total payment for this period
    pub payment: f64,

    /// Interest portion of the payment
    pub interest: f64,

    /// Principal portion of the payment
    pub principal: f64,

    /// Balance remaining after this payment
    pub remaining_balance: f64,
}

/// A complete amortization schedule, ordered from period 1 to the final period
///
/// The final row's remaining balance is exactly zero; rounding drift is
/// absorbed into its principal portion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    rows: Vec<AmortizationRow>,
}

impl AmortizationSchedule {
    /// Wrap an ordered list of rows
    pub fn new(rows: Vec<AmortizationRow>) -> Self {
        Self { rows }
    }

    /// All rows in payment order
    pub fn rows(&self) -> &[AmortizationRow] {
        &self.rows
    }

    /// Number of payments in the schedule
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the schedule has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The final row, if any
    pub fn final_row(&self) -> Option<&AmortizationRow> {
        self.rows.last()
    }

    /// Sum of interest portions across the schedule
    pub fn total_interest(&self) -> f64 {
        self.rows.iter().map(|r| r.interest).sum()
    }

    /// Sum of principal portions across the schedule
    pub fn total_principal(&self) -> f64 {
        self.rows.iter().map(|r| r.principal).sum()
    }

    /// Balance remaining after `months` payments; the full starting balance
    /// when `months` is 0
    pub fn balance_after(&self, months: u32) -> Option<f64> {
        if months == 0 {
            return self
                .rows
                .first()
                .map(|r| r.remaining_balance + r.principal);
        }
        self.rows
            .get(months as usize - 1)
            .map(|r| r.remaining_balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_row_schedule() -> AmortizationSchedule {
        AmortizationSchedule::new(vec![
            AmortizationRow {
                period: 1,
                payment: 100.0,
                interest: 10.0,
                principal: 90.0,
                remaining_balance: 90.0,
            },
            AmortizationRow {
                period: 2,
                payment: 100.0,
                interest: 10.0,
                principal: 90.0,
                remaining_balance: 0.0,
            },
        ])
    }

    #[test]
    fn test_totals() {
        let schedule = two_row_schedule();
        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule.total_interest(), 20.0);
        assert_eq!(schedule.total_principal(), 180.0);
    }

    #[test]
    fn test_balance_after() {
        let schedule = two_row_schedule();
        assert_eq!(schedule.balance_after(0), Some(180.0));
        assert_eq!(schedule.balance_after(1), Some(90.0));
        assert_eq!(schedule.balance_after(2), Some(0.0));
        assert_eq!(schedule.balance_after(3), None);
    }
}
