//! Mortgage scenario model
//!
//! A named set of loan parameters that can be saved, reloaded, and compared
//! against other scenarios. Points paid to buy down the rate are carried
//! alongside the quoted rate so break-even analysis stays possible.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calc;
use crate::error::MortgageResult;

use super::ids::ScenarioId;

/// A named mortgage scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Unique identifier
    pub id: ScenarioId,

    /// Scenario name (e.g. "30yr fixed, 20% down")
    pub name: String,

    /// Loan principal amount
    pub loan_amount: f64,

    /// Quoted annual interest rate as a percentage
    pub annual_rate: f64,

    /// Loan term in years
    pub term_years: u32,

    /// Down payment amount
    #[serde(default)]
    pub down_payment: f64,

    /// Appraised or assumed property value
    pub property_value: f64,

    /// Discount points paid, as a percentage of the loan amount
    #[serde(default)]
    pub points_paid: f64,

    /// Rate after buying points, when points were paid
    #[serde(default)]
    pub reduced_rate: Option<f64>,

    /// When the scenario was created
    pub created_at: DateTime<Utc>,
}

impl Scenario {
    /// Create a new scenario
    ///
    /// The property value defaults to loan amount plus down payment until
    /// overridden.
    pub fn new(
        name: impl Into<String>,
        loan_amount: f64,
        annual_rate: f64,
        term_years: u32,
        down_payment: f64,
    ) -> Self {
        Self {
            id: ScenarioId::new(),
            name: name.into(),
            loan_amount,
            annual_rate,
            term_years,
            down_payment,
            property_value: loan_amount + down_payment,
            points_paid: 0.0,
            reduced_rate: None,
            created_at: Utc::now(),
        }
    }

    /// The rate actually paid: the reduced rate when points were bought,
    /// otherwise the quoted rate
    pub fn effective_rate(&self) -> f64 {
        self.reduced_rate.unwrap_or(self.annual_rate)
    }

    /// Upfront cost of the points paid
    pub fn points_cost(&self) -> f64 {
        self.points_paid / 100.0 * self.loan_amount
    }

    /// Monthly payment for this scenario
    pub fn monthly_payment(&self) -> MortgageResult<f64> {
        calc::monthly_payment(self.loan_amount, self.effective_rate(), self.term_years)
    }

    /// Total interest over the life of the loan
    pub fn total_interest(&self) -> MortgageResult<f64> {
        calc::total_interest(self.loan_amount, self.effective_rate(), self.term_years)
    }

    /// Total cost: principal, interest, and points
    pub fn total_cost(&self) -> MortgageResult<f64> {
        Ok(calc::total_cost(self.loan_amount, self.effective_rate(), self.term_years)?
            + self.points_cost())
    }

    /// Equity built up after `year` years: down payment plus principal paid
    ///
    /// Before year one this is just the down payment; past the end of the
    /// term it is the full property value.
    pub fn equity_at_year(&self, year: u32) -> MortgageResult<f64> {
        if year == 0 {
            return Ok(self.down_payment);
        }
        if year >= self.term_years {
            return Ok(self.property_value);
        }

        let schedule =
            calc::amortization_schedule(self.loan_amount, self.effective_rate(), self.term_years)?;
        let balance = schedule
            .balance_after(year * 12)
            .unwrap_or(0.0);

        Ok(self.down_payment + (self.loan_amount - balance))
    }

    /// Months until the points paid are recouped by the lower payment
    ///
    /// `None` when no points were paid or the reduced rate does not actually
    /// lower the payment.
    pub fn points_break_even(&self) -> MortgageResult<Option<f64>> {
        let reduced = match self.reduced_rate {
            Some(r) if self.points_paid > 0.0 && r < self.annual_rate => r,
            _ => return Ok(None),
        };

        let with_points = calc::monthly_payment(self.loan_amount, reduced, self.term_years)?;
        let without_points =
            calc::monthly_payment(self.loan_amount, self.annual_rate, self.term_years)?;

        let monthly_savings = without_points - with_points;
        if monthly_savings <= 0.0 {
            return Ok(None);
        }

        Ok(Some(self.points_cost() / monthly_savings))
    }

    /// Filesystem-safe slug derived from the scenario name
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }
}

/// Reduce a scenario name to a filesystem-safe slug
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect::<String>()
        .split('_')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}
