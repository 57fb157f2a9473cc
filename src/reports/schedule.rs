//! Amortization schedule report
//!
//! Renders a full payment-by-payment breakdown for terminal display or CSV
//! export.

use std::io::Write;

use crate::calc;
use crate::display::{format_currency, separator};
use crate::error::{MortgageError, MortgageResult};
use crate::models::{AmortizationSchedule, LoanTerms};

/// Amortization schedule report for a loan
#[derive(Debug, Clone)]
pub struct ScheduleReport {
    /// The loan the schedule was generated for
    pub terms: LoanTerms,
    /// The generated schedule
    pub schedule: AmortizationSchedule,
}

impl ScheduleReport {
    /// Generate the schedule for validated loan terms
    pub fn generate(terms: LoanTerms) -> MortgageResult<Self> {
        let schedule =
            calc::amortization_schedule(terms.principal, terms.annual_rate, terms.term_years)?;
        Ok(Self { terms, schedule })
    }

    /// Format the report for terminal display
    ///
    /// `limit` caps the number of rows printed; the summary always covers
    /// the full schedule.
    pub fn format_terminal(&self, symbol: &str, limit: Option<usize>) -> String {
        let mut output = String::new();
        let shown = limit.unwrap_or(self.schedule.len()).min(self.schedule.len());

        output.push_str(&format!(
            "Amortization Schedule: {} at {}% for {} years\n",
            format_currency(self.terms.principal, symbol),
            self.terms.annual_rate,
            self.terms.term_years
        ));
        output.push_str(&format!(
            "{:<10} {:>14} {:>14} {:>14} {:>14}\n",
            "Payment #", "Payment", "Principal", "Interest", "Balance"
        ));
        output.push_str(&separator(70));
        output.push('\n');

        for row in &self.schedule.rows()[..shown] {
            output.push_str(&format!(
                "{:<10} {:>14} {:>14} {:>14} {:>14}\n",
                row.period,
                format_currency(row.payment, symbol),
                format_currency(row.principal, symbol),
                format_currency(row.interest, symbol),
                format_currency(row.remaining_balance, symbol)
            ));
        }

        if shown < self.schedule.len() {
            output.push_str(&format!(
                "... ({} more payments)\n",
                self.schedule.len() - shown
            ));
        }

        output.push_str(&separator(70));
        output.push('\n');
        output.push_str(&format!("Total payments: {}\n", self.schedule.len()));
        output.push_str(&format!(
            "Total interest: {}\n",
            format_currency(self.schedule.total_interest(), symbol)
        ));
        output.push_str(&format!(
            "Total cost:     {}\n",
            format_currency(
                self.terms.principal + self.schedule.total_interest(),
                symbol
            )
        ));

        output
    }

    /// Export the schedule to CSV
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> MortgageResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer
            .write_record(["Payment", "Amount", "Principal", "Interest", "Balance"])
            .map_err(|e| MortgageError::Export(e.to_string()))?;

        for row in self.schedule.rows() {
            csv_writer
                .write_record([
                    row.period.to_string(),
                    format!("{:.2}", row.payment),
                    format!("{:.2}", row.principal),
                    format!("{:.2}", row.interest),
                    format!("{:.2}", row.remaining_balance),
                ])
                .map_err(|e| MortgageError::Export(e.to_string()))?;
        }

        csv_writer
            .flush()
            .map_err(|e| MortgageError::Export(e.to_string()))?;
        Ok(())
    }
}
