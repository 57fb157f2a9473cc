//! Scenario comparison report
//!
//! Computes side-by-side metrics for two or more scenarios and renders them
//! as a terminal table or CSV.

use std::io::Write;

use crate::display::{format_currency, format_months, separator};
use crate::error::{MortgageError, MortgageResult};
use crate::models::Scenario;

/// Derived metrics for one scenario in a comparison
#[derive(Debug, Clone)]
pub struct ScenarioMetrics {
    /// Scenario name
    pub name: String,
    /// Monthly payment at the effective rate
    pub monthly_payment: f64,
    /// Total interest over the loan life
    pub total_interest: f64,
    /// Total cost including points
    pub total_cost: f64,
    /// Equity after 5 years
    pub equity_5yr: f64,
    /// Equity after 10 years
    pub equity_10yr: f64,
    /// Equity after 15 years
    pub equity_15yr: f64,
    /// Break-even for points paid, in months
    pub break_even_months: Option<f64>,
}

/// Side-by-side comparison of multiple scenarios
#[derive(Debug, Clone)]
pub struct ComparisonReport {
    /// Metrics per scenario, in input order
    pub scenarios: Vec<ScenarioMetrics>,
}

impl ComparisonReport {
    /// Compute comparison metrics for the given scenarios
    ///
    /// # Errors
    ///
    /// Returns a validation error when fewer than two scenarios are given.
    pub fn generate(scenarios: &[Scenario]) -> MortgageResult<Self> {
        if scenarios.len() < 2 {
            return Err(MortgageError::validation(
                "scenarios",
                "at least two scenarios are required to compare",
            ));
        }

        let mut metrics = Vec::with_capacity(scenarios.len());
        for scenario in scenarios {
            metrics.push(ScenarioMetrics {
                name: scenario.name.clone(),
                monthly_payment: scenario.monthly_payment()?,
                total_interest: scenario.total_interest()?,
                total_cost: scenario.total_cost()?,
                equity_5yr: scenario.equity_at_year(5)?,
                equity_10yr: scenario.equity_at_year(10)?,
                equity_15yr: scenario.equity_at_year(15)?,
                break_even_months: scenario.points_break_even()?,
            });
        }

        Ok(Self { scenarios: metrics })
    }

    /// Format the comparison as a terminal table
    pub fn format_terminal(&self, symbol: &str) -> String {
        let width = 22 + 18 * self.scenarios.len();
        let mut output = String::new();

        output.push_str("Scenario Comparison\n");
        output.push_str(&separator(width));
        output.push('\n');

        output.push_str(&format!("{:<22}", "Metric"));
        for m in &self.scenarios {
            output.push_str(&format!(" {:>17}", truncate(&m.name, 17)));
        }
        output.push('\n');
        output.push_str(&separator(width));
        output.push('\n');

        self.push_money_row(&mut output, "Monthly Payment", symbol, |m| m.monthly_payment);
        self.push_money_row(&mut output, "Total Interest", symbol, |m| m.total_interest);
        self.push_money_row(&mut output, "Total Cost", symbol, |m| m.total_cost);
        self.push_money_row(&mut output, "Equity (5 years)", symbol, |m| m.equity_5yr);
        self.push_money_row(&mut output, "Equity (10 years)", symbol, |m| m.equity_10yr);
        self.push_money_row(&mut output, "Equity (15 years)", symbol, |m| m.equity_15yr);

        output.push_str(&format!("{:<22}", "Break-even Point"));
        for m in &self.scenarios {
            let cell = match m.break_even_months {
                Some(months) => format_months(months),
                None => "N/A".to_string(),
            };
            output.push_str(&format!(" {:>17}", cell));
        }
        output.push('\n');

        output
    }

    fn push_money_row(
        &self,
        output: &mut String,
        label: &str,
        symbol: &str,
        value: impl Fn(&ScenarioMetrics) -> f64,
    ) {
        output.push_str(&format!("{:<22}", label));
        for m in &self.scenarios {
            output.push_str(&format!(" {:>17}", format_currency(value(m), symbol)));
        }
        output.push('\n');
    }

    /// Export the comparison to CSV
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> MortgageResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        let mut header = vec!["Metric".to_string()];
        header.extend(self.scenarios.iter().map(|m| m.name.clone()));
        csv_writer
            .write_record(&header)
            .map_err(|e| MortgageError::Export(e.to_string()))?;

        let money_rows: [(&str, fn(&ScenarioMetrics) -> f64); 6] = [
            ("Monthly Payment", |m| m.monthly_payment),
            ("Total Interest", |m| m.total_interest),
            ("Total Cost", |m| m.total_cost),
            ("Equity (5 years)", |m| m.equity_5yr),
            ("Equity (10 years)", |m| m.equity_10yr),
            ("Equity (15 years)", |m| m.equity_15yr),
        ];

        for (label, value) in money_rows {
            let mut record = vec![label.to_string()];
            record.extend(
                self.scenarios
                    .iter()
                    .map(|m| format!("{:.2}", value(m))),
            );
            csv_writer
                .write_record(&record)
                .map_err(|e| MortgageError::Export(e.to_string()))?;
        }

        let mut record = vec!["Break-even Months".to_string()];
        record.extend(self.scenarios.iter().map(|m| match m.break_even_months {
            Some(months) => format!("{:.1}", months),
            None => "N/A".to_string(),
        }));
        csv_writer
            .write_record(&record)
            .map_err(|e| MortgageError::Export(e.to_string()))?;

        csv_writer
            .flush()
            .map_err(|e| MortgageError::Export(e.to_string()))?;
        Ok(())
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
