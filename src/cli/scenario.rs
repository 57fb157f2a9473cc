//! Scenario management CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_currency, format_months, separator};
use crate::error::{MortgageError, MortgageResult};
use crate::models::Scenario;
use crate::reports::ComparisonReport;
use crate::storage::ScenarioStore;
use crate::validate;

/// Scenario subcommands
#[derive(Subcommand)]
pub enum ScenarioCommands {
    /// Save a new scenario
    Add {
        /// Scenario name
        name: String,
        /// Loan amount
        #[arg(long)]
        loan: f64,
        /// Annual interest rate (percent)
        #[arg(long)]
        rate: f64,
        /// Loan term in years
        #[arg(long)]
        term: u32,
        /// Down payment
        #[arg(long, default_value = "0")]
        down: f64,
        /// Property value (defaults to loan + down payment)
        #[arg(long)]
        value: Option<f64>,
        /// Discount points paid (percent of loan)
        #[arg(long)]
        points: Option<f64>,
        /// Rate after buying points (percent)
        #[arg(long = "reduced-rate")]
        reduced_rate: Option<f64>,
    },

    /// List saved scenarios
    List,

    /// Show a saved scenario's metrics
    Show {
        /// Scenario name
        name: String,
    },

    /// Compare saved scenarios side by side
    Compare {
        /// Scenario names (all saved scenarios when omitted)
        names: Vec<String>,
        /// Write the comparison to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Delete a saved scenario
    Delete {
        /// Scenario name
        name: String,
    },
}

/// Handle a scenario command
pub fn handle_scenario_command(
    store: &ScenarioStore,
    settings: &Settings,
    cmd: ScenarioCommands,
) -> MortgageResult<()> {
    let symbol = &settings.currency_symbol;

    match cmd {
        ScenarioCommands::Add {
            name,
            loan,
            rate,
            term,
            down,
            value,
            points,
            reduced_rate,
        } => {
            if name.trim().is_empty() {
                return Err(MortgageError::validation("name", "must not be empty"));
            }

            let terms = validate::loan_terms(loan, rate, term, &settings.policy)?;
            let down = validate::non_negative_amount("down payment", down)?;

            let mut scenario =
                Scenario::new(name, terms.principal, terms.annual_rate, terms.term_years, down);

            if let Some(value) = value {
                scenario.property_value = validate::positive_amount("value", value)?;
            }
            if let Some(points) = points {
                scenario.points_paid = validate::non_negative_amount("points", points)?;
            }
            if let Some(reduced) = reduced_rate {
                scenario.reduced_rate = Some(validate::interest_rate(reduced, &settings.policy)?);
            }

            let path = store.save(&scenario)?;
            println!("Saved scenario '{}' to {}", scenario.name, path.display());
            println!(
                "Monthly payment: {}",
                format_currency(scenario.monthly_payment()?, symbol)
            );
        }

        ScenarioCommands::List => {
            let scenarios = store.list()?;
            if scenarios.is_empty() {
                println!("No saved scenarios.");
                println!("Run 'mortgage scenario add' to create one.");
                return Ok(());
            }

            println!("Saved Scenarios:");
            for scenario in &scenarios {
                println!(
                    "  {} - {} at {}% for {} years (created {})",
                    scenario.name,
                    format_currency(scenario.loan_amount, symbol),
                    scenario.effective_rate(),
                    scenario.term_years,
                    scenario.created_at.format("%Y-%m-%d")
                );
            }
        }

        ScenarioCommands::Show { name } => {
            let scenario = store.load(&name)?;

            println!("Scenario: {}", scenario.name);
            println!("{}", separator(48));
            println!(
                "Loan amount:     {}",
                format_currency(scenario.loan_amount, symbol)
            );
            println!("Interest rate:   {}%", scenario.annual_rate);
            if let Some(reduced) = scenario.reduced_rate {
                println!(
                    "Reduced rate:    {}% ({} points paid)",
                    reduced, scenario.points_paid
                );
            }
            println!("Term:            {} years", scenario.term_years);
            println!(
                "Down payment:    {}",
                format_currency(scenario.down_payment, symbol)
            );
            println!(
                "Property value:  {}",
                format_currency(scenario.property_value, symbol)
            );
            println!("{}", separator(48));
            println!(
                "Monthly payment: {}",
                format_currency(scenario.monthly_payment()?, symbol)
            );
            println!(
                "Total interest:  {}",
                format_currency(scenario.total_interest()?, symbol)
            );
            println!(
                "Total cost:      {}",
                format_currency(scenario.total_cost()?, symbol)
            );
            println!(
                "Equity at 5yr:   {}",
                format_currency(scenario.equity_at_year(5)?, symbol)
            );
            if let Some(months) = scenario.points_break_even()? {
                println!("Points break-even: {}", format_months(months));
            }
        }

        ScenarioCommands::Compare { names, csv } => {
            let scenarios = if names.is_empty() {
                store.list()?
            } else {
                names
                    .iter()
                    .map(|name| store.load(name))
                    .collect::<MortgageResult<Vec<_>>>()?
            };

            let report = ComparisonReport::generate(&scenarios)?;
            print!("{}", report.format_terminal(symbol));

            if let Some(path) = csv {
                let mut file = std::fs::File::create(&path).map_err(|e| {
                    MortgageError::Export(format!("Failed to create {}: {}", path.display(), e))
                })?;
                report.export_csv(&mut file)?;
                println!();
                println!("Comparison written to {}", path.display());
            }
        }

        ScenarioCommands::Delete { name } => {
            store.delete(&name)?;
            println!("Deleted scenario '{}'.", name);
        }
    }

    Ok(())
}
