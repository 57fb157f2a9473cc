//! Payment and schedule CLI commands

use std::path::PathBuf;

use clap::Args;

use crate::calc;
use crate::config::Settings;
use crate::display::{format_currency, separator};
use crate::error::{MortgageError, MortgageResult};
use crate::reports::ScheduleReport;
use crate::validate;

/// Arguments for the payment command
#[derive(Args)]
pub struct PaymentArgs {
    /// Loan principal amount
    #[arg(long)]
    pub principal: f64,

    /// Annual interest rate (percent)
    #[arg(long)]
    pub rate: f64,

    /// Loan term in years
    #[arg(long)]
    pub term: u32,
}

/// Arguments for the schedule command
#[derive(Args)]
pub struct ScheduleArgs {
    /// Loan principal amount
    #[arg(long)]
    pub principal: f64,

    /// Annual interest rate (percent)
    #[arg(long)]
    pub rate: f64,

    /// Loan term in years
    #[arg(long)]
    pub term: u32,

    /// Number of payments to display
    #[arg(long, default_value = "12")]
    pub show: usize,

    /// Display every payment
    #[arg(long)]
    pub full: bool,

    /// Write the full schedule to a CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

/// Handle the payment command
pub fn handle_payment(settings: &Settings, args: PaymentArgs) -> MortgageResult<()> {
    let terms = validate::loan_terms(args.principal, args.rate, args.term, &settings.policy)?;

    let payment = calc::monthly_payment(terms.principal, terms.annual_rate, terms.term_years)?;
    let interest = calc::total_interest(terms.principal, terms.annual_rate, terms.term_years)?;
    let cost = terms.principal + interest;

    let symbol = &settings.currency_symbol;
    println!(
        "Loan: {} at {}% for {} years",
        format_currency(terms.principal, symbol),
        terms.annual_rate,
        terms.term_years
    );
    println!("{}", separator(40));
    println!("Monthly payment: {}", format_currency(payment, symbol));
    println!("Total interest:  {}", format_currency(interest, symbol));
    println!("Total cost:      {}", format_currency(cost, symbol));

    Ok(())
}

/// Handle the schedule command
pub fn handle_schedule(settings: &Settings, args: ScheduleArgs) -> MortgageResult<()> {
    let terms = validate::loan_terms(args.principal, args.rate, args.term, &settings.policy)?;
    let report = ScheduleReport::generate(terms)?;

    let limit = if args.full { None } else { Some(args.show) };
    print!("{}", report.format_terminal(&settings.currency_symbol, limit));

    if let Some(path) = args.csv {
        let mut file = std::fs::File::create(&path)
            .map_err(|e| MortgageError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
        report.export_csv(&mut file)?;
        println!();
        println!("Schedule written to {}", path.display());
    }

    Ok(())
}
