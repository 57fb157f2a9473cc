//! Affordability CLI command

use clap::Args;

use crate::calc;
use crate::config::Settings;
use crate::display::{format_currency, separator};
use crate::error::MortgageResult;
use crate::validate;

/// Arguments for the afford command
#[derive(Args)]
pub struct AffordArgs {
    /// Gross monthly income
    #[arg(long)]
    pub income: f64,

    /// Existing monthly debt payments
    #[arg(long, default_value = "0")]
    pub debts: f64,

    /// Available down payment
    #[arg(long, default_value = "0")]
    pub down: f64,

    /// Expected annual interest rate (percent)
    #[arg(long)]
    pub rate: f64,

    /// Loan term in years
    #[arg(long)]
    pub term: u32,
}

/// Handle the afford command
pub fn handle_afford(settings: &Settings, args: AffordArgs) -> MortgageResult<()> {
    let input = validate::affordability_input(
        args.income,
        args.debts,
        args.down,
        args.rate,
        args.term,
        &settings.policy,
    )?;

    let estimate = calc::max_affordable_price(&input, &settings.policy)?;

    let symbol = &settings.currency_symbol;
    println!(
        "Affordability at a {:.0}% debt-to-income ceiling:",
        settings.policy.max_dti * 100.0
    );
    println!("{}", separator(48));
    println!(
        "Maximum home price: {}",
        format_currency(estimate.max_price, symbol)
    );
    println!(
        "Maximum loan:       {}",
        format_currency(estimate.max_loan, symbol)
    );
    println!(
        "Down payment:       {}",
        format_currency(input.down_payment, symbol)
    );
    println!(
        "Monthly P&I budget: {}",
        format_currency(estimate.monthly_budget, symbol)
    );

    if estimate.max_loan == 0.0 {
        println!();
        println!("Existing debts already consume the payment budget at this income.");
    }

    Ok(())
}
