//! Refinance analysis CLI command

use clap::Args;

use crate::calc;
use crate::config::Settings;
use crate::display::{format_currency, format_months, separator};
use crate::error::{MortgageError, MortgageResult};
use crate::validate;

/// Arguments for the refinance command
#[derive(Args)]
pub struct RefinanceArgs {
    /// Remaining loan balance
    #[arg(long)]
    pub balance: f64,

    /// Current annual interest rate (percent)
    #[arg(long = "current-rate")]
    pub current_rate: f64,

    /// Years remaining on the current loan
    #[arg(long)]
    pub remaining: u32,

    /// Offered annual interest rate (percent)
    #[arg(long = "new-rate")]
    pub new_rate: f64,

    /// Term of the new loan in years
    #[arg(long = "new-term")]
    pub new_term: u32,

    /// Refinance closing costs
    #[arg(long, default_value = "0")]
    pub closing_costs: f64,
}

/// Handle the refinance command
pub fn handle_refinance(settings: &Settings, args: RefinanceArgs) -> MortgageResult<()> {
    let policy = &settings.policy;

    let balance = validate::positive_amount("balance", args.balance)?;
    let current_rate = validate::interest_rate(args.current_rate, policy)?;
    // The remaining term is whatever is left on the books, not a product
    // offering, so it only needs to be positive
    if args.remaining == 0 {
        return Err(MortgageError::validation(
            "remaining",
            "must be at least one year",
        ));
    }
    let new_rate = validate::interest_rate(args.new_rate, policy)?;
    let new_term = validate::loan_term(args.new_term, policy)?;
    let closing_costs = validate::non_negative_amount("closing costs", args.closing_costs)?;

    let analysis = calc::refinance_savings(
        balance,
        current_rate,
        args.remaining,
        new_rate,
        new_term,
        closing_costs,
    )?;

    let symbol = &settings.currency_symbol;
    println!("Refinance Analysis");
    println!("{}", separator(48));
    println!(
        "Current payment:  {}",
        format_currency(analysis.current_payment, symbol)
    );
    println!(
        "New payment:      {}",
        format_currency(analysis.new_payment, symbol)
    );
    println!(
        "Monthly savings:  {}",
        format_currency(analysis.monthly_savings, symbol)
    );
    println!(
        "Lifetime savings: {}",
        format_currency(analysis.lifetime_savings, symbol)
    );

    match analysis.break_even_months {
        Some(months) => println!("Break-even:       {}", format_months(months)),
        None => println!("Break-even:       never (no monthly savings)"),
    }

    Ok(())
}
