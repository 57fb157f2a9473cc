//! Current rates CLI command

use clap::Args;

use crate::display::separator;
use crate::error::{MortgageError, MortgageResult};
use crate::models::LoanType;
use crate::provider::RateProvider;

/// Arguments for the rates command
#[derive(Args)]
pub struct RatesArgs {
    /// Limit to one loan type (conventional, fha, va, usda, jumbo)
    #[arg(long = "loan-type")]
    pub loan_type: Option<String>,

    /// Limit to one term in years
    #[arg(long)]
    pub term: Option<u32>,
}

/// Handle the rates command
pub fn handle_rates(provider: &impl RateProvider, args: RatesArgs) -> MortgageResult<()> {
    let loan_types: Vec<LoanType> = match &args.loan_type {
        Some(s) => {
            let loan_type = LoanType::parse(s).ok_or_else(|| {
                MortgageError::validation("loan type", format!("unknown loan type: {}", s))
            })?;
            vec![loan_type]
        }
        None => LoanType::ALL.to_vec(),
    };
    let terms: Vec<u32> = match args.term {
        Some(t) => vec![t],
        None => vec![15, 30],
    };

    println!("Current Mortgage Rates");
    println!("{:<15} {:>8} {:>9} {:>9}", "Loan Type", "Term", "Rate", "APR");
    println!("{}", separator(45));

    let mut last_updated = None;
    for loan_type in &loan_types {
        for term in &terms {
            let quote = provider.current_rate(*loan_type, *term)?;
            println!(
                "{:<15} {:>6}yr {:>8.3}% {:>8.3}%",
                quote.loan_type.to_string(),
                quote.term_years,
                quote.interest_rate,
                quote.apr
            );
            last_updated = Some(quote.last_updated);
        }
    }

    if let Some(updated) = last_updated {
        println!();
        println!("Last updated: {}", updated.format("%Y-%m-%d %H:%M:%S"));
    }

    Ok(())
}
