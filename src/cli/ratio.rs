//! Underwriting ratio CLI commands

use clap::Subcommand;

use crate::calc;
use crate::config::Settings;
use crate::display::{format_currency, format_percent};
use crate::error::MortgageResult;
use crate::validate;

/// DTI at or below this is conventionally considered comfortable
const GOOD_DTI_PCT: f64 = 36.0;

/// Ratio subcommands
#[derive(Subcommand)]
pub enum RatioCommands {
    /// Loan-to-value ratio
    Ltv {
        /// Loan amount
        loan: f64,
        /// Appraised property value
        value: f64,
    },

    /// Debt-to-income ratio
    Dti {
        /// Gross monthly income
        income: f64,
        /// Existing monthly debt payments
        debt: f64,
        /// Proposed housing payment to include
        #[arg(long)]
        payment: Option<f64>,
    },

    /// Annual and monthly PMI estimate
    Pmi {
        /// Loan amount
        loan: f64,
        /// Appraised property value
        value: f64,
    },
}

/// Handle a ratio command
pub fn handle_ratio_command(settings: &Settings, cmd: RatioCommands) -> MortgageResult<()> {
    let policy = &settings.policy;
    let symbol = &settings.currency_symbol;

    match cmd {
        RatioCommands::Ltv { loan, value } => {
            let loan = validate::non_negative_amount("loan", loan)?;
            let ltv = calc::loan_to_value(loan, value)?;

            println!("Loan-to-Value Ratio: {}", format_percent(ltv));
            if ltv > policy.pmi_ltv_threshold {
                println!(
                    "Note: LTV above {}% typically requires Private Mortgage Insurance (PMI).",
                    policy.pmi_ltv_threshold
                );
            }
        }

        RatioCommands::Dti {
            income,
            debt,
            payment,
        } => {
            let debt = validate::non_negative_amount("debt", debt)?;
            let payment = match payment {
                Some(p) => validate::non_negative_amount("payment", p)?,
                None => 0.0,
            };
            let dti = calc::debt_to_income(income, debt + payment)?;

            println!("Debt-to-Income Ratio: {}", format_percent(dti));
            // Round away float artifacts (0.43 * 100 is not exactly 43)
            let ceiling = (policy.max_dti * 10_000.0).round() / 100.0;
            if dti <= GOOD_DTI_PCT {
                println!("DTI is good (<= {}%).", GOOD_DTI_PCT);
            } else if dti <= ceiling {
                println!("DTI is acceptable (<= {}%).", ceiling);
            } else {
                println!(
                    "DTI is high (> {}%). May have difficulty qualifying for a mortgage.",
                    ceiling
                );
            }
        }

        RatioCommands::Pmi { loan, value } => {
            let loan = validate::non_negative_amount("loan", loan)?;
            let annual = calc::pmi_annual(loan, value, policy)?;

            if annual > 0.0 {
                println!("Annual PMI:  {}", format_currency(annual, symbol));
                println!("Monthly PMI: {}", format_currency(annual / 12.0, symbol));
            } else {
                println!(
                    "No PMI required (LTV <= {}%).",
                    policy.pmi_ltv_threshold
                );
            }
        }
    }

    Ok(())
}
