//! Property valuation CLI command

use clap::Args;

use crate::display::format_currency;
use crate::error::MortgageResult;
use crate::models::PropertyAddress;
use crate::provider::ValuationProvider;

/// Arguments for the value command
#[derive(Args)]
pub struct ValueArgs {
    /// Street address (e.g. "123 Main St")
    pub street: String,

    /// City
    pub city: String,

    /// Two-letter state code
    pub state: String,

    /// ZIP code ("12345" or "12345-6789")
    pub zip: String,
}

/// Handle the value command
pub fn handle_value(
    provider: &impl ValuationProvider,
    symbol: &str,
    args: ValueArgs,
) -> MortgageResult<()> {
    let address = PropertyAddress::new(args.street, args.city, args.state, args.zip);
    let valuation = provider.property_valuation(&address)?;

    println!("Valuation for {}", valuation.address);
    println!(
        "Estimated value:  {}",
        format_currency(valuation.estimated_value, symbol)
    );
    println!("Valuation date:   {}", valuation.valuation_date);
    println!("Confidence score: {}%", valuation.confidence);
    println!("Source:           {}", valuation.source);

    Ok(())
}
