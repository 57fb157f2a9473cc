//! Data provider response models
//!
//! Records returned by the rate and valuation providers. The calculators
//! treat these as opaque inputs the user may accept or override.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::loan::LoanType;

/// A street address used for valuation lookups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyAddress {
    /// Street address (e.g. "123 Main St")
    pub street: String,

    /// City
    pub city: String,

    /// Two-letter state code
    pub state: String,

    /// ZIP code ("12345" or "12345-6789")
    pub zip: String,
}

impl PropertyAddress {
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            state: state.into(),
            zip: zip.into(),
        }
    }
}

impl fmt::Display for PropertyAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {} {}",
            self.street, self.city, self.state, self.zip
        )
    }
}

/// A current interest rate quote from a rate provider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateQuote {
    /// Loan type the quote applies to
    pub loan_type: LoanType,

    /// Term in years the quote applies to
    pub term_years: u32,

    /// Annual interest rate as a percentage
    pub interest_rate: f64,

    /// Annual percentage rate including estimated fees
    pub apr: f64,

    /// When the quote was produced
    pub last_updated: DateTime<Utc>,
}

/// A property valuation estimate from a valuation provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationResult {
    /// Formatted address the estimate applies to
    pub address: String,

    /// Estimated market value
    pub estimated_value: f64,

    /// Date the estimate was produced
    pub valuation_date: NaiveDate,

    /// Provider confidence in the estimate, 0-100
    pub confidence: u8,

    /// Label identifying the data source
    pub source: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_display() {
        let addr = PropertyAddress::new("123 Main St", "Springfield", "IL", "62704");
        assert_eq!(addr.to_string(), "123 Main St, Springfield, IL 62704");
    }
}
