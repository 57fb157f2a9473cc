//! Rate and valuation data providers
//!
//! The calculators treat provider responses as opaque inputs the user may
//! accept or override. Providers are injected at the CLI boundary so the
//! mock can be swapped for a real data source without touching the callers.

pub mod mock;

pub use mock::MockProvider;

use crate::error::MortgageResult;
use crate::models::{LoanType, PropertyAddress, RateQuote, ValuationResult};

/// Source of current mortgage interest rates
pub trait RateProvider {
    /// Get the current rate for a loan type and term
    fn current_rate(&self, loan_type: LoanType, term_years: u32) -> MortgageResult<RateQuote>;
}

/// Source of property valuation estimates
pub trait ValuationProvider {
    /// Get a valuation estimate for an address
    fn property_valuation(&self, address: &PropertyAddress) -> MortgageResult<ValuationResult>;
}
