//! Mock data provider
//!
//! Returns canned rates and ZIP-derived valuations in place of a real market
//! data API. Responses are deterministic for a given input unless rate
//! jitter is enabled, in which case a small clock-derived fluctuation is
//! added to simulate market movement.

use chrono::{Timelike, Utc};

use crate::error::{MortgageError, MortgageResult};
use crate::models::{LoanType, PropertyAddress, RateQuote, ValuationResult};

use super::{RateProvider, ValuationProvider};

/// Spread between the quoted rate and the APR, in percentage points
const APR_SPREAD: f64 = 0.15;

/// Mock implementation of the rate and valuation providers
#[derive(Debug, Clone)]
pub struct MockProvider {
    jitter: bool,
}

impl MockProvider {
    /// Create a mock provider
    ///
    /// With `jitter` enabled, quoted rates fluctuate by up to ±0.05
    /// percentage points between calls.
    pub fn new(jitter: bool) -> Self {
        Self { jitter }
    }

    fn base_rate(loan_type: LoanType) -> f64 {
        match loan_type {
            LoanType::Conventional => 6.25,
            LoanType::Fha => 6.0,
            LoanType::Va => 5.75,
            LoanType::Usda => 5.9,
            LoanType::Jumbo => 6.5,
        }
    }

    fn term_adjustment(term_years: u32) -> f64 {
        match term_years {
            10 => -0.5,
            15 => -0.25,
            20 => 0.0,
            30 => 0.25,
            _ => 0.0,
        }
    }

    fn jitter_amount(&self) -> f64 {
        if !self.jitter {
            return 0.0;
        }
        // Clock-derived fluctuation in [-0.05, 0.05]
        let nanos = Utc::now().nanosecond();
        f64::from(nanos % 101) / 1000.0 - 0.05
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new(false)
    }
}

impl RateProvider for MockProvider {
    fn current_rate(&self, loan_type: LoanType, term_years: u32) -> MortgageResult<RateQuote> {
        let rate = Self::base_rate(loan_type) + Self::term_adjustment(term_years)
            + self.jitter_amount();
        let rate = (rate * 1000.0).round() / 1000.0;

        Ok(RateQuote {
            loan_type,
            term_years,
            interest_rate: rate,
            apr: ((rate + APR_SPREAD) * 1000.0).round() / 1000.0,
            last_updated: Utc::now(),
        })
    }
}

impl ValuationProvider for MockProvider {
    fn property_valuation(&self, address: &PropertyAddress) -> MortgageResult<ValuationResult> {
        let zip_digits: String = address.zip.chars().filter(|c| c.is_ascii_digit()).collect();
        if zip_digits.len() < 5 {
            return Err(MortgageError::Provider(format!(
                "invalid ZIP code: {}",
                address.zip
            )));
        }

        // ZIP prefix anchors the neighborhood price band ($100K-$999K)
        let zip_base: u64 = zip_digits[..5].parse().map_err(|_| {
            MortgageError::Provider(format!("invalid ZIP code: {}", address.zip))
        })?;
        let base_value = f64::from((zip_base % 900 + 100) as u32) * 1000.0;

        // Address-seeded variation in [-10%, +10%], stable across calls
        let seed: u64 = address
            .street
            .bytes()
            .chain(address.city.bytes())
            .fold(0u64, |acc, b| acc.wrapping_mul(31).wrapping_add(u64::from(b)));
        let variation = (seed % 21) as f64 / 100.0 - 0.10;
        let value = (base_value * (1.0 + variation)).round();

        Ok(ValuationResult {
            address: address.to_string(),
            estimated_value: value,
            valuation_date: Utc::now().date_naive(),
            confidence: 70 + (seed % 26) as u8,
            source: "mock".to_string(),
        })
    }
}
