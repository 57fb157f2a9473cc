//! Core data models for mortgage-cli
//!
//! Plain value records passed between the validator, the calculators, and
//! the data provider. All are transient per invocation; only scenarios are
//! ever persisted.

pub mod affordability;
pub mod ids;
pub mod loan;
pub mod quote;
pub mod scenario;
pub mod schedule;

pub use affordability::{AffordabilityEstimate, AffordabilityInput};
pub use ids::ScenarioId;
pub use loan::{LoanTerms, LoanType};
pub use quote::{PropertyAddress, RateQuote, ValuationResult};
pub use scenario::Scenario;
pub use schedule::{AmortizationRow, AmortizationSchedule};
