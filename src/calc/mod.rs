//! The calculation engine
//!
//! Pure functions over validated inputs. Nothing in this module touches the
//! filesystem, the provider, or the terminal.

pub mod affordability;
pub mod payment;
pub mod ratios;
pub mod refinance;
pub mod schedule;

pub use affordability::max_affordable_price;
pub use payment::{monthly_payment, total_cost, total_interest};
pub use ratios::{debt_to_income, loan_to_value, pmi_annual};
pub use refinance::{refinance_savings, RefinanceAnalysis};
pub use schedule::amortization_schedule;
