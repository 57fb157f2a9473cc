//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the validation and calculation layers.

pub mod afford;
pub mod loan;
pub mod rates;
pub mod ratio;
pub mod refinance;
pub mod scenario;
pub mod value;

pub use afford::{handle_afford, AffordArgs};
pub use loan::{handle_payment, handle_schedule, PaymentArgs, ScheduleArgs};
pub use rates::{handle_rates, RatesArgs};
pub use ratio::{handle_ratio_command, RatioCommands};
pub use refinance::{handle_refinance, RefinanceArgs};
pub use scenario::{handle_scenario_command, ScenarioCommands};
pub use value::{handle_value, ValueArgs};
