//! Report generation
//!
//! Reports compute derived data once and offer both terminal and CSV
//! renderings.

pub mod comparison;
pub mod schedule;

pub use comparison::{ComparisonReport, ScenarioMetrics};
pub use schedule::ScheduleReport;
