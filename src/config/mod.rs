//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::MortgagePaths;
pub use settings::{LendingPolicy, Settings};
