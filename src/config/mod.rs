//! Configuration loading and management for the payroll and forecast engine.
//!
//! This module provides functionality to load engine configuration from YAML
//! files, including engine metadata, payroll defaults and dated PAYG tax
//! schedules.
//!
//! # Example
//!
//! ```no_run
//! use forecast_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/au").unwrap();
//! println!("Loaded config: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, EngineMetadata, PayrollDefaults, TaxBracket, TaxSchedule};
