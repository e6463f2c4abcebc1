//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, EngineMetadata, PayrollDefaults, TaxSchedule};

/// Loads and provides access to engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides methods to query payroll defaults and PAYG tax schedules.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/au/
/// ├── engine.yaml      # Engine metadata
/// ├── payroll.yaml     # Superannuation and standard-hours defaults
/// └── tax/
///     └── 2024-07-01.yaml  # Tax schedule effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use forecast_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/au").unwrap();
///
/// let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
/// let schedule = loader.schedule_for(date).unwrap();
/// println!("Brackets in effect: {}", schedule.brackets.len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/au")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load engine.yaml
        let metadata_path = path.join("engine.yaml");
        let metadata = Self::load_yaml::<EngineMetadata>(&metadata_path)?;

        // Load payroll.yaml
        let payroll_path = path.join("payroll.yaml");
        let payroll = Self::load_yaml::<PayrollDefaults>(&payroll_path)?;

        // Load all schedule files from the tax directory
        let tax_dir = path.join("tax");
        let schedules = Self::load_schedules(&tax_dir)?;

        let config = EngineConfig::new(metadata, payroll, schedules);

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all tax schedule files from the tax directory.
    fn load_schedules(tax_dir: &Path) -> EngineResult<Vec<TaxSchedule>> {
        let tax_dir_str = tax_dir.display().to_string();

        if !tax_dir.exists() {
            return Err(EngineError::ConfigNotFound { path: tax_dir_str });
        }

        let entries = fs::read_dir(tax_dir).map_err(|_| EngineError::ConfigNotFound {
            path: tax_dir_str.clone(),
        })?;

        let mut schedules = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: tax_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let schedule = Self::load_yaml::<TaxSchedule>(&path)?;
                schedules.push(schedule);
            }
        }

        if schedules.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no tax schedule files found)", tax_dir_str),
            });
        }

        Ok(schedules)
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the engine metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        self.config.metadata()
    }

    /// Returns the payroll defaults.
    pub fn payroll(&self) -> &PayrollDefaults {
        self.config.payroll()
    }

    /// Gets the tax schedule in effect on a given date.
    ///
    /// The method finds the most recent schedule that is effective on or
    /// before the given date.
    ///
    /// # Errors
    ///
    /// Returns `TaxScheduleNotFound` if no schedule is effective for the date.
    pub fn schedule_for(&self, date: NaiveDate) -> EngineResult<&TaxSchedule> {
        self.config
            .schedule_for(date)
            .ok_or(EngineError::TaxScheduleNotFound { date })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/au"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.metadata().region, "AU");
        assert_eq!(loader.metadata().fiscal_year_start_month, 7);
    }

    #[test]
    fn test_payroll_defaults_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        assert_eq!(loader.payroll().super_guarantee_rate, dec("0.12"));
        assert_eq!(loader.payroll().standard_weekly_hours, dec("38"));
    }

    #[test]
    fn test_schedule_for_current_year() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
        let schedule = loader.schedule_for(date);
        assert!(schedule.is_ok(), "Failed to get schedule: {:?}", schedule.err());

        let schedule = schedule.unwrap();
        assert_eq!(schedule.brackets.len(), 5);
        assert_eq!(schedule.brackets[1].over, dec("18200"));
        assert_eq!(schedule.brackets[4].marginal_rate, dec("0.45"));
    }

    #[test]
    fn test_schedule_not_found_for_date_before_effective() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let date = NaiveDate::from_ymd_opt(2010, 1, 1).unwrap();
        let result = loader.schedule_for(date);

        assert!(result.is_err());
        match result {
            Err(EngineError::TaxScheduleNotFound { date: d }) => {
                assert_eq!(d, date);
            }
            _ => panic!("Expected TaxScheduleNotFound error"),
        }
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("engine.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_metadata_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        assert_eq!(loader.metadata().name, "Australian payroll defaults");
        assert!(
            loader
                .metadata()
                .source_url
                .contains("ato.gov.au")
        );
    }
}
