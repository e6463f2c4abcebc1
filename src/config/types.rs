//! Configuration types for the payroll and forecast engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Metadata about the engine configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineMetadata {
    /// The human-readable name of this configuration set.
    pub name: String,
    /// The region the configuration applies to (e.g. "AU").
    pub region: String,
    /// The month the financial year starts in (7 for the Australian July-June year).
    pub fiscal_year_start_month: u32,
    /// URL to the source of the tax and superannuation figures.
    pub source_url: String,
}

/// Default payroll parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollDefaults {
    /// The superannuation guarantee rate as a fraction (e.g. 0.12).
    pub super_guarantee_rate: Decimal,
    /// The standard full-time weekly hours (38 in Australia).
    pub standard_weekly_hours: Decimal,
}

/// A single bracket in a progressive tax schedule.
///
/// Tax for a salary in this bracket is `base_tax` plus `marginal_rate` on the
/// amount over the bracket floor.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxBracket {
    /// The bracket floor; the bracket applies to income over this amount.
    pub over: Decimal,
    /// Precomputed tax on income up to the bracket floor.
    pub base_tax: Decimal,
    /// Marginal rate on the amount over the bracket floor, as a fraction.
    pub marginal_rate: Decimal,
}

/// A PAYG tax schedule effective from a given date.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxSchedule {
    /// The date these brackets take effect.
    pub effective_date: NaiveDate,
    /// The brackets, lowest floor first.
    pub brackets: Vec<TaxBracket>,
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Engine metadata.
    metadata: EngineMetadata,
    /// Payroll defaults.
    payroll: PayrollDefaults,
    /// Tax schedules by effective date (sorted oldest first).
    schedules: Vec<TaxSchedule>,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(
        metadata: EngineMetadata,
        payroll: PayrollDefaults,
        schedules: Vec<TaxSchedule>,
    ) -> Self {
        let mut sorted_schedules = schedules;
        sorted_schedules.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        for schedule in &mut sorted_schedules {
            schedule.brackets.sort_by(|a, b| a.over.cmp(&b.over));
        }
        Self {
            metadata,
            payroll,
            schedules: sorted_schedules,
        }
    }

    /// Returns the engine metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        &self.metadata
    }

    /// Returns the payroll defaults.
    pub fn payroll(&self) -> &PayrollDefaults {
        &self.payroll
    }

    /// Returns all tax schedules, oldest first.
    pub fn schedules(&self) -> &[TaxSchedule] {
        &self.schedules
    }

    /// Returns the most recent tax schedule effective on or before the date.
    pub fn schedule_for(&self, date: NaiveDate) -> Option<&TaxSchedule> {
        self.schedules
            .iter()
            .rfind(|s| s.effective_date <= date)
    }
}
