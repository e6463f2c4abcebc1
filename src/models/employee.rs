//! Employee compensation record and related types.
//!
//! This module defines the [`EmployeeCompensation`] record with its basis
//! fields (annual salary or hourly rate plus standard hours) and derived
//! per-period figures. Derived fields are always a pure function of the basis
//! fields, the pay frequency and the superannuation rate in effect; they are
//! never edited directly, only recomputed through
//! [`crate::calculation::recalculate_employee`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether a cost line sits above or below the gross-margin line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostClassification {
    /// Operating expense (below gross profit).
    OperatingExpense,
    /// Cost of goods sold (above gross profit).
    CostOfGoodsSold,
}

/// Identifies which basis field a user edited.
///
/// Only one of the two compensation representations is ever treated as the
/// source of truth per recomputation, which prevents oscillating rounding
/// drift between the annual and hourly figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BasisField {
    /// The annual salary was edited; the hourly rate is re-derived from it.
    AnnualSalary,
    /// The hourly rate was edited; the annual salary is re-derived from it.
    HourlyRate,
}

/// An employee row in a payroll forecast.
///
/// # Example
///
/// ```
/// use forecast_engine::models::{CostClassification, EmployeeCompensation};
/// use rust_decimal::Decimal;
///
/// let employee = EmployeeCompensation::new("Alex Chen", "Operations Manager");
/// assert_eq!(employee.classification, CostClassification::OperatingExpense);
/// assert_eq!(employee.monthly_cost, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeCompensation {
    /// The employee's name.
    pub name: String,
    /// The employee's position title.
    pub position: String,
    /// Whether this salary is an operating expense or a cost of goods sold.
    pub classification: CostClassification,
    /// Annual salary basis field, if set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_salary: Option<Decimal>,
    /// Hourly rate basis field, if set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<Decimal>,
    /// Standard hours worked per week (used for the hourly/annual conversion).
    pub hours_per_week: Decimal,
    /// The date employment starts, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// The date employment ends, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Derived: gross pay per pay period.
    #[serde(default)]
    pub pay_per_period: Decimal,
    /// Derived: superannuation per pay period.
    #[serde(default)]
    pub super_per_period: Decimal,
    /// Derived: PAYG withholding per pay period.
    #[serde(default)]
    pub payg_per_period: Decimal,
    /// Derived: total monthly cost including superannuation.
    #[serde(default)]
    pub monthly_cost: Decimal,
}

impl EmployeeCompensation {
    /// Creates an empty operating-expense employee row with standard hours.
    ///
    /// All basis and derived fields start unset/zero, matching a freshly
    /// added table row.
    pub fn new(name: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            classification: CostClassification::OperatingExpense,
            annual_salary: None,
            hourly_rate: None,
            hours_per_week: Decimal::from(38),
            start_date: None,
            end_date: None,
            pay_per_period: Decimal::ZERO,
            super_per_period: Decimal::ZERO,
            payg_per_period: Decimal::ZERO,
            monthly_cost: Decimal::ZERO,
        }
    }

    /// Returns true if this employee's salary counts as an operating expense.
    pub fn is_operating_expense(&self) -> bool {
        self.classification == CostClassification::OperatingExpense
    }
}
