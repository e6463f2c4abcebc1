//! Request types for the payroll and forecast engine API.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::{
    BasisField, EmployeeCompensation, ForecastBaseline, ForecastTargets, Investment, MonthKey,
    PayrollSettings, PlannedHire, TeamCostAssumptions, TeamMember,
};

/// Request body for `POST /payroll/recalculate`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecalculateRequest {
    /// The employee record as last persisted, including the edited field.
    pub employee: EmployeeCompensation,
    /// The payroll settings shared across the forecast.
    pub settings: PayrollSettings,
    /// Which basis field the user edited.
    pub changed_field: BasisField,
    /// The date to pick the PAYG schedule for; defaults to today.
    #[serde(default)]
    pub effective_date: Option<NaiveDate>,
}

/// Request body for `POST /payroll/monthly-cost`.
#[derive(Debug, Clone, Deserialize)]
pub struct MonthlyCostRequest {
    /// The roster to aggregate.
    pub employees: Vec<EmployeeCompensation>,
    /// The payroll settings shared across the forecast.
    pub settings: PayrollSettings,
    /// The month to cost.
    pub month: MonthKey,
}

/// Request body for `POST /forecast/project`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectionRequest {
    /// Annual revenue and profit targets.
    pub targets: ForecastTargets,
    /// Prior-year baseline figures and assumptions.
    pub baseline: ForecastBaseline,
    /// Existing team members.
    #[serde(default)]
    pub members: Vec<TeamMember>,
    /// Planned future hires.
    #[serde(default)]
    pub planned_hires: Vec<PlannedHire>,
    /// Salary-increase and superannuation assumptions.
    pub assumptions: TeamCostAssumptions,
    /// Planned investments for the forecast year.
    #[serde(default)]
    pub investments: Vec<Investment>,
}
