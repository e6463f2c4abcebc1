//! Core data models for the payroll and forecast engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod forecast;
mod month;
mod settings;

pub use employee::{BasisField, CostClassification, EmployeeCompensation};
pub use forecast::{
    ForecastBaseline, ForecastTargets, Investment, InvestmentKind, PlannedHire,
    ProfitAndLossProjection, TeamCostAssumptions, TeamCostBreakdown, TeamMember,
};
pub use month::{FiscalQuarter, MonthKey};
pub use settings::{PayDay, PayFrequency, PayrollSettings};
