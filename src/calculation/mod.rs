//! Calculation logic for the payroll and forecast engine.
//!
//! This module contains all the calculation functions: pay-period conversion
//! between annual and hourly compensation, superannuation and monthly cost,
//! PAYG withholding over a progressive bracket schedule, employee derived-field
//! recomputation, month-level employment proration, team cost aggregation and
//! the profit-and-loss projection.
//!
//! Every function here is pure and total over its practical input domain:
//! absent or zero inputs degenerate to zero outputs rather than signalling
//! failure. Validation belongs to the API layer.

mod pay_period;
mod payg;
mod projection;
mod proration;
mod recalculate;
mod superannuation;
mod team_cost;

pub use pay_period::{
    annual_from_hourly, hourly_from_annual, pay_per_period, pay_per_period_from_hourly,
};
pub use payg::{annual_tax, default_resident_schedule, payg_per_period};
pub use projection::project;
pub use proration::{employee_monthly_cost, proration_factor, team_monthly_total};
pub use recalculate::{recalculate_all, recalculate_employee};
pub use superannuation::{monthly_cost, super_guarantee_rate, super_per_period};
pub use team_cost::calculate_team_cost;
