//! Employee derived-field recomputation.
//!
//! This module is the single mutation entry point for employee records.
//! Derived fields (pay, superannuation and PAYG per period, monthly cost) are
//! never edited directly; every basis-field or settings edit funnels through
//! [`recalculate_employee`].

use rust_decimal::Decimal;

use crate::config::TaxSchedule;
use crate::models::{BasisField, EmployeeCompensation, PayrollSettings};

use super::pay_period::{annual_from_hourly, hourly_from_annual, pay_per_period};
use super::payg::payg_per_period;
use super::superannuation::{monthly_cost, super_per_period};

/// Recomputes an employee's derived fields after a basis-field edit.
///
/// Only the edited field is treated as the source of truth: editing the
/// annual salary re-derives the hourly rate from it, and editing the hourly
/// rate re-derives the annual salary. All downstream fields then recompute
/// from the resulting annual salary, so repeated recomputation can never
/// drift between the two representations.
///
/// An employee with no value in the edited field simply has all derived
/// fields reset to zero.
///
/// # Examples
///
/// ```
/// use forecast_engine::calculation::{default_resident_schedule, recalculate_employee};
/// use forecast_engine::models::{BasisField, EmployeeCompensation, PayFrequency, PayrollSettings};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let mut employee = EmployeeCompensation::new("Sam Taylor", "Production Lead");
/// employee.annual_salary = Some(Decimal::from(78_000));
///
/// let settings = PayrollSettings::new(
///     PayFrequency::Fortnightly,
///     Decimal::from_str("0.12").unwrap(),
/// );
/// let schedule = default_resident_schedule();
///
/// recalculate_employee(&mut employee, &settings, &schedule, BasisField::AnnualSalary);
/// assert_eq!(employee.pay_per_period, Decimal::from(3_000));
/// ```
pub fn recalculate_employee(
    employee: &mut EmployeeCompensation,
    settings: &PayrollSettings,
    schedule: &TaxSchedule,
    changed_field: BasisField,
) {
    match changed_field {
        BasisField::AnnualSalary => {
            employee.hourly_rate = employee
                .annual_salary
                .map(|annual| hourly_from_annual(annual, employee.hours_per_week));
        }
        BasisField::HourlyRate => {
            employee.annual_salary = employee
                .hourly_rate
                .map(|rate| annual_from_hourly(rate, employee.hours_per_week));
        }
    }

    let annual = employee.annual_salary.unwrap_or(Decimal::ZERO);
    employee.pay_per_period = pay_per_period(annual, settings.frequency);
    employee.super_per_period = super_per_period(employee.pay_per_period, settings.super_rate);
    employee.payg_per_period = payg_per_period(annual, settings.frequency, schedule);
    employee.monthly_cost = monthly_cost(annual, settings.super_rate);
}

/// Recomputes derived fields for every employee after a settings change.
///
/// The annual salary is kept as the source of truth for each record, since a
/// frequency or superannuation change does not alter either basis field.
pub fn recalculate_all(
    employees: &mut [EmployeeCompensation],
    settings: &PayrollSettings,
    schedule: &TaxSchedule,
) {
    for employee in employees {
        recalculate_employee(employee, settings, schedule, BasisField::AnnualSalary);
    }
}
