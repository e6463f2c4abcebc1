//! Month-level employment proration and monthly cost aggregation.
//!
//! Proration here is month-granular: a month an employment window overlaps at
//! all counts as fully worked. Day-level proration of partial months is a
//! known precision gap carried over from the original behaviour and must not
//! be "fixed" silently; downstream budget figures depend on whole months.

use rust_decimal::Decimal;

use crate::models::{EmployeeCompensation, MonthKey, PayrollSettings};

use super::superannuation::monthly_cost;

/// Returns the fraction of a month an employment window covers.
///
/// Returns 1 when the window overlaps the month at all and 0 when the month
/// falls entirely outside `[start_date, end_date]`. A missing start or end
/// date leaves that side of the window open. An invalid month key prorates
/// to 0.
///
/// # Examples
///
/// ```
/// use forecast_engine::calculation::proration_factor;
/// use forecast_engine::models::MonthKey;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let start = NaiveDate::from_ymd_opt(2025, 9, 15);
/// let august = MonthKey { year: 2025, month: 8 };
/// let september = MonthKey { year: 2025, month: 9 };
///
/// assert_eq!(proration_factor(august, start, None), Decimal::ZERO);
/// // A mid-month start still counts as a full month.
/// assert_eq!(proration_factor(september, start, None), Decimal::ONE);
/// ```
pub fn proration_factor(
    month: MonthKey,
    start_date: Option<chrono::NaiveDate>,
    end_date: Option<chrono::NaiveDate>,
) -> Decimal {
    let Some((first_day, last_day)) = month.bounds() else {
        return Decimal::ZERO;
    };

    if let Some(start) = start_date {
        if start > last_day {
            return Decimal::ZERO;
        }
    }
    if let Some(end) = end_date {
        if end < first_day {
            return Decimal::ZERO;
        }
    }

    Decimal::ONE
}

/// Returns an employee's cost for a given month.
///
/// Composes the monthly cost (salary plus superannuation) with the proration
/// factor for the employment window. Returns zero when the annual salary is
/// unset or the employee is not active in the month.
pub fn employee_monthly_cost(
    employee: &EmployeeCompensation,
    month: MonthKey,
    settings: &PayrollSettings,
) -> Decimal {
    let Some(annual_salary) = employee.annual_salary else {
        return Decimal::ZERO;
    };

    let factor = proration_factor(month, employee.start_date, employee.end_date);
    if factor.is_zero() {
        return Decimal::ZERO;
    }

    monthly_cost(annual_salary, settings.super_rate) * factor
}

/// Returns the aggregate monthly cost of a roster for a given month.
pub fn team_monthly_total(
    employees: &[EmployeeCompensation],
    month: MonthKey,
    settings: &PayrollSettings,
) -> Decimal {
    employees
        .iter()
        .map(|employee| employee_monthly_cost(employee, month, settings))
        .sum()
}
