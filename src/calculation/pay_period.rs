//! Pay-period conversion functionality.
//!
//! This module provides the conversions between annual salary, hourly rate
//! and per-period gross pay. All conversions assume a 52-week year.

use rust_decimal::Decimal;

use crate::models::PayFrequency;

/// Returns the gross pay per pay period for an annual salary.
///
/// # Examples
///
/// ```
/// use forecast_engine::calculation::pay_per_period;
/// use forecast_engine::models::PayFrequency;
/// use rust_decimal::Decimal;
///
/// let pay = pay_per_period(Decimal::from(78_000), PayFrequency::Fortnightly);
/// assert_eq!(pay, Decimal::from(3_000));
/// ```
pub fn pay_per_period(annual_salary: Decimal, frequency: PayFrequency) -> Decimal {
    annual_salary / frequency.periods_per_year()
}

/// Converts an hourly rate to an annual salary over a 52-week year.
///
/// # Examples
///
/// ```
/// use forecast_engine::calculation::annual_from_hourly;
/// use rust_decimal::Decimal;
///
/// let annual = annual_from_hourly(Decimal::from(40), Decimal::from(38));
/// assert_eq!(annual, Decimal::from(79_040));
/// ```
pub fn annual_from_hourly(hourly_rate: Decimal, hours_per_week: Decimal) -> Decimal {
    hourly_rate * hours_per_week * Decimal::from(52)
}

/// Converts an annual salary to an hourly rate over a 52-week year.
///
/// Returns zero when `hours_per_week` is zero rather than dividing by zero.
pub fn hourly_from_annual(annual_salary: Decimal, hours_per_week: Decimal) -> Decimal {
    if hours_per_week.is_zero() {
        return Decimal::ZERO;
    }
    annual_salary / (hours_per_week * Decimal::from(52))
}

/// Returns the gross pay per pay period for an hourly employee.
///
/// # Examples
///
/// ```
/// use forecast_engine::calculation::pay_per_period_from_hourly;
/// use forecast_engine::models::PayFrequency;
/// use rust_decimal::Decimal;
///
/// let pay = pay_per_period_from_hourly(
///     Decimal::from(40),
///     Decimal::from(38),
///     PayFrequency::Weekly,
/// );
/// assert_eq!(pay, Decimal::from(1_520));
/// ```
pub fn pay_per_period_from_hourly(
    hourly_rate: Decimal,
    hours_per_week: Decimal,
    frequency: PayFrequency,
) -> Decimal {
    pay_per_period(annual_from_hourly(hourly_rate, hours_per_week), frequency)
}
