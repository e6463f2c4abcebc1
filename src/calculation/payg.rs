//! PAYG withholding calculation functionality.
//!
//! This module applies a progressive tax-bracket schedule to an annual salary
//! and divides the annual figure across pay periods. The fixed default
//! schedule is the Australian resident scale effective 1 July 2024; dated
//! overrides can be loaded through [`crate::config::ConfigLoader`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::config::{TaxBracket, TaxSchedule};
use crate::models::PayFrequency;

/// Returns the built-in Australian resident tax schedule.
///
/// Five brackets: the tax-free threshold, then four marginal bands each with
/// a precomputed base tax (16%, 30%, 37% and 45%).
pub fn default_resident_schedule() -> TaxSchedule {
    fn bracket(over: &str, base_tax: &str, marginal_rate: &str) -> TaxBracket {
        TaxBracket {
            // The strings are compile-time constants; parsing cannot fail.
            over: Decimal::from_str(over).unwrap_or_default(),
            base_tax: Decimal::from_str(base_tax).unwrap_or_default(),
            marginal_rate: Decimal::from_str(marginal_rate).unwrap_or_default(),
        }
    }

    TaxSchedule {
        effective_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap_or_default(),
        brackets: vec![
            bracket("0", "0", "0"),
            bracket("18200", "0", "0.16"),
            bracket("45000", "4288", "0.30"),
            bracket("135000", "31288", "0.37"),
            bracket("190000", "51638", "0.45"),
        ],
    }
}

/// Returns the annual tax for a salary under the given schedule.
///
/// The applicable bracket is the one with the highest floor strictly below
/// the salary; tax is that bracket's base tax plus its marginal rate on the
/// excess over the floor. Salaries at or below the tax-free threshold, and
/// non-positive salaries, produce zero.
///
/// # Examples
///
/// ```
/// use forecast_engine::calculation::{annual_tax, default_resident_schedule};
/// use rust_decimal::Decimal;
///
/// let schedule = default_resident_schedule();
/// assert_eq!(annual_tax(Decimal::from(18_200), &schedule), Decimal::ZERO);
/// assert_eq!(annual_tax(Decimal::from(45_000), &schedule), Decimal::from(4_288));
/// assert_eq!(annual_tax(Decimal::from(200_000), &schedule), Decimal::from(56_138));
/// ```
pub fn annual_tax(annual_salary: Decimal, schedule: &TaxSchedule) -> Decimal {
    let applicable = schedule
        .brackets
        .iter()
        .filter(|b| annual_salary > b.over)
        .max_by(|a, b| a.over.cmp(&b.over));

    match applicable {
        Some(bracket) => bracket.base_tax + (annual_salary - bracket.over) * bracket.marginal_rate,
        None => Decimal::ZERO,
    }
}

/// Returns the PAYG withholding for a pay period.
///
/// The annual tax is spread evenly across the pay periods of the year.
pub fn payg_per_period(
    annual_salary: Decimal,
    frequency: PayFrequency,
    schedule: &TaxSchedule,
) -> Decimal {
    annual_tax(annual_salary, schedule) / frequency.periods_per_year()
}
