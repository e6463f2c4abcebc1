//! Superannuation and monthly cost functionality.
//!
//! This module provides the superannuation loading applied on top of gross
//! pay and the combined monthly employer cost of a salary.

use rust_decimal::Decimal;

/// Returns the superannuation guarantee rate in effect (12%).
///
/// This is the default rate applied when a forecast does not override it.
pub fn super_guarantee_rate() -> Decimal {
    Decimal::new(12, 2)
}

/// Returns the superannuation contribution for a pay period.
///
/// # Examples
///
/// ```
/// use forecast_engine::calculation::super_per_period;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let contribution = super_per_period(
///     Decimal::from(3_000),
///     Decimal::from_str("0.12").unwrap(),
/// );
/// assert_eq!(contribution, Decimal::from(360));
/// ```
pub fn super_per_period(pay_per_period: Decimal, rate: Decimal) -> Decimal {
    pay_per_period * rate
}

/// Returns the total monthly employer cost of an annual salary.
///
/// The cost is one twelfth of the salary plus the superannuation loading.
///
/// # Examples
///
/// ```
/// use forecast_engine::calculation::monthly_cost;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let cost = monthly_cost(Decimal::from(60_000), Decimal::from_str("0.12").unwrap());
/// assert_eq!(cost, Decimal::from(5_600));
/// ```
pub fn monthly_cost(annual_salary: Decimal, super_rate: Decimal) -> Decimal {
    annual_salary / Decimal::from(12) * (Decimal::ONE + super_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_super_guarantee_rate_is_12_percent() {
        assert_eq!(super_guarantee_rate(), dec("0.12"));
    }

    #[test]
    fn test_super_per_period_at_guarantee_rate() {
        let contribution = super_per_period(dec("3000"), super_guarantee_rate());
        assert_eq!(contribution, dec("360"));
    }

    #[test]
    fn test_super_per_period_on_zero_pay_is_zero() {
        assert_eq!(
            super_per_period(Decimal::ZERO, super_guarantee_rate()),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_monthly_cost_includes_super_loading() {
        // 60,000 / 12 = 5,000; plus 12% super = 5,600
        assert_eq!(monthly_cost(dec("60000"), dec("0.12")), dec("5600"));
    }

    #[test]
    fn test_monthly_cost_with_zero_super_rate() {
        assert_eq!(monthly_cost(dec("60000"), Decimal::ZERO), dec("5000"));
    }

    #[test]
    fn test_monthly_cost_of_zero_salary_is_zero() {
        assert_eq!(
            monthly_cost(Decimal::ZERO, dec("0.12")),
            Decimal::ZERO
        );
    }
}
