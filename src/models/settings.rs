//! Payroll settings shared across a forecast.
//!
//! This module defines the pay frequency, pay day and superannuation rate
//! that apply to every employee record in a forecast. Editing any of these
//! triggers recomputation of all derived employee fields.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How often employees are paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayFrequency {
    /// Paid every week (52 pay periods per year).
    Weekly,
    /// Paid every two weeks (26 pay periods per year).
    Fortnightly,
    /// Paid once a month (12 pay periods per year).
    Monthly,
}

impl PayFrequency {
    /// Returns the number of pay periods in a year for this frequency.
    ///
    /// # Examples
    ///
    /// ```
    /// use forecast_engine::models::PayFrequency;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(PayFrequency::Weekly.periods_per_year(), Decimal::from(52));
    /// assert_eq!(PayFrequency::Fortnightly.periods_per_year(), Decimal::from(26));
    /// assert_eq!(PayFrequency::Monthly.periods_per_year(), Decimal::from(12));
    /// ```
    pub fn periods_per_year(&self) -> Decimal {
        match self {
            PayFrequency::Weekly => Decimal::from(52),
            PayFrequency::Fortnightly => Decimal::from(26),
            PayFrequency::Monthly => Decimal::from(12),
        }
    }
}

/// The day of the week a pay run lands on.
///
/// Only meaningful for weekly and fortnightly frequencies; monthly pay runs
/// land on a date rather than a weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayDay {
    /// Monday pay run.
    Monday,
    /// Tuesday pay run.
    Tuesday,
    /// Wednesday pay run.
    Wednesday,
    /// Thursday pay run.
    Thursday,
    /// Friday pay run.
    Friday,
}

/// Payroll settings shared by all employee records in a forecast.
///
/// Monthly cost figures are month-granular, so the pay day does not feed any
/// calculation here; it is carried for pay-schedule display and persistence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayrollSettings {
    /// The pay frequency for the whole roster.
    pub frequency: PayFrequency,
    /// The pay day for weekly/fortnightly frequencies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_day: Option<PayDay>,
    /// The superannuation rate as a fraction (e.g. 0.12 for 12%).
    pub super_rate: Decimal,
}

impl PayrollSettings {
    /// Creates settings with the given frequency and superannuation rate.
    pub fn new(frequency: PayFrequency, super_rate: Decimal) -> Self {
        Self {
            frequency,
            pay_day: None,
            super_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_periods_per_year_weekly() {
        assert_eq!(PayFrequency::Weekly.periods_per_year(), Decimal::from(52));
    }

    #[test]
    fn test_periods_per_year_fortnightly() {
        assert_eq!(
            PayFrequency::Fortnightly.periods_per_year(),
            Decimal::from(26)
        );
    }

    #[test]
    fn test_periods_per_year_monthly() {
        assert_eq!(PayFrequency::Monthly.periods_per_year(), Decimal::from(12));
    }

    #[test]
    fn test_frequency_serialization() {
        assert_eq!(
            serde_json::to_string(&PayFrequency::Weekly).unwrap(),
            "\"weekly\""
        );
        assert_eq!(
            serde_json::to_string(&PayFrequency::Fortnightly).unwrap(),
            "\"fortnightly\""
        );
        assert_eq!(
            serde_json::to_string(&PayFrequency::Monthly).unwrap(),
            "\"monthly\""
        );
    }

    #[test]
    fn test_deserialize_settings_without_pay_day() {
        let json = r#"{
            "frequency": "fortnightly",
            "super_rate": "0.12"
        }"#;

        let settings: PayrollSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.frequency, PayFrequency::Fortnightly);
        assert_eq!(settings.pay_day, None);
        assert_eq!(settings.super_rate, dec("0.12"));
    }

    #[test]
    fn test_deserialize_settings_with_pay_day() {
        let json = r#"{
            "frequency": "weekly",
            "pay_day": "thursday",
            "super_rate": "0.115"
        }"#;

        let settings: PayrollSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.pay_day, Some(PayDay::Thursday));
        assert_eq!(settings.super_rate, dec("0.115"));
    }

    #[test]
    fn test_serialize_settings_round_trip() {
        let settings = PayrollSettings {
            frequency: PayFrequency::Weekly,
            pay_day: Some(PayDay::Friday),
            super_rate: dec("0.12"),
        };
        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: PayrollSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, deserialized);
    }

    #[test]
    fn test_new_has_no_pay_day() {
        let settings = PayrollSettings::new(PayFrequency::Monthly, dec("0.12"));
        assert_eq!(settings.pay_day, None);
    }
}
