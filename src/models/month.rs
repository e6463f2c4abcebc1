//! Calendar month key and fiscal quarter types.
//!
//! Monthly cost figures and planned-hire start months are keyed by calendar
//! month. Quarter boundaries follow the Australian financial year, which runs
//! July through June.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// A quarter of the Australian financial year (July-June).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FiscalQuarter {
    /// July to September.
    Q1,
    /// October to December.
    Q2,
    /// January to March.
    Q3,
    /// April to June.
    Q4,
}

/// A calendar month identified by year and month number.
///
/// # Example
///
/// ```
/// use forecast_engine::models::{FiscalQuarter, MonthKey};
/// use chrono::NaiveDate;
///
/// let month = MonthKey { year: 2026, month: 2 };
/// let (first, last) = month.bounds().unwrap();
/// assert_eq!(first, NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
/// assert_eq!(last, NaiveDate::from_ymd_opt(2026, 2, 28).unwrap());
/// assert_eq!(month.fiscal_quarter(), Some(FiscalQuarter::Q3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthKey {
    /// The calendar year.
    pub year: i32,
    /// The month number (1-12).
    pub month: u32,
}

impl MonthKey {
    /// Returns the month key containing the given date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the first and last day of this month, inclusive.
    ///
    /// Returns `None` for an invalid month number; callers in the calculation
    /// layer treat that as a month no employment can overlap.
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = NaiveDate::from_ymd_opt(self.year, self.month, 1)?;
        let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
        Some((first, last))
    }

    /// Returns the Australian financial-year quarter this month falls in.
    ///
    /// Returns `None` for an invalid month number.
    pub fn fiscal_quarter(&self) -> Option<FiscalQuarter> {
        match self.month {
            7..=9 => Some(FiscalQuarter::Q1),
            10..=12 => Some(FiscalQuarter::Q2),
            1..=3 => Some(FiscalQuarter::Q3),
            4..=6 => Some(FiscalQuarter::Q4),
            _ => None,
        }
    }

    /// Returns the calendar year in which this month's financial year ends.
    ///
    /// July 2025 through June 2026 all belong to the financial year ending 2026.
    pub fn fiscal_year_ending(&self) -> i32 {
        if self.month >= 7 {
            self.year + 1
        } else {
            self.year
        }
    }
}
