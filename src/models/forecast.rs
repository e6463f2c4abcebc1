//! Forecast inputs and the projected profit-and-loss result.
//!
//! This module defines the annual forecast targets, the prior-year cost
//! baseline, the team roster (existing members and planned hires), planned
//! investments, and the [`ProfitAndLossProjection`] produced by
//! [`crate::calculation::project`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::employee::CostClassification;
use super::month::{FiscalQuarter, MonthKey};

/// Annual revenue and profit targets for a forecast.
///
/// The implied expense budget is always derived from these two figures and is
/// never stored independently.
///
/// # Example
///
/// ```
/// use forecast_engine::models::ForecastTargets;
/// use rust_decimal::Decimal;
///
/// let targets = ForecastTargets {
///     revenue_target: Decimal::from(1_000_000),
///     net_profit_target: Decimal::from(150_000),
/// };
/// assert_eq!(targets.expense_budget(), Decimal::from(850_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastTargets {
    /// Target revenue for the forecast year.
    pub revenue_target: Decimal,
    /// Target net profit for the forecast year.
    pub net_profit_target: Decimal,
}

impl ForecastTargets {
    /// Returns the implied expense budget (revenue minus profit target).
    pub fn expense_budget(&self) -> Decimal {
        self.revenue_target - self.net_profit_target
    }
}

/// Prior-year figures and assumptions the forecast builds on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastBaseline {
    /// Revenue in the prior year.
    pub prior_revenue: Decimal,
    /// Cost of goods sold as a fraction of revenue (e.g. 0.35 for 35%).
    pub cogs_fraction: Decimal,
    /// Operating expenses in the prior year.
    pub prior_operating_expenses: Decimal,
    /// Assumed operating-expense inflation as a fraction (e.g. 0.03 for 3%).
    pub opex_inflation: Decimal,
}

/// An existing team member included in the forecast's team cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    /// The member's name.
    pub name: String,
    /// The member's current annual salary.
    pub annual_salary: Decimal,
    /// Whether the salary is an operating expense or a cost of goods sold.
    pub classification: CostClassification,
}

/// A planned future hire included in the forecast's team cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedHire {
    /// The role being hired for.
    pub role: String,
    /// The planned annual salary.
    pub annual_salary: Decimal,
    /// Whether the salary is an operating expense or a cost of goods sold.
    pub classification: CostClassification,
    /// The month the hire is planned to start.
    pub start_month: MonthKey,
}

/// Assumptions applied when aggregating team cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TeamCostAssumptions {
    /// Assumed annual salary increase for existing members, as a fraction.
    pub salary_increase: Decimal,
    /// Superannuation loading applied to all salaries, as a fraction.
    pub super_rate: Decimal,
}

/// Aggregated team cost, split by cost classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TeamCostBreakdown {
    /// Total cost of existing members after the salary increase and super.
    pub existing_cost: Decimal,
    /// Total cost of planned hires after super (no increase applied).
    pub planned_cost: Decimal,
    /// Combined team cost.
    pub total_cost: Decimal,
    /// The operating-expense-classified portion of the total.
    pub operating_expense_cost: Decimal,
    /// The cost-of-goods-sold-classified portion of the total.
    pub cogs_cost: Decimal,
}

/// Whether a planned investment is capitalised or expensed.
///
/// Only expense-classified investments affect the current year's projected
/// profit; capital investments sit on the balance sheet instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentKind {
    /// Capitalised; excluded from the current-year P&L.
    Capital,
    /// Expensed; included in the current-year P&L.
    Expense,
}

/// A planned investment for the forecast year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    /// The investment's name.
    pub name: String,
    /// The amount to be spent.
    pub amount: Decimal,
    /// A free-form category label (e.g. "marketing", "equipment").
    pub category: String,
    /// Capital-vs-expense classification.
    pub kind: InvestmentKind,
    /// The financial-year quarter the spend is targeted for.
    pub target_quarter: FiscalQuarter,
}

/// The projected income statement produced by the forecast calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfitAndLossProjection {
    /// The implied expense budget (revenue target minus profit target).
    pub expense_budget: Decimal,
    /// Forecast cost of goods sold (revenue target times the COGS fraction).
    pub forecast_cogs: Decimal,
    /// Gross profit (revenue target minus forecast COGS).
    pub gross_profit: Decimal,
    /// Total team cost across existing members and planned hires.
    pub total_team_cost: Decimal,
    /// The operating-expense-classified portion of team cost.
    pub operating_expense_team_cost: Decimal,
    /// Prior operating expenses scaled by the assumed inflation.
    pub operating_expense_cost: Decimal,
    /// Total of expense-classified investments.
    pub investment_cost: Decimal,
    /// Total projected expenses.
    pub total_expenses: Decimal,
    /// Projected net profit (revenue target minus total expenses).
    pub projected_profit: Decimal,
    /// Budget consumed by the projected expenses.
    pub budget_used: Decimal,
    /// Budget left over (expense budget minus budget used; negative if over).
    pub budget_remaining: Decimal,
    /// True when the projected profit meets or exceeds the profit target.
    pub is_on_track: bool,
}
