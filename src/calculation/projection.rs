//! Profit-and-loss projection functionality.
//!
//! This module produces the forecast income statement from the annual
//! targets, the prior-year baseline, the team roster and the planned
//! investments. The computation is a single pass in a fixed order; there is
//! no solver and no feedback loop.

use rust_decimal::Decimal;

use crate::models::{
    ForecastBaseline, ForecastTargets, Investment, InvestmentKind, PlannedHire,
    ProfitAndLossProjection, TeamCostAssumptions, TeamMember,
};

use super::team_cost::calculate_team_cost;

/// Projects the forecast year's income statement.
///
/// The projection proceeds in order: the expense budget implied by the
/// targets, forecast COGS and gross profit, team cost, inflated operating
/// expenses, expense-classified investment cost, and finally total expenses,
/// projected profit and budget tracking. Capital investments are excluded
/// from the current-year figures, and only the operating-expense-classified
/// portion of team cost lands in total expenses; COGS-classified team cost
/// belongs to the cost-of-goods side of the margin split.
///
/// # Examples
///
/// ```
/// use forecast_engine::calculation::project;
/// use forecast_engine::models::{
///     ForecastBaseline, ForecastTargets, TeamCostAssumptions,
/// };
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let targets = ForecastTargets {
///     revenue_target: Decimal::from(1_000_000),
///     net_profit_target: Decimal::from(150_000),
/// };
/// let baseline = ForecastBaseline {
///     prior_revenue: Decimal::from(820_000),
///     cogs_fraction: Decimal::from_str("0.35").unwrap(),
///     prior_operating_expenses: Decimal::from(310_000),
///     opex_inflation: Decimal::from_str("0.03").unwrap(),
/// };
/// let assumptions = TeamCostAssumptions {
///     salary_increase: Decimal::from_str("0.06").unwrap(),
///     super_rate: Decimal::from_str("0.12").unwrap(),
/// };
///
/// let projection = project(&targets, &baseline, &[], &[], &assumptions, &[]);
/// assert_eq!(projection.expense_budget, Decimal::from(850_000));
/// assert_eq!(projection.forecast_cogs, Decimal::from(350_000));
/// ```
pub fn project(
    targets: &ForecastTargets,
    baseline: &ForecastBaseline,
    members: &[TeamMember],
    hires: &[PlannedHire],
    assumptions: &TeamCostAssumptions,
    investments: &[Investment],
) -> ProfitAndLossProjection {
    let expense_budget = targets.expense_budget();

    let forecast_cogs = targets.revenue_target * baseline.cogs_fraction;
    let gross_profit = targets.revenue_target - forecast_cogs;

    let team = calculate_team_cost(members, hires, assumptions);

    let operating_expense_cost =
        baseline.prior_operating_expenses * (Decimal::ONE + baseline.opex_inflation);

    let investment_cost: Decimal = investments
        .iter()
        .filter(|i| i.kind == InvestmentKind::Expense)
        .map(|i| i.amount)
        .sum();

    let total_expenses =
        forecast_cogs + team.operating_expense_cost + operating_expense_cost + investment_cost;
    let projected_profit = targets.revenue_target - total_expenses;

    let budget_used = total_expenses;
    let budget_remaining = expense_budget - budget_used;
    let is_on_track = projected_profit >= targets.net_profit_target;

    ProfitAndLossProjection {
        expense_budget,
        forecast_cogs,
        gross_profit,
        total_team_cost: team.total_cost,
        operating_expense_team_cost: team.operating_expense_cost,
        operating_expense_cost,
        investment_cost,
        total_expenses,
        projected_profit,
        budget_used,
        budget_remaining,
        is_on_track,
    }
}
