//! Team cost aggregation functionality.
//!
//! This module combines existing team members and planned future hires into
//! a single annual team cost with an OpEx/COGS split for the profit-and-loss
//! projection.

use rust_decimal::Decimal;

use crate::models::{
    CostClassification, PlannedHire, TeamCostAssumptions, TeamCostBreakdown, TeamMember,
};

/// Aggregates annual team cost across existing members and planned hires.
///
/// Existing members' salaries are scaled by the assumed salary increase and
/// then by the superannuation loading. Planned hires are scaled by the
/// superannuation loading only; no increase applies since they start on their
/// offered salary. Totals are also split by cost classification so the
/// projection can place team cost on the correct side of the gross-margin
/// line.
///
/// # Examples
///
/// ```
/// use forecast_engine::calculation::calculate_team_cost;
/// use forecast_engine::models::{CostClassification, TeamCostAssumptions, TeamMember};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let members = vec![
///     TeamMember {
///         name: "Alex Chen".to_string(),
///         annual_salary: Decimal::from(80_000),
///         classification: CostClassification::OperatingExpense,
///     },
///     TeamMember {
///         name: "Sam Taylor".to_string(),
///         annual_salary: Decimal::from(80_000),
///         classification: CostClassification::OperatingExpense,
///     },
/// ];
/// let assumptions = TeamCostAssumptions {
///     salary_increase: Decimal::from_str("0.06").unwrap(),
///     super_rate: Decimal::from_str("0.12").unwrap(),
/// };
///
/// let breakdown = calculate_team_cost(&members, &[], &assumptions);
/// assert_eq!(breakdown.total_cost, Decimal::from(189_952));
/// ```
pub fn calculate_team_cost(
    members: &[TeamMember],
    hires: &[PlannedHire],
    assumptions: &TeamCostAssumptions,
) -> TeamCostBreakdown {
    let increase = Decimal::ONE + assumptions.salary_increase;
    let loading = Decimal::ONE + assumptions.super_rate;

    let mut existing_cost = Decimal::ZERO;
    let mut planned_cost = Decimal::ZERO;
    let mut operating_expense_cost = Decimal::ZERO;
    let mut cogs_cost = Decimal::ZERO;

    for member in members {
        let cost = member.annual_salary * increase * loading;
        existing_cost += cost;
        if member.classification == CostClassification::OperatingExpense {
            operating_expense_cost += cost;
        } else {
            cogs_cost += cost;
        }
    }

    for hire in hires {
        let cost = hire.annual_salary * loading;
        planned_cost += cost;
        if hire.classification == CostClassification::OperatingExpense {
            operating_expense_cost += cost;
        } else {
            cogs_cost += cost;
        }
    }

    TeamCostBreakdown {
        existing_cost,
        planned_cost,
        total_cost: existing_cost + planned_cost,
        operating_expense_cost,
        cogs_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CostClassification, MonthKey};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn member(salary: &str, classification: CostClassification) -> TeamMember {
        TeamMember {
            name: "Member".to_string(),
            annual_salary: dec(salary),
            classification,
        }
    }

    fn hire(salary: &str, classification: CostClassification) -> PlannedHire {
        PlannedHire {
            role: "New Role".to_string(),
            annual_salary: dec(salary),
            classification,
            start_month: MonthKey {
                year: 2026,
                month: 10,
            },
        }
    }

    fn assumptions() -> TeamCostAssumptions {
        TeamCostAssumptions {
            salary_increase: dec("0.06"),
            super_rate: dec("0.12"),
        }
    }

    /// TC-001: two 80k members at 6% increase and 12% super cost 189,952
    #[test]
    fn test_two_existing_members_with_increase_and_super() {
        let members = vec![
            member("80000", CostClassification::OperatingExpense),
            member("80000", CostClassification::OperatingExpense),
        ];

        let breakdown = calculate_team_cost(&members, &[], &assumptions());

        assert_eq!(breakdown.existing_cost.round_dp(2), dec("189952.00"));
        assert_eq!(breakdown.planned_cost, Decimal::ZERO);
        assert_eq!(breakdown.total_cost.round_dp(2), dec("189952.00"));
        assert_eq!(
            breakdown.operating_expense_cost.round_dp(2),
            dec("189952.00")
        );
        assert_eq!(breakdown.cogs_cost, Decimal::ZERO);
    }

    /// TC-002: planned hires get super but no salary increase
    #[test]
    fn test_planned_hire_gets_no_increase() {
        let hires = vec![hire("100000", CostClassification::OperatingExpense)];

        let breakdown = calculate_team_cost(&[], &hires, &assumptions());

        // 100,000 x 1.12 only
        assert_eq!(breakdown.planned_cost, dec("112000.00"));
        assert_eq!(breakdown.existing_cost, Decimal::ZERO);
        assert_eq!(breakdown.total_cost, dec("112000.00"));
    }

    /// TC-003: totals split by classification
    #[test]
    fn test_classification_split() {
        let members = vec![
            member("80000", CostClassification::OperatingExpense),
            member("60000", CostClassification::CostOfGoodsSold),
        ];
        let hires = vec![hire("50000", CostClassification::CostOfGoodsSold)];

        let breakdown = calculate_team_cost(&members, &hires, &assumptions());

        // OpEx: 80,000 x 1.06 x 1.12 = 94,976
        assert_eq!(
            breakdown.operating_expense_cost.round_dp(2),
            dec("94976.00")
        );
        // COGS: 60,000 x 1.06 x 1.12 + 50,000 x 1.12 = 71,232 + 56,000
        assert_eq!(breakdown.cogs_cost.round_dp(2), dec("127232.00"));
        assert_eq!(
            breakdown.total_cost,
            breakdown.operating_expense_cost + breakdown.cogs_cost
        );
    }

    #[test]
    fn test_empty_team_costs_nothing() {
        let breakdown = calculate_team_cost(&[], &[], &assumptions());
        assert_eq!(breakdown.total_cost, Decimal::ZERO);
        assert_eq!(breakdown.operating_expense_cost, Decimal::ZERO);
        assert_eq!(breakdown.cogs_cost, Decimal::ZERO);
    }

    #[test]
    fn test_zero_assumptions_pass_salaries_through() {
        let members = vec![member("80000", CostClassification::OperatingExpense)];
        let assumptions = TeamCostAssumptions {
            salary_increase: Decimal::ZERO,
            super_rate: Decimal::ZERO,
        };

        let breakdown = calculate_team_cost(&members, &[], &assumptions);
        assert_eq!(breakdown.total_cost, dec("80000"));
    }
}
