//! Portfolio summary across all projects.

use chrono::NaiveDate;
use pulse_shared::DashboardConfig;
use pulse_shared::types::{Currency, Money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::progress::ProjectProgress;
use super::types::{BudgetOverview, StatusCounts};
use crate::project::{Project, ProjectStatus};

/// Summary figures for the dashboard header cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Number of projects.
    pub total_projects: usize,
    /// Projects per status.
    pub status_counts: StatusCounts,
    /// Budget totals.
    pub budget: BudgetOverview,
    /// Average percent complete.
    pub average_progress: Decimal,
    /// Unfinished projects past their due date.
    pub overdue: usize,
}

impl PortfolioSummary {
    /// Summarizes `projects`.
    ///
    /// Budgets are summed as-is; mixed currencies are not converted.
    #[must_use]
    pub fn from_projects(
        projects: &[Project],
        currency: Currency,
        config: &DashboardConfig,
        today: NaiveDate,
    ) -> Self {
        let mut status_counts = StatusCounts::default();
        for project in projects {
            let slot = match project.status {
                Some(ProjectStatus::Planning) => &mut status_counts.planning,
                Some(ProjectStatus::Active) => &mut status_counts.active,
                Some(ProjectStatus::OnHold) => &mut status_counts.on_hold,
                Some(ProjectStatus::Completed) => &mut status_counts.completed,
                Some(ProjectStatus::Cancelled) => &mut status_counts.cancelled,
                None => &mut status_counts.unspecified,
            };
            *slot += 1;
        }

        Self {
            total_projects: projects.len(),
            status_counts,
            budget: budget_overview(projects, currency, config),
            average_progress: ProjectProgress::average(projects),
            overdue: projects.iter().filter(|p| p.is_overdue(today)).count(),
        }
    }
}

fn budget_overview(projects: &[Project], currency: Currency, config: &DashboardConfig) -> BudgetOverview {
    let budgets: Vec<_> = projects.iter().filter_map(|p| p.budget).collect();

    let total: Decimal = budgets.iter().map(|b| b.total).sum();
    let spent: Decimal = budgets.iter().map(|b| b.used).sum();

    let utilization_percent = if total.is_zero() {
        Decimal::ZERO
    } else {
        (spent / total * Decimal::ONE_HUNDRED).round_dp(2)
    };

    BudgetOverview {
        total_budget: Money::new(total, currency),
        total_spent: Money::new(spent, currency),
        total_remaining: Money::new(total - spent, currency),
        utilization_percent,
        at_risk: budgets
            .iter()
            .filter(|b| b.utilization_percent() >= config.budget_warning_percent)
            .count(),
        over_budget: budgets.iter().filter(|b| b.is_over_budget()).count(),
        without_budget: projects.len() - budgets.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::BudgetEntry;
    use rust_decimal_macros::dec;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()
    }

    fn portfolio() -> Vec<Project> {
        vec![
            Project::new("101", "Redesign", "Acme")
                .with_status(ProjectStatus::Active)
                .with_tasks(5, 10)
                .with_budget(BudgetEntry::new(dec!(25000), dec!(50000))),
            Project::new("102", "Portal", "Beta")
                .with_status(ProjectStatus::Active)
                .with_tasks(10, 10)
                .with_due_date(NaiveDate::from_ymd_opt(2026, 5, 1).unwrap())
                .with_budget(BudgetEntry::new(dec!(48000), dec!(50000))),
            Project::new("103", "Audit", "Gamma")
                .with_status(ProjectStatus::Completed)
                .with_due_date(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
                .with_budget(BudgetEntry::new(dec!(12000), dec!(10000))),
            Project::new("104", "Research", "Delta"),
        ]
    }

    #[test]
    fn test_status_counts() {
        let summary = PortfolioSummary::from_projects(
            &portfolio(),
            Currency::Pln,
            &DashboardConfig::default(),
            today(),
        );

        assert_eq!(summary.total_projects, 4);
        assert_eq!(summary.status_counts.active, 2);
        assert_eq!(summary.status_counts.completed, 1);
        assert_eq!(summary.status_counts.unspecified, 1);
        assert_eq!(summary.overdue, 1);
    }

    #[test]
    fn test_budget_totals() {
        let summary = PortfolioSummary::from_projects(
            &portfolio(),
            Currency::Pln,
            &DashboardConfig::default(),
            today(),
        );
        let budget = summary.budget;

        assert_eq!(budget.total_budget, Money::new(dec!(110000), Currency::Pln));
        assert_eq!(budget.total_spent, Money::new(dec!(85000), Currency::Pln));
        assert_eq!(budget.total_remaining.amount, dec!(25000));
        assert_eq!(budget.utilization_percent, dec!(77.27));
        assert_eq!(budget.at_risk, 2);
        assert_eq!(budget.over_budget, 1);
        assert_eq!(budget.without_budget, 1);
    }

    #[test]
    fn test_average_progress() {
        let summary = PortfolioSummary::from_projects(
            &portfolio(),
            Currency::Pln,
            &DashboardConfig::default(),
            today(),
        );
        // 50 + 100 + 100 (completed, no tasks) + 0
        assert_eq!(summary.average_progress, dec!(62.5));
    }

    #[test]
    fn test_empty_portfolio() {
        let summary = PortfolioSummary::from_projects(
            &[],
            Currency::Eur,
            &DashboardConfig::default(),
            today(),
        );
        assert_eq!(summary.total_projects, 0);
        assert!(summary.budget.total_budget.is_zero());
        assert_eq!(summary.budget.utilization_percent, Decimal::ZERO);
    }
}
