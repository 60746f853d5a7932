//! Project progress.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::project::{Project, ProjectStatus};

/// Completion figures for one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectProgress {
    /// Project identifier.
    pub project_id: String,
    /// Completed tasks.
    pub completed_tasks: u32,
    /// Total tasks.
    pub total_tasks: u32,
    /// Percent complete, 0 to 100, rounded to 2 dp.
    pub percent: Decimal,
}

impl ProjectProgress {
    /// Computes progress from the project's task counts.
    ///
    /// A project without tasks is 0% done unless its status is completed.
    /// Completed counts above the total are clamped to 100%.
    #[must_use]
    pub fn for_project(project: &Project) -> Self {
        let completed = project.completed_tasks.unwrap_or(0);
        let total = project.total_tasks.unwrap_or(0);

        let percent = if total == 0 {
            if project.status == Some(ProjectStatus::Completed) {
                Decimal::ONE_HUNDRED
            } else {
                Decimal::ZERO
            }
        } else {
            (Decimal::from(completed) / Decimal::from(total) * Decimal::ONE_HUNDRED)
                .round_dp(2)
                .min(Decimal::ONE_HUNDRED)
        };

        Self {
            project_id: project.id.clone(),
            completed_tasks: completed,
            total_tasks: total,
            percent,
        }
    }

    /// Average percent complete over `projects`, zero for an empty slice.
    #[must_use]
    pub fn average(projects: &[Project]) -> Decimal {
        if projects.is_empty() {
            return Decimal::ZERO;
        }
        let sum: Decimal = projects.iter().map(|p| Self::for_project(p).percent).sum();
        (sum / Decimal::from(projects.len())).round_dp(2)
    }
}
