//! Applies an imported budget table to a project list.

use tracing::debug;

use super::types::{BudgetEntry, BudgetMap};
use crate::project::Project;

/// Reconciles budget tables with projects.
pub struct BudgetMerger;

impl BudgetMerger {
    /// Finds the budget entry for `project`.
    ///
    /// Keys are tried in fixed priority order: project id, then project
    /// name, then client name. The first present key wins.
    #[must_use]
    pub fn lookup<'a>(project: &Project, budgets: &'a BudgetMap) -> Option<&'a BudgetEntry> {
        [&project.id, &project.name, &project.client]
            .into_iter()
            .find_map(|key| budgets.get(key.as_str()))
    }

    /// Replaces each project's budget with its matching entry.
    ///
    /// Matched budgets are replaced wholesale, never merged field by field.
    /// Projects without a match are returned untouched, including an absent
    /// budget staying absent. No other field is modified.
    #[must_use]
    pub fn update_project_budgets(projects: Vec<Project>, budgets: &BudgetMap) -> Vec<Project> {
        if budgets.is_empty() {
            return projects;
        }

        let mut matched = 0usize;
        let projects: Vec<Project> = projects
            .into_iter()
            .map(|mut project| {
                if let Some(entry) = Self::lookup(&project, budgets) {
                    project.budget = Some(*entry);
                    matched += 1;
                }
                project
            })
            .collect();

        debug!(
            projects = projects.len(),
            matched,
            entries = budgets.len(),
            "Project budgets updated"
        );

        projects
    }
}
