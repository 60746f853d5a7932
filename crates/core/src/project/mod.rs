//! Project records shown on the dashboard.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::budget::BudgetEntry;

/// Project lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Not started yet.
    Planning,
    /// Work in progress.
    Active,
    /// Temporarily paused.
    OnHold,
    /// Delivered.
    Completed,
    /// Abandoned.
    Cancelled,
}

/// A project record.
///
/// Fields this crate does not know about are kept in `extra` and serialized
/// back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Project identifier (caller-defined, e.g. "101").
    pub id: String,
    /// Project name.
    pub name: String,
    /// Client name.
    pub client: String,
    /// Budget spent vs. allocated, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<BudgetEntry>,
    /// Lifecycle status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    /// Number of completed tasks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_tasks: Option<u32>,
    /// Total number of tasks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_tasks: Option<u32>,
    /// Planned delivery date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Additional fields passed through unmodified.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Project {
    /// Creates a project with only the identifying fields set.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, client: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            client: client.into(),
            budget: None,
            status: None,
            completed_tasks: None,
            total_tasks: None,
            due_date: None,
            extra: Map::new(),
        }
    }

    /// Sets the budget.
    #[must_use]
    pub fn with_budget(mut self, budget: BudgetEntry) -> Self {
        self.budget = Some(budget);
        self
    }

    /// Sets the status.
    #[must_use]
    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets task counts.
    #[must_use]
    pub fn with_tasks(mut self, completed: u32, total: u32) -> Self {
        self.completed_tasks = Some(completed);
        self.total_tasks = Some(total);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Returns true if the project is past its due date and not finished.
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        let finished = matches!(
            self.status,
            Some(ProjectStatus::Completed | ProjectStatus::Cancelled)
        );
        !finished && self.due_date.is_some_and(|due| due < today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_unknown_fields_round_trip() {
        let json = r#"{"id":"101","name":"Redesign","client":"Acme","owner":"Ola","tags":["web"]}"#;
        let project: Project = serde_json::from_str(json).unwrap();

        assert_eq!(project.extra["owner"], "Ola");
        assert!(project.budget.is_none());

        let back: Value = serde_json::to_value(&project).unwrap();
        assert_eq!(back, serde_json::from_str::<Value>(json).unwrap());
    }

    #[test]
    fn test_budget_accepts_numbers() {
        let json = r#"{"id":"101","name":"Redesign","client":"Acme","budget":{"used":25000,"total":50000}}"#;
        let project: Project = serde_json::from_str(json).unwrap();

        assert_eq!(
            project.budget,
            Some(BudgetEntry::new(dec!(25000), dec!(50000)))
        );
    }

    #[test]
    fn test_merged_budget_round_trips_as_numbers() {
        let projects: Vec<Project> =
            serde_json::from_str(r#"[{"id":"101","name":"Redesign","client":"Acme"}]"#).unwrap();
        let budgets: crate::budget::BudgetMap =
            [("101".to_string(), BudgetEntry::new(dec!(25000), dec!(50000)))].into();

        let merged = crate::budget::BudgetMerger::update_project_budgets(projects, &budgets);

        assert_eq!(
            serde_json::to_string(&merged).unwrap(),
            r#"[{"id":"101","name":"Redesign","client":"Acme","budget":{"used":25000,"total":50000}}]"#
        );
    }

    #[test]
    fn test_typed_fields_use_camel_case() {
        let json = r#"{"id":"1","name":"n","client":"c","status":"on_hold","completedTasks":3,"totalTasks":4,"dueDate":"2026-01-31"}"#;
        let project: Project = serde_json::from_str(json).unwrap();

        assert_eq!(project.status, Some(ProjectStatus::OnHold));
        assert_eq!(project.completed_tasks, Some(3));
        assert_eq!(project.total_tasks, Some(4));
        assert!(project.extra.is_empty());
    }

    #[test]
    fn test_is_overdue() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let past = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();

        let active = Project::new("1", "a", "c")
            .with_status(ProjectStatus::Active)
            .with_due_date(past);
        assert!(active.is_overdue(today));

        let done = active.clone().with_status(ProjectStatus::Completed);
        assert!(!done.is_overdue(today));

        assert!(!Project::new("2", "b", "c").is_overdue(today));
        assert!(!active.is_overdue(past));
    }
}
