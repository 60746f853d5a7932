//! Command parsing and execution.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use pulse_core::budget::{
    BudgetMerger, budget_template_csv, export_budgets_csv, parse_budget_csv,
};
use pulse_core::dashboard::PortfolioSummary;
use pulse_core::notification::{NotificationBridge, ToastRequest};
use pulse_core::project::Project;
use pulse_shared::{AppConfig, AppError, AppResult};
use tracing::{debug, info};

/// Budget and dashboard tools for Pulse.
#[derive(Debug, Parser)]
#[command(name = "pulse")]
#[command(about = "Pulse - project budget and dashboard tools")]
#[command(version)]
pub struct Cli {
    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Write the budget CSV template
    Template {
        /// Output file (default: stdout)
        out: Option<PathBuf>,
    },

    /// Apply a budget CSV to a project list and print the result as JSON
    Merge {
        /// Projects JSON file
        projects: PathBuf,

        /// Budget CSV file
        budgets: PathBuf,
    },

    /// Export project budgets as CSV
    Export {
        /// Projects JSON file
        projects: PathBuf,
    },

    /// Print the portfolio summary as JSON
    Summary {
        /// Projects JSON file
        projects: PathBuf,
    },
}

impl Command {
    /// Runs the command, reporting outcomes through `bridge`.
    pub fn run(self, config: &AppConfig, bridge: &NotificationBridge) -> AppResult<()> {
        debug!(command = ?self, "Running command");

        match self {
            Self::Template { out } => {
                let csv = budget_template_csv(config.budget.currency)?;
                match out {
                    Some(path) => {
                        fs::write(&path, csv)
                            .map_err(|e| AppError::Export(format!("{}: {e}", path.display())))?;
                        bridge.notify(
                            ToastRequest::success("Template saved")
                                .description(path.display().to_string()),
                        );
                    }
                    None => print!("{csv}"),
                }
            }
            Self::Merge { projects, budgets } => {
                let projects = read_projects(&projects)?;
                let file = fs::File::open(&budgets)
                    .map_err(|e| AppError::NotFound(format!("{}: {e}", budgets.display())))?;
                let budget_map = parse_budget_csv(file)?;

                let total = projects.len();
                let merged = BudgetMerger::update_project_budgets(projects, &budget_map);
                info!(projects = total, entries = budget_map.len(), "Budgets merged");

                println!("{}", to_json(&merged)?);
                bridge.notify(
                    ToastRequest::success("Budgets imported")
                        .description(format!("{} budget rows applied to {total} projects", budget_map.len())),
                );
            }
            Self::Export { projects } => {
                let projects = read_projects(&projects)?;
                print!("{}", export_budgets_csv(&projects, config.budget.currency)?);
                let exported = projects.iter().filter(|p| p.budget.is_some()).count();
                bridge.notify(
                    ToastRequest::success("Budgets exported")
                        .description(format!("{exported} of {} projects", projects.len())),
                );
            }
            Self::Summary { projects } => {
                let projects = read_projects(&projects)?;
                let today = chrono::Local::now().date_naive();
                let summary = PortfolioSummary::from_projects(
                    &projects,
                    config.budget.currency,
                    &config.dashboard,
                    today,
                );
                println!("{}", to_json(&summary)?);
                if summary.budget.over_budget > 0 {
                    bridge.notify(
                        ToastRequest::destructive("Over budget")
                            .description(format!("{} projects spent more than allocated", summary.budget.over_budget)),
                    );
                }
            }
        }

        Ok(())
    }
}

fn read_projects(path: &Path) -> AppResult<Vec<Project>> {
    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::NotFound(format!("{}: {e}", path.display())))?;
    serde_json::from_str(&raw)
        .map_err(|e| AppError::Import(format!("{}: {e}", path.display())))
}

fn to_json<T: serde::Serialize>(value: &T) -> AppResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            Cli::try_parse_from(["pulse", "template"]).unwrap().command,
            Command::Template { out: None }
        );
        assert_eq!(
            Cli::try_parse_from(["pulse", "template", "budget.csv"]).unwrap().command,
            Command::Template {
                out: Some(PathBuf::from("budget.csv")),
            }
        );
        assert_eq!(
            Cli::try_parse_from(["pulse", "merge", "p.json", "b.csv"]).unwrap().command,
            Command::Merge {
                projects: PathBuf::from("p.json"),
                budgets: PathBuf::from("b.csv"),
            }
        );
        assert_eq!(
            Cli::try_parse_from(["pulse", "summary", "p.json"]).unwrap().command,
            Command::Summary {
                projects: PathBuf::from("p.json"),
            }
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(Cli::try_parse_from(["pulse", "deploy"]).is_err());
        assert!(Cli::try_parse_from(["pulse"]).is_err());
        assert!(Cli::try_parse_from(["pulse", "merge", "only-one.json"]).is_err());
    }

    #[test]
    fn test_missing_projects_file_is_not_found() {
        let bridge = NotificationBridge::new();
        let err = Command::Export {
            projects: PathBuf::from("/nonexistent/projects.json"),
        }
        .run(&AppConfig::default(), &bridge)
        .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }
}
