//! Budget CSV template and export.
//!
//! Both share one layout:
//!
//! ```text
//! ProjectID,Project,Budget,Spent,Remaining,Percentage spent,Currency
//! 101,"Website Redesign, Phase 1",50000,25000,25000,50,PLN
//! ```
//!
//! Names containing commas are quoted, numeric fields never are.

use pulse_shared::types::Currency;
use rust_decimal::Decimal;

use super::error::BudgetCsvError;
use super::types::BudgetEntry;
use crate::project::Project;

/// Header row of budget CSV files.
pub const BUDGET_CSV_HEADERS: [&str; 7] = [
    "ProjectID",
    "Project",
    "Budget",
    "Spent",
    "Remaining",
    "Percentage spent",
    "Currency",
];

/// Example rows written to the template: (id, name, budget, spent).
const TEMPLATE_ROWS: [(&str, &str, i64, i64); 3] = [
    ("101", "Website Redesign, Phase 1", 50_000, 25_000),
    ("102", "Mobile App", 120_000, 30_000),
    ("103", "Data Migration, Finance", 80_000, 80_000),
];

/// Generates the budget import template with example rows.
pub fn budget_template_csv(currency: Currency) -> Result<String, BudgetCsvError> {
    let rows = TEMPLATE_ROWS.into_iter().map(|(id, name, total, used)| {
        (
            id,
            name,
            BudgetEntry::new(Decimal::from(used), Decimal::from(total)),
        )
    });
    write_rows(rows, currency)
}

/// Exports every project that has a budget. Projects without one are skipped.
pub fn export_budgets_csv(projects: &[Project], currency: Currency) -> Result<String, BudgetCsvError> {
    let rows = projects.iter().filter_map(|project| {
        project
            .budget
            .map(|budget| (project.id.as_str(), project.name.as_str(), budget))
    });
    write_rows(rows, currency)
}

fn write_rows<'a>(
    rows: impl Iterator<Item = (&'a str, &'a str, BudgetEntry)>,
    currency: Currency,
) -> Result<String, BudgetCsvError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(BUDGET_CSV_HEADERS)?;

    let currency = currency.to_string();
    for (id, name, budget) in rows {
        let total = budget.total.normalize().to_string();
        let used = budget.used.normalize().to_string();
        let remaining = budget.remaining().normalize().to_string();
        let percent = budget.utilization_percent().normalize().to_string();
        writer.write_record([
            id,
            name,
            total.as_str(),
            used.as_str(),
            remaining.as_str(),
            percent.as_str(),
            currency.as_str(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(String::from_utf8(bytes)?)
}
