//! Project budgets: merging imported budget tables into projects and the
//! CSV formats used to exchange them.

pub mod error;
pub mod export;
pub mod import;
pub mod merge;
pub mod types;


pub use error::BudgetCsvError;
pub use export::{BUDGET_CSV_HEADERS, budget_template_csv, export_budgets_csv};
pub use import::parse_budget_csv;
pub use merge::BudgetMerger;
pub use types::{BudgetEntry, BudgetMap};
