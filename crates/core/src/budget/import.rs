//! Budget CSV import.
//!
//! Reads files in the template layout (see [`super::export`]) into a
//! [`BudgetMap`]. Only `Budget` and `Spent` are read as amounts; `Remaining`,
//! `Percentage spent` and `Currency` are derived columns and ignored.

use std::io::Read;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::error::BudgetCsvError;
use super::types::{BudgetEntry, BudgetMap};

const ID_COLUMN: &str = "ProjectID";
const NAME_COLUMN: &str = "Project";
const TOTAL_COLUMN: &str = "Budget";
const USED_COLUMN: &str = "Spent";

/// Column positions resolved from the header row.
struct Columns {
    id: Option<usize>,
    name: Option<usize>,
    total: usize,
    used: usize,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self, BudgetCsvError> {
        let find = |wanted: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(wanted))
        };
        let require = |wanted: &str| {
            find(wanted).ok_or_else(|| BudgetCsvError::MissingColumn(wanted.to_string()))
        };

        let id = find(ID_COLUMN);
        let name = find(NAME_COLUMN);
        if id.is_none() && name.is_none() {
            return Err(BudgetCsvError::MissingColumn(format!(
                "{ID_COLUMN} or {NAME_COLUMN}"
            )));
        }

        Ok(Self {
            id,
            name,
            total: require(TOTAL_COLUMN)?,
            used: require(USED_COLUMN)?,
        })
    }

    /// The row's key: the project id if present, otherwise the project name.
    fn key<'r>(&self, record: &'r StringRecord) -> Option<&'r str> {
        [self.id, self.name]
            .into_iter()
            .flatten()
            .filter_map(|index| record.get(index))
            .find(|value| !value.is_empty())
    }
}

/// Parses a budget CSV into a budget map.
///
/// Rows are keyed by `ProjectID`, falling back to `Project` when the id cell
/// is empty. Rows with neither are skipped. Later rows override earlier rows
/// with the same key. Blank amount cells count as zero.
pub fn parse_budget_csv<R: Read>(reader: R) -> Result<BudgetMap, BudgetCsvError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let columns = Columns::resolve(reader.headers()?)?;
    let mut budgets = BudgetMap::new();

    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let line = record
            .position()
            .map_or(index as u64 + 2, csv::Position::line);

        let Some(key) = columns.key(&record) else {
            warn!(line, "Budget row has no project id or name, skipping");
            continue;
        };

        let total = parse_amount(&record, columns.total, TOTAL_COLUMN, line)?;
        let used = parse_amount(&record, columns.used, USED_COLUMN, line)?;

        if budgets
            .insert(key.to_string(), BudgetEntry::new(used, total))
            .is_some()
        {
            debug!(line, key, "Duplicate budget key, later row wins");
        }
    }

    debug!(entries = budgets.len(), "Budget CSV parsed");
    Ok(budgets)
}

/// Parses an amount cell. Accepts spaces as thousands separators and a
/// single comma as the decimal separator when no dot is present.
///
/// A comma followed by exactly three digits (`12,500`) could be either a
/// thousands or a decimal separator and is rejected, as is more than one comma.
fn parse_amount(
    record: &StringRecord,
    index: usize,
    column: &str,
    line: u64,
) -> Result<Decimal, BudgetCsvError> {
    let raw = record.get(index).unwrap_or_default();
    let invalid = || BudgetCsvError::InvalidAmount {
        line,
        column: column.to_string(),
        value: raw.to_string(),
    };

    let mut cleaned: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.is_empty() {
        return Ok(Decimal::ZERO);
    }

    if !cleaned.contains('.') && cleaned.contains(',') {
        let mut parts = cleaned.split(',');
        let (Some(_), Some(fraction), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };
        if fraction.len() == 3 && fraction.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        cleaned = cleaned.replace(',', ".");
    }

    Decimal::from_str(&cleaned).map_err(|_| invalid())
}
