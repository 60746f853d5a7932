//! Budget data types.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// JSON number encoding for amounts: integral values are written as integers,
/// fractional ones as floats. Numbers and numeric strings are accepted on input.
mod amount {
    use rust_decimal::Decimal;
    use rust_decimal::prelude::ToPrimitive;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        if value.fract().is_zero()
            && let Some(whole) = value.to_i64()
        {
            return serializer.serialize_i64(whole);
        }
        match value.to_f64() {
            Some(float) => serializer.serialize_f64(float),
            None => Err(serde::ser::Error::custom(format!("amount out of range: {value}"))),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        <Decimal as Deserialize>::deserialize(deserializer)
    }
}

/// Budget table keyed by project identifier, project name or client name.
///
/// The key namespace is caller-defined and not type-distinguished.
pub type BudgetMap = HashMap<String, BudgetEntry>;

/// Spend vs. allocation for a project.
///
/// Values are not validated: negative amounts or `used > total` pass through
/// verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetEntry {
    /// Amount spent.
    #[serde(with = "amount")]
    pub used: Decimal,
    /// Amount allocated.
    #[serde(with = "amount")]
    pub total: Decimal,
}

impl BudgetEntry {
    /// Creates a budget entry.
    #[must_use]
    pub const fn new(used: Decimal, total: Decimal) -> Self {
        Self { used, total }
    }

    /// Amount left to spend (`total - used`). Negative when over budget.
    #[must_use]
    pub fn remaining(&self) -> Decimal {
        self.total - self.used
    }

    /// Utilization percentage (used / total * 100), rounded to 2 decimal places.
    ///
    /// Zero when nothing is allocated.
    #[must_use]
    pub fn utilization_percent(&self) -> Decimal {
        if self.total.is_zero() {
            Decimal::ZERO
        } else {
            (self.used / self.total * Decimal::ONE_HUNDRED).round_dp(2)
        }
    }

    /// Returns true if more was spent than allocated.
    #[must_use]
    pub fn is_over_budget(&self) -> bool {
        self.used > self.total
    }
}
