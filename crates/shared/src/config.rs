//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::Currency;

/// Application configuration.
///
/// Every section is defaulted, so an empty configuration is valid.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Notification store configuration.
    #[serde(default)]
    pub notifications: NotificationConfig,
    /// Budget import/export configuration.
    #[serde(default)]
    pub budget: BudgetConfig,
    /// Dashboard thresholds.
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Notification store configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationConfig {
    /// Maximum number of notifications kept in a store.
    #[serde(default = "default_notification_limit")]
    pub limit: usize,
}

fn default_notification_limit() -> usize {
    5
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            limit: default_notification_limit(),
        }
    }
}

/// Budget import/export configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BudgetConfig {
    /// Currency written to the budget template and exports.
    #[serde(default = "default_currency")]
    pub currency: Currency,
}

fn default_currency() -> Currency {
    Currency::Pln
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

/// Dashboard thresholds, all expressed as percentages.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Allocation above this is overallocated.
    #[serde(default = "default_overallocation_threshold")]
    pub overallocation_threshold: Decimal,
    /// Allocation below this is underallocated.
    #[serde(default = "default_underallocation_threshold")]
    pub underallocation_threshold: Decimal,
    /// Budget utilization at or above this flags the project as at risk.
    #[serde(default = "default_budget_warning_percent")]
    pub budget_warning_percent: Decimal,
}

fn default_overallocation_threshold() -> Decimal {
    Decimal::ONE_HUNDRED
}

fn default_underallocation_threshold() -> Decimal {
    Decimal::from(50)
}

fn default_budget_warning_percent() -> Decimal {
    Decimal::from(90)
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            overallocation_threshold: default_overallocation_threshold(),
            underallocation_threshold: default_underallocation_threshold(),
            budget_warning_percent: default_budget_warning_percent(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("PULSE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.notifications.limit, 5);
        assert_eq!(config.budget.currency, Currency::Pln);
        assert_eq!(config.dashboard.overallocation_threshold, dec!(100));
        assert_eq!(config.dashboard.underallocation_threshold, dec!(50));
        assert_eq!(config.dashboard.budget_warning_percent, dec!(90));
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.notifications.limit, 5);
        assert_eq!(config.budget.currency, Currency::Pln);
    }

    #[test]
    fn test_partial_sections() {
        let config: AppConfig =
            serde_json::from_str(r#"{"notifications": {"limit": 1}, "budget": {"currency": "EUR"}}"#)
                .unwrap();
        assert_eq!(config.notifications.limit, 1);
        assert_eq!(config.budget.currency, Currency::Eur);
        assert_eq!(config.dashboard.budget_warning_percent, dec!(90));
    }

    #[test]
    fn test_load_from_environment() {
        temp_env::with_vars(
            [
                ("RUN_MODE", Some("test-nonexistent")),
                ("PULSE__NOTIFICATIONS__LIMIT", Some("3")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.notifications.limit, 3);
                assert_eq!(config.budget.currency, Currency::Pln);
            },
        );
    }
}
