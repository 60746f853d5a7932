//! Shared types, errors, and configuration for Pulse.
//!
//! This crate provides common types used across all other crates:
//! - Money and currency types with decimal precision
//! - Typed IDs for type-safe entity references
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

#[cfg(test)]
mod error_tests;

pub use crate::config::{AppConfig, BudgetConfig, DashboardConfig, NotificationConfig};
pub use error::{AppError, AppResult};
