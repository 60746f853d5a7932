//! Core dashboard logic for Pulse.
//!
//! This crate contains pure logic with ZERO filesystem or network dependencies.
//! Everything the dashboard shows is computed here.
//!
//! # Modules
//!
//! - `notification` - Toast notifications and the bridge that routes them
//! - `project` - Project records
//! - `budget` - Budget merging and the budget CSV formats
//! - `dashboard` - Progress, portfolio summary, resource allocation, risk scoring

pub mod budget;
pub mod dashboard;
pub mod notification;
pub mod project;
