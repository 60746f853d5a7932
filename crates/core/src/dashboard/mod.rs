//! Dashboard figures.
//!
//! This module computes the data behind the dashboard widgets:
//! - Project progress
//! - Portfolio summary (status counts, budget totals)
//! - Resource allocation
//! - Risk scoring

pub mod allocation;
pub mod error;
pub mod progress;
pub mod risk;
pub mod summary;
pub mod types;

pub use allocation::AllocationService;
pub use error::{AllocationError, RiskError};
pub use progress::ProjectProgress;
pub use risk::RiskService;
pub use summary::PortfolioSummary;
pub use types::*;
