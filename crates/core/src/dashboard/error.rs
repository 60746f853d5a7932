//! Dashboard error types.

use pulse_shared::AppError;
use pulse_shared::types::{ResourceId, RiskId};
use thiserror::Error;

/// Risk scoring errors.
#[derive(Debug, Error)]
pub enum RiskError {
    /// Probability or impact outside 1..=5.
    #[error("Risk {risk_id}: {field} must be between 1 and 5, got {value}")]
    OutOfRange {
        /// Offending risk.
        risk_id: RiskId,
        /// "probability" or "impact".
        field: &'static str,
        /// Value supplied.
        value: u8,
    },
}

/// Resource allocation errors.
#[derive(Debug, Error)]
pub enum AllocationError {
    /// Capacity is zero or negative, so no percentage exists.
    #[error("Resource {0} has no capacity")]
    ZeroCapacity(ResourceId),

    /// An assignment has negative hours.
    #[error("Resource {resource_id}: negative hours assigned to project {project_id}")]
    NegativeHours {
        /// Resource holding the assignment.
        resource_id: ResourceId,
        /// Project of the assignment.
        project_id: String,
    },
}

impl From<RiskError> for AppError {
    fn from(err: RiskError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<AllocationError> for AppError {
    fn from(err: AllocationError) -> Self {
        Self::Validation(err.to_string())
    }
}
