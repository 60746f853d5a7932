//! Dashboard data types.

use pulse_shared::types::{Money, ResourceId, RiskId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of projects per lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    /// Planning projects.
    pub planning: usize,
    /// Active projects.
    pub active: usize,
    /// On-hold projects.
    pub on_hold: usize,
    /// Completed projects.
    pub completed: usize,
    /// Cancelled projects.
    pub cancelled: usize,
    /// Projects without a status.
    pub unspecified: usize,
}

/// Portfolio-level budget figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetOverview {
    /// Sum of allocated budgets.
    pub total_budget: Money,
    /// Sum of spent amounts.
    pub total_spent: Money,
    /// Sum of remaining amounts.
    pub total_remaining: Money,
    /// Overall utilization percentage.
    pub utilization_percent: Decimal,
    /// Projects at or above the warning threshold.
    pub at_risk: usize,
    /// Projects that spent more than allocated.
    pub over_budget: usize,
    /// Projects without a budget.
    pub without_budget: usize,
}

/// A project member or other bookable resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    /// Resource ID.
    pub id: ResourceId,
    /// Display name.
    pub name: String,
    /// Role (e.g. "Developer").
    pub role: String,
    /// Hours available per period.
    pub capacity_hours: Decimal,
    /// Hours booked on projects.
    #[serde(default)]
    pub assignments: Vec<Assignment>,
}

/// Hours a resource is booked on a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    /// Project identifier.
    pub project_id: String,
    /// Hours booked.
    pub hours: Decimal,
}

/// Allocation classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationStatus {
    /// Below the underallocation threshold.
    Underallocated,
    /// Between the thresholds.
    Optimal,
    /// Above the overallocation threshold.
    Overallocated,
}

/// Allocation figures for one resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceAllocation {
    /// Resource ID.
    pub resource_id: ResourceId,
    /// Display name.
    pub name: String,
    /// Hours booked across all projects.
    pub allocated_hours: Decimal,
    /// Hours available.
    pub capacity_hours: Decimal,
    /// Allocated / capacity * 100, rounded to 2 dp.
    pub allocation_percent: Decimal,
    /// Classification.
    pub status: AllocationStatus,
}

/// A project risk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Risk {
    /// Risk ID.
    pub id: RiskId,
    /// Project the risk belongs to.
    pub project_id: String,
    /// Short description.
    pub title: String,
    /// Likelihood, 1 (rare) to 5 (almost certain).
    pub probability: u8,
    /// Consequence, 1 (negligible) to 5 (severe).
    pub impact: u8,
}

/// Risk severity band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Score 1-4.
    Low,
    /// Score 5-9.
    Medium,
    /// Score 10-15.
    High,
    /// Score 16-25.
    Critical,
}

impl RiskLevel {
    /// Maps a probability * impact score to its band.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            0..=4 => Self::Low,
            5..=9 => Self::Medium,
            10..=15 => Self::High,
            _ => Self::Critical,
        }
    }
}

/// A risk with its computed score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredRisk {
    /// Risk ID.
    pub id: RiskId,
    /// Project the risk belongs to.
    pub project_id: String,
    /// Short description.
    pub title: String,
    /// Probability * impact.
    pub score: u8,
    /// Severity band.
    pub level: RiskLevel,
}

/// Risk counts per level plus the worst risk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RiskMatrix {
    /// Low risks.
    pub low: usize,
    /// Medium risks.
    pub medium: usize,
    /// High risks.
    pub high: usize,
    /// Critical risks.
    pub critical: usize,
    /// Highest-scoring risk; the first one wins ties.
    pub highest: Option<ScoredRisk>,
}
