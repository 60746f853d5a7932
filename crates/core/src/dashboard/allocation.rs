//! Resource allocation.

use std::collections::BTreeMap;

use pulse_shared::DashboardConfig;
use rust_decimal::Decimal;

use super::error::AllocationError;
use super::types::{AllocationStatus, Resource, ResourceAllocation};

/// Computes how much of each resource's capacity is booked.
pub struct AllocationService;

impl AllocationService {
    /// Allocation figures for one resource.
    ///
    /// # Errors
    ///
    /// Returns `AllocationError::ZeroCapacity` if the resource has no capacity.
    /// Returns `AllocationError::NegativeHours` if an assignment is negative.
    pub fn allocate(
        resource: &Resource,
        config: &DashboardConfig,
    ) -> Result<ResourceAllocation, AllocationError> {
        if resource.capacity_hours <= Decimal::ZERO {
            return Err(AllocationError::ZeroCapacity(resource.id));
        }

        if let Some(bad) = resource
            .assignments
            .iter()
            .find(|a| a.hours < Decimal::ZERO)
        {
            return Err(AllocationError::NegativeHours {
                resource_id: resource.id,
                project_id: bad.project_id.clone(),
            });
        }

        let allocated_hours: Decimal = resource.assignments.iter().map(|a| a.hours).sum();
        let allocation_percent =
            (allocated_hours / resource.capacity_hours * Decimal::ONE_HUNDRED).round_dp(2);

        Ok(ResourceAllocation {
            resource_id: resource.id,
            name: resource.name.clone(),
            allocated_hours,
            capacity_hours: resource.capacity_hours,
            allocation_percent,
            status: Self::classify(allocation_percent, config),
        })
    }

    /// Allocation figures for a whole team, in input order.
    pub fn allocate_team(
        resources: &[Resource],
        config: &DashboardConfig,
    ) -> Result<Vec<ResourceAllocation>, AllocationError> {
        resources
            .iter()
            .map(|resource| Self::allocate(resource, config))
            .collect()
    }

    /// Classifies an allocation percentage against the configured thresholds.
    ///
    /// Both thresholds are inclusive of the optimal band.
    #[must_use]
    pub fn classify(percent: Decimal, config: &DashboardConfig) -> AllocationStatus {
        if percent > config.overallocation_threshold {
            AllocationStatus::Overallocated
        } else if percent < config.underallocation_threshold {
            AllocationStatus::Underallocated
        } else {
            AllocationStatus::Optimal
        }
    }

    /// Total hours booked per project across all resources.
    #[must_use]
    pub fn hours_by_project(resources: &[Resource]) -> BTreeMap<String, Decimal> {
        let mut hours = BTreeMap::new();
        for assignment in resources.iter().flat_map(|r| &r.assignments) {
            *hours
                .entry(assignment.project_id.clone())
                .or_insert(Decimal::ZERO) += assignment.hours;
        }
        hours
    }
}
