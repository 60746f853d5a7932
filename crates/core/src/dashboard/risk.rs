//! Risk scoring on a 5x5 probability/impact matrix.

use super::error::RiskError;
use super::types::{Risk, RiskLevel, RiskMatrix, ScoredRisk};

const SCALE: std::ops::RangeInclusive<u8> = 1..=5;

/// Scores and aggregates project risks.
pub struct RiskService;

impl RiskService {
    /// Scores a risk as probability * impact.
    ///
    /// # Errors
    ///
    /// Returns `RiskError::OutOfRange` if either input is outside 1..=5.
    pub fn score(risk: &Risk) -> Result<ScoredRisk, RiskError> {
        for (field, value) in [("probability", risk.probability), ("impact", risk.impact)] {
            if !SCALE.contains(&value) {
                return Err(RiskError::OutOfRange {
                    risk_id: risk.id,
                    field,
                    value,
                });
            }
        }

        let score = risk.probability * risk.impact;
        Ok(ScoredRisk {
            id: risk.id,
            project_id: risk.project_id.clone(),
            title: risk.title.clone(),
            score,
            level: RiskLevel::from_score(score),
        })
    }

    /// Counts risks per level and finds the highest-scoring one.
    pub fn matrix(risks: &[Risk]) -> Result<RiskMatrix, RiskError> {
        let mut matrix = RiskMatrix::default();

        for risk in risks {
            let scored = Self::score(risk)?;
            match scored.level {
                RiskLevel::Low => matrix.low += 1,
                RiskLevel::Medium => matrix.medium += 1,
                RiskLevel::High => matrix.high += 1,
                RiskLevel::Critical => matrix.critical += 1,
            }
            if matrix.highest.as_ref().is_none_or(|h| scored.score > h.score) {
                matrix.highest = Some(scored);
            }
        }

        Ok(matrix)
    }

    /// Worst risk level of a project, `None` if it has no risks.
    pub fn project_level(project_id: &str, risks: &[Risk]) -> Result<Option<RiskLevel>, RiskError> {
        let mut worst = None;
        for risk in risks.iter().filter(|r| r.project_id == project_id) {
            let level = Self::score(risk)?.level;
            worst = worst.max(Some(level));
        }
        Ok(worst)
    }
}
