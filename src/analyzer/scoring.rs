//! Risk tiers: thresholds, score cap and recommendations

use crate::RiskLevel;

/// One tier rule: a raw score strictly above `above` lands in `level`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threshold {
    pub above: u32,
    pub level: RiskLevel,
    pub recommendation: &'static str,
}

/// Maps a raw score to a tier and a reported score
#[derive(Debug, Clone)]
pub struct RiskPolicy {
    /// Checked in order; first match wins, so keep them highest first
    thresholds: Vec<Threshold>,
    /// Recommendation when no threshold is exceeded (tier LOW)
    low_recommendation: &'static str,
    /// Cap applied to the reported score after tiering
    ceiling: Option<u32>,
}

impl RiskPolicy {
    pub fn new(mut thresholds: Vec<Threshold>, low_recommendation: &'static str) -> Self {
        thresholds.sort_by(|a, b| b.above.cmp(&a.above));
        Self {
            thresholds,
            low_recommendation,
            ceiling: None,
        }
    }

    /// Cap the reported score. The tier is still decided on the raw score.
    pub fn with_ceiling(mut self, ceiling: u32) -> Self {
        self.ceiling = Some(ceiling);
        self
    }

    /// Tier and recommendation for a raw (uncapped) score
    pub fn classify(&self, raw_score: u32) -> (RiskLevel, &'static str) {
        self.thresholds
            .iter()
            .find(|t| raw_score > t.above)
            .map(|t| (t.level, t.recommendation))
            .unwrap_or((RiskLevel::Low, self.low_recommendation))
    }

    /// Score as reported to callers
    pub fn reported_score(&self, raw_score: u32) -> u32 {
        match self.ceiling {
            Some(ceiling) => raw_score.min(ceiling),
            None => raw_score,
        }
    }

    pub fn ceiling(&self) -> Option<u32> {
        self.ceiling
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> RiskPolicy {
        RiskPolicy::new(
            vec![
                Threshold {
                    above: 20,
                    level: RiskLevel::Medium,
                    recommendation: "medium",
                },
                Threshold {
                    above: 40,
                    level: RiskLevel::High,
                    recommendation: "high",
                },
            ],
            "low",
        )
    }

    #[test]
    fn test_thresholds_are_strict() {
        let p = policy();
        assert_eq!(p.classify(20).0, RiskLevel::Low);
        assert_eq!(p.classify(21).0, RiskLevel::Medium);
        assert_eq!(p.classify(40).0, RiskLevel::Medium);
        assert_eq!(p.classify(41), (RiskLevel::High, "high"));
    }

    #[test]
    fn test_threshold_order_does_not_matter() {
        // policy() declares them lowest first
        assert_eq!(policy().classify(1000).0, RiskLevel::High);
    }

    #[test]
    fn test_zero_is_low() {
        assert_eq!(policy().classify(0), (RiskLevel::Low, "low"));
    }

    #[test]
    fn test_ceiling() {
        let p = policy().with_ceiling(100);
        assert_eq!(p.reported_score(250), 100);
        assert_eq!(p.reported_score(99), 99);
        assert_eq!(policy().reported_score(250), 250);
    }
}
