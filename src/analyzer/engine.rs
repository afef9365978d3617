//! Scoring engine shared by the email and message analyzers

use crate::error::AnalyzeError;
use crate::{AnalysisResult, AnalyzerKind};
use rayon::prelude::*;
use std::collections::HashMap;
use tracing::debug;

use super::category::KeywordCategory;
use super::scoring::RiskPolicy;

/// Scores text against an ordered category table
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    kind: AnalyzerKind,
    categories: Vec<KeywordCategory>,
    policy: RiskPolicy,
}

impl ScoringEngine {
    /// Create an engine over a fixed category table
    pub fn new(kind: AnalyzerKind, categories: Vec<KeywordCategory>, policy: RiskPolicy) -> Self {
        Self {
            kind,
            categories,
            policy,
        }
    }

    /// Append extra keywords to named keyword categories.
    ///
    /// Fails before applying anything if a name is unknown or refers to a
    /// pattern category.
    pub fn with_extra_keywords(
        mut self,
        extra: &HashMap<String, Vec<String>>,
    ) -> Result<Self, AnalyzeError> {
        for name in extra.keys() {
            let known = self
                .categories
                .iter()
                .any(|c| c.name == name.as_str() && c.is_keyword_based());
            if !known {
                return Err(AnalyzeError::UnknownCategory {
                    analyzer: self.kind,
                    category: name.clone(),
                });
            }
        }

        for category in &mut self.categories {
            if let Some(keywords) = extra.get(category.name) {
                category.extend_keywords(keywords);
            }
        }
        Ok(self)
    }

    pub fn kind(&self) -> AnalyzerKind {
        self.kind
    }

    pub fn categories(&self) -> &[KeywordCategory] {
        &self.categories
    }

    pub fn policy(&self) -> &RiskPolicy {
        &self.policy
    }

    /// Analyze one text
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let lowered = text.to_lowercase();

        let mut raw_score: u32 = 0;
        let mut red_flags = Vec::new();
        let mut matches = Vec::new();

        for category in &self.categories {
            let Some(hit) = category.find(&lowered) else {
                continue;
            };
            debug!(
                analyzer = %self.kind,
                category = category.name,
                count = hit.count,
                "category matched"
            );
            let hits = u32::try_from(hit.count).unwrap_or(u32::MAX);
            raw_score = raw_score.saturating_add(hits.saturating_mul(category.weight));
            red_flags.push(category.red_flag(hit.count));
            matches.push(hit);
        }

        let (risk_level, recommendation) = self.policy.classify(raw_score);
        let total_trigger_count: usize = matches.iter().map(|m| m.count).sum();

        debug!(
            analyzer = %self.kind,
            raw_score,
            risk = %risk_level,
            triggers = total_trigger_count,
            "analysis complete"
        );

        AnalysisResult {
            analyzer: self.kind,
            score: self.policy.reported_score(raw_score),
            raw_score,
            risk_level,
            recommendation: recommendation.to_string(),
            red_flags,
            matches,
            total_trigger_count,
        }
    }

    /// Analyze raw bytes, rejecting anything that is not UTF-8 text
    pub fn analyze_bytes(&self, bytes: &[u8]) -> Result<AnalysisResult, AnalyzeError> {
        let text = std::str::from_utf8(bytes).map_err(|e| AnalyzeError::InvalidInput {
            reason: format!("input is not valid UTF-8 text ({})", e),
        })?;
        Ok(self.analyze(text))
    }

    /// Analyze many texts independently, preserving order
    pub fn analyze_bulk<S: AsRef<str>>(&self, texts: &[S]) -> Vec<AnalysisResult> {
        texts.iter().map(|t| self.analyze(t.as_ref())).collect()
    }

    /// Same output as [`analyze_bulk`](Self::analyze_bulk), computed on the rayon pool
    pub fn analyze_bulk_parallel<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<AnalysisResult> {
        texts.par_iter().map(|t| self.analyze(t.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::scoring::Threshold;
    use crate::RiskLevel;

    fn engine() -> ScoringEngine {
        ScoringEngine::new(
            AnalyzerKind::Message,
            vec![
                KeywordCategory::keywords("liking", "Liking appeal", 8, &["friend", "special"]),
                KeywordCategory::keywords("suspicious_keywords", "Suspicious keywords", 5, &["click"]),
            ],
            RiskPolicy::new(
                vec![Threshold {
                    above: 10,
                    level: RiskLevel::High,
                    recommendation: "careful",
                }],
                "fine",
            ),
        )
    }

    #[test]
    fn test_empty_text() {
        let r = engine().analyze("");
        assert_eq!(r.score, 0);
        assert_eq!(r.risk_level, RiskLevel::Low);
        assert_eq!(r.recommendation, "fine");
        assert!(r.matches.is_empty());
        assert!(r.red_flags.is_empty());
        assert_eq!(r.total_trigger_count, 0);
    }

    #[test]
    fn test_weighted_sum() {
        let r = engine().analyze("Hey FRIEND, CLICK this");
        assert_eq!(r.raw_score, 13);
        assert_eq!(r.risk_level, RiskLevel::High);
        assert_eq!(r.total_trigger_count, 2);
        assert_eq!(
            r.red_flags,
            vec![
                "Liking appeal detected (1 triggers)",
                "Suspicious keywords detected (1 triggers)"
            ]
        );
    }

    #[test]
    fn test_matches_follow_table_order() {
        let r = engine().analyze("click here, special friend");
        let names: Vec<_> = r.matches.iter().map(|m| m.category.as_str()).collect();
        assert_eq!(names, vec!["liking", "suspicious_keywords"]);
        assert_eq!(r.matches[0].keywords, vec!["friend", "special"]);
    }

    #[test]
    fn test_analyze_bytes_rejects_invalid_utf8() {
        let err = engine().analyze_bytes(&[0x66, 0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, AnalyzeError::InvalidInput { .. }));
    }

    #[test]
    fn test_analyze_bytes_accepts_text() {
        let r = engine().analyze_bytes(b"friend").unwrap();
        assert_eq!(r.raw_score, 8);
    }

    #[test]
    fn test_extra_keywords() {
        let mut extra = HashMap::new();
        extra.insert("liking".to_string(), vec!["Buddy".to_string()]);
        let e = engine().with_extra_keywords(&extra).unwrap();
        assert_eq!(e.analyze("hey buddy").raw_score, 8);
    }

    #[test]
    fn test_extra_keywords_unknown_category() {
        let mut extra = HashMap::new();
        extra.insert("greed".to_string(), vec!["money".to_string()]);
        let err = engine().with_extra_keywords(&extra).unwrap_err();
        assert_eq!(
            err,
            AnalyzeError::UnknownCategory {
                analyzer: AnalyzerKind::Message,
                category: "greed".to_string(),
            }
        );
    }

    #[test]
    fn test_bulk_preserves_order() {
        let e = engine();
        let texts = ["friend", "", "click friend special"];
        let scores: Vec<u32> = e.analyze_bulk(&texts).iter().map(|r| r.raw_score).collect();
        assert_eq!(scores, vec![8, 0, 21]);
        assert_eq!(e.analyze_bulk_parallel(&texts), e.analyze_bulk(&texts));
    }

    #[test]
    fn test_bulk_empty() {
        let texts: Vec<String> = vec![];
        assert!(engine().analyze_bulk(&texts).is_empty());
    }
}
