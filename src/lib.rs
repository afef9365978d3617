//! Lureguard: social-engineering risk scoring for emails and short messages
//!
//! This library matches text against curated keyword tables grouped into
//! psychological-trigger categories and turns weighted hit counts into a
//! score, a risk tier and a recommendation.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod reporter;
pub mod samples;

pub use analyzer::{EmailAnalyzer, MessageAnalyzer, ScoringEngine};
pub use error::AnalyzeError;

use serde::{Deserialize, Serialize};

/// The result of analyzing a single text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Which analyzer produced this result
    pub analyzer: AnalyzerKind,
    /// Reported score (email: capped at 100, message: uncapped)
    pub score: u32,
    /// Weighted sum before any cap; the risk tier is decided on this value
    pub raw_score: u32,
    /// Risk tier
    pub risk_level: RiskLevel,
    /// Human-readable recommendation for the tier
    pub recommendation: String,
    /// One line per matched category, e.g. "Urgency language detected (3 triggers)"
    pub red_flags: Vec<String>,
    /// Matched categories in table order
    pub matches: Vec<TriggerMatch>,
    /// Sum of `count` across all matches
    pub total_trigger_count: usize,
}

impl AnalysisResult {
    /// Look up the match for a category by name
    pub fn category(&self, name: &str) -> Option<&TriggerMatch> {
        self.matches.iter().find(|m| m.category == name)
    }

    /// True when no category matched
    pub fn is_clean(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Hits for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerMatch {
    /// Category id (e.g. "urgency", "social_proof")
    pub category: String,
    /// Matched keywords in declared order, or matched URLs in pattern order
    pub keywords: Vec<String>,
    /// Number of hits
    pub count: usize,
}

/// Risk tier, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    #[serde(alias = "low")]
    Low,
    #[serde(alias = "medium")]
    Medium,
    #[serde(alias = "high")]
    High,
    #[serde(alias = "critical")]
    Critical,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "LOW"),
            RiskLevel::Medium => write!(f, "MEDIUM"),
            RiskLevel::High => write!(f, "HIGH"),
            RiskLevel::Critical => write!(f, "CRITICAL"),
        }
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            "critical" => Ok(RiskLevel::Critical),
            other => Err(format!(
                "unknown risk level '{}' (expected low, medium, high or critical)",
                other
            )),
        }
    }
}

/// Analyzer flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyzerKind {
    Email,
    Message,
}

impl std::fmt::Display for AnalyzerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalyzerKind::Email => write!(f, "email"),
            AnalyzerKind::Message => write!(f, "message"),
        }
    }
}
