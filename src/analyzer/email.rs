//! Email analyzer: urgency, authority, fear, psychological triggers and links

use std::ops::Deref;
use std::sync::OnceLock;

use regex::Regex;

use super::category::KeywordCategory;
use super::engine::ScoringEngine;
use super::scoring::{RiskPolicy, Threshold};
use crate::{AnalyzerKind, RiskLevel};

/// Reported email scores never exceed this
pub const EMAIL_SCORE_CEILING: u32 = 100;

const URGENCY: &[&str] = &[
    "urgent",
    "immediately",
    "action required",
    "verify now",
    "asap",
    "quick",
    "instant",
    "right away",
    "emergency",
];

const AUTHORITY: &[&str] = &[
    "security team",
    "admin",
    "management",
    "official",
    "government",
    "authority",
    "support",
    "customer service",
    "security department",
];

const FEAR: &[&str] = &[
    "account suspension",
    "compromised",
    "unauthorized access",
    "security breach",
    "hacked",
    "locked out",
    "suspended",
    "terminated",
    "violation",
];

const PSYCHOLOGICAL: &[&str] = &[
    "free",
    "gift",
    "reward",
    "limited time",
    "exclusive",
    "only you",
    "congratulations",
    "winner",
    "selected",
];

/// Link patterns, in the order they are applied. A shortener link with a
/// scheme (e.g. `https://bit.ly/x`) is hit by two of them and counts twice.
fn url_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        vec![
            Regex::new(r"http://[^\s]+").unwrap(),
            Regex::new(r"https://[^\s]+").unwrap(),
            Regex::new(r"bit\.ly/\w+").unwrap(),
            Regex::new(r"tinyurl\.com/\w+").unwrap(),
        ]
    })
}

fn email_categories() -> Vec<KeywordCategory> {
    vec![
        KeywordCategory::keywords("urgency", "Urgency language", 10, URGENCY),
        KeywordCategory::keywords("authority", "Authority appeal", 8, AUTHORITY),
        KeywordCategory::keywords("fear", "Fear-based manipulation", 12, FEAR),
        KeywordCategory::keywords("psychological", "Psychological triggers", 6, PSYCHOLOGICAL),
        KeywordCategory::patterns(
            "suspicious_urls",
            "Suspicious URLs",
            "links",
            15,
            url_patterns().to_vec(),
        ),
    ]
}

fn email_policy() -> RiskPolicy {
    RiskPolicy::new(
        vec![
            Threshold {
                above: 60,
                level: RiskLevel::Critical,
                recommendation: "🚨 CRITICAL: High probability of phishing/social engineering attack",
            },
            Threshold {
                above: 40,
                level: RiskLevel::High,
                recommendation: "🚨 HIGH: Likely social engineering attempt - investigate immediately",
            },
            Threshold {
                above: 25,
                level: RiskLevel::Medium,
                recommendation: "⚠️ MEDIUM: Suspicious elements detected - review carefully",
            },
        ],
        "✅ LOW: Appears legitimate",
    )
    .with_ceiling(EMAIL_SCORE_CEILING)
}

/// Scores email bodies. Reported score is capped at 100; the tier uses the raw sum.
#[derive(Debug, Clone)]
pub struct EmailAnalyzer {
    engine: ScoringEngine,
}

impl EmailAnalyzer {
    pub fn new() -> Self {
        Self {
            engine: ScoringEngine::new(AnalyzerKind::Email, email_categories(), email_policy()),
        }
    }

    /// Wrap an engine that was customized (e.g. with extra keywords)
    pub fn from_engine(engine: ScoringEngine) -> Self {
        Self { engine }
    }

    pub fn into_engine(self) -> ScoringEngine {
        self.engine
    }
}

impl Default for EmailAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for EmailAnalyzer {
    type Target = ScoringEngine;

    fn deref(&self) -> &Self::Target {
        &self.engine
    }
}
