//! Message analyzer: persuasion principles plus suspicious keywords

use std::ops::Deref;

use super::category::KeywordCategory;
use super::engine::ScoringEngine;
use super::scoring::{RiskPolicy, Threshold};
use crate::{AnalyzerKind, RiskLevel};

const PRINCIPLE_WEIGHT: u32 = 8;
const SUSPICIOUS_KEYWORD_WEIGHT: u32 = 5;

/// Persuasion principles as (id, label, keywords), in scoring order
const PRINCIPLES: &[(&str, &str, &[&str])] = &[
    (
        "reciprocity",
        "Reciprocity appeal",
        &["free", "gift", "reward", "special offer", "bonus", "complimentary"],
    ),
    (
        "scarcity",
        "Scarcity pressure",
        &["limited time", "last chance", "only few left", "ending soon", "exclusive"],
    ),
    (
        "liking",
        "Liking appeal",
        &["friend", "trusted", "recommended", "like you", "for you", "special"],
    ),
    (
        "social_proof",
        "Social proof",
        &["everyone", "people", "others", "trending", "popular"],
    ),
    (
        "authority",
        "Authority appeal",
        &["expert", "professional", "certified", "official", "verified"],
    ),
];

const SUSPICIOUS_KEYWORDS: &[&str] = &[
    "password", "login", "verify", "account", "security", "update", "click", "link",
];

fn message_categories() -> Vec<KeywordCategory> {
    let mut categories: Vec<KeywordCategory> = PRINCIPLES
        .iter()
        .map(|&(name, label, keywords)| {
            KeywordCategory::keywords(name, label, PRINCIPLE_WEIGHT, keywords)
        })
        .collect();
    // always scored last
    categories.push(KeywordCategory::keywords(
        "suspicious_keywords",
        "Suspicious keywords",
        SUSPICIOUS_KEYWORD_WEIGHT,
        SUSPICIOUS_KEYWORDS,
    ));
    categories
}

fn message_policy() -> RiskPolicy {
    RiskPolicy::new(
        vec![
            Threshold {
                above: 40,
                level: RiskLevel::High,
                recommendation: "🚨 High probability of social engineering attempt",
            },
            Threshold {
                above: 20,
                level: RiskLevel::Medium,
                recommendation: "⚠️ Possible manipulation attempt - be cautious",
            },
        ],
        "✅ Appears legitimate",
    )
}

/// Scores short messages. The score is reported uncapped and never reaches CRITICAL.
#[derive(Debug, Clone)]
pub struct MessageAnalyzer {
    engine: ScoringEngine,
}

impl MessageAnalyzer {
    pub fn new() -> Self {
        Self {
            engine: ScoringEngine::new(
                AnalyzerKind::Message,
                message_categories(),
                message_policy(),
            ),
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

impl Default for MessageAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for MessageAnalyzer {
    type Target = ScoringEngine;

    fn deref(&self) -> &Self::Target {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(text: &str) -> crate::AnalysisResult {
        MessageAnalyzer::new().analyze(text)
    }

    #[test]
    fn test_suspicious_keywords_last() {
        let analyzer = MessageAnalyzer::new();
        let names: Vec<_> = analyzer.categories().iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec![
                "reciprocity",
                "scarcity",
                "liking",
                "social_proof",
                "authority",
                "suspicious_keywords"
            ]
        );

        let r = analyze("click for the bonus");
        let order: Vec<_> = r.matches.iter().map(|m| m.category.as_str()).collect();
        assert_eq!(order, vec!["reciprocity", "suspicious_keywords"]);
    }

    #[test]
    fn test_low_medium_boundary() {
        let twenty = analyze("password login click link");
        assert_eq!(twenty.raw_score, 20);
        assert_eq!(twenty.risk_level, RiskLevel::Low);

        let twenty_one = analyze("expert trending password");
        assert_eq!(twenty_one.raw_score, 21);
        assert_eq!(twenty_one.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn test_medium_high_boundary() {
        let forty = analyze("expert professional certified official trending");
        assert_eq!(forty.raw_score, 40);
        assert_eq!(forty.risk_level, RiskLevel::Medium);
        assert_eq!(forty.recommendation, "⚠️ Possible manipulation attempt - be cautious");

        let forty_one = analyze("expert trending password login click link update");
        assert_eq!(forty_one.raw_score, 41);
        assert_eq!(forty_one.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_score_not_capped() {
        let all: Vec<&str> = PRINCIPLES
            .iter()
            .flat_map(|(_, _, kws)| kws.iter().copied())
            .chain(SUSPICIOUS_KEYWORDS.iter().copied())
            .collect();
        let r = analyze(&all.join(" | "));
        assert_eq!(r.raw_score, 27 * 8 + 8 * 5);
        assert_eq!(r.score, r.raw_score);
        assert!(r.score > 100);
        assert_eq!(r.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_phrase_and_word_both_hit() {
        // "special offer" also contains the liking keyword "special"
        let r = analyze("special offer");
        assert_eq!(r.category("reciprocity").unwrap().keywords, vec!["special offer"]);
        assert_eq!(r.category("liking").unwrap().keywords, vec!["special"]);
        assert_eq!(r.raw_score, 16);
    }

    #[test]
    fn test_never_critical() {
        let r = analyze(&"free gift bonus expert certified password ".repeat(10));
        assert_eq!(r.risk_level, RiskLevel::High);
    }
}
