//! Trigger categories and the matching done for each

use crate::TriggerMatch;
use regex::Regex;

/// How a category finds hits in lowercased text
#[derive(Debug, Clone)]
pub enum Detector {
    /// Literal lowercase phrases; a phrase hits once if it appears anywhere as a
    /// substring (no word boundaries, so "support" also hits in "unsupported")
    Keywords(Vec<String>),
    /// Regex patterns applied in order; every non-overlapping match is a hit,
    /// and a span matched by two patterns counts under both
    Patterns(Vec<Regex>),
}

/// A named group of triggers sharing one per-hit weight
#[derive(Debug, Clone)]
pub struct KeywordCategory {
    /// Machine id, e.g. "urgency"
    pub name: &'static str,
    /// Red-flag label, e.g. "Urgency language"
    pub label: &'static str,
    /// Noun used when counting hits in the red flag ("triggers", "links")
    pub unit: &'static str,
    /// Points added per hit
    pub weight: u32,
    pub detector: Detector,
}

impl KeywordCategory {
    /// Build a keyword-list category
    pub fn keywords(name: &'static str, label: &'static str, weight: u32, keywords: &[&str]) -> Self {
        Self {
            name,
            label,
            unit: "triggers",
            weight,
            detector: Detector::Keywords(keywords.iter().map(|k| k.to_lowercase()).collect()),
        }
    }

    /// Build a regex-pattern category
    pub fn patterns(
        name: &'static str,
        label: &'static str,
        unit: &'static str,
        weight: u32,
        patterns: Vec<Regex>,
    ) -> Self {
        Self {
            name,
            label,
            unit,
            weight,
            detector: Detector::Patterns(patterns),
        }
    }

    /// True if extra keywords can be appended to this category
    pub fn is_keyword_based(&self) -> bool {
        matches!(self.detector, Detector::Keywords(_))
    }

    /// Append keywords, skipping blanks and ones already present. No-op for pattern categories.
    pub fn extend_keywords<I, S>(&mut self, extra: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if let Detector::Keywords(ref mut list) = self.detector {
            for kw in extra {
                let kw = kw.as_ref().trim().to_lowercase();
                if !kw.is_empty() && !list.contains(&kw) {
                    list.push(kw);
                }
            }
        }
    }

    /// Collect hits in already-lowercased text. Returns None when nothing hit.
    pub fn find(&self, lowered: &str) -> Option<TriggerMatch> {
        let keywords: Vec<String> = match &self.detector {
            Detector::Keywords(list) => list
                .iter()
                .filter(|kw| lowered.contains(kw.as_str()))
                .cloned()
                .collect(),
            Detector::Patterns(patterns) => patterns
                .iter()
                .flat_map(|re| re.find_iter(lowered).map(|m| m.as_str().to_string()))
                .collect(),
        };

        if keywords.is_empty() {
            return None;
        }

        Some(TriggerMatch {
            category: self.name.to_string(),
            count: keywords.len(),
            keywords,
        })
    }

    /// Red-flag line for a match of this category
    pub fn red_flag(&self, count: usize) -> String {
        format!("{} detected ({} {})", self.label, count, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls() -> KeywordCategory {
        KeywordCategory::patterns(
            "suspicious_urls",
            "Suspicious URLs",
            "links",
            15,
            vec![
                Regex::new(r"https://[^\s]+").unwrap(),
                Regex::new(r"bit\.ly/\w+").unwrap(),
            ],
        )
    }

    #[test]
    fn test_keyword_order_follows_declaration() {
        let cat = KeywordCategory::keywords("urgency", "Urgency language", 10, &["urgent", "asap"]);
        let m = cat.find("asap please, this is urgent").unwrap();
        assert_eq!(m.keywords, vec!["urgent", "asap"]);
        assert_eq!(m.count, 2);
    }

    #[test]
    fn test_keyword_counts_once_per_phrase() {
        let cat = KeywordCategory::keywords("urgency", "Urgency language", 10, &["urgent"]);
        let m = cat.find("urgent urgent urgent").unwrap();
        assert_eq!(m.count, 1);
    }

    #[test]
    fn test_keyword_matches_mid_word() {
        let cat = KeywordCategory::keywords("authority", "Authority appeal", 8, &["support"]);
        assert!(cat.find("this browser is unsupported").is_some());
    }

    #[test]
    fn test_no_hits_is_none() {
        let cat = KeywordCategory::keywords("fear", "Fear-based manipulation", 12, &["hacked"]);
        assert!(cat.find("all good here").is_none());
    }

    #[test]
    fn test_pattern_double_counts_overlap() {
        let m = urls().find("go to https://bit.ly/abc now").unwrap();
        assert_eq!(m.keywords, vec!["https://bit.ly/abc", "bit.ly/abc"]);
        assert_eq!(m.count, 2);
    }

    #[test]
    fn test_pattern_counts_each_occurrence() {
        let m = urls().find("https://a.example and https://a.example").unwrap();
        assert_eq!(m.count, 2);
    }

    #[test]
    fn test_extend_keywords_dedups_and_lowercases() {
        let mut cat = KeywordCategory::keywords("fear", "Fear-based manipulation", 12, &["hacked"]);
        cat.extend_keywords(["HACKED", "  ", "Wire Transfer"]);
        match &cat.detector {
            Detector::Keywords(list) => assert_eq!(list, &vec!["hacked", "wire transfer"]),
            Detector::Patterns(_) => panic!("expected keywords"),
        }
    }

    #[test]
    fn test_extend_keywords_ignored_for_patterns() {
        let mut cat = urls();
        cat.extend_keywords(["evil.example"]);
        assert!(!cat.is_keyword_based());
        assert!(cat.find("evil.example").is_none());
    }

    #[test]
    fn test_red_flag_format() {
        let cat = KeywordCategory::keywords("urgency", "Urgency language", 10, &["urgent"]);
        assert_eq!(cat.red_flag(3), "Urgency language detected (3 triggers)");
        assert_eq!(urls().red_flag(1), "Suspicious URLs detected (1 links)");
    }
}
