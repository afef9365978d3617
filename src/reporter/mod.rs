//! Reporter module for output formatting

pub mod console;
pub mod json;

pub use console::ConsoleReporter;
pub use json::JsonReporter;

use crate::{AnalysisResult, RiskLevel};
use serde::Serialize;

/// An analysis result together with where its text came from
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// File path, "<stdin>", "text #N" or a sample name
    pub source: String,
    #[serde(flatten)]
    pub result: AnalysisResult,
}

impl Report {
    pub fn new(source: impl Into<String>, result: AnalysisResult) -> Self {
        Self {
            source: source.into(),
            result,
        }
    }
}

/// Aggregate statistics over many reports
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Number of texts analyzed
    pub texts_analyzed: usize,
    /// Counts per tier, LOW..CRITICAL
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub critical: usize,
    /// Most severe tier seen (None when nothing was analyzed)
    pub highest: Option<RiskLevel>,
    /// Mean reported score, rounded down
    pub average_score: u32,
}

impl Summary {
    pub fn from_reports(reports: &[Report]) -> Self {
        if reports.is_empty() {
            return Summary::default();
        }

        let mut summary = Summary {
            texts_analyzed: reports.len(),
            ..Summary::default()
        };
        let mut total: u64 = 0;
        for report in reports {
            let level = report.result.risk_level;
            match level {
                RiskLevel::Low => summary.low += 1,
                RiskLevel::Medium => summary.medium += 1,
                RiskLevel::High => summary.high += 1,
                RiskLevel::Critical => summary.critical += 1,
            }
            summary.highest = summary.highest.max(Some(level));
            total += u64::from(report.result.score);
        }
        summary.average_score = u32::try_from(total / reports.len() as u64).unwrap_or(u32::MAX);
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EmailAnalyzer, MessageAnalyzer};

    #[test]
    fn test_summary_empty() {
        assert_eq!(Summary::from_reports(&[]), Summary::default());
    }

    #[test]
    fn test_summary_counts() {
        let email = EmailAnalyzer::new();
        let message = MessageAnalyzer::new();
        let reports = vec![
            Report::new("a", email.analyze("hello")),
            Report::new("b", email.analyze("urgent immediately asap quick instant emergency")),
            Report::new("c", message.analyze("password login click link expert trending update")),
        ];
        let summary = Summary::from_reports(&reports);
        assert_eq!(summary.texts_analyzed, 3);
        assert_eq!(summary.low, 1);
        assert_eq!(summary.high, 2);
        assert_eq!(summary.critical, 0);
        assert_eq!(summary.highest, Some(RiskLevel::High));
        // (0 + 60 + 41) / 3
        assert_eq!(summary.average_score, 33);
    }
}
