//! JSON reporter for machine-readable output

use super::{Report, Summary};
use crate::RiskLevel;
use serde::Serialize;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Report a single result as JSON
    pub fn report(&self, report: &Report) -> String {
        self.to_json(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Report multiple results as JSON array
    pub fn report_many(&self, reports: &[Report]) -> String {
        self.to_json(&reports).unwrap_or_else(|_| "[]".to_string())
    }

    /// Report with summary
    pub fn report_with_summary(&self, reports: &[Report], summary: &Summary) -> String {
        let output = JsonOutput {
            results: reports,
            summary: JsonSummary {
                texts_analyzed: summary.texts_analyzed,
                average_score: summary.average_score,
                highest_risk_level: summary.highest,
                low: summary.low,
                medium: summary.medium,
                high: summary.high,
                critical: summary.critical,
            },
        };
        self.to_json(&output).unwrap_or_else(|_| "{}".to_string())
    }

    fn to_json<T: Serialize + ?Sized>(&self, value: &T) -> serde_json::Result<String> {
        if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        }
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    results: &'a [Report],
    summary: JsonSummary,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSummary {
    texts_analyzed: usize,
    average_score: u32,
    highest_risk_level: Option<RiskLevel>,
    low: usize,
    medium: usize,
    high: usize,
    critical: usize,
}
