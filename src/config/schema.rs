//! Config schema and deserialization

use crate::RiskLevel;
use serde::Deserialize;
use std::collections::HashMap;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored terminal output (default)
    #[default]
    Console,
    /// Machine-readable JSON
    Json,
}

/// Per-analyzer settings
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzerConfig {
    /// Extra keywords appended to existing keyword categories.
    /// Key is the category id (e.g. "urgency", "social_proof").
    #[serde(default)]
    pub extra_keywords: HashMap<String, Vec<String>>,
}

impl AnalyzerConfig {
    /// Base lists come first, this config's keywords are appended after them
    fn merge_from(&mut self, base: AnalyzerConfig) {
        for (category, mut keywords) in base.extra_keywords {
            let entry = self.extra_keywords.entry(category).or_default();
            keywords.append(entry);
            *entry = keywords;
        }
    }
}

/// Root config structure for .lureguardrc.json
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Extend another config file (path relative to this config)
    #[serde(default)]
    pub extends: Option<String>,

    /// Exit 1 when any result is at or above this risk level
    #[serde(default)]
    pub fail_on: Option<RiskLevel>,

    /// Output format when no CLI flag picks one
    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// Glob patterns for files to skip when walking directories
    #[serde(default)]
    pub ignore: Vec<String>,

    #[serde(default)]
    pub email: AnalyzerConfig,

    #[serde(default)]
    pub message: AnalyzerConfig,
}

impl Config {
    /// Merge CLI overrides into config. CLI values take precedence.
    pub fn merge_with_cli(mut self, cli_fail_on: Option<RiskLevel>, cli_json: bool) -> Self {
        if cli_fail_on.is_some() {
            self.fail_on = cli_fail_on;
        }
        if cli_json {
            self.format = Some(OutputFormat::Json);
        }
        self
    }

    /// Effective output format
    pub fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    /// Merge another config into this one (for extends)
    pub fn merge_from(&mut self, base: Config) {
        if self.fail_on.is_none() {
            self.fail_on = base.fail_on;
        }
        if self.format.is_none() {
            self.format = base.format;
        }
        if self.extends.is_none() {
            self.extends = base.extends;
        }

        let mut all_ignores = base.ignore;
        all_ignores.append(&mut self.ignore);
        self.ignore = all_ignores;

        self.email.merge_from(base.email);
        self.message.merge_from(base.message);
    }
}
