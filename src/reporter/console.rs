//! Console reporter with colored output

use super::{Report, Summary};
use crate::{AnalyzerKind, RiskLevel};
use colored::Colorize;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to show matched keywords
    verbose: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self {
            use_colors: true,
            verbose: false,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Report a single result
    pub fn report(&self, report: &Report) {
        print!("{}", self.render(report));
    }

    /// Report multiple results with summary
    pub fn report_many(&self, reports: &[Report], summary: &Summary) {
        for report in reports {
            self.report(report);
            println!("{}", "─".repeat(60));
        }
        print!("{}", self.render_summary(summary));
    }

    /// Report in quiet mode (one line per text)
    pub fn report_quiet(&self, report: &Report) {
        println!(
            "{}: {} ({})",
            report.source,
            report.result.score,
            self.colorize_level(report.result.risk_level)
        );
    }

    /// Render a single result to a string
    pub fn render(&self, report: &Report) -> String {
        let result = &report.result;
        let mut out = String::new();

        let (title, score_name) = match result.analyzer {
            AnalyzerKind::Email => ("📧 Email analysis", "Risk score"),
            AnalyzerKind::Message => ("💬 Message analysis", "Confidence score"),
        };
        out.push('\n');
        out.push_str(&self.bold(&format!("{}: {}", title, report.source)));
        out.push_str("\n\n");

        out.push_str(&format!(
            "   {}: {} {}\n",
            score_name,
            self.create_score_bar(result.score),
            self.colorize_level(result.risk_level)
        ));
        if result.raw_score != result.score {
            out.push_str(&format!("   (uncapped {})\n", result.raw_score));
        }
        out.push_str(&format!("   {}\n", result.recommendation));

        if !result.red_flags.is_empty() {
            out.push('\n');
            out.push_str(&format!("   {}\n", self.bold("Red Flags:")));
            for flag in &result.red_flags {
                out.push_str(&format!("   - {}\n", flag));
            }
        }

        if self.verbose && !result.matches.is_empty() {
            out.push('\n');
            out.push_str(&format!("   {}\n", self.bold("Matched Triggers:")));
            for m in &result.matches {
                out.push_str(&format!("   {}: {}\n", m.category, m.keywords.join(", ")));
            }
        }

        out.push('\n');
        out
    }

    /// Render the multi-result summary
    pub fn render_summary(&self, summary: &Summary) -> String {
        let rule = "═".repeat(60);
        let mut out = String::new();
        out.push('\n');
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&self.bold("Summary"));
        out.push('\n');
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&format!("   Texts analyzed: {}\n", summary.texts_analyzed));
        out.push_str(&format!("   Average score:  {}\n", summary.average_score));
        out.push_str(&format!(
            "   By risk level:  {} {} · {} {} · {} {} · {} {}\n",
            self.colorize_level(RiskLevel::Critical),
            summary.critical,
            self.colorize_level(RiskLevel::High),
            summary.high,
            self.colorize_level(RiskLevel::Medium),
            summary.medium,
            self.colorize_level(RiskLevel::Low),
            summary.low,
        ));
        out.push('\n');
        out
    }

    fn bold(&self, s: &str) -> String {
        if self.use_colors {
            s.bold().to_string()
        } else {
            s.to_string()
        }
    }

    fn colorize_level(&self, level: RiskLevel) -> String {
        let s = level.to_string();
        if !self.use_colors {
            return s;
        }
        match level {
            RiskLevel::Low => s.green().to_string(),
            RiskLevel::Medium => s.yellow().to_string(),
            RiskLevel::High => s.red().to_string(),
            RiskLevel::Critical => s.red().bold().to_string(),
        }
    }

    fn create_score_bar(&self, score: u32) -> String {
        let shown = score.min(100) as usize;
        let filled = (shown * 20) / 100;
        let empty = 20 - filled;

        let bar = format!("[{}{}] {:>3}%", "█".repeat(filled), "░".repeat(empty), score);

        if self.use_colors {
            if score > 40 {
                bar.red().to_string()
            } else if score > 20 {
                bar.yellow().to_string()
            } else {
                bar.green().to_string()
            }
        } else {
            bar
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}
