//! Lureguard: social-engineering risk scoring CLI

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use globset::GlobSet;
use lureguard::config::{
    build_ignore_set, email_analyzer, is_ignored, load_config, message_analyzer, OutputFormat,
    CONFIG_FILENAME,
};
use lureguard::reporter::{ConsoleReporter, JsonReporter, Report, Summary};
use lureguard::samples::{BENIGN_EMAIL, PHISHING_EMAIL, SUSPICIOUS_MESSAGE};
use lureguard::{AnalysisResult, AnalyzeError, EmailAnalyzer, MessageAnalyzer, RiskLevel, ScoringEngine};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Lureguard: social-engineering risk scoring for emails and short messages
#[derive(Parser, Debug)]
#[command(name = "lureguard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score email bodies (urgency, authority, fear, psychological triggers, links)
    Email(ScanArgs),

    /// Score short messages (persuasion principles, suspicious keywords)
    Message(ScanArgs),

    /// Analyze the built-in sample texts
    Demo {
        /// Output format as JSON
        #[arg(long, short)]
        json: bool,
    },
}

#[derive(Args, Debug)]
struct ScanArgs {
    /// Files or directories to analyze; each file is one text (reads stdin when empty)
    paths: Vec<PathBuf>,

    /// Analyze this text directly (repeatable)
    #[arg(long, short = 't', value_name = "TEXT")]
    text: Vec<String>,

    /// Output format as JSON
    #[arg(long, short)]
    json: bool,

    /// Quiet mode (one line per text)
    #[arg(long, short)]
    quiet: bool,

    /// Verbose output (list matched keywords)
    #[arg(long, short)]
    verbose: bool,

    /// Exit 1 if any text reaches this risk level (low, medium, high, critical)
    #[arg(long, value_name = "LEVEL")]
    fail_on: Option<RiskLevel>,

    /// Path to config file (default: search .lureguardrc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run analysis in parallel (default for more than 10 texts)
    #[arg(long)]
    parallel: bool,

    /// Number of parallel threads (default: number of CPU cores)
    #[arg(long, value_name = "N")]
    jobs: Option<usize>,
}

/// One text to analyze and where it came from
struct Input {
    source: String,
    bytes: Vec<u8>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("lureguard=warn")),
        )
        .init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Email(args) => run_scan(&args, |config| Ok(email_analyzer(config)?.into_engine())),
        Commands::Message(args) => {
            run_scan(&args, |config| Ok(message_analyzer(config)?.into_engine()))
        }
        Commands::Demo { json } => run_demo(json),
    }
}

fn run_scan<F>(args: &ScanArgs, build: F) -> Result<ExitCode>
where
    F: FnOnce(&lureguard::config::Config) -> Result<ScoringEngine>,
{
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let work_dir = match args.paths.first() {
        Some(p) if p.is_dir() => p.clone(),
        Some(p) => p
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.clone()),
        None => cwd.clone(),
    };

    // CLI flags override config file
    let config = load_config(&work_dir, args.config.as_deref())?.merge_with_cli(args.fail_on, args.json);
    let engine = build(&config)?;

    let ignore_set = if config.ignore.is_empty() {
        None
    } else {
        Some(build_ignore_set(&config.ignore)?)
    };

    let (inputs, mut had_errors) = collect_inputs(args, ignore_set.as_ref())?;
    if inputs.is_empty() {
        eprintln!("{}: No texts to analyze", "Warning".yellow());
        return Ok(ExitCode::from(2));
    }

    if let Some(jobs) = args.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .ok();
    }

    let use_parallel = args.parallel || inputs.len() > 10;
    info!(
        analyzer = %engine.kind(),
        texts = inputs.len(),
        parallel = use_parallel,
        "analyzing"
    );

    let outcomes = if use_parallel {
        analyze_parallel(&engine, &inputs)
    } else {
        inputs.iter().map(|i| engine.analyze_bytes(&i.bytes)).collect()
    };

    let mut reports = Vec::with_capacity(inputs.len());
    for (input, outcome) in inputs.into_iter().zip(outcomes) {
        match outcome {
            Ok(result) => reports.push(Report::new(input.source, result)),
            Err(e) => {
                if !args.quiet {
                    eprintln!("{}: Failed to analyze {}: {}", "Error".red(), input.source, e);
                }
                had_errors = true;
            }
        }
    }

    if reports.is_empty() {
        eprintln!("{}: All texts failed to analyze", "Error".red());
        return Ok(ExitCode::from(2));
    }

    let summary = Summary::from_reports(&reports);
    print_reports(&reports, &summary, config.output_format(), args.quiet, args.verbose);

    if let Some(fail_on) = config.fail_on {
        if summary.highest.is_some_and(|level| level >= fail_on) {
            if !args.quiet && config.output_format() == OutputFormat::Console {
                eprintln!(
                    "\n{}: Risk level {} reached (--fail-on {})",
                    "Failed".red().bold(),
                    summary.highest.map(|l| l.to_string()).unwrap_or_default(),
                    fail_on
                );
            }
            return Ok(ExitCode::from(1));
        }
    }

    if had_errors {
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn analyze_parallel(
    engine: &ScoringEngine,
    inputs: &[Input],
) -> Vec<Result<AnalysisResult, AnalyzeError>> {
    use rayon::prelude::*;

    inputs
        .par_iter()
        .map(|input| engine.analyze_bytes(&input.bytes))
        .collect()
}

fn print_reports(
    reports: &[Report],
    summary: &Summary,
    format: OutputFormat,
    quiet: bool,
    verbose: bool,
) {
    match format {
        OutputFormat::Json => {
            let reporter = JsonReporter::new().pretty();
            if reports.len() == 1 {
                println!("{}", reporter.report(&reports[0]));
            } else {
                println!("{}", reporter.report_with_summary(reports, summary));
            }
        }
        OutputFormat::Console if quiet => {
            let reporter = ConsoleReporter::new();
            for report in reports {
                reporter.report_quiet(report);
            }
        }
        OutputFormat::Console => {
            let mut reporter = ConsoleReporter::new();
            if verbose {
                reporter = reporter.verbose();
            }
            if reports.len() == 1 {
                reporter.report(&reports[0]);
            } else {
                reporter.report_many(reports, summary);
            }
        }
    }
}

/// Gather texts from --text, paths and stdin. Unreadable files are reported and skipped.
fn collect_inputs(args: &ScanArgs, ignore_set: Option<&GlobSet>) -> Result<(Vec<Input>, bool)> {
    let mut inputs = Vec::new();
    let mut had_errors = false;

    for (i, text) in args.text.iter().enumerate() {
        inputs.push(Input {
            source: format!("text #{}", i + 1),
            bytes: text.clone().into_bytes(),
        });
    }

    for path in &args.paths {
        if !path.exists() {
            warn!(path = %path.display(), "skipping missing input");
            eprintln!("{}: Failed to read {}: not found", "Error".red(), path.display());
            had_errors = true;
            continue;
        }
        for file in collect_files(path, ignore_set) {
            match std::fs::read(&file) {
                Ok(bytes) => inputs.push(Input {
                    source: file.display().to_string(),
                    bytes,
                }),
                Err(e) => {
                    warn!(path = %file.display(), error = %e, "skipping unreadable input");
                    eprintln!("{}: Failed to read {}: {}", "Error".red(), file.display(), e);
                    had_errors = true;
                }
            }
        }
    }

    if args.text.is_empty() && args.paths.is_empty() {
        let mut bytes = Vec::new();
        std::io::stdin()
            .read_to_end(&mut bytes)
            .context("Failed to read stdin")?;
        inputs.push(Input {
            source: "<stdin>".to_string(),
            bytes,
        });
    }

    Ok((inputs, had_errors))
}

/// Files under a path in name order; a file path is returned as-is
fn collect_files(path: &Path, ignore_set: Option<&GlobSet>) -> Vec<PathBuf> {
    if path.is_file() {
        return vec![path.to_path_buf()];
    }

    WalkDir::new(path)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.file_name().is_some_and(|n| n != CONFIG_FILENAME))
        .filter(|p| {
            let skip = ignore_set.is_some_and(|set| is_ignored(p, set));
            if skip {
                debug!(path = %p.display(), "ignored by config");
            }
            !skip
        })
        .collect()
}

fn run_demo(json: bool) -> Result<ExitCode> {
    let email = EmailAnalyzer::new();
    let message = MessageAnalyzer::new();

    let mut reports: Vec<Report> = ["sample phishing email", "sample benign email"]
        .into_iter()
        .zip(email.analyze_bulk(&[PHISHING_EMAIL, BENIGN_EMAIL]))
        .map(|(source, result)| Report::new(source, result))
        .collect();
    reports.push(Report::new(
        "sample suspicious message",
        message.analyze(SUSPICIOUS_MESSAGE),
    ));

    if json {
        println!("{}", JsonReporter::new().pretty().report_many(&reports));
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Lureguard social engineering demo".bold());
    println!("{}", "═".repeat(60));
    let reporter = ConsoleReporter::new().verbose();
    for report in &reports {
        reporter.report(report);
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_collect_files_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.eml"), "b").unwrap();
        fs::write(dir.path().join("a.eml"), "a").unwrap();
        fs::write(dir.path().join("old.bak"), "x").unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{}").unwrap();

        let set = build_ignore_set(&["**/*.bak".to_string()]).unwrap();
        let files = collect_files(dir.path(), Some(&set));
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.eml", "b.eml"]);
    }

    #[test]
    fn test_collect_files_single_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("one.txt");
        fs::write(&file, "hi").unwrap();
        assert_eq!(collect_files(&file, None), vec![file]);
    }
}
