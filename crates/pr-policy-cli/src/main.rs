//! Pull Request Policy - Entry Point
//!
//! ## Exit status
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | No blocking finding |
//! | 1 | At least one blocking finding was reported |
//! | 2 | The check could not run (configuration, provider, malformed snapshot) |

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use pr_policy::logging::init_logging;
use pr_policy::{
    ConfigLoader, ConsoleSink, CountingSink, FileSnapshotProvider, GithubAnnotationSink,
    GithubSnapshotProvider, PolicyChecker, PolicyConfig, PolicyReport, RepoSlug, ReportSink,
    Reporter, SnapshotProvider,
};
use tracing::info;

/// Command line interface for pull request policy checks
#[derive(Parser, Debug)]
#[command(name = "pr-policy")]
#[command(about = "Pull request metadata policy checks for CI")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (defaults to ./.pr-policy.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate a pull request against the policy
    Check(CheckArgs),
    /// List the enabled rules in evaluation order
    Rules,
    /// Print the effective configuration as TOML
    Config,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// JSON snapshot file with body, modified_files and base_ref
    #[arg(long, conflicts_with_all = ["repo", "pr"], required_unless_present = "repo")]
    pub snapshot: Option<PathBuf>,

    /// GitHub repository in owner/name form
    #[arg(long, requires = "pr", value_parser = parse_repo)]
    pub repo: Option<RepoSlug>,

    /// Pull request number
    #[arg(long, requires = "repo")]
    pub pr: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `WARN:` / `FAIL:` lines
    Text,
    /// GitHub Actions `::warning::` / `::error::` annotations
    Github,
    /// Human-readable report with summary and status
    Report,
    /// Full JSON report
    Json,
    /// Markdown job summary
    Markdown,
}

/// Result of a completed run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Passed,
    Failed,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Passed => ExitCode::SUCCESS,
            Status::Failed => ExitCode::from(1),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err:#}");
            return ExitCode::from(2);
        }
    };
    if let Err(err) = init_logging(&config.logging) {
        eprintln!("error: {err}");
        return ExitCode::from(2);
    }

    let stdout = std::io::stdout();
    match run(&cli, &config, &mut stdout.lock()).await {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<PolicyConfig> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    Ok(loader.load()?)
}

/// Dispatch the parsed command, writing reports to `out`
pub async fn run(
    cli: &Cli,
    config: &PolicyConfig,
    out: &mut dyn Write,
) -> anyhow::Result<Status> {
    match &cli.command {
        Command::Check(args) => check(args, config, out).await,
        Command::Rules => {
            let checker = PolicyChecker::from_config(config)?;
            for rule in checker.rules().iter() {
                writeln!(out, "{:<12} {}", rule.name(), rule.category())?;
            }
            Ok(Status::Passed)
        }
        Command::Config => {
            write!(out, "{}", ConfigLoader::to_toml(config)?)?;
            Ok(Status::Passed)
        }
    }
}

async fn check(
    args: &CheckArgs,
    config: &PolicyConfig,
    out: &mut dyn Write,
) -> anyhow::Result<Status> {
    let provider = snapshot_provider(args, config)?;
    let snapshot = provider.snapshot().await?;
    info!(
        provider = provider.provider_name(),
        base_ref = %snapshot.base_ref,
        "Snapshot ready"
    );

    let checker = PolicyChecker::from_config(config)?;
    let passed = match args.format {
        OutputFormat::Text => stream(&checker, &snapshot, ConsoleSink::new(&mut *out))?,
        OutputFormat::Github => {
            stream(&checker, &snapshot, GithubAnnotationSink::new(&mut *out))?
        }
        OutputFormat::Report | OutputFormat::Json | OutputFormat::Markdown => {
            let findings = checker.findings(&snapshot)?;
            let report = PolicyReport::new(&snapshot, &findings);
            let rendered = match args.format {
                OutputFormat::Json => Reporter::to_json(&report)?,
                OutputFormat::Markdown => Reporter::to_ci_summary(&report),
                OutputFormat::Report | OutputFormat::Text | OutputFormat::Github => {
                    Reporter::to_human_readable(&report)
                }
            };
            writeln!(out, "{rendered}")?;
            report.summary.passed
        }
    };

    Ok(if passed { Status::Passed } else { Status::Failed })
}

fn stream<S: ReportSink>(
    checker: &PolicyChecker,
    snapshot: &pr_policy::PullRequestSnapshot,
    sink: S,
) -> anyhow::Result<bool> {
    let mut sink = CountingSink::new(sink);
    checker.evaluate(snapshot, &mut sink)?;
    Ok(sink.failures() == 0)
}

fn parse_repo(raw: &str) -> Result<RepoSlug, String> {
    RepoSlug::parse(raw).map_err(|e| e.to_string())
}

fn snapshot_provider(
    args: &CheckArgs,
    config: &PolicyConfig,
) -> anyhow::Result<Box<dyn SnapshotProvider>> {
    match (&args.snapshot, &args.repo, args.pr) {
        (Some(path), _, _) => Ok(Box::new(FileSnapshotProvider::new(path))),
        (None, Some(repo), Some(number)) => Ok(Box::new(GithubSnapshotProvider::from_config(
            &config.github,
            repo.clone(),
            number,
        )?)),
        _ => anyhow::bail!("either --snapshot or --repo with --pr is required"),
    }
}
