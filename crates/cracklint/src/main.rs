//! cracklint - A Java linter for code that can be simplified.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::{ColoredString, Colorize};
use cracklint_config::{ConfigLoader, MergedConfig};
use cracklint_diagnostics::{Diagnostic, Severity};
use cracklint_linter::{EnabledRule, LintResult, RuleRegistry, lint_source};
use cracklint_source_file::{LineIndex, SourceCode};
use cracklint_text_size::Ranged;
use rayon::prelude::*;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "CRACKLINT_LOG";

#[derive(Parser)]
#[command(name = "cracklint")]
#[command(about = "A Java linter for code that can be simplified", long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check files for violations
    Check {
        /// Paths to check
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Path to cracklint.toml
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Path to a .ruleset file
        #[arg(short, long)]
        ruleset: Option<PathBuf>,
    },
    /// List available rules
    Rules {
        /// Path to cracklint.toml
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Path to a .ruleset file
        #[arg(short, long)]
        ruleset: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Check {
            paths,
            config,
            ruleset,
        } => {
            let failed = run_check(&paths, config.as_deref(), ruleset.as_deref())?;
            if failed {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Rules { config, ruleset } => run_rules(config.as_deref(), ruleset.as_deref()),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Run the check command. Returns whether any failing diagnostic was found.
fn run_check(
    paths: &[PathBuf],
    config_path: Option<&Path>,
    ruleset_path: Option<&Path>,
) -> Result<bool> {
    let registry = RuleRegistry::builtin();
    let config = load_config(config_path, ruleset_path)?;
    warn_unknown_rules(&registry, &config);

    let rules = registry.enabled_rules(&config);
    if rules.is_empty() {
        eprintln!("{}", "Warning: No rules enabled".yellow());
    } else {
        let rule_names: Vec<_> = rules.iter().map(|r| r.rule.name()).collect();
        eprintln!(
            "Checking with {} rule(s): {}",
            rule_names.len(),
            rule_names.join(", ")
        );
    }

    let files = collect_java_files(paths);
    info!(files = files.len(), "collected Java files");

    // Results come back in input order.
    let outcomes: Vec<Result<FileOutcome>> =
        files.par_iter().map(|path| check_file(path, &rules)).collect();

    let mut summary = Summary::default();
    for outcome in outcomes {
        let outcome = outcome?;
        summary.files += 1;
        let Some(result) = outcome.result else {
            summary.unparsed += 1;
            continue;
        };
        print_diagnostics(&outcome.path, &outcome.source, &result);
        summary.add(&result);
    }

    summary.print();
    Ok(summary.failures > 0)
}

/// Run the rules command.
fn run_rules(config_path: Option<&Path>, ruleset_path: Option<&Path>) -> Result<()> {
    let registry = RuleRegistry::builtin();
    let config = load_config(config_path, ruleset_path)?;
    warn_unknown_rules(&registry, &config);

    for descriptor in registry.descriptors() {
        let severity = config.effective_severity(
            descriptor.id,
            descriptor.default_severity,
            descriptor.enabled_by_default,
        );
        let status = match severity {
            Some(severity) => colored_severity(severity),
            None => "disabled".dimmed(),
        };
        println!(
            "{} {} ({}) [{}]",
            descriptor.id.bold(),
            descriptor.title,
            descriptor.category,
            status
        );
        println!("    {}", descriptor.help_link().dimmed());
    }

    Ok(())
}

fn load_config(config_path: Option<&Path>, ruleset_path: Option<&Path>) -> Result<MergedConfig> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = config_path {
        loader = loader.cracklint(path);
    }
    if let Some(path) = ruleset_path {
        loader = loader.ruleset(path);
    }
    let root = std::env::current_dir().context("Failed to read current directory")?;
    let config = loader
        .find_cracklint(root)
        .load()
        .context("Failed to load configuration")?;

    for source in &config.sources {
        eprintln!("Loaded config from: {}", source.display());
    }
    Ok(config)
}

fn warn_unknown_rules(registry: &RuleRegistry, config: &MergedConfig) {
    for id in registry.unknown_ids(config) {
        eprintln!("{}: Unknown rule '{}', skipping", "Warning".yellow(), id);
    }
}

fn collect_java_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_file() && path.extension().is_some_and(|e| e == "java") {
            files.push(path.clone());
        } else if path.is_dir() {
            for entry in WalkDir::new(path)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.path().extension().is_some_and(|ext| ext == "java"))
            {
                files.push(entry.path().to_path_buf());
            }
        } else {
            warn!(path = %path.display(), "skipping path that is not a Java file or directory");
        }
    }
    files
}

struct FileOutcome {
    path: PathBuf,
    source: String,
    /// `None` if the file could not be parsed.
    result: Option<LintResult>,
}

fn check_file(path: &Path, rules: &[EnabledRule]) -> Result<FileOutcome> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    debug!(path = %path.display(), "checking file");
    let result = lint_source(&source, rules);
    if result.is_none() {
        eprintln!("{}: Failed to parse", path.display());
    }

    Ok(FileOutcome {
        path: path.to_path_buf(),
        source,
        result,
    })
}

fn print_diagnostics(path: &Path, source: &str, result: &LintResult) {
    let line_index = LineIndex::from_source_text(source);
    let source_code = SourceCode::new(source, &line_index);

    for diagnostic in result.visible() {
        println!("{}", format_diagnostic(path, &source_code, diagnostic));
    }
}

/// `path:line:col: severity [ID] message`
fn format_diagnostic(path: &Path, source_code: &SourceCode, diagnostic: &Diagnostic) -> String {
    let loc = source_code.line_column(diagnostic.start());
    format!(
        "{}:{}:{}: {} {} {}",
        path.display(),
        loc.line.get(),
        loc.column.get(),
        colored_severity(diagnostic.severity),
        format!("[{}]", diagnostic.code()).blue(),
        diagnostic.message()
    )
}

fn colored_severity(severity: Severity) -> ColoredString {
    let label = severity.as_str();
    match severity {
        Severity::Error => label.red().bold(),
        Severity::Warning => label.yellow(),
        Severity::Info => label.cyan(),
        Severity::Hidden => label.dimmed(),
    }
}

#[derive(Debug, Default)]
struct Summary {
    files: usize,
    unparsed: usize,
    reported: usize,
    hidden: usize,
    failures: usize,
    suppressed: usize,
}

impl Summary {
    fn add(&mut self, result: &LintResult) {
        let visible = result.visible().count();
        self.reported += visible;
        self.hidden += result.diagnostics.len() - visible;
        self.failures += result.failures().count();
        self.suppressed += result.suppressed;
    }

    fn print(&self) {
        if self.reported > 0 {
            println!(
                "\nFound {} violation(s) in {} file(s) ({} suppressed, {} hidden)",
                self.reported.to_string().red(),
                self.files,
                self.suppressed,
                self.hidden
            );
        } else {
            println!("{}", "No violations found".green());
        }
        if self.unparsed > 0 {
            eprintln!(
                "{} file(s) could not be parsed",
                self.unparsed.to_string().yellow()
            );
        }
    }
}
