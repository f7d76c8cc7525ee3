use std::io::Write;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use content_dupes::config::Config;
use content_dupes::output::Reporter;
use content_dupes::output::json::JsonReporter;
use content_dupes::output::text::TextReporter;

#[derive(Parser)]
#[command(
    name = "content-dupes",
    version,
    about = "Detect duplicated content across text and source files"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to analyze (defaults to current directory).
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    /// Similarity score at or above which a pair is flagged (0.0-1.0).
    #[arg(long, global = true)]
    threshold: Option<f64>,

    /// Output format.
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Exclude patterns (can be repeated).
    #[arg(long, global = true)]
    exclude: Vec<String>,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Show summary statistics only.
    Stats,
    /// Show the full ranked comparison report (default).
    Report,
    /// Show comparisons grouped by content type.
    Groups,
    /// Exit non-zero if more pairs are flagged than allowed.
    Check {
        /// Maximum allowed flagged pairs (exit 1 if exceeded).
        #[arg(long)]
        max_flagged: Option<usize>,
    },
}

fn main() {
    let cli = Cli::parse();

    let root = cli
        .path
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    let mut config = Config::load(&root);

    // Apply CLI overrides
    if let Some(threshold) = cli.threshold {
        config.flag_threshold = threshold;
    }
    if !cli.exclude.is_empty() {
        config.exclude = cli.exclude;
    }

    let result = match content_dupes::analyze(&config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(2);
        }
    };

    for warning in &result.warnings {
        eprintln!("Warning: {warning}");
    }

    let stdout = std::io::stdout();
    let mut writer = stdout.lock();

    let reporter: Box<dyn Reporter> = match cli.format {
        OutputFormat::Text => Box::new(TextReporter::new(config.flag_threshold)),
        OutputFormat::Json => Box::new(JsonReporter::new()),
    };

    match cli.command.unwrap_or(Command::Report) {
        Command::Stats => {
            reporter.report_stats(&result.stats, &mut writer).unwrap();
        }
        Command::Report => {
            reporter.report_stats(&result.stats, &mut writer).unwrap();
            writeln!(writer).unwrap();
            reporter
                .report_comparisons(&result.results, &mut writer)
                .unwrap();
        }
        Command::Groups => {
            reporter.report_groups(&result.groups, &mut writer).unwrap();
        }
        Command::Check { max_flagged } => {
            let max_flagged = max_flagged.or(config.max_flagged).unwrap_or(0);

            reporter.report_stats(&result.stats, &mut writer).unwrap();

            if result.stats.flagged_pairs > max_flagged {
                writeln!(
                    writer,
                    "\nCheck FAILED: {} flagged pairs (max: {})",
                    result.stats.flagged_pairs, max_flagged
                )
                .unwrap();
                reporter
                    .report_comparisons(&result.results, &mut writer)
                    .unwrap();
                process::exit(1);
            }

            writeln!(writer, "\nCheck passed.").unwrap();
        }
    }
}
