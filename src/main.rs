// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use perf_analysis::utils::logging::{format_success, format_warning};
use perf_analysis::config::DEFAULT_CONFIG_PATH;
use perf_analysis::{
    AnalysisError, Config, GatherPipeline, HottestPipeline, ProgressDisplay, RunStats,
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "perf_analysis")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Aggregate and rank per-run performance profiling CSV exports", long_about = None)]
struct Cli {
    /// Settings file; config/default.toml is used when present
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    /// Do not draw the per-file progress bar
    #[arg(long, action = ArgAction::SetTrue)]
    no_progress: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank methods by the total of a metric column, one method per file
    Hottest {
        /// Folder holding the per-method exports
        folder: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Zero-based column summed per file
        #[arg(long, value_name = "N")]
        metric_column: Option<usize>,
    },

    /// Fold per-run exports into cell-wise max and sum tables
    Gather {
        /// Folder holding the per-run exports
        folder: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    perf_analysis::utils::logging::init_logger(cli.color, cli.verbose);

    let config_path = cli.config.as_deref();
    info!(
        "Loading configuration from: {}",
        config_path.unwrap_or(Path::new(DEFAULT_CONFIG_PATH)).display()
    );
    let config = Config::load(config_path).context("Failed to load configuration")?;

    let display = ProgressDisplay::from_flags(!cli.no_progress, cli.color);
    let outcome = match cli.command {
        Commands::Hottest {
            folder,
            output,
            metric_column,
        } => cmd_hottest(&config, folder, output, metric_column, display),
        Commands::Gather { folder, output } => cmd_gather(&config, folder, output, display),
    };

    match outcome {
        Ok(stats) => {
            report(&stats);
            Ok(())
        }
        Err(err @ AnalysisError::NoInput { .. }) => {
            warn!("{}", err);
            println!("{}", format_warning(&err.to_string()));
            Ok(())
        }
        Err(err) => Err(err).context("Run aborted"),
    }
}

fn cmd_hottest(
    config: &Config,
    folder: PathBuf,
    output: Option<PathBuf>,
    metric_column: Option<usize>,
    display: ProgressDisplay,
) -> perf_analysis::Result<RunStats> {
    let mut settings = config.hottest.clone();
    if let Some(output) = output {
        settings.output = output;
    }
    if let Some(metric_column) = metric_column {
        settings.metric_column = metric_column;
    }

    HottestPipeline::new(settings)
        .with_display(display)
        .run(&folder)
}

fn cmd_gather(
    config: &Config,
    folder: PathBuf,
    output: Option<PathBuf>,
    display: ProgressDisplay,
) -> perf_analysis::Result<RunStats> {
    let mut settings = config.gather.clone();
    if let Some(output) = output {
        settings.output = output;
    }

    GatherPipeline::new(settings)
        .with_display(display)
        .run(&folder)
}

fn report(stats: &RunStats) {
    info!(
        "Loaded {} of {} files, {} rows in {:.2}s ({:.1} files/sec, {:.0} rows/sec)",
        stats.files_loaded,
        stats.files_found,
        stats.rows_loaded,
        stats.duration.as_secs_f64(),
        stats.files_per_second(),
        stats.rows_per_second()
    );

    match &stats.output {
        Some(path) => println!("{}", format_success(&format!("Done. Wrote {}", path.display()))),
        None => println!("{}", format_warning("Done. Nothing to write")),
    }
}
