//! Study Buddy CLI - energy-aware study sessions
//!
//! Tell it how you feel and how long you have:
//! - exhausted: take a nap instead
//! - tired with little time: a short light review
//! - focused with time to spare: deep study blocks
//! - overwhelmed: short, easy rounds

use std::path::Path;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use study_buddy::cli::{session, Cli, Commands, Display};
use study_buddy::config::AppConfig;
use study_buddy::history::HistoryStore;
use study_buddy::planner;

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_tracing(cli.verbose);

    // Execute command
    if let Err(e) = execute(cli).await {
        Display::show_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
///
/// Logs go to stderr so countdown output on stdout stays readable.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    let Cli {
        command,
        verbose,
        data_dir,
    } = cli;

    if verbose {
        tracing::info!("Verbose mode enabled");
    }

    match command {
        Some(Commands::Plan(args)) => {
            let plan = planner::plan_from_input(&args.energy, &args.minutes);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                Display::show_plan(&plan);
            }
        }
        Some(Commands::Start(args)) => {
            let config = load_config(data_dir.as_deref())?;
            session::run_start(&args, &config).await?;
        }
        Some(Commands::History { limit }) => {
            let config = load_config(data_dir.as_deref())?;
            let limit = limit.map_or(config.recent_limit, |l| l as usize);
            let store = HistoryStore::new(config.history_path());
            let records = store
                .recent(limit)
                .with_context(|| format!("failed to read {}", store.path().display()))?;
            Display::show_history(&records);
        }
        Some(Commands::Completions { shell }) => {
            generate_completions(shell);
        }
        None => {
            // No command provided, show help
            Cli::command().print_help()?;
        }
    }

    Ok(())
}

/// Resolves the data directory and loads the config file from it.
fn load_config(data_dir: Option<&Path>) -> Result<AppConfig> {
    let data_dir = AppConfig::resolve_data_dir(data_dir)
        .map_err(|e| anyhow::anyhow!("{} ({})", e, e.suggestion()))?;
    AppConfig::load(&data_dir).map_err(|e| anyhow::anyhow!("{} ({})", e, e.suggestion()))
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================
