//! Command definitions for the Study Buddy CLI.
//!
//! Uses clap derive macro for argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

// ============================================================================
// CLI Structure
// ============================================================================

/// Study Buddy - energy-aware study sessions in the terminal
#[derive(Parser, Debug)]
#[command(
    name = "study-buddy",
    version,
    about = "Plan and run a study session that fits your energy and time",
    long_about = "Tell Study Buddy how you feel and how long you have. It picks a work/break \
                  schedule and runs it as a pausable countdown.",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory for history and config (defaults to $STUDY_BUDDY_HOME or ~/.study-buddy)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show the recommended plan without running it
    Plan(PlanArgs),

    /// Pick a plan and run the study session
    Start(StartArgs),

    /// Show recent study sessions
    History {
        /// Number of sessions to show (defaults to the configured limit)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=50))]
        limit: Option<u32>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Plan Command Arguments
// ============================================================================

/// Arguments for the plan command
#[derive(Args, Debug, Clone)]
pub struct PlanArgs {
    /// Energy state: tired, focused, overwhelmed or exhausted
    #[arg(short, long)]
    pub energy: String,

    /// Minutes available for studying (non-integers fall back to the default plan)
    #[arg(short, long, allow_hyphen_values = true)]
    pub minutes: String,

    /// Print the plan as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// Start Command Arguments
// ============================================================================

/// Arguments for the start command
#[derive(Args, Debug, Clone, Default)]
pub struct StartArgs {
    /// Energy state (asked interactively if omitted)
    #[arg(short, long)]
    pub energy: Option<String>,

    /// Minutes available (asked interactively if omitted)
    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(u32).range(1..=1440)
    )]
    pub minutes: Option<u32>,

    /// Subject you are studying, saved with the session
    #[arg(short, long, value_parser = validate_subject)]
    pub subject: Option<String>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

// ============================================================================
// Validation Functions
// ============================================================================

/// Validates the subject.
///
/// - Must not be blank
/// - Must not exceed 100 characters
fn validate_subject(s: &str) -> Result<String, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("subject must not be empty".to_string());
    }
    if trimmed.chars().count() > 100 {
        return Err("subject must be at most 100 characters".to_string());
    }
    Ok(trimmed.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // Cli Tests
    // ------------------------------------------------------------------------

    mod cli_tests {
        use super::*;

        #[test]
        fn test_parse_no_args() {
            let cli = Cli::parse_from(["study-buddy"]);
            assert!(cli.command.is_none());
            assert!(!cli.verbose);
            assert!(cli.data_dir.is_none());
        }

        #[test]
        fn test_parse_verbose_flag() {
            let cli = Cli::parse_from(["study-buddy", "-v"]);
            assert!(cli.verbose);
        }

        #[test]
        fn test_parse_global_data_dir() {
            let cli = Cli::parse_from(["study-buddy", "history", "--data-dir", "/tmp/sb"]);
            assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/sb")));
        }

        #[test]
        fn test_parse_completions_zsh() {
            let cli = Cli::parse_from(["study-buddy", "completions", "zsh"]);
            match cli.command {
                Some(Commands::Completions { shell }) => {
                    assert_eq!(shell, clap_complete::Shell::Zsh);
                }
                _ => panic!("Expected Completions command"),
            }
        }
    }

    // ------------------------------------------------------------------------
    // Plan Command Tests
    // ------------------------------------------------------------------------

    mod plan_args_tests {
        use super::*;

        #[test]
        fn test_parse_plan() {
            let cli = Cli::parse_from(["study-buddy", "plan", "-e", "focused", "-m", "90"]);
            match cli.command {
                Some(Commands::Plan(args)) => {
                    assert_eq!(args.energy, "focused");
                    assert_eq!(args.minutes, "90");
                    assert!(!args.json);
                }
                _ => panic!("Expected Plan command"),
            }
        }

        #[test]
        fn test_parse_plan_negative_minutes() {
            let cli = Cli::parse_from(["study-buddy", "plan", "--energy", "tired", "--minutes", "-5"]);
            match cli.command {
                Some(Commands::Plan(args)) => assert_eq!(args.minutes, "-5"),
                _ => panic!("Expected Plan command"),
            }
        }

        #[test]
        fn test_parse_plan_fractional_minutes() {
            let cli = Cli::parse_from(["study-buddy", "plan", "-e", "focused", "-m", "2.5"]);
            match cli.command {
                Some(Commands::Plan(args)) => assert_eq!(args.minutes, "2.5"),
                _ => panic!("Expected Plan command"),
            }
        }

        #[test]
        fn test_parse_plan_requires_energy() {
            let result = Cli::try_parse_from(["study-buddy", "plan", "--minutes", "30"]);
            assert!(result.is_err());
        }
    }

    // ------------------------------------------------------------------------
    // Start Command Tests
    // ------------------------------------------------------------------------

    mod start_args_tests {
        use super::*;

        #[test]
        fn test_parse_start_defaults() {
            let cli = Cli::parse_from(["study-buddy", "start"]);
            match cli.command {
                Some(Commands::Start(args)) => {
                    assert!(args.energy.is_none());
                    assert!(args.minutes.is_none());
                    assert!(args.subject.is_none());
                    assert!(!args.yes);
                }
                _ => panic!("Expected Start command"),
            }
        }

        #[test]
        fn test_parse_start_with_options() {
            let cli = Cli::parse_from([
                "study-buddy",
                "start",
                "--energy",
                "overwhelmed",
                "--minutes",
                "30",
                "--subject",
                "  Python Lists ",
                "--yes",
            ]);
            match cli.command {
                Some(Commands::Start(args)) => {
                    assert_eq!(args.energy.as_deref(), Some("overwhelmed"));
                    assert_eq!(args.minutes, Some(30));
                    assert_eq!(args.subject.as_deref(), Some("Python Lists"));
                    assert!(args.yes);
                }
                _ => panic!("Expected Start command"),
            }
        }

        #[test]
        fn test_start_rejects_zero_minutes() {
            let result = Cli::try_parse_from(["study-buddy", "start", "--minutes", "0"]);
            assert!(result.is_err());
        }

        #[test]
        fn test_history_limit_range() {
            assert!(Cli::try_parse_from(["study-buddy", "history", "--limit", "0"]).is_err());
            let cli = Cli::parse_from(["study-buddy", "history", "-l", "5"]);
            assert!(matches!(cli.command, Some(Commands::History { limit: Some(5) })));
        }
    }

    // ------------------------------------------------------------------------
    // Validation Tests
    // ------------------------------------------------------------------------

    mod validation_tests {
        use super::*;

        #[test]
        fn test_validate_subject() {
            assert_eq!(validate_subject(" Biology "), Ok("Biology".to_string()));
            assert!(validate_subject("   ").is_err());
            assert!(validate_subject(&"a".repeat(101)).is_err());
            assert!(validate_subject(&"a".repeat(100)).is_ok());
        }
    }
}
