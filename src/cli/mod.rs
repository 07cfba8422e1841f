//! CLI module for Study Buddy.
//!
//! This module provides:
//! - Command-line argument parsing (clap)
//! - Terminal operator input for the cycle timer
//! - Interactive prompts and the `start` flow
//! - Display utilities for formatted output

pub mod commands;
pub mod display;
pub mod input;
pub mod prompt;
pub mod session;

pub use commands::{Cli, Commands, PlanArgs, StartArgs};
pub use display::Display;
pub use input::{OperatorInput, TerminalInput};
