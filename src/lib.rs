//! Study Buddy Library
//!
//! This library provides the core functionality for the Study Buddy CLI.
//! It includes:
//! - Mode planner mapping energy and available time to a session plan
//! - Cycle timer running a plan as a pausable work/break countdown
//! - Session history log
//! - Configuration loading
//! - CLI command parsing, terminal input and display utilities
//! - Type definitions shared by all of the above

pub mod cli;
pub mod config;
pub mod history;
pub mod planner;
pub mod timer;
pub mod types;

// Re-export commonly used types for convenience
pub use types::{
    EnergyState, OperatorCommand, SessionPlan, SessionStatus, TerminationReason, TimerPhase,
    TimerSession,
};

pub use planner::{plan, plan_from_input};

pub use timer::{CommandSource, CycleTimer, ScriptedCommands, TimerEvent};

pub use history::{HistoryError, HistoryStore, SessionRecord};

pub use config::{AppConfig, ConfigError};
