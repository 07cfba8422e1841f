//! Core data types for Study Buddy.
//!
//! This module defines the data structures used for:
//! - Energy state parsing
//! - Session plans produced by the planner
//! - Timer session state owned by the cycle timer
//! - Operator commands and termination outcomes

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// EnergyState
// ============================================================================

/// The operator's self-reported energy level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyState {
    Tired,
    Focused,
    Overwhelmed,
    Exhausted,
    /// Anything that did not match a known state
    Unknown,
}

impl EnergyState {
    /// All states the operator can name, in prompt order.
    pub const RECOGNIZED: [EnergyState; 4] = [
        EnergyState::Tired,
        EnergyState::Focused,
        EnergyState::Overwhelmed,
        EnergyState::Exhausted,
    ];

    /// Parses free text, ignoring case and surrounding whitespace.
    ///
    /// Unrecognized text maps to [`EnergyState::Unknown`]; this never fails.
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "tired" => EnergyState::Tired,
            "focused" => EnergyState::Focused,
            "overwhelmed" => EnergyState::Overwhelmed,
            "exhausted" => EnergyState::Exhausted,
            _ => EnergyState::Unknown,
        }
    }

    /// Returns the string representation of the state.
    pub fn as_str(&self) -> &'static str {
        match self {
            EnergyState::Tired => "tired",
            EnergyState::Focused => "focused",
            EnergyState::Overwhelmed => "overwhelmed",
            EnergyState::Exhausted => "exhausted",
            EnergyState::Unknown => "unknown",
        }
    }

    /// Returns true for every state except `Unknown`.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, EnergyState::Unknown)
    }
}

impl Default for EnergyState {
    fn default() -> Self {
        EnergyState::Unknown
    }
}

impl From<&str> for EnergyState {
    fn from(input: &str) -> Self {
        EnergyState::parse(input)
    }
}

impl fmt::Display for EnergyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SessionPlan
// ============================================================================

/// An immutable work/break/cycle recipe for one study session.
///
/// A plan with zero cycles or zero work minutes is a rest recommendation:
/// the cycle timer skips it without running any phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPlan {
    /// Human-readable label, e.g. "Deep study"
    pub description: String,
    /// Work phase length in minutes
    #[serde(rename = "workMinutes")]
    pub work_minutes: u32,
    /// Break phase length in minutes
    #[serde(rename = "breakMinutes")]
    pub break_minutes: u32,
    /// Number of work phases
    pub cycles: u32,
}

impl SessionPlan {
    /// Creates a new plan.
    pub fn new(
        description: impl Into<String>,
        work_minutes: u32,
        break_minutes: u32,
        cycles: u32,
    ) -> Self {
        Self {
            description: description.into(),
            work_minutes,
            break_minutes,
            cycles,
        }
    }

    /// Returns true if this plan recommends rest instead of study.
    pub fn is_noop(&self) -> bool {
        self.cycles == 0 || self.work_minutes == 0
    }

    /// Work phase length in seconds.
    pub fn work_seconds(&self) -> u32 {
        self.work_minutes.saturating_mul(60)
    }

    /// Break phase length in seconds.
    pub fn break_seconds(&self) -> u32 {
        self.break_minutes.saturating_mul(60)
    }

    /// Total wall-clock minutes of the run, with no break after the last cycle.
    pub fn total_minutes(&self) -> u32 {
        if self.is_noop() {
            return 0;
        }
        self.work_minutes
            .saturating_mul(self.cycles)
            .saturating_add(self.break_minutes.saturating_mul(self.cycles - 1))
    }
}

// ============================================================================
// TimerPhase
// ============================================================================

/// One contiguous countdown within a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerPhase {
    Work,
    Break,
}

impl TimerPhase {
    /// Returns the string representation of the phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerPhase::Work => "work",
            TimerPhase::Break => "break",
        }
    }

    /// Only work phases honor pause requests; breaks are mandatory rest.
    pub fn is_pausable(&self) -> bool {
        matches!(self, TimerPhase::Work)
    }
}

impl Default for TimerPhase {
    fn default() -> Self {
        TimerPhase::Work
    }
}

impl fmt::Display for TimerPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SessionStatus
// ============================================================================

/// Runtime status of a timer session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Running,
    Paused,
    Completed,
    Aborted,
}

impl SessionStatus {
    /// Returns true once the run can no longer change.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionStatus::Completed | SessionStatus::Aborted)
    }
}

// ============================================================================
// TerminationReason
// ============================================================================

/// How a cycle timer execution ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// Every cycle ran to zero
    Completed,
    /// The operator chose Quit at a prompt
    AbortedByOperator,
    /// The plan was a rest recommendation; nothing ran
    NoOpSkipped,
}

impl TerminationReason {
    /// Returns the string representation of the reason.
    pub fn as_str(&self) -> &'static str {
        match self {
            TerminationReason::Completed => "completed",
            TerminationReason::AbortedByOperator => "aborted_by_operator",
            TerminationReason::NoOpSkipped => "no_op_skipped",
        }
    }
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// OperatorCommand
// ============================================================================

/// A control signal delivered by the operator at a prompt point.
///
/// `Start` and `Resume` are interchangeable: both mean "count down now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorCommand {
    Start,
    Resume,
    Pause,
    Quit,
}

impl OperatorCommand {
    /// Parses a prompt answer.
    ///
    /// An empty answer means "carry on" and maps to `Start`. Returns `None`
    /// for anything unrecognized so the caller can ask again.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "" | "s" | "start" => Some(OperatorCommand::Start),
            "r" | "resume" => Some(OperatorCommand::Resume),
            "p" | "pause" => Some(OperatorCommand::Pause),
            "q" | "quit" => Some(OperatorCommand::Quit),
            _ => None,
        }
    }

    /// Returns true for `Start` and `Resume`.
    pub fn is_go(&self) -> bool {
        matches!(self, OperatorCommand::Start | OperatorCommand::Resume)
    }
}

// ============================================================================
// TimerSession
// ============================================================================

/// Transient runtime state of one cycle timer execution.
///
/// Only the cycle timer mutates this; callers observe it through getters
/// and [`crate::timer::TimerEvent`]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimerSession {
    current_cycle: u32,
    current_phase: TimerPhase,
    remaining_seconds: u32,
    status: SessionStatus,
}

impl TimerSession {
    /// Creates a running session positioned at the start of cycle 1.
    pub(crate) fn new() -> Self {
        Self {
            current_cycle: 1,
            current_phase: TimerPhase::Work,
            remaining_seconds: 0,
            status: SessionStatus::Running,
        }
    }

    /// Cycle number, starting at 1.
    pub fn current_cycle(&self) -> u32 {
        self.current_cycle
    }

    pub fn current_phase(&self) -> TimerPhase {
        self.current_phase
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Loads a fresh countdown for the given cycle and phase.
    pub(crate) fn begin_phase(&mut self, cycle: u32, phase: TimerPhase, seconds: u32) {
        self.current_cycle = cycle;
        self.current_phase = phase;
        self.remaining_seconds = seconds;
        self.status = SessionStatus::Running;
    }

    /// Decrements the countdown by one second.
    ///
    /// Returns true if the phase has completed (reached 0). Paused sessions
    /// never decrement.
    pub(crate) fn tick(&mut self) -> bool {
        if self.status == SessionStatus::Running && self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
        }
        self.remaining_seconds == 0
    }

    /// Freezes the countdown. Only running work phases can pause.
    pub(crate) fn pause(&mut self) -> bool {
        if self.status == SessionStatus::Running && self.current_phase.is_pausable() {
            self.status = SessionStatus::Paused;
            true
        } else {
            false
        }
    }

    /// Unfreezes a paused countdown.
    pub(crate) fn resume(&mut self) {
        if self.status == SessionStatus::Paused {
            self.status = SessionStatus::Running;
        }
    }

    pub(crate) fn complete(&mut self) {
        self.status = SessionStatus::Completed;
    }

    pub(crate) fn abort(&mut self) {
        self.status = SessionStatus::Aborted;
    }

    pub fn is_paused(&self) -> bool {
        self.status == SessionStatus::Paused
    }
}

// ============================================================================
// Tests
// ============================================================================
