//! Display utilities for the Study Buddy CLI.
//!
//! This module provides formatted output for:
//! - Session plans
//! - Countdown progress and operator prompts
//! - Session outcomes and history
//! - Error messages

use std::io::{self, Write};

use crate::history::SessionRecord;
use crate::timer::TimerEvent;
use crate::types::{SessionPlan, TerminationReason, TimerPhase};

// ============================================================================
// Display
// ============================================================================

/// Display utilities for CLI output.
pub struct Display;

impl Display {
    /// Shows the welcome banner for an interactive session.
    pub fn show_welcome() {
        println!("==== Study Buddy ====");
    }

    /// Shows the selected plan.
    pub fn show_plan(plan: &SessionPlan) {
        println!();
        println!("Suggested mode: {}", plan.description);
        if plan.is_noop() {
            println!("  You need rest more than study right now. Take a nap and come back later.");
            return;
        }
        println!("  Work:   {} min", plan.work_minutes);
        println!("  Break:  {} min", plan.break_minutes);
        println!("  Cycles: {}", plan.cycles);
        println!("  Total:  {} min", plan.total_minutes());
    }

    /// Renders a timer event. Ticks overwrite the current line.
    pub fn show_progress(event: &TimerEvent, total_cycles: u32) {
        match event {
            TimerEvent::PhaseStarted {
                cycle,
                total_cycles,
                phase,
                total_seconds,
            } => {
                println!();
                println!(
                    "{} {}/{} started ({})",
                    Self::phase_label(*phase),
                    cycle,
                    total_cycles,
                    Self::format_clock(*total_seconds)
                );
                if phase.is_pausable() {
                    println!("  Press Enter or Ctrl+C to pause.");
                }
            }
            TimerEvent::Tick {
                cycle,
                phase,
                remaining_seconds,
            } => {
                print!(
                    "\r{}",
                    Self::progress_line(*cycle, total_cycles, *phase, *remaining_seconds)
                );
                let _ = io::stdout().flush();
            }
            TimerEvent::Paused {
                remaining_seconds, ..
            } => {
                println!();
                println!("|| Paused at {}", Self::format_clock(*remaining_seconds));
            }
            TimerEvent::Resumed {
                remaining_seconds, ..
            } => {
                println!("> Resumed at {}", Self::format_clock(*remaining_seconds));
            }
            TimerEvent::InterruptIgnored { .. } => {
                println!();
                println!("  Breaks can't be paused. Rest up, the next round starts soon.");
            }
            TimerEvent::PhaseCompleted { phase, .. } => {
                println!();
                match phase {
                    TimerPhase::Work => println!("* Work phase done."),
                    TimerPhase::Break => println!("* Break over."),
                }
            }
            TimerEvent::Finished { .. } => {}
        }
    }

    /// Shows how the session ended.
    pub fn show_outcome(reason: TerminationReason) {
        println!();
        match reason {
            TerminationReason::Completed => println!("* Session complete. Nice work!"),
            TerminationReason::AbortedByOperator => println!("[] Session stopped."),
            TerminationReason::NoOpSkipped => println!("Zz No timer started. Rest well."),
        }
    }

    /// Shows the phase-start prompt.
    pub fn prompt_phase_start(cycle: u32, total_cycles: u32) {
        println!();
        Self::prompt(&format!(
            "Ready for work {}/{}? [s]tart, [p]ause, [q]uit: ",
            cycle, total_cycles
        ));
    }

    /// Shows the paused prompt.
    pub fn prompt_paused(remaining_seconds: u32) {
        Self::prompt(&format!(
            "{} left. [r]esume or [q]uit: ",
            Self::format_clock(remaining_seconds)
        ));
    }

    /// Prints a question without a trailing newline.
    pub fn prompt(text: &str) {
        print!("{}", text);
        let _ = io::stdout().flush();
    }

    /// Shows a rejected prompt answer.
    pub fn show_invalid_answer(answer: &str, expected: &str) {
        println!("'{}' is not valid. Please enter {}.", answer.trim(), expected);
    }

    /// Shows that the operator backed out before the timer started.
    pub fn show_cancelled() {
        println!();
        println!("Okay, no session started. Happy studying!");
    }

    /// Shows the most recent sessions, newest first.
    pub fn show_history(records: &[SessionRecord]) {
        if records.is_empty() {
            println!("No study sessions logged yet.");
            return;
        }

        println!("Last {} study sessions:", records.len());
        println!("─────────────────────────────");
        for (i, record) in records.iter().enumerate() {
            println!(
                "{}. {}  {}",
                i + 1,
                record.timestamp.format("%Y-%m-%d %H:%M"),
                record.plan.description
            );
            if let Some(subject) = &record.subject {
                println!("   Subject: {}", subject);
            }
            println!(
                "   Energy: {}  Outcome: {}",
                record.energy,
                Self::outcome_label(record.outcome)
            );
        }
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("error: {}", message);
    }

    /// One progress line, e.g. `[Work 1/2] 24:59 remaining`.
    pub fn progress_line(
        cycle: u32,
        total_cycles: u32,
        phase: TimerPhase,
        remaining_seconds: u32,
    ) -> String {
        format!(
            "[{} {}/{}] {} remaining ",
            Self::phase_label(phase),
            cycle,
            total_cycles,
            Self::format_clock(remaining_seconds)
        )
    }

    /// Formats seconds as `MM:SS`. Minutes grow past two digits if needed.
    pub fn format_clock(total_seconds: u32) -> String {
        let (minutes, seconds) = Self::format_time(total_seconds);
        format!("{:02}:{:02}", minutes, seconds)
    }

    fn phase_label(phase: TimerPhase) -> &'static str {
        match phase {
            TimerPhase::Work => "Work",
            TimerPhase::Break => "Break",
        }
    }

    fn outcome_label(reason: TerminationReason) -> &'static str {
        match reason {
            TerminationReason::Completed => "completed",
            TerminationReason::AbortedByOperator => "stopped early",
            TerminationReason::NoOpSkipped => "rest recommended",
        }
    }

    /// Formats remaining seconds as (minutes, seconds).
    fn format_time(total_seconds: u32) -> (u32, u32) {
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;
        (minutes, seconds)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EnergyState;

    // ------------------------------------------------------------------------
    // Format Time Tests
    // ------------------------------------------------------------------------

    mod format_time_tests {
        use super::*;

        #[test]
        fn test_format_time_mixed() {
            assert_eq!(Display::format_time(90), (1, 30));
            assert_eq!(Display::format_time(0), (0, 0));
        }

        #[test]
        fn test_format_clock() {
            assert_eq!(Display::format_clock(0), "00:00");
            assert_eq!(Display::format_clock(59), "00:59");
            assert_eq!(Display::format_clock(25 * 60), "25:00");
            assert_eq!(Display::format_clock(45 * 60 - 1), "44:59");
            assert_eq!(Display::format_clock(120 * 60 + 5), "120:05");
        }

        #[test]
        fn test_progress_line() {
            assert_eq!(
                Display::progress_line(1, 2, TimerPhase::Work, 1499),
                "[Work 1/2] 24:59 remaining "
            );
            assert_eq!(
                Display::progress_line(2, 3, TimerPhase::Break, 60),
                "[Break 2/3] 01:00 remaining "
            );
        }
    }

    // ------------------------------------------------------------------------
    // Display Output Tests
    // ------------------------------------------------------------------------

    mod display_tests {
        use super::*;

        #[test]
        fn test_show_plan() {
            Display::show_plan(&SessionPlan::new("Deep study", 45, 15, 2));
            Display::show_plan(&SessionPlan::new("Nap time", 0, 0, 0));
        }

        #[test]
        fn test_show_progress_all_events() {
            let events = [
                TimerEvent::PhaseStarted {
                    cycle: 1,
                    total_cycles: 1,
                    phase: TimerPhase::Work,
                    total_seconds: 60,
                },
                TimerEvent::Tick {
                    cycle: 1,
                    phase: TimerPhase::Work,
                    remaining_seconds: 59,
                },
                TimerEvent::Paused {
                    cycle: 1,
                    remaining_seconds: 59,
                },
                TimerEvent::Resumed {
                    cycle: 1,
                    remaining_seconds: 59,
                },
                TimerEvent::InterruptIgnored {
                    cycle: 1,
                    remaining_seconds: 30,
                },
                TimerEvent::PhaseCompleted {
                    cycle: 1,
                    phase: TimerPhase::Break,
                },
                TimerEvent::Finished {
                    reason: TerminationReason::Completed,
                },
            ];
            for event in &events {
                Display::show_progress(event, 1);
            }
        }

        #[test]
        fn test_show_history() {
            Display::show_history(&[]);
            let record = SessionRecord::new(
                Some("Biology".to_string()),
                EnergyState::Tired,
                SessionPlan::new("Light review", 10, 2, 1),
                TerminationReason::AbortedByOperator,
            );
            Display::show_history(&[record]);
        }

        #[test]
        fn test_show_outcome() {
            Display::show_outcome(TerminationReason::Completed);
            Display::show_outcome(TerminationReason::AbortedByOperator);
            Display::show_outcome(TerminationReason::NoOpSkipped);
        }

        #[test]
        fn test_show_error() {
            Display::show_error("Test error message");
        }
    }
}
