//! Interactive questions asked before a session starts.
//!
//! Each function keeps asking until it gets a usable answer. `None` means
//! the operator backed out (Ctrl+C or end of input).

use crate::cli::display::Display;
use crate::cli::input::TerminalInput;
use crate::planner::parse_minutes;
use crate::types::EnergyState;

/// Asks for an energy state until a recognized one is entered.
pub async fn ask_energy(input: &mut TerminalInput) -> Option<EnergyState> {
    loop {
        Display::prompt("How is your energy right now? (tired, focused, overwhelmed, exhausted): ");
        let line = input.next_line().await?;
        let state = EnergyState::parse(&line);
        if state.is_recognized() {
            return Some(state);
        }
        Display::show_invalid_answer(&line, "tired, focused, overwhelmed or exhausted");
    }
}

/// Asks for minutes available until a positive whole number is entered.
pub async fn ask_minutes(input: &mut TerminalInput) -> Option<i64> {
    loop {
        Display::prompt("How many minutes do you have to study? ");
        let line = input.next_line().await?;
        match parse_minutes(&line) {
            Some(minutes) if minutes > 0 => return Some(minutes),
            _ => Display::show_invalid_answer(&line, "a positive whole number"),
        }
    }
}

/// Asks a yes/no question. An empty answer means no.
pub async fn confirm(input: &mut TerminalInput, question: &str) -> Option<bool> {
    loop {
        Display::prompt(&format!("{} (yes/no): ", question));
        let line = input.next_line().await?;
        match line.trim().to_lowercase().as_str() {
            "y" | "yes" => return Some(true),
            "" | "n" | "no" => return Some(false),
            _ => Display::show_invalid_answer(&line, "yes or no"),
        }
    }
}
