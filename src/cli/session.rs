//! The interactive `start` flow.
//!
//! Gather energy and minutes, plan, confirm, run the cycle timer while
//! rendering its progress, then log the outcome.

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::cli::commands::StartArgs;
use crate::cli::display::Display;
use crate::cli::input::TerminalInput;
use crate::cli::prompt;
use crate::config::AppConfig;
use crate::history::{HistoryStore, SessionRecord};
use crate::planner;
use crate::timer::{CommandSource, CycleTimer, TimerEvent};
use crate::types::{EnergyState, SessionPlan, TerminationReason};

/// Parses `--energy`. Unrecognized text still plans, as `Unknown`.
fn energy_from_flag(text: &str) -> EnergyState {
    let energy = EnergyState::parse(text);
    if !energy.is_recognized() {
        warn!(
            energy = text,
            "energy state not recognized, using the standard plan rules"
        );
    }
    energy
}

/// Runs the `start` command against the real terminal.
pub async fn run_start(args: &StartArgs, config: &AppConfig) -> Result<()> {
    let mut input = TerminalInput::spawn();
    Display::show_welcome();

    let energy = match &args.energy {
        Some(text) => energy_from_flag(text),
        None => match prompt::ask_energy(&mut input).await {
            Some(state) => state,
            None => {
                Display::show_cancelled();
                return Ok(());
            }
        },
    };

    let minutes = match args.minutes {
        Some(minutes) => i64::from(minutes),
        None => match prompt::ask_minutes(&mut input).await {
            Some(minutes) => minutes,
            None => {
                Display::show_cancelled();
                return Ok(());
            }
        },
    };

    let plan = planner::plan(energy, minutes);
    Display::show_plan(&plan);

    if !plan.is_noop() && config.confirm_before_start && !args.yes {
        let confirmed = prompt::confirm(&mut input, "Start this session?").await;
        if confirmed != Some(true) {
            Display::show_cancelled();
            return Ok(());
        }
    }

    let reason = run_plan(&plan, &mut input).await;
    Display::show_outcome(reason);

    let store = HistoryStore::new(config.history_path());
    let record = SessionRecord::new(args.subject.clone(), energy, plan, reason);
    store
        .append(&record)
        .with_context(|| format!("failed to save session to {}", store.path().display()))?;
    info!(outcome = reason.as_str(), "session saved");

    Ok(())
}

/// Executes a plan, printing progress as it arrives.
pub async fn run_plan<C: CommandSource>(plan: &SessionPlan, commands: &mut C) -> TerminationReason {
    let (tx, mut rx) = mpsc::unbounded_channel::<TimerEvent>();
    let timer = CycleTimer::new(tx);
    let total_cycles = plan.cycles;

    let run = async {
        let reason = timer.execute(plan, commands).await;
        // Closes the channel so the printer finishes.
        drop(timer);
        reason
    };
    let print = async {
        while let Some(event) = rx.recv().await {
            Display::show_progress(&event, total_cycles);
        }
    };

    let (reason, ()) = tokio::join!(run, print);
    reason
}
