//! Cycle timer for running a session plan.
//!
//! This module provides the countdown state machine:
//! - Alternating work/break phases (no break after the last cycle)
//! - One-second ticks with tokio::time::interval
//! - Operator commands polled at prompt points and tick boundaries
//! - Progress events over an mpsc channel
//!
//! ```text
//! Idle -> Work(Running) <-> Work(Paused) -> Work(Done)
//!      -> [Break(Running) -> Break(Done)] -> next Work ... -> Completed
//! ```
//!
//! Quit at a phase-start prompt or while paused ends the run as
//! [`TerminationReason::AbortedByOperator`]. Interrupts during a break are
//! reported but do not stop the countdown.

use std::collections::VecDeque;

use tokio::sync::mpsc;
use tokio::time::{interval_at, Duration, Instant, MissedTickBehavior};
use tracing::{debug, info, trace};

use crate::types::{
    OperatorCommand, SessionPlan, TerminationReason, TimerPhase, TimerSession,
};

/// Default countdown resolution.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

// ============================================================================
// TimerEvent
// ============================================================================

/// Progress events emitted while a plan runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// A phase countdown is about to begin
    PhaseStarted {
        cycle: u32,
        total_cycles: u32,
        phase: TimerPhase,
        total_seconds: u32,
    },
    /// One second elapsed
    Tick {
        cycle: u32,
        phase: TimerPhase,
        remaining_seconds: u32,
    },
    /// Work countdown frozen
    Paused { cycle: u32, remaining_seconds: u32 },
    /// Work countdown continues from the frozen value
    Resumed { cycle: u32, remaining_seconds: u32 },
    /// Interrupt raised during a break; the break keeps running
    InterruptIgnored { cycle: u32, remaining_seconds: u32 },
    /// A phase reached zero
    PhaseCompleted { cycle: u32, phase: TimerPhase },
    /// The run is over
    Finished { reason: TerminationReason },
}

// ============================================================================
// CommandSource
// ============================================================================

/// Where operator commands come from.
///
/// The timer calls [`phase_start`](Self::phase_start) before every work
/// phase, [`paused`](Self::paused) while a work phase is frozen, and
/// [`interrupt_requested`](Self::interrupt_requested) once per tick boundary.
#[allow(async_fn_in_trait)]
pub trait CommandSource {
    /// Start, pause or quit before a work phase.
    async fn phase_start(&mut self, cycle: u32, total_cycles: u32) -> OperatorCommand;

    /// Resume or quit while paused. `Pause` keeps the phase frozen.
    async fn paused(&mut self, cycle: u32, remaining_seconds: u32) -> OperatorCommand;

    /// Non-blocking check for an interrupt raised since the last call.
    fn interrupt_requested(&mut self) -> bool;
}

/// A scripted command source for tests and non-interactive runs.
///
/// Phase-start answers default to `Start` once the script runs out, and
/// pause answers default to `Quit` so a pause can never hang.
#[derive(Debug, Default)]
pub struct ScriptedCommands {
    phase_start: VecDeque<OperatorCommand>,
    paused: VecDeque<OperatorCommand>,
    /// Zero-based poll indices at which an interrupt fires
    interrupts: Vec<u64>,
    polls: u64,
    phase_start_calls: u32,
    paused_calls: u32,
}

impl ScriptedCommands {
    /// Creates a source that starts every phase and never interrupts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers for successive phase-start prompts.
    #[must_use]
    pub fn on_phase_start(mut self, commands: impl IntoIterator<Item = OperatorCommand>) -> Self {
        self.phase_start.extend(commands);
        self
    }

    /// Answers for successive pause prompts.
    #[must_use]
    pub fn while_paused(mut self, commands: impl IntoIterator<Item = OperatorCommand>) -> Self {
        self.paused.extend(commands);
        self
    }

    /// Raises an interrupt at the given tick-boundary polls.
    #[must_use]
    pub fn interrupt_at_polls(mut self, polls: impl IntoIterator<Item = u64>) -> Self {
        self.interrupts.extend(polls);
        self
    }

    #[must_use]
    pub fn phase_start_calls(&self) -> u32 {
        self.phase_start_calls
    }

    #[must_use]
    pub fn paused_calls(&self) -> u32 {
        self.paused_calls
    }

    #[must_use]
    pub fn poll_count(&self) -> u64 {
        self.polls
    }
}

impl CommandSource for ScriptedCommands {
    async fn phase_start(&mut self, _cycle: u32, _total_cycles: u32) -> OperatorCommand {
        self.phase_start_calls += 1;
        self.phase_start.pop_front().unwrap_or(OperatorCommand::Start)
    }

    async fn paused(&mut self, _cycle: u32, _remaining_seconds: u32) -> OperatorCommand {
        self.paused_calls += 1;
        self.paused.pop_front().unwrap_or(OperatorCommand::Quit)
    }

    fn interrupt_requested(&mut self) -> bool {
        let poll = self.polls;
        self.polls += 1;
        self.interrupts.contains(&poll)
    }
}

// ============================================================================
// CycleTimer
// ============================================================================

/// Whether a countdown should keep going after a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Runs a [`SessionPlan`] phase by phase.
///
/// Each call to [`execute`](Self::execute) owns a fresh [`TimerSession`];
/// no state is shared between runs.
pub struct CycleTimer {
    tick_interval: Duration,
    event_tx: mpsc::UnboundedSender<TimerEvent>,
}

impl CycleTimer {
    /// Creates a timer that reports progress on the given channel.
    pub fn new(event_tx: mpsc::UnboundedSender<TimerEvent>) -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
            event_tx,
        }
    }

    /// Overrides the tick length. One tick is always one counted second.
    ///
    /// Clamped to at least one millisecond.
    #[must_use]
    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval.max(Duration::from_millis(1));
        self
    }

    /// Executes the plan until every cycle completes or the operator quits.
    pub async fn execute<C: CommandSource>(
        &self,
        plan: &SessionPlan,
        commands: &mut C,
    ) -> TerminationReason {
        if plan.is_noop() {
            info!(plan = %plan.description, "rest recommended, skipping timer");
            return self.finish(TerminationReason::NoOpSkipped);
        }

        info!(
            plan = %plan.description,
            work_minutes = plan.work_minutes,
            break_minutes = plan.break_minutes,
            cycles = plan.cycles,
            "starting session"
        );

        let mut session = TimerSession::new();

        for cycle in 1..=plan.cycles {
            session.begin_phase(cycle, TimerPhase::Work, plan.work_seconds());

            match commands.phase_start(cycle, plan.cycles).await {
                OperatorCommand::Quit => return self.abort(&mut session),
                OperatorCommand::Pause => {
                    session.pause();
                    self.emit(TimerEvent::Paused {
                        cycle,
                        remaining_seconds: session.remaining_seconds(),
                    });
                    if self.hold(&mut session, commands).await == Flow::Quit {
                        return self.abort(&mut session);
                    }
                }
                OperatorCommand::Start | OperatorCommand::Resume => {}
            }

            if self.run_phase(&mut session, plan.cycles, commands).await == Flow::Quit {
                return self.abort(&mut session);
            }

            if cycle < plan.cycles {
                session.begin_phase(cycle, TimerPhase::Break, plan.break_seconds());
                self.run_phase(&mut session, plan.cycles, commands).await;
            }
        }

        session.complete();
        info!(cycles = plan.cycles, "session completed");
        self.finish(TerminationReason::Completed)
    }

    /// Counts the loaded phase down to zero.
    ///
    /// Interrupts are checked only at tick boundaries. A break gets one more
    /// check after reaching zero so pending input is consumed there.
    async fn run_phase<C: CommandSource>(
        &self,
        session: &mut TimerSession,
        total_cycles: u32,
        commands: &mut C,
    ) -> Flow {
        let cycle = session.current_cycle();
        let phase = session.current_phase();

        debug!(cycle, phase = phase.as_str(), "phase started");
        self.emit(TimerEvent::PhaseStarted {
            cycle,
            total_cycles,
            phase,
            total_seconds: session.remaining_seconds(),
        });

        let mut ticker = interval_at(Instant::now() + self.tick_interval, self.tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        while session.remaining_seconds() > 0 {
            if commands.interrupt_requested() {
                if session.pause() {
                    self.emit(TimerEvent::Paused {
                        cycle,
                        remaining_seconds: session.remaining_seconds(),
                    });
                    if self.hold(session, commands).await == Flow::Quit {
                        return Flow::Quit;
                    }
                    ticker.reset();
                    continue;
                }

                debug!(cycle, "interrupt during break ignored");
                self.emit(TimerEvent::InterruptIgnored {
                    cycle,
                    remaining_seconds: session.remaining_seconds(),
                });
            }

            ticker.tick().await;
            session.tick();
            trace!(cycle, remaining = session.remaining_seconds(), "tick");
            self.emit(TimerEvent::Tick {
                cycle,
                phase,
                remaining_seconds: session.remaining_seconds(),
            });
        }

        // Input typed during the last break second must not reach the next prompt.
        if !phase.is_pausable() && commands.interrupt_requested() {
            debug!(cycle, "interrupt at end of break ignored");
            self.emit(TimerEvent::InterruptIgnored {
                cycle,
                remaining_seconds: 0,
            });
        }

        debug!(cycle, phase = phase.as_str(), "phase completed");
        self.emit(TimerEvent::PhaseCompleted { cycle, phase });
        Flow::Continue
    }

    /// Waits on the operator while the session is paused.
    async fn hold<C: CommandSource>(&self, session: &mut TimerSession, commands: &mut C) -> Flow {
        let cycle = session.current_cycle();
        info!(cycle, remaining = session.remaining_seconds(), "paused");

        loop {
            match commands.paused(cycle, session.remaining_seconds()).await {
                OperatorCommand::Quit => return Flow::Quit,
                OperatorCommand::Pause => continue,
                OperatorCommand::Start | OperatorCommand::Resume => {
                    session.resume();
                    info!(cycle, remaining = session.remaining_seconds(), "resumed");
                    self.emit(TimerEvent::Resumed {
                        cycle,
                        remaining_seconds: session.remaining_seconds(),
                    });
                    return Flow::Continue;
                }
            }
        }
    }

    fn abort(&self, session: &mut TimerSession) -> TerminationReason {
        session.abort();
        info!(
            cycle = session.current_cycle(),
            phase = session.current_phase().as_str(),
            remaining = session.remaining_seconds(),
            "session aborted by operator"
        );
        self.finish(TerminationReason::AbortedByOperator)
    }

    fn finish(&self, reason: TerminationReason) -> TerminationReason {
        self.emit(TimerEvent::Finished { reason });
        reason
    }

    /// Sends a progress event. A dropped receiver only means nobody is watching.
    fn emit(&self, event: TimerEvent) {
        if self.event_tx.send(event).is_err() {
            debug!("progress receiver dropped");
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
