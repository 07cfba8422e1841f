//! Terminal operator input.
//!
//! Stdin lines and Ctrl+C are funneled into one channel. The cycle timer
//! reads that channel through [`CommandSource`]: at prompts it waits for a
//! line, and between ticks any pending input counts as an interrupt.
//!
//! Stdin is read on a dedicated OS thread so exit never waits on a
//! pending read.

use std::io::BufRead;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::cli::display::Display;
use crate::timer::CommandSource;
use crate::types::OperatorCommand;

/// One thing the operator did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperatorInput {
    /// A line typed on stdin, without the newline
    Line(String),
    /// Ctrl+C
    Interrupt,
    /// Stdin was closed
    Eof,
}

/// Operator input backed by a channel.
#[derive(Debug)]
pub struct TerminalInput {
    rx: mpsc::UnboundedReceiver<OperatorInput>,
    closed: bool,
}

impl TerminalInput {
    /// Starts reading stdin and listening for Ctrl+C.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        let lines_tx = tx.clone();
        std::thread::spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                match line {
                    Ok(line) => {
                        if lines_tx.send(OperatorInput::Line(line)).is_err() {
                            return;
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, "failed to read stdin");
                        break;
                    }
                }
            }
            let _ = lines_tx.send(OperatorInput::Eof);
        });

        tokio::spawn(async move {
            while tokio::signal::ctrl_c().await.is_ok() {
                debug!("ctrl+c received");
                if tx.send(OperatorInput::Interrupt).is_err() {
                    break;
                }
            }
        });

        Self::from_receiver(rx)
    }

    /// Wraps an existing channel, e.g. for tests.
    pub fn from_receiver(rx: mpsc::UnboundedReceiver<OperatorInput>) -> Self {
        Self { rx, closed: false }
    }

    /// Waits for the next typed line.
    ///
    /// Returns `None` on Ctrl+C or once stdin is closed; the caller should
    /// treat that as the operator backing out.
    pub async fn next_line(&mut self) -> Option<String> {
        if self.closed {
            return None;
        }
        match self.rx.recv().await {
            Some(OperatorInput::Line(line)) => Some(line),
            Some(OperatorInput::Interrupt) => None,
            Some(OperatorInput::Eof) | None => {
                self.closed = true;
                None
            }
        }
    }

    /// Reads prompt answers until one parses as a command.
    async fn read_command(&mut self, expected: &str, show_prompt: impl Fn()) -> OperatorCommand {
        loop {
            // Let queued progress output render before the prompt.
            tokio::task::yield_now().await;
            show_prompt();

            let Some(line) = self.next_line().await else {
                return OperatorCommand::Quit;
            };
            match OperatorCommand::parse(&line) {
                Some(command) => return command,
                None => Display::show_invalid_answer(&line, expected),
            }
        }
    }
}

impl CommandSource for TerminalInput {
    async fn phase_start(&mut self, cycle: u32, total_cycles: u32) -> OperatorCommand {
        self.read_command("s, p or q", || Display::prompt_phase_start(cycle, total_cycles))
            .await
    }

    async fn paused(&mut self, _cycle: u32, remaining_seconds: u32) -> OperatorCommand {
        self.read_command("r or q", || Display::prompt_paused(remaining_seconds))
            .await
    }

    fn interrupt_requested(&mut self) -> bool {
        let mut interrupted = false;
        while let Ok(input) = self.rx.try_recv() {
            match input {
                OperatorInput::Line(_) | OperatorInput::Interrupt => interrupted = true,
                OperatorInput::Eof => self.closed = true,
            }
        }
        interrupted
    }
}
