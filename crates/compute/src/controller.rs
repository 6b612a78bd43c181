//! Dispatch of the cube onto the UI thread or a background worker.
//!
//! `Controller` owns the result text and the enabled state of both trigger
//! buttons. It is created and driven on the UI thread; the worker only ever
//! receives the input value and a channel sender, so every write to visible
//! state happens in a `Controller` method.

use std::{io, thread::JoinHandle, time::Duration};

use crossbeam_channel::{bounded, Receiver, Sender, TryRecvError};

use crate::cube::cube_brute_force;
use crate::input::{parse_input, InputError};
use crate::messages::Messages;
use crate::stopwatch::Stopwatch;
use crate::worker::{spawn_cube_worker, Completion};

const COMPLETION_QUEUE_CAPACITY: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running { input: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Input was empty or unparsable; nothing was computed.
    Rejected(InputError),
    /// The blocking run finished.
    Finished { result: u64, elapsed: Duration },
    /// A worker thread is computing the cube.
    Started { input: u32 },
    /// A background run is still in flight.
    Busy,
    /// The worker thread could not be created.
    SpawnFailed,
}

pub struct Controller {
    messages: Messages,
    display: String,
    controls_enabled: bool,
    phase: Phase,
    completion_tx: Sender<Completion>,
    completion_rx: Receiver<Completion>,
}

impl Controller {
    pub fn new(messages: Messages) -> Self {
        let (completion_tx, completion_rx) = bounded(COMPLETION_QUEUE_CAPACITY);
        Self {
            messages,
            display: messages.initial_result().to_string(),
            controls_enabled: true,
            phase: Phase::Idle,
            completion_tx,
            completion_rx,
        }
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn controls_enabled(&self) -> bool {
        self.controls_enabled
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    /// Computes the cube right here, blocking the calling (UI) thread.
    pub fn run_on_ui_thread(&mut self, raw: &str) -> RunOutcome {
        if self.is_running() {
            tracing::warn!("ignoring main-thread run while a background run is in flight");
            return RunOutcome::Busy;
        }
        let input = match self.acquire_input(raw) {
            Ok(input) => input,
            Err(err) => return RunOutcome::Rejected(err),
        };

        tracing::info!(input, "calculation started on ui thread");
        let watch = Stopwatch::start();
        let result = cube_brute_force(input);
        let elapsed = watch.elapsed();
        tracing::info!(
            input,
            result,
            elapsed_ms = elapsed.as_millis() as u64,
            "ui thread calculation finished"
        );

        self.display = self.messages.calculation_finished(result, elapsed);
        RunOutcome::Finished { result, elapsed }
    }

    /// Hands the cube to a new worker thread and returns immediately.
    ///
    /// `wake` runs on the worker after its completion is queued; GUI callers
    /// pass their repaint request here.
    pub fn run_in_background<F>(&mut self, raw: &str, wake: F) -> RunOutcome
    where
        F: FnOnce() + Send + 'static,
    {
        self.run_in_background_with(raw, wake, spawn_cube_worker)
    }

    pub(crate) fn run_in_background_with<F, S>(
        &mut self,
        raw: &str,
        wake: F,
        spawn: S,
    ) -> RunOutcome
    where
        F: FnOnce() + Send + 'static,
        S: FnOnce(u32, Sender<Completion>, F) -> io::Result<JoinHandle<()>>,
    {
        if self.is_running() {
            tracing::warn!("ignoring background run while another one is in flight");
            return RunOutcome::Busy;
        }
        let input = match self.acquire_input(raw) {
            Ok(input) => input,
            Err(err) => return RunOutcome::Rejected(err),
        };

        self.controls_enabled = false;
        self.phase = Phase::Running { input };

        match spawn(input, self.completion_tx.clone(), wake) {
            Ok(_detached) => {
                self.display = self.messages.calculation_started(input);
                tracing::info!(input, "calculation handed to background worker");
                RunOutcome::Started { input }
            }
            Err(err) => {
                tracing::error!(input, "failed to spawn background worker: {err}");
                self.controls_enabled = true;
                self.phase = Phase::Idle;
                self.display = self.messages.spawn_failed().to_string();
                RunOutcome::SpawnFailed
            }
        }
    }

    /// Applies every completion the worker has posted. Call once per frame.
    pub fn process_completions(&mut self) -> usize {
        let mut applied = 0;
        loop {
            match self.completion_rx.try_recv() {
                Ok(completion) => {
                    self.apply_completion(completion);
                    applied += 1;
                }
                Err(TryRecvError::Empty) => break,
                // the controller keeps its own sender alive
                Err(TryRecvError::Disconnected) => break,
            }
        }
        applied
    }

    fn apply_completion(&mut self, completion: Completion) {
        if self.phase != (Phase::Running {
            input: completion.input,
        }) {
            tracing::warn!(
                input = completion.input,
                phase = ?self.phase,
                "completion does not match the running calculation"
            );
        }
        self.display = self
            .messages
            .calculation_finished(completion.result, completion.elapsed);
        self.controls_enabled = true;
        self.phase = Phase::Idle;
        tracing::debug!(input = completion.input, "background result applied");
    }

    fn acquire_input(&mut self, raw: &str) -> Result<u32, InputError> {
        let style = self.messages.variant().input_style();
        match parse_input(raw, style, self.messages.language()) {
            Ok(input) => Ok(input),
            Err(err) => {
                self.display = err.display_message(&self.messages);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
