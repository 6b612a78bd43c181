//! Background execution of the cube, one thread per run.

use std::{
    io,
    thread::{self, JoinHandle},
    time::Duration,
};

use crossbeam_channel::Sender;

use crate::cube::cube_brute_force;
use crate::stopwatch::Stopwatch;

/// Everything the worker hands back to the UI thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub input: u32,
    pub result: u64,
    pub elapsed: Duration,
}

/// Runs the cube on a fresh `cube-worker` thread.
///
/// The completion is sent on `completion_tx` first; `wake` is invoked afterwards
/// so the receiving loop always finds the message once it is woken.
pub fn spawn_cube_worker<F>(
    input: u32,
    completion_tx: Sender<Completion>,
    wake: F,
) -> io::Result<JoinHandle<()>>
where
    F: FnOnce() + Send + 'static,
{
    thread::Builder::new()
        .name("cube-worker".to_string())
        .spawn(move || {
            tracing::debug!(input, "background calculation started");
            let watch = Stopwatch::start();
            let result = cube_brute_force(input);
            let elapsed = watch.elapsed();
            tracing::info!(
                input,
                result,
                elapsed_ms = elapsed.as_millis() as u64,
                "background calculation finished"
            );

            if completion_tx
                .send(Completion {
                    input,
                    result,
                    elapsed,
                })
                .is_err()
            {
                tracing::warn!(input, "ui side went away before the result arrived");
                return;
            }
            wake();
        })
}
