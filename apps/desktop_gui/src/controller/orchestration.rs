//! Routing of UI actions to the blocking or background calculation path.

use compute::{Controller, RunOutcome};

use crate::controller::events::UiAction;

pub fn dispatch_ui_action<W>(
    controller: &mut Controller,
    action: UiAction,
    raw_input: &str,
    wake: W,
) -> RunOutcome
where
    W: FnOnce() + Send + 'static,
{
    tracing::debug!(action = action.name(), "dispatching ui action");
    let outcome = match action {
        UiAction::ComputeOnUiThread => controller.run_on_ui_thread(raw_input),
        UiAction::ComputeInBackground => controller.run_in_background(raw_input, wake),
    };

    match &outcome {
        RunOutcome::Rejected(err) => {
            tracing::info!(action = action.name(), "input rejected: {err}");
        }
        RunOutcome::Busy => {
            tracing::warn!(action = action.name(), "calculation already running");
        }
        _ => {}
    }
    outcome
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use compute::{Controller, InputError, Language, Messages, RunOutcome, Variant};
    use crossbeam_channel::bounded;

    use super::dispatch_ui_action;
    use crate::controller::events::UiAction;

    #[test]
    fn ui_thread_action_computes_inline() {
        let mut controller = Controller::new(Messages::new(Language::English, Variant::Plain));
        let outcome =
            dispatch_ui_action(&mut controller, UiAction::ComputeOnUiThread, "4", || {});
        assert!(matches!(outcome, RunOutcome::Finished { result: 64, .. }));
        assert!(controller.display().starts_with("Result: 64 (Duration: 0s)"));
    }

    #[test]
    fn background_action_wakes_after_completion() {
        let mut controller = Controller::new(Messages::new(Language::English, Variant::Plain));
        let (wake_tx, wake_rx) = bounded(1);
        let outcome = dispatch_ui_action(
            &mut controller,
            UiAction::ComputeInBackground,
            "12",
            move || {
                let _ = wake_tx.send(());
            },
        );
        assert_eq!(outcome, RunOutcome::Started { input: 12 });
        assert!(!controller.controls_enabled());

        wake_rx
            .recv_timeout(Duration::from_secs(10))
            .expect("worker wake");
        controller.process_completions();
        assert!(controller.controls_enabled());
        assert!(controller.display().starts_with("Result: 1728 "));
    }

    #[test]
    fn empty_input_short_circuits_both_actions() {
        let mut controller = Controller::new(Messages::new(Language::English, Variant::Plain));
        for action in [UiAction::ComputeOnUiThread, UiAction::ComputeInBackground] {
            let outcome = dispatch_ui_action(&mut controller, action, "", || {});
            assert_eq!(outcome, RunOutcome::Rejected(InputError::Missing));
            assert!(controller.controls_enabled());
        }
    }
}
