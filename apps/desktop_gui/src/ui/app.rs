use std::time::Duration;

use compute::{Controller, Messages};
use eframe::egui;

use crate::config::Settings;
use crate::controller::{events::UiAction, orchestration::dispatch_ui_action};
use crate::ui::theme;

/// Poll interval while a worker is running, in case its wake-up lands between frames.
const RUNNING_REPAINT_INTERVAL: Duration = Duration::from_millis(250);

pub struct LongComputeApp {
    controller: Controller,
    input: String,
    font_size: f32,
    style_applied: bool,
}

impl LongComputeApp {
    pub fn new(settings: &Settings) -> Self {
        let messages = Messages::new(settings.language, settings.variant);
        Self {
            controller: Controller::new(messages),
            input: settings.initial_input.clone(),
            font_size: settings.font_size,
            style_applied: false,
        }
    }

    fn apply_style_if_needed(&mut self, ctx: &egui::Context) {
        if self.style_applied {
            return;
        }
        theme::apply_demo_style(ctx, self.font_size);
        self.style_applied = true;
    }

    fn show_window_contents(&mut self, ui: &mut egui::Ui) -> Option<UiAction> {
        let messages = *self.controller.messages();
        let enabled = self.controller.controls_enabled();
        let full_width = ui.available_width();
        let mut action = None;

        ui.vertical_centered(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.input)
                    .id_salt("number_input")
                    .hint_text(messages.input_hint())
                    .horizontal_align(egui::Align::Center)
                    .desired_width(full_width),
            );

            let main_thread = egui::Button::new(messages.main_thread_button())
                .min_size(egui::vec2(full_width, 0.0));
            if ui.add_enabled(enabled, main_thread).clicked() {
                action = Some(UiAction::ComputeOnUiThread);
            }

            let background = egui::Button::new(messages.background_thread_button())
                .min_size(egui::vec2(full_width, 0.0));
            if ui.add_enabled(enabled, background).clicked() {
                action = Some(UiAction::ComputeInBackground);
            }

            egui::Frame::new()
                .fill(theme::RESULT_BACKGROUND)
                .inner_margin(egui::Margin::symmetric(12, 8))
                .show(ui, |ui| {
                    ui.set_min_width(full_width - 24.0);
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new(self.controller.display())
                                .color(theme::RESULT_TEXT),
                        );
                    });
                });
        });

        action
    }

    fn handle_action(&mut self, ctx: &egui::Context, action: UiAction) {
        let repaint_ctx = ctx.clone();
        dispatch_ui_action(&mut self.controller, action, &self.input, move || {
            repaint_ctx.request_repaint();
        });
        // the blocking path returns with the result already written
        ctx.request_repaint();
    }
}

impl eframe::App for LongComputeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.process_completions();
        self.apply_style_if_needed(ctx);

        let action = egui::CentralPanel::default()
            .show(ctx, |ui| self.show_window_contents(ui))
            .inner;

        if let Some(action) = action {
            self.handle_action(ctx, action);
        }

        if self.controller.is_running() {
            ctx.request_repaint_after(RUNNING_REPAINT_INTERVAL);
        }
    }
}
