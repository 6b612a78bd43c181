mod config;
mod controller;
mod ui;

use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::ui::LongComputeApp;

fn main() -> eframe::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let settings = config::load_settings();
    tracing::info!(
        variant = settings.variant.label(),
        language = ?settings.language,
        "starting long computation demo"
    );

    let title = compute::Messages::new(settings.language, settings.variant).window_title();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([400.0, 300.0]),
        centered: true,
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(LongComputeApp::new(&settings)))),
    )
}
