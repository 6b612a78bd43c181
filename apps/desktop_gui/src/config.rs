//! Window and demo settings: defaults, then an optional TOML file, then environment.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use compute::{Language, Variant};
use serde::Deserialize;

pub const CONFIG_PATH_ENV: &str = "LONG_COMPUTE_CONFIG";
const CONFIG_FILE_NAME: &str = "long_compute.toml";

const MIN_FONT_SIZE: f32 = 8.0;
const MAX_FONT_SIZE: f32 = 96.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub variant: Variant,
    pub language: Language,
    pub initial_input: String,
    pub font_size: f32,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            variant: Variant::Plain,
            language: Language::English,
            initial_input: "123".into(),
            font_size: 35.0,
            window_width: 700.0,
            window_height: 450.0,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileSettings {
    variant: Option<Variant>,
    language: Option<Language>,
    initial_input: Option<String>,
    font_size: Option<f32>,
    window_width: Option<f32>,
    window_height: Option<f32>,
}

pub fn load_settings() -> Settings {
    let path = std::env::var(CONFIG_PATH_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|dir| dir.join(CONFIG_FILE_NAME)));

    load_settings_from(path.as_deref(), |name| std::env::var(name).ok())
}

pub fn load_settings_from(
    config_path: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let mut settings = Settings::default();

    if let Some(path) = config_path.filter(|path| path.exists()) {
        match read_file_settings(path) {
            Ok(file_cfg) => apply_file_settings(&mut settings, file_cfg),
            Err(err) => tracing::warn!("ignoring settings file: {err:#}"),
        }
    }

    if let Some(v) = env("LONG_COMPUTE__VARIANT") {
        apply_variant(&mut settings, &v);
    }
    if let Some(v) = env("LONG_COMPUTE__LANGUAGE") {
        apply_language(&mut settings, &v);
    }
    if let Some(v) = env("LONG_COMPUTE__INITIAL_INPUT") {
        settings.initial_input = v;
    }
    if let Some(v) = env("LONG_COMPUTE__FONT_SIZE") {
        match v.trim().parse::<f32>() {
            Ok(size) => apply_font_size(&mut settings, size),
            Err(_) => tracing::warn!(value = %v, "LONG_COMPUTE__FONT_SIZE is not a number"),
        }
    }

    settings
}

fn read_file_settings(path: &Path) -> anyhow::Result<FileSettings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
    toml::from_str::<FileSettings>(&raw)
        .with_context(|| format!("failed to parse settings file '{}'", path.display()))
}

fn apply_file_settings(settings: &mut Settings, file_cfg: FileSettings) {
    if let Some(v) = file_cfg.variant {
        settings.variant = v;
    }
    if let Some(v) = file_cfg.language {
        settings.language = v;
    }
    if let Some(v) = file_cfg.initial_input {
        settings.initial_input = v;
    }
    if let Some(v) = file_cfg.font_size {
        apply_font_size(settings, v);
    }
    if let Some(v) = file_cfg.window_width.filter(|v| *v > 0.0) {
        settings.window_width = v;
    }
    if let Some(v) = file_cfg.window_height.filter(|v| *v > 0.0) {
        settings.window_height = v;
    }
}

fn apply_variant(settings: &mut Settings, value: &str) {
    match Variant::from_name(value) {
        Some(variant) => settings.variant = variant,
        None => tracing::warn!(value, "unknown variant; keeping {}", settings.variant.label()),
    }
}

fn apply_language(settings: &mut Settings, value: &str) {
    match Language::from_code(value) {
        Some(language) => settings.language = language,
        None => tracing::warn!(value, "unknown language; keeping {:?}", settings.language),
    }
}

fn apply_font_size(settings: &mut Settings, size: f32) {
    if size.is_finite() {
        settings.font_size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
