use super::{load_settings_from, Settings};

use std::{collections::HashMap, fs};

use compute::{Language, Variant};

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

#[test]
fn defaults_without_file_or_env() {
    let settings = load_settings_from(None, env_from(&[]));
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.initial_input, "123");
    assert_eq!(settings.variant, Variant::Plain);
    assert_eq!(settings.language, Language::English);
}

#[test]
fn missing_file_is_ignored() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.toml");
    let settings = load_settings_from(Some(path.as_path()), env_from(&[]));
    assert_eq!(settings, Settings::default());
}

#[test]
fn reads_values_from_toml_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("long_compute.toml");
    fs::write(
        &path,
        r#"
variant = "grouped"
language = "de"
initial_input = "1.000"
font_size = 20.0
window_width = 800.0
"#,
    )
    .expect("write settings");

    let settings = load_settings_from(Some(path.as_path()), env_from(&[]));
    assert_eq!(settings.variant, Variant::Grouped);
    assert_eq!(settings.language, Language::German);
    assert_eq!(settings.initial_input, "1.000");
    assert_eq!(settings.font_size, 20.0);
    assert_eq!(settings.window_width, 800.0);
    assert_eq!(settings.window_height, Settings::default().window_height);
}

#[test]
fn environment_overrides_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("long_compute.toml");
    fs::write(&path, "variant = \"grouped\"\nlanguage = \"de\"\n").expect("write settings");

    let settings = load_settings_from(
        Some(path.as_path()),
        env_from(&[
            ("LONG_COMPUTE__VARIANT", "plain"),
            ("LONG_COMPUTE__INITIAL_INPUT", "50"),
            ("LONG_COMPUTE__FONT_SIZE", "200"),
        ]),
    );
    assert_eq!(settings.variant, Variant::Plain);
    assert_eq!(settings.language, Language::German);
    assert_eq!(settings.initial_input, "50");
    assert_eq!(settings.font_size, 96.0);
}

#[test]
fn unknown_values_fall_back_to_defaults() {
    let settings = load_settings_from(
        None,
        env_from(&[
            ("LONG_COMPUTE__VARIANT", "sparkly"),
            ("LONG_COMPUTE__LANGUAGE", "klingon"),
            ("LONG_COMPUTE__FONT_SIZE", "large"),
        ]),
    );
    assert_eq!(settings, Settings::default());
}

#[test]
fn malformed_file_keeps_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("long_compute.toml");
    fs::write(&path, "variant = [not toml").expect("write settings");

    let settings = load_settings_from(Some(path.as_path()), env_from(&[]));
    assert_eq!(settings, Settings::default());
}

#[test]
fn unknown_variant_in_file_rejects_the_whole_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("long_compute.toml");
    fs::write(&path, "variant = \"sparkly\"\ninitial_input = \"7\"\n").expect("write settings");

    let settings = load_settings_from(Some(path.as_path()), env_from(&[]));
    assert_eq!(settings, Settings::default());
}

#[test]
fn file_accepts_the_same_language_names_as_the_environment() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("long_compute.toml");
    for (name, expected) in [
        ("en", Language::English),
        ("english", Language::English),
        ("de", Language::German),
        ("german", Language::German),
        ("deutsch", Language::German),
    ] {
        fs::write(&path, format!("language = \"{name}\"\n")).expect("write settings");
        let from_file = load_settings_from(Some(path.as_path()), env_from(&[]));
        assert_eq!(from_file.language, expected, "file: {name}");

        let from_env = load_settings_from(None, env_from(&[("LONG_COMPUTE__LANGUAGE", name)]));
        assert_eq!(from_env.language, expected, "env: {name}");
    }
}
