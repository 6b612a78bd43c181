//! User-visible strings for the demo window, in English and German.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::input::InputStyle;
use crate::stopwatch::whole_seconds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en", alias = "english")]
    English,
    #[serde(rename = "de", alias = "german", alias = "deutsch")]
    German,
}

impl Language {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Some(Self::English),
            "de" | "german" | "deutsch" => Some(Self::German),
            _ => None,
        }
    }

    pub fn grouping_separator(self) -> char {
        match self {
            Self::English => ',',
            Self::German => '.',
        }
    }
}

/// The two behaviours of the demo: bare digits, or locale-grouped numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    #[default]
    Plain,
    Grouped,
}

impl Variant {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "plain" => Some(Self::Plain),
            "grouped" => Some(Self::Grouped),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Grouped => "grouped",
        }
    }

    pub fn input_style(self) -> InputStyle {
        match self {
            Self::Plain => InputStyle::Plain,
            Self::Grouped => InputStyle::Grouped,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    language: Language,
    variant: Variant,
}

impl Messages {
    pub fn new(language: Language, variant: Variant) -> Self {
        Self { language, variant }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn window_title(&self) -> String {
        match self.language {
            Language::English => format!("Long Computation ({})", self.variant.label()),
            Language::German => format!("Lange Berechnung ({})", self.variant.label()),
        }
    }

    pub fn input_hint(&self) -> &'static str {
        match self.language {
            Language::English => "Enter a number here",
            Language::German => "Hier Zahl eingeben",
        }
    }

    pub fn main_thread_button(&self) -> &'static str {
        match self.language {
            Language::English => "Compute on main thread",
            Language::German => "Berechnen im Main-Thread",
        }
    }

    pub fn background_thread_button(&self) -> &'static str {
        match self.language {
            Language::English => "Compute on background thread",
            Language::German => "Berechnen in eigenem Thread",
        }
    }

    pub fn initial_result(&self) -> &'static str {
        match self.language {
            Language::English => "<Result>",
            Language::German => "<Ergebnis>",
        }
    }

    pub fn missing_input(&self) -> &'static str {
        match self.language {
            Language::English => "Please enter a number!",
            Language::German => "Bitte eine Zahl eingeben!",
        }
    }

    pub fn invalid_input(&self, raw: &str) -> String {
        match self.language {
            Language::English => format!("Invalid number \"{raw}\" entered."),
            Language::German => format!("Unzulässige Zahl \"{raw}\" eingegeben."),
        }
    }

    pub fn calculation_started(&self, input: u32) -> String {
        match (self.variant, self.language) {
            (Variant::Plain, Language::English) => {
                format!("Calculation started for {} ...", self.number(u64::from(input)))
            }
            (Variant::Plain, Language::German) => {
                format!("Berechnung gestartet für {} ...", self.number(u64::from(input)))
            }
            (Variant::Grouped, Language::English) => "Calculation running ...".to_string(),
            (Variant::Grouped, Language::German) => "Berechnung läuft ...".to_string(),
        }
    }

    pub fn calculation_finished(&self, result: u64, elapsed: Duration) -> String {
        let seconds = whole_seconds(elapsed);
        match self.language {
            Language::English => {
                format!("Result: {} (Duration: {seconds}s)", self.number(result))
            }
            Language::German => format!("Ergebnis: {} (Dauer: {seconds}s)", self.number(result)),
        }
    }

    pub fn spawn_failed(&self) -> &'static str {
        match self.language {
            Language::English => "Could not start background calculation.",
            Language::German => "Hintergrundberechnung konnte nicht gestartet werden.",
        }
    }

    pub fn number(&self, value: u64) -> String {
        match self.variant {
            Variant::Plain => value.to_string(),
            Variant::Grouped => group_digits(value, self.language.grouping_separator()),
        }
    }
}

/// Inserts `separator` between every group of three digits, counted from the right.
pub fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn groups_digits_from_the_right() {
        assert_eq!(group_digits(0, ','), "0");
        assert_eq!(group_digits(999, ','), "999");
        assert_eq!(group_digits(1_000, ','), "1,000");
        assert_eq!(group_digits(1_860_867, '.'), "1.860.867");
        assert_eq!(group_digits(125_000, ','), "125,000");
    }

    #[test]
    fn finished_message_matches_display_format() {
        let plain = Messages::new(Language::English, Variant::Plain);
        assert_eq!(
            plain.calculation_finished(1_860_867, Duration::from_millis(2_400)),
            "Result: 1860867 (Duration: 2s)"
        );

        let grouped = Messages::new(Language::German, Variant::Grouped);
        assert_eq!(
            grouped.calculation_finished(1_860_867, Duration::from_millis(300)),
            "Ergebnis: 1.860.867 (Dauer: 0s)"
        );
    }

    #[test]
    fn start_message_depends_on_variant() {
        let plain = Messages::new(Language::English, Variant::Plain);
        assert_eq!(plain.calculation_started(123), "Calculation started for 123 ...");

        let grouped = Messages::new(Language::English, Variant::Grouped);
        assert_eq!(grouped.calculation_started(123), "Calculation running ...");
    }

    #[test]
    fn invalid_input_echoes_raw_text() {
        let messages = Messages::new(Language::English, Variant::Plain);
        assert_eq!(messages.invalid_input("abc"), "Invalid number \"abc\" entered.");
    }

    #[test]
    fn parses_language_and_variant_names() {
        assert_eq!(Language::from_code("DE"), Some(Language::German));
        assert_eq!(Language::from_code(" en "), Some(Language::English));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Variant::from_name("Grouped"), Some(Variant::Grouped));
        assert_eq!(Variant::from_name("fancy"), None);
    }
}
