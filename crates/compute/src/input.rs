//! Validation of the text typed into the input field.

use thiserror::Error;

use crate::messages::{Language, Messages};

/// Largest accepted input, matching the 32-bit signed range of the original demo.
pub const MAX_INPUT: u32 = i32::MAX as u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputStyle {
    /// ASCII digits only, with an optional leading `+`.
    Plain,
    /// Digits, optionally split into thousands with the language's separator.
    Grouped,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("no number entered")]
    Missing,
    #[error("invalid number {raw:?}")]
    Invalid { raw: String },
}

impl InputError {
    /// Text shown in the result label for this rejection.
    pub fn display_message(&self, messages: &Messages) -> String {
        match self {
            Self::Missing => messages.missing_input().to_string(),
            Self::Invalid { raw } => messages.invalid_input(raw),
        }
    }
}

pub fn parse_input(raw: &str, style: InputStyle, language: Language) -> Result<u32, InputError> {
    let text = raw.trim();
    if text.is_empty() {
        tracing::debug!("rejecting empty input");
        return Err(InputError::Missing);
    }

    let digits = match style {
        InputStyle::Plain => {
            let unsigned = text.strip_prefix('+').unwrap_or(text);
            is_digits(unsigned).then(|| unsigned.to_string())
        }
        InputStyle::Grouped => strip_grouping(text, language.grouping_separator()),
    };

    let value = digits
        .and_then(|digits| digits.parse::<u64>().ok())
        .filter(|value| *value <= u64::from(MAX_INPUT))
        .and_then(|value| u32::try_from(value).ok());

    match value {
        Some(value) => Ok(value),
        None => {
            tracing::debug!(raw = text, ?style, "rejecting invalid input");
            Err(InputError::Invalid {
                raw: text.to_string(),
            })
        }
    }
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn strip_grouping(text: &str, separator: char) -> Option<String> {
    let mut groups = text.split(separator);
    let first = groups.next()?;
    if !is_digits(first) {
        return None;
    }

    let rest: Vec<&str> = groups.collect();
    if rest.is_empty() {
        return Some(first.to_string());
    }
    if first.len() > 3 || rest.iter().any(|group| group.len() != 3 || !is_digits(group)) {
        return None;
    }

    let mut digits = first.to_string();
    for group in rest {
        digits.push_str(group);
    }
    Some(digits)
}

#[cfg(test)]
#[path = "tests/input_tests.rs"]
mod tests;
