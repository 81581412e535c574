//! Display formatting for the two calculator lines
//!
//! Formatting is pure: it reads operand text or numbers and never touches
//! accumulator state. Only the integer part of a number is regrouped; typed
//! fractional digits are shown exactly as entered, trailing zeros included.

use crate::config::NumberLocale;
use crate::core::operand::{number_text, parse_leading, parse_literal};
use serde::{Deserialize, Serialize};

/// The two strings a view writes after every input event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayLines {
    /// Pending left operand and operator, e.g. `1,234 +`
    pub previous_line: String,
    /// The operand being typed or the last result
    pub current_line: String,
}

impl NumberLocale {
    /// Formats operand text for display.
    ///
    /// Returns an empty string unless the whole text is a number literal.
    #[must_use]
    pub fn format_text(&self, text: &str) -> String {
        if parse_literal(text).is_none() {
            return String::new();
        }

        let (integer, fraction) = match text.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (text, None),
        };

        let integer_display = parse_leading(integer)
            .map(|value| self.format_integer(value))
            .unwrap_or_default();

        match fraction {
            Some(fraction) => format!("{integer_display}{}{fraction}", self.decimal_separator),
            None => integer_display,
        }
    }

    /// Formats a numeric value for display; NaN formats as an empty string
    #[must_use]
    pub fn format_value(&self, value: f64) -> String {
        if value.is_nan() {
            return String::new();
        }
        self.format_text(&number_text(value))
    }

    fn format_integer(&self, value: f64) -> String {
        let sign = if value.is_sign_negative() { "-" } else { "" };
        if value.is_infinite() {
            return format!("{sign}\u{221e}");
        }

        let digits = format!("{}", value.abs().round());
        format!("{sign}{}", self.group_digits(&digits))
    }

    fn group_digits(&self, digits: &str) -> String {
        let size = self.group_size;
        if size == 0 || digits.len() <= size {
            return digits.to_string();
        }

        let mut grouped = String::with_capacity(digits.len() * 2);
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % size == 0 {
                grouped.push_str(&self.group_separator);
            }
            grouped.push(digit);
        }
        grouped
    }
}

/// Formats operand text with `en` separators
#[must_use]
pub fn format_text(text: &str) -> String {
    NumberLocale::en().format_text(text)
}

/// Formats a number with `en` separators
#[must_use]
pub fn format_value(value: f64) -> String {
    NumberLocale::en().format_value(value)
}
