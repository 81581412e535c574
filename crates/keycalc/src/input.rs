//! Calculator keys
//!
//! A view maps each of its buttons onto a [`Key`] and calls
//! [`Accumulator::press`], then writes the returned [`DisplayLines`].

use crate::core::{Accumulator, CalcError, CalcResult, Operation};
use crate::display::DisplayLines;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One calculator button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// A digit `0`-`9` or the decimal point
    Digit(char),
    /// An operator button
    Operator(Operation),
    /// `=`
    Equals,
    /// `AC`
    Clear,
    /// `DEL`
    Delete,
}

impl Key {
    /// Every key on a standard keypad: ten digits, `.`, five operators, `=`, `AC`, `DEL`
    #[must_use]
    pub fn keypad() -> Vec<Self> {
        ('0'..='9')
            .chain(std::iter::once('.'))
            .map(Self::Digit)
            .chain(Operation::ALL.into_iter().map(Self::Operator))
            .chain([Self::Equals, Self::Clear, Self::Delete])
            .collect()
    }

    /// Parses a button label.
    ///
    /// Labels are trimmed and the word labels are case-insensitive. The
    /// typographic glyphs `−`, `×` and `÷` name the matching operators.
    pub fn from_label(label: &str) -> CalcResult<Self> {
        let trimmed = label.trim();
        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_digit() || c == '.' {
                return Ok(Self::Digit(c));
            }
        }
        let symbol = match trimmed {
            "\u{2212}" => "-",
            "\u{00d7}" => "*",
            "\u{00f7}" => "/",
            other => other,
        };
        if let Ok(operation) = Operation::from_symbol(symbol) {
            return Ok(Self::Operator(operation));
        }

        match trimmed.to_ascii_uppercase().as_str() {
            "=" | "ENTER" => Ok(Self::Equals),
            "C" | "AC" | "CLEAR" | "ESC" => Ok(Self::Clear),
            "DEL" | "DELETE" | "BACKSPACE" | "\u{232b}" => Ok(Self::Delete),
            _ => Err(CalcError::UnknownKey {
                label: label.to_string(),
            }),
        }
    }

    /// Returns the button label
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(c) => c.to_string(),
            Self::Operator(operation) => operation.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "AC".to_string(),
            Self::Delete => "DEL".to_string(),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for Key {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

impl Accumulator {
    /// Applies one key press and returns the lines to display
    pub fn press(&mut self, key: Key) -> DisplayLines {
        match key {
            Key::Digit(c) => self.append_digit(c.encode_utf8(&mut [0; 4])),
            Key::Operator(operation) => self.choose_operation(operation),
            Key::Equals => self.compute(),
            Key::Clear => self.clear(),
            Key::Delete => self.delete_last_char(),
        }
        self.render()
    }

    /// Parses a button label and presses it; an unknown label changes nothing
    pub fn press_label(&mut self, label: &str) -> DisplayLines {
        match Key::from_label(label) {
            Ok(key) => self.press(key),
            Err(err) => {
                tracing::debug!(%err, "key ignored");
                self.render()
            }
        }
    }

    /// Presses each label in turn and returns the final display
    pub fn press_sequence<'a, I>(&mut self, labels: I) -> DisplayLines
    where
        I: IntoIterator<Item = &'a str>,
    {
        labels
            .into_iter()
            .fold(self.render(), |_, label| self.press_label(label))
    }
}
