//! Operand buffers and the number-text rules shared with the display formatter
//!
//! An operand is kept as the literal the user typed (or the text of a computed
//! result). Two parsers read it back:
//!
//! - [`parse_leading`] takes the longest numeric prefix, so `"5."` is `5` and
//!   `"12abc"` is `12`. The accumulator uses it for arithmetic.
//! - [`parse_literal`] requires the whole text to be a number, treating blank
//!   text as zero. The formatter uses it to decide whether text is displayable.
//!
//! [`number_text`] turns a result back into operand text.

use serde::{Deserialize, Serialize};
use std::fmt;

const INFINITY: &str = "Infinity";

/// Text buffer for one side of a binary operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Operand(String);

impl Operand {
    /// Creates an empty operand
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an operand holding the canonical text of `value`
    #[must_use]
    pub fn from_value(value: f64) -> Self {
        Self(number_text(value))
    }

    /// Returns the raw operand text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if nothing has been entered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the text already holds a decimal point
    #[must_use]
    pub fn has_decimal_point(&self) -> bool {
        self.0.contains('.')
    }

    /// Appends a token verbatim
    pub fn push_token(&mut self, token: &str) {
        self.0.push_str(token);
    }

    /// Removes the last character, returning it
    pub fn pop(&mut self) -> Option<char> {
        self.0.pop()
    }

    /// Empties the buffer
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Reads the operand as a number using the leading-prefix rule
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        parse_leading(&self.0)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Operand {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

/// Parses the longest numeric prefix of `text`.
///
/// Leading whitespace and one sign are allowed. Returns `None` when no digit
/// is found, which covers empty text, a lone `.` and a lone sign.
#[must_use]
pub fn parse_leading(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if s[end..].starts_with(INFINITY) {
        return Some(signed_infinity(s.starts_with('-')));
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    // An exponent only counts if it carries digits
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Parses `text` as a whole number literal.
///
/// Surrounding whitespace is ignored and blank text reads as zero. Accepts a
/// signed decimal literal with optional exponent, a signed `Infinity`, or an
/// unsigned `0x`/`0o`/`0b` integer; anything else is rejected.
#[must_use]
pub fn parse_literal(text: &str) -> Option<f64> {
    let t = text.trim();
    if t.is_empty() {
        return Some(0.0);
    }
    if let Some(value) = parse_radix_literal(t) {
        return Some(value);
    }

    let unsigned = t.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(t);
    if unsigned == INFINITY {
        return Some(signed_infinity(t.starts_with('-')));
    }
    let literal_bytes = unsigned
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !literal_bytes {
        return None;
    }

    t.parse::<f64>().ok()
}

/// Canonical text of a number.
///
/// Shortest round-trip digits; exponent notation (`1e+21`, `1e-7`) outside
/// `[1e-6, 1e21)`; `Infinity`, `-Infinity` and `NaN` for the special values.
/// Negative zero prints as `0`.
#[must_use]
pub fn number_text(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 {
            INFINITY.to_string()
        } else {
            format!("-{INFINITY}")
        };
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{value}");
    }

    let exp = format!("{value:e}");
    match exp.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exp,
    }
}

fn parse_radix_literal(text: &str) -> Option<f64> {
    let (radix, digits) = match text.get(..2)? {
        "0x" | "0X" => (16, &text[2..]),
        "0o" | "0O" => (8, &text[2..]),
        "0b" | "0B" => (2, &text[2..]),
        _ => return None,
    };
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0, |acc: f64, c| {
        c.to_digit(radix)
            .map(|d| acc.mul_add(f64::from(radix), f64::from(d)))
    })
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

const fn signed_infinity(negative: bool) -> f64 {
    if negative {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    }
}
