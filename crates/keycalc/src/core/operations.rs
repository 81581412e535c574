//! The five binary operations a keypad can select

use crate::core::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe operation enum; an unsupported symbol can never become pending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Addition (+)
    #[serde(rename = "+")]
    Add,
    /// Subtraction (-)
    #[serde(rename = "-")]
    Subtract,
    /// Multiplication (*)
    #[serde(rename = "*")]
    Multiply,
    /// Division (/)
    #[serde(rename = "/")]
    Divide,
    /// Power (^)
    #[serde(rename = "^")]
    Power,
}

impl Operation {
    /// All operations in keypad order
    pub const ALL: [Self; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
    ];

    /// Returns the operator symbol used in display lines and trails
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
        }
    }

    /// Parses an operator symbol.
    ///
    /// Only the exact symbols `+ - * / ^` are recognized; button glyphs such
    /// as `×` are handled by [`Key::from_label`](crate::input::Key::from_label).
    pub fn from_symbol(symbol: &str) -> CalcResult<Self> {
        match symbol {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            "*" => Ok(Self::Multiply),
            "/" => Ok(Self::Divide),
            "^" => Ok(Self::Power),
            _ => Err(CalcError::UnknownOperator {
                symbol: symbol.to_string(),
            }),
        }
    }

    /// Applies the operation with IEEE-754 semantics.
    ///
    /// Division by zero yields an infinity or NaN rather than an error.
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
            Self::Power => lhs.powf(rhs),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s)
    }
}
