//! keycalc - button-driven calculator accumulator
//!
//! The crate models the state behind a classic on-screen calculator: digits
//! are typed into a current operand, an operator button parks that operand on
//! the left, and `=` applies the pending operation. Chains are evaluated left
//! to right (`2 + 3 * 4` is `20`), never by precedence.
//!
//! Nothing here knows about a particular UI. A view maps its buttons to
//! [`input::Key`]s, presses them on an [`Accumulator`], and writes the two
//! returned [`display::DisplayLines`] strings.
//!
//! # Example
//!
//! ```rust
//! use keycalc::prelude::*;
//!
//! let mut calc = Accumulator::new();
//! calc.press_sequence(["1", "2", "3", "4", "+", "6"]);
//! assert_eq!(calc.render().previous_line, "1,234 +");
//!
//! let lines = calc.press(Key::Equals);
//! assert_eq!(lines.current_line, "1,240");
//! assert_eq!(calc.previous_operand(), "1,234 + 6=");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]

pub mod config;
pub mod core;
pub mod display;
pub mod input;

pub use crate::core::{Accumulator, CalcError, CalcResult, Operand, Operation};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{CalculatorConfig, NumberLocale};
    pub use crate::core::{Accumulator, CalcError, CalcResult, Operand, Operation};
    pub use crate::display::{format_text, format_value, DisplayLines};
    pub use crate::input::Key;
}
