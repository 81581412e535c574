//! Keypad accumulator state machine
//!
//! One operand is being typed while at most one operation waits for it:
//!
//! ```text
//!   current ──choose_operation──▶ pending(left, op) + current
//!      ▲                                   │
//!      └──────────── compute ◀─────────────┘   (trail "a op b=")
//! ```
//!
//! Invalid input never fails; it leaves the state untouched and is logged at
//! `debug` level.

use crate::config::CalculatorConfig;
use crate::core::{Operand, Operation};
use crate::display::DisplayLines;
use tracing::{debug, trace};

/// Left operand waiting for its right-hand side
#[derive(Debug, Clone, PartialEq)]
struct Pending {
    left: Operand,
    operation: Operation,
}

/// Button-driven calculator state
#[derive(Debug, Clone, Default)]
pub struct Accumulator {
    current: Operand,
    pending: Option<Pending>,
    /// `"a op b="` of the last compute, until the next operation replaces it
    trail: Option<String>,
    /// Set by a successful compute, cleared by every other operation
    result_displayed: bool,
    config: CalculatorConfig,
}

impl Accumulator {
    /// Creates an accumulator with the default (`en`, permissive) configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an accumulator with a custom configuration
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the configuration
    #[must_use]
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Returns the operand being typed, or the text of the last result
    #[must_use]
    pub fn current_operand(&self) -> &str {
        self.current.as_str()
    }

    /// Returns the left-hand side as shown to the user.
    ///
    /// While an operation is pending this is the formatted left operand;
    /// after a compute it is the trail of the finished expression.
    #[must_use]
    pub fn previous_operand(&self) -> String {
        match (&self.pending, &self.trail) {
            (Some(pending), _) => self.config.locale.format_text(pending.left.as_str()),
            (None, Some(trail)) => trail.clone(),
            (None, None) => String::new(),
        }
    }

    /// Returns the pending operation
    #[must_use]
    pub fn operation(&self) -> Option<Operation> {
        self.pending.as_ref().map(|pending| pending.operation)
    }

    /// Returns true immediately after a successful compute
    #[must_use]
    pub fn result_displayed(&self) -> bool {
        self.result_displayed
    }

    /// Discards all input and any pending operation
    pub fn clear(&mut self) {
        trace!("clear");
        self.current.clear();
        self.pending = None;
        self.trail = None;
        self.result_displayed = false;
    }

    /// Appends a token to the current operand.
    ///
    /// A second decimal point is ignored. Typing right after a result starts
    /// a fresh expression. A declined token still ends the result state, so
    /// `.` then `3` after a `0.25` result gives `0.253`.
    pub fn append_digit(&mut self, token: &str) {
        let fresh = std::mem::take(&mut self.result_displayed);

        if self.config.strict_tokens && !is_keypad_token(token) {
            debug!(token, "ignoring non-keypad token");
            return;
        }
        if token == "." && self.current.has_decimal_point() {
            debug!(operand = %self.current, "operand already has a decimal point");
            return;
        }

        if fresh {
            self.clear();
        }
        self.current.push_token(token);
        trace!(operand = %self.current, "appended {token:?}");
    }

    /// Selects the operation to apply to the current operand.
    ///
    /// A pending operation is computed first, giving left-to-right chaining
    /// with no precedence. Nothing happens while the current operand is empty.
    pub fn choose_operation(&mut self, operation: Operation) {
        self.result_displayed = false;

        if self.current.is_empty() {
            debug!(%operation, "no operand to apply operation to");
            return;
        }
        if self.pending.is_some() {
            self.compute_pending();
            self.result_displayed = false;
        }

        let left = std::mem::take(&mut self.current);
        trace!(%left, %operation, "operation pending");
        self.pending = Some(Pending { left, operation });
        self.trail = None;
    }

    /// Selects an operation by symbol; an unknown symbol changes nothing
    pub fn choose_operation_symbol(&mut self, symbol: &str) {
        match Operation::from_symbol(symbol) {
            Ok(operation) => self.choose_operation(operation),
            Err(err) => {
                self.result_displayed = false;
                debug!(%err, "operation rejected");
            }
        }
    }

    /// Applies the pending operation to the two operands.
    ///
    /// Nothing happens without a pending operation or when either operand
    /// does not read as a number.
    pub fn compute(&mut self) {
        self.result_displayed = self.compute_pending();
    }

    fn compute_pending(&mut self) -> bool {
        let Some(pending) = &self.pending else {
            debug!("no pending operation to compute");
            return false;
        };
        let (Some(lhs), Some(rhs)) = (pending.left.value(), self.current.value()) else {
            debug!(left = %pending.left, right = %self.current, "operand is not a number");
            return false;
        };

        let operation = pending.operation;
        let result = operation.apply(lhs, rhs);
        let locale = &self.config.locale;
        let trail = format!(
            "{} {operation} {}=",
            locale.format_value(lhs),
            locale.format_value(rhs)
        );
        trace!(%trail, result, "computed");

        self.current = Operand::from_value(result);
        self.pending = None;
        self.trail = Some(trail);
        true
    }

    /// Removes the last character of the current operand
    pub fn delete_last_char(&mut self) {
        self.result_displayed = false;
        if self.current.pop().is_none() {
            debug!("nothing to delete");
        }
    }

    /// Projects the state onto the two display lines
    #[must_use]
    pub fn render(&self) -> DisplayLines {
        let locale = &self.config.locale;
        let previous_line = self.pending.as_ref().map_or_else(String::new, |pending| {
            format!(
                "{} {}",
                locale.format_text(pending.left.as_str()),
                pending.operation
            )
        });
        DisplayLines {
            previous_line,
            current_line: locale.format_text(self.current.as_str()),
        }
    }
}

fn is_keypad_token(token: &str) -> bool {
    let mut chars = token.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(c), None) if c.is_ascii_digit() || c == '.'
    )
}
