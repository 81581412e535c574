//! Calculator core: the accumulator state machine and the types it is built from
//!
//! Nothing in here reports failure to the caller of an accumulator operation.
//! Parsing helpers return [`CalcResult`] so that the layers above them can
//! decide whether a bad label or symbol is an error or a silent no-op.

mod accumulator;
pub mod operand;
mod operations;

pub use accumulator::Accumulator;
pub use operand::Operand;
pub use operations::Operation;

use thiserror::Error;

/// Result type for calculator parsing and configuration
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors produced while interpreting calculator input or configuration
#[derive(Debug, Error)]
pub enum CalcError {
    /// Symbol is not one of `+ - * / ^`
    #[error("Unknown operator: {symbol:?}")]
    UnknownOperator {
        /// The rejected symbol
        symbol: String,
    },

    /// Button label does not map to any calculator key
    #[error("Unknown key label: {label:?}")]
    UnknownKey {
        /// The rejected label
        label: String,
    },

    /// Configuration could not be parsed or is inconsistent
    #[error("Invalid configuration: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Reading a configuration file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CalcError {
    /// Creates a configuration error from any displayable cause
    pub fn config(cause: impl std::fmt::Display) -> Self {
        Self::Config {
            message: cause.to_string(),
        }
    }
}
