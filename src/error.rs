//! # Arithmetic errors
//!
//! Magnitudes grow as needed, so the only failure is an operation whose result would be negative.
use std::fmt;

use thiserror::Error;

/// Errors that can occur during arithmetic on unsigned magnitudes.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticError {
    /// The result would be below zero.
    ///
    /// The operand is left unmodified when this is returned.
    #[error("arithmetic underflow: {operation} would produce a negative magnitude")]
    Underflow {
        /// Operation that was rejected.
        operation: Operation,
    },
}

/// Operation that can underflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Subtraction of a larger magnitude.
    Subtraction,
    /// Decrement of zero.
    Decrement,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Subtraction => "subtraction",
            Operation::Decrement => "decrement",
        })
    }
}

/// Result type alias for fallible magnitude operations.
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            ArithmeticError::Underflow { operation: Operation::Subtraction }.to_string(),
            "arithmetic underflow: subtraction would produce a negative magnitude",
        );
        assert_eq!(
            ArithmeticError::Underflow { operation: Operation::Decrement }.to_string(),
            "arithmetic underflow: decrement would produce a negative magnitude",
        );
    }

    #[test]
    fn equality() {
        let subtraction = ArithmeticError::Underflow { operation: Operation::Subtraction };
        let decrement = ArithmeticError::Underflow { operation: Operation::Decrement };
        assert_eq!(subtraction, subtraction);
        assert_ne!(subtraction, decrement);
    }
}
