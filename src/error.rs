use std::path::PathBuf;

use crate::game::GamePhase;

/// Why a pair of operands cannot form an equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandProblem {
    /// Both operands must be positive.
    NonPositive,
    /// Subtraction would go below zero.
    NegativeDifference,
    /// Division does not produce a whole number.
    InexactQuotient,
    /// The typed number does not fit the operand range.
    OutOfRange,
}

/// Why a guess cannot be evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessProblem {
    /// Number or operator not chosen.
    Missing,
    /// The guessed number is zero or negative.
    NotPositive,
}

/// Errors raised while validating player input for an equation or a guess.
///
/// These are never fatal: the UI shows them inline and stays in the same
/// phase until the input is corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EquationError {
    #[error("every field of the equation must be filled in")]
    IncompleteInput,

    #[error("invalid operands: {0}")]
    InvalidOperands(OperandProblem),

    #[error("invalid guess: {0}")]
    InvalidGuess(GuessProblem),
}

impl std::fmt::Display for OperandProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            OperandProblem::NonPositive => "operands must be greater than zero",
            OperandProblem::NegativeDifference => {
                "the first number must be at least the second in a subtraction"
            }
            OperandProblem::InexactQuotient => "the division must have a whole result",
            OperandProblem::OutOfRange => "number is too large",
        };
        f.write_str(text)
    }
}

impl std::fmt::Display for GuessProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            GuessProblem::Missing => "a number and an operation must be chosen",
            GuessProblem::NotPositive => "the number must be greater than zero",
        };
        f.write_str(text)
    }
}

/// A controller transition was requested from a phase that does not allow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("cannot {action} while in phase {phase}")]
    WrongPhase {
        action: &'static str,
        phase: GamePhase,
    },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equation_error_display() {
        let err = EquationError::InvalidOperands(OperandProblem::InexactQuotient);
        assert_eq!(
            err.to_string(),
            "invalid operands: the division must have a whole result"
        );
    }

    #[test]
    fn test_guess_error_display() {
        let err = EquationError::InvalidGuess(GuessProblem::NotPositive);
        assert_eq!(
            err.to_string(),
            "invalid guess: the number must be greater than zero"
        );
    }

    #[test]
    fn test_transition_error_display() {
        let err = TransitionError::WrongPhase {
            action: "solve",
            phase: GamePhase::Creating,
        };
        assert_eq!(err.to_string(), "cannot solve while in phase Creating");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("ui.tick_rate_ms must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: ui.tick_rate_ms must be > 0"
        );
    }
}
