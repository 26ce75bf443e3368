//! Form input for the creator and the solver, kept as plain data so it can be
//! validated without a terminal.

use crate::error::{EquationError, GuessProblem, OperandProblem};

use super::equation::{build_equation, evaluate_guess, Equation, Evaluation, HiddenPart, Operator};

/// The creator's half-filled equation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquationDraft {
    pub num1: String,
    pub num2: String,
    pub operator: Option<Operator>,
    pub hidden: HiddenPart,
}

impl EquationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Result shown next to the form while the creator is typing.
    pub fn preview(&self) -> Option<u64> {
        self.try_build()?.ok().map(|eq| eq.result())
    }

    /// Operand error visible while typing, such as a subtraction going
    /// negative. Missing fields are not reported here.
    pub fn live_error(&self) -> Option<EquationError> {
        self.try_build()?.err()
    }

    /// Validate the whole form and build the equation.
    pub fn submit(&self) -> Result<Equation, EquationError> {
        let num1 = parse_operand(&self.num1)?;
        let num2 = parse_operand(&self.num2)?;
        let operator = self.operator.ok_or(EquationError::IncompleteInput)?;
        build_equation(num1, num2, operator, self.hidden)
    }

    /// `None` while the form is still incomplete.
    fn try_build(&self) -> Option<Result<Equation, EquationError>> {
        match self.submit() {
            Err(EquationError::IncompleteInput) => None,
            other => Some(other),
        }
    }
}

fn parse_operand(text: &str) -> Result<u32, EquationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(EquationError::IncompleteInput);
    }

    match text.parse::<i64>() {
        Ok(n) if n <= 0 => Err(EquationError::InvalidOperands(OperandProblem::NonPositive)),
        Ok(n) => u32::try_from(n)
            .map_err(|_| EquationError::InvalidOperands(OperandProblem::OutOfRange)),
        Err(_) if text.bytes().all(|b| b.is_ascii_digit()) => {
            Err(EquationError::InvalidOperands(OperandProblem::OutOfRange))
        }
        Err(_) => Err(EquationError::IncompleteInput),
    }
}

/// The solver's answer: a number for the hidden slot and an operator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessDraft {
    pub number: String,
    pub operator: Option<Operator>,
}

impl GuessDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit(&self, equation: &Equation) -> Result<Evaluation, EquationError> {
        let missing = EquationError::InvalidGuess(GuessProblem::Missing);
        let number = self
            .number
            .trim()
            .parse::<i64>()
            .map_err(|_| missing)?;
        let operator = self.operator.ok_or(missing)?;
        evaluate_guess(equation, number, operator)
    }
}
