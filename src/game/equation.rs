use std::cmp::Ordering;
use std::fmt;

use crate::error::{EquationError, GuessProblem, OperandProblem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Symbol used for display and keyboard input
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Operator> {
        Operator::ALL.into_iter().find(|op| op.symbol() == symbol)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Which operand the creator conceals from the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HiddenPart {
    #[default]
    First,
    Second,
}

impl HiddenPart {
    pub fn toggle(self) -> HiddenPart {
        match self {
            HiddenPart::First => HiddenPart::Second,
            HiddenPart::Second => HiddenPart::First,
        }
    }
}

/// A validated equation `num1 op num2 = result` with one operand hidden.
///
/// Only [`build_equation`] constructs one, so `result` always matches the
/// operands and the subtraction/division rules hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Equation {
    num1: u32,
    num2: u32,
    operator: Operator,
    result: u64,
    hidden: HiddenPart,
}

impl Equation {
    pub fn num1(&self) -> u32 {
        self.num1
    }

    pub fn num2(&self) -> u32 {
        self.num2
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn result(&self) -> u64 {
        self.result
    }

    pub fn hidden(&self) -> HiddenPart {
        self.hidden
    }

    /// The operand the solver can see
    pub fn visible_operand(&self) -> u32 {
        match self.hidden {
            HiddenPart::First => self.num2,
            HiddenPart::Second => self.num1,
        }
    }
}

/// Build an equation from two positive operands and an operator.
pub fn build_equation(
    num1: u32,
    num2: u32,
    operator: Operator,
    hidden: HiddenPart,
) -> Result<Equation, EquationError> {
    if num1 == 0 || num2 == 0 {
        return Err(EquationError::InvalidOperands(OperandProblem::NonPositive));
    }

    let (a, b) = (u64::from(num1), u64::from(num2));
    let result = match operator {
        Operator::Add => a + b,
        Operator::Multiply => a * b,
        Operator::Subtract => {
            if a < b {
                return Err(EquationError::InvalidOperands(
                    OperandProblem::NegativeDifference,
                ));
            }
            a - b
        }
        Operator::Divide => {
            if a % b != 0 {
                return Err(EquationError::InvalidOperands(
                    OperandProblem::InexactQuotient,
                ));
            }
            a / b
        }
    };

    Ok(Equation {
        num1,
        num2,
        operator,
        result,
        hidden,
    })
}

/// Exact value of the solver's expression.
///
/// Division that does not come out even keeps its numerator and (positive)
/// denominator instead of rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate {
    Whole(i128),
    Fraction { numer: i128, denom: i128 },
}

impl Candidate {
    fn compute(lhs: i128, rhs: i128, operator: Operator) -> Candidate {
        match operator {
            Operator::Add => Candidate::Whole(lhs + rhs),
            Operator::Subtract => Candidate::Whole(lhs - rhs),
            Operator::Multiply => Candidate::Whole(lhs * rhs),
            Operator::Divide => {
                if lhs % rhs == 0 {
                    Candidate::Whole(lhs / rhs)
                } else {
                    Candidate::Fraction {
                        numer: lhs,
                        denom: rhs,
                    }
                }
            }
        }
    }

    /// Compare against the equation's result
    pub fn cmp_to(&self, target: u64) -> Ordering {
        let target = i128::from(target);
        match *self {
            Candidate::Whole(value) => value.cmp(&target),
            Candidate::Fraction { numer, denom } => numer.cmp(&(target * denom)),
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Candidate::Whole(value) => write!(f, "{value}"),
            Candidate::Fraction { numer, denom } => write!(f, "{numer}/{denom}"),
        }
    }
}

/// Which way the scale tips after a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Balanced,
    TooHigh,
    TooLow,
}

/// Outcome of checking a guess against an equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub number: i64,
    pub operator: Operator,
    pub candidate: Candidate,
    pub verdict: Verdict,
}

impl Evaluation {
    pub fn is_correct(&self) -> bool {
        self.verdict == Verdict::Balanced
    }
}

/// Substitute the guessed number into the hidden slot, apply the guessed
/// operator in the original operand order and compare with the result.
pub fn evaluate_guess(
    equation: &Equation,
    guessed_number: i64,
    guessed_operator: Operator,
) -> Result<Evaluation, EquationError> {
    if guessed_number <= 0 {
        return Err(EquationError::InvalidGuess(GuessProblem::NotPositive));
    }

    let guess = i128::from(guessed_number);
    let visible = i128::from(equation.visible_operand());
    let (lhs, rhs) = match equation.hidden {
        HiddenPart::First => (guess, visible),
        HiddenPart::Second => (visible, guess),
    };

    // rhs > 0 on both branches, so division is always defined
    let candidate = Candidate::compute(lhs, rhs, guessed_operator);
    let verdict = match candidate.cmp_to(equation.result) {
        Ordering::Equal => Verdict::Balanced,
        Ordering::Greater => Verdict::TooHigh,
        Ordering::Less => Verdict::TooLow,
    };

    Ok(Evaluation {
        number: guessed_number,
        operator: guessed_operator,
        candidate,
        verdict,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtraction_example() {
        let eq = build_equation(5, 3, Operator::Subtract, HiddenPart::Second).unwrap();
        assert_eq!(eq.num1(), 5);
        assert_eq!(eq.num2(), 3);
        assert_eq!(eq.operator(), Operator::Subtract);
        assert_eq!(eq.result(), 2);
        assert_eq!(eq.hidden(), HiddenPart::Second);

        let eval = evaluate_guess(&eq, 3, Operator::Subtract).unwrap();
        assert!(eval.is_correct());
        assert_eq!(eval.candidate, Candidate::Whole(2));
    }

    #[test]
    fn test_inexact_division_rejected() {
        let err = build_equation(7, 2, Operator::Divide, HiddenPart::First).unwrap_err();
        assert_eq!(
            err,
            EquationError::InvalidOperands(OperandProblem::InexactQuotient)
        );
    }

    #[test]
    fn test_negative_difference_rejected() {
        let err = build_equation(2, 9, Operator::Subtract, HiddenPart::First).unwrap_err();
        assert_eq!(
            err,
            EquationError::InvalidOperands(OperandProblem::NegativeDifference)
        );
    }

    #[test]
    fn test_equal_operands_subtract_to_zero() {
        let eq = build_equation(4, 4, Operator::Subtract, HiddenPart::First).unwrap();
        assert_eq!(eq.result(), 0);
    }

    #[test]
    fn test_zero_operand_rejected() {
        let err = build_equation(0, 3, Operator::Add, HiddenPart::First).unwrap_err();
        assert_eq!(err, EquationError::InvalidOperands(OperandProblem::NonPositive));
    }

    #[test]
    fn test_large_product_does_not_overflow() {
        let eq = build_equation(u32::MAX, u32::MAX, Operator::Multiply, HiddenPart::First)
            .unwrap();
        assert_eq!(eq.result(), u64::from(u32::MAX) * u64::from(u32::MAX));
    }

    #[test]
    fn test_guess_keeps_operand_order() {
        // 12 / 4 = 3 with the first operand hidden: 12 / 4 balances, 4 / 12 would not
        let eq = build_equation(12, 4, Operator::Divide, HiddenPart::First).unwrap();
        assert!(evaluate_guess(&eq, 12, Operator::Divide).unwrap().is_correct());
        assert_eq!(
            evaluate_guess(&eq, 2, Operator::Divide).unwrap().verdict,
            Verdict::TooLow
        );
    }

    #[test]
    fn test_different_operator_can_balance() {
        // 4 * 2 = 8 with the first operand hidden; 6 + 2 also weighs 8
        let eq = build_equation(4, 2, Operator::Multiply, HiddenPart::First).unwrap();
        assert!(evaluate_guess(&eq, 6, Operator::Add).unwrap().is_correct());
        assert!(evaluate_guess(&eq, 4, Operator::Multiply).unwrap().is_correct());
        assert!(evaluate_guess(&eq, 16, Operator::Divide).unwrap().is_correct());
    }

    #[test]
    fn test_direction_signals() {
        let eq = build_equation(3, 4, Operator::Add, HiddenPart::First).unwrap();
        assert_eq!(
            evaluate_guess(&eq, 10, Operator::Add).unwrap().verdict,
            Verdict::TooHigh
        );
        assert_eq!(
            evaluate_guess(&eq, 1, Operator::Add).unwrap().verdict,
            Verdict::TooLow
        );
    }

    #[test]
    fn test_negative_candidate_is_too_low() {
        let eq = build_equation(2, 5, Operator::Add, HiddenPart::First).unwrap();
        let eval = evaluate_guess(&eq, 1, Operator::Subtract).unwrap();
        assert_eq!(eval.candidate, Candidate::Whole(-4));
        assert_eq!(eval.verdict, Verdict::TooLow);
    }

    #[test]
    fn test_fractional_candidate_never_balances() {
        // 7 + 1 = 8 with the second operand hidden: 7 / 2 is 3.5
        let eq = build_equation(7, 1, Operator::Add, HiddenPart::Second).unwrap();
        let low = evaluate_guess(&eq, 2, Operator::Divide).unwrap();
        assert_eq!(low.candidate, Candidate::Fraction { numer: 7, denom: 2 });
        assert_eq!(low.verdict, Verdict::TooLow);

        // 4 + 2 = 6 with the first operand hidden: 13 / 2 is 6.5
        let eq = build_equation(4, 2, Operator::Add, HiddenPart::First).unwrap();
        let high = evaluate_guess(&eq, 13, Operator::Divide).unwrap();
        assert_eq!(high.verdict, Verdict::TooHigh);
        assert_eq!(high.candidate.to_string(), "13/2");
    }

    #[test]
    fn test_non_positive_guess_rejected() {
        let eq = build_equation(3, 3, Operator::Multiply, HiddenPart::Second).unwrap();
        for guess in [0, -3] {
            assert_eq!(
                evaluate_guess(&eq, guess, Operator::Multiply).unwrap_err(),
                EquationError::InvalidGuess(GuessProblem::NotPositive)
            );
        }
    }

    #[test]
    fn test_operator_symbols() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operator::from_symbol('x'), None);
    }

    #[test]
    fn test_hidden_part_toggle() {
        assert_eq!(HiddenPart::First.toggle(), HiddenPart::Second);
        assert_eq!(HiddenPart::Second.toggle(), HiddenPart::First);
    }
}
