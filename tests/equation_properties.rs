use std::cmp::Ordering;

use number_balance::error::{EquationError, OperandProblem};
use number_balance::game::{build_equation, evaluate_guess, HiddenPart, Operator, Verdict};
use proptest::prelude::*;

fn operand() -> impl Strategy<Value = u32> {
    1u32..=10_000
}

fn operator() -> impl Strategy<Value = Operator> {
    prop::sample::select(Operator::ALL.to_vec())
}

fn hidden() -> impl Strategy<Value = HiddenPart> {
    prop_oneof![Just(HiddenPart::First), Just(HiddenPart::Second)]
}

/// Exact value of `lhs op rhs` as a (numerator, denominator) pair
fn exact(lhs: i128, rhs: i128, op: Operator) -> (i128, i128) {
    match op {
        Operator::Add => (lhs + rhs, 1),
        Operator::Subtract => (lhs - rhs, 1),
        Operator::Multiply => (lhs * rhs, 1),
        Operator::Divide => (lhs, rhs),
    }
}

proptest! {
    #[test]
    fn addition_and_multiplication_always_build(a in operand(), b in operand(), h in hidden()) {
        let sum = build_equation(a, b, Operator::Add, h).unwrap();
        prop_assert_eq!(sum.result(), u64::from(a) + u64::from(b));
        let product = build_equation(a, b, Operator::Multiply, h).unwrap();
        prop_assert_eq!(product.result(), u64::from(a) * u64::from(b));
    }

    #[test]
    fn subtraction_fails_iff_negative(a in operand(), b in operand(), h in hidden()) {
        match build_equation(a, b, Operator::Subtract, h) {
            Ok(eq) => {
                prop_assert!(a >= b);
                prop_assert_eq!(eq.result(), u64::from(a - b));
            }
            Err(err) => {
                prop_assert!(a < b);
                prop_assert_eq!(err, EquationError::InvalidOperands(OperandProblem::NegativeDifference));
            }
        }
    }

    #[test]
    fn division_fails_iff_inexact(a in operand(), b in operand(), h in hidden()) {
        match build_equation(a, b, Operator::Divide, h) {
            Ok(eq) => {
                prop_assert_eq!(a % b, 0);
                prop_assert_eq!(eq.result(), u64::from(a / b));
            }
            Err(err) => {
                prop_assert_ne!(a % b, 0);
                prop_assert_eq!(err, EquationError::InvalidOperands(OperandProblem::InexactQuotient));
            }
        }
    }

    #[test]
    fn hidden_operand_with_original_operator_balances(
        a in operand(),
        b in operand(),
        op in operator(),
        h in hidden(),
    ) {
        if let Ok(eq) = build_equation(a, b, op, h) {
            let hidden_value = match h {
                HiddenPart::First => a,
                HiddenPart::Second => b,
            };
            let eval = evaluate_guess(&eq, i64::from(hidden_value), op).unwrap();
            prop_assert!(eval.is_correct());
        }
    }

    #[test]
    fn verdict_matches_exact_comparison(
        a in operand(),
        b in operand(),
        op in operator(),
        h in hidden(),
        guess in 1i64..=20_000,
        guess_op in operator(),
    ) {
        if let Ok(eq) = build_equation(a, b, op, h) {
            let visible = i128::from(eq.visible_operand());
            let (lhs, rhs) = match h {
                HiddenPart::First => (i128::from(guess), visible),
                HiddenPart::Second => (visible, i128::from(guess)),
            };
            let (numer, denom) = exact(lhs, rhs, guess_op);
            let expected = match numer.cmp(&(i128::from(eq.result()) * denom)) {
                Ordering::Equal => Verdict::Balanced,
                Ordering::Greater => Verdict::TooHigh,
                Ordering::Less => Verdict::TooLow,
            };

            let eval = evaluate_guess(&eq, guess, guess_op).unwrap();
            prop_assert_eq!(eval.verdict, expected);
            prop_assert_eq!(eval.is_correct(), expected == Verdict::Balanced);
        }
    }

    #[test]
    fn non_positive_guesses_rejected(a in operand(), guess in -1_000i64..=0, op in operator()) {
        let eq = build_equation(a, 1, Operator::Multiply, HiddenPart::Second).unwrap();
        prop_assert!(evaluate_guess(&eq, guess, op).is_err());
    }
}
