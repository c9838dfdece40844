//! Pure reducer functions for the accumulator
//!
//! Each key action is a function `(&CalculatorState, ..) -> CalculatorState`.
//! Fallible actions return `Result`; on `Err` the caller keeps the state it
//! already has, so a failed action can never leave a half-applied state.
//!
//! The reducer has NO side effects: no logging, no I/O. The session type
//! (see `session.rs`) does the logging around it.

use super::actions::CalcAction;
use super::state::{CalculatorState, EntryMode};
use crate::error::CalcError;
use crate::evaluator::ensure_finite;
use crate::format::format_number;
use crate::types::{Operator, UnaryFunction};

/// Apply one action to a state, returning the next state.
pub fn reduce(state: &CalculatorState, action: CalcAction) -> Result<CalculatorState, CalcError> {
    match action {
        CalcAction::Digit(digit) => append_digit(state, digit),
        CalcAction::DecimalPoint => Ok(append_decimal_point(state)),
        CalcAction::Operator(op) => set_operator(state, op),
        CalcAction::Equals => evaluate(state),
        CalcAction::ClearAll => Ok(clear_all()),
        CalcAction::ClearEntry => Ok(clear_entry(state)),
        CalcAction::Backspace => Ok(backspace(state)),
        CalcAction::Unary(func) => apply_unary(state, func),
    }
}

pub fn append_digit(state: &CalculatorState, digit: u8) -> Result<CalculatorState, CalcError> {
    let c = char::from_digit(u32::from(digit), 10)
        .ok_or_else(|| CalcError::UnparsableEntry(digit.to_string()))?;

    let current_text = if state.awaiting_new_entry || state.current_text == "0" {
        c.to_string()
    } else {
        let mut text = state.current_text.clone();
        text.push(c);
        text
    };

    Ok(CalculatorState {
        current_text,
        awaiting_new_entry: false,
        last_action_was_result: false,
        ..state.clone()
    })
}

pub fn append_decimal_point(state: &CalculatorState) -> CalculatorState {
    if state.awaiting_new_entry {
        return CalculatorState {
            current_text: "0.".to_string(),
            awaiting_new_entry: false,
            last_action_was_result: false,
            ..state.clone()
        };
    }

    if state.current_text.contains('.') {
        return state.clone();
    }

    CalculatorState {
        current_text: format!("{}.", state.current_text),
        last_action_was_result: false,
        ..state.clone()
    }
}

pub fn set_operator(state: &CalculatorState, op: Operator) -> Result<CalculatorState, CalcError> {
    if state.mode() == EntryMode::AwaitingOperand {
        // No number since the last operator: swap the operator, or ignore
        // the key entirely when nothing is pending.
        return Ok(match state.pending_operator {
            Some(_) => CalculatorState {
                pending_operator: Some(op),
                ..state.clone()
            },
            None => state.clone(),
        });
    }

    let operand = state.entry_value()?;
    let (running, current_text) = match state.pending_operator {
        Some(pending) => {
            let value = ensure_finite(pending.apply(state.previous_value, operand)?)?;
            (value, format_number(value))
        }
        None => (operand, state.current_text.clone()),
    };

    Ok(CalculatorState {
        current_text,
        previous_value: running,
        pending_operator: Some(op),
        awaiting_new_entry: true,
        last_action_was_result: false,
    })
}

pub fn evaluate(state: &CalculatorState) -> Result<CalculatorState, CalcError> {
    let Some(op) = state.pending_operator else {
        return Ok(state.clone());
    };
    if state.mode() == EntryMode::AwaitingOperand {
        return Ok(state.clone());
    }

    let operand = state.entry_value()?;
    let result = ensure_finite(op.apply(state.previous_value, operand)?)?;

    Ok(CalculatorState {
        current_text: format_number(result),
        previous_value: result,
        pending_operator: None,
        awaiting_new_entry: true,
        last_action_was_result: true,
    })
}

pub fn clear_all() -> CalculatorState {
    CalculatorState::default()
}

pub fn clear_entry(state: &CalculatorState) -> CalculatorState {
    CalculatorState {
        current_text: "0".to_string(),
        awaiting_new_entry: true,
        last_action_was_result: false,
        ..state.clone()
    }
}

pub fn backspace(state: &CalculatorState) -> CalculatorState {
    let mut text = state.current_text.clone();
    if text.chars().count() > 1 {
        text.pop();
    } else {
        text.clear();
    }

    // "-5" would leave a bare sign behind
    if !text.chars().any(|c| c.is_ascii_digit()) {
        return CalculatorState {
            current_text: "0".to_string(),
            awaiting_new_entry: true,
            last_action_was_result: false,
            ..state.clone()
        };
    }

    CalculatorState {
        current_text: text,
        ..state.clone()
    }
}

pub fn apply_unary(state: &CalculatorState, func: UnaryFunction) -> Result<CalculatorState, CalcError> {
    let value = state.entry_value()?;
    let result = ensure_finite(func.apply(value)?)?;

    Ok(CalculatorState {
        current_text: format_number(result),
        awaiting_new_entry: true,
        last_action_was_result: true,
        ..state.clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(actions: &[CalcAction]) -> CalculatorState {
        actions.iter().fold(CalculatorState::new(), |state, action| {
            reduce(&state, *action).unwrap_or(state)
        })
    }

    fn typed(text: &str) -> CalculatorState {
        let mut state = CalculatorState::new();
        for c in text.chars() {
            let action = match c {
                '.' => CalcAction::DecimalPoint,
                d => CalcAction::Digit(d.to_digit(10).unwrap() as u8),
            };
            state = reduce(&state, action).unwrap();
        }
        state
    }

    #[test]
    fn test_reducer_is_pure() {
        let state = typed("12");
        let before = state.clone();

        let next = reduce(&state, CalcAction::Digit(3)).unwrap();

        assert_eq!(state, before);
        assert_eq!(next.display(), "123");
    }

    #[test]
    fn test_first_digit_replaces_placeholder() {
        let state = reduce(&CalculatorState::new(), CalcAction::Digit(7)).unwrap();
        assert_eq!(state.display(), "7");
        assert!(!state.awaiting_new_entry);
    }

    #[test]
    fn test_leading_zero_is_replaced() {
        let state = typed("0");
        assert_eq!(state.display(), "0");
        let state = reduce(&state, CalcAction::Digit(4)).unwrap();
        assert_eq!(state.display(), "4");
    }

    #[test]
    fn test_invalid_digit_is_rejected() {
        let state = CalculatorState::new();
        let err = reduce(&state, CalcAction::Digit(12)).unwrap_err();
        assert_eq!(err, CalcError::UnparsableEntry("12".to_string()));
    }

    #[test]
    fn test_decimal_point_starts_fresh_entry() {
        let state = append_decimal_point(&CalculatorState::new());
        assert_eq!(state.display(), "0.");
        assert!(!state.awaiting_new_entry);
    }

    #[test]
    fn test_decimal_point_is_idempotent() {
        let state = typed("3");
        let once = append_decimal_point(&state);
        let twice = append_decimal_point(&once);
        assert_eq!(twice.display(), "3.");
        assert_eq!(twice.current_text.matches('.').count(), 1);
    }

    #[test]
    fn test_operator_after_clear_is_ignored() {
        let state = CalculatorState::new();
        let next = set_operator(&state, Operator::Add).unwrap();
        assert_eq!(next, state);
    }

    #[test]
    fn test_operator_substitution() {
        let state = run(&[
            CalcAction::Digit(8),
            CalcAction::Operator(Operator::Add),
            CalcAction::Operator(Operator::Multiply),
        ]);
        assert_eq!(state.pending_operator, Some(Operator::Multiply));
        assert_eq!(state.previous_value, 8.0);
        assert_eq!(state.expression(), "8 ×");
    }

    #[test]
    fn test_operator_chaining_shows_running_result() {
        let state = run(&[
            CalcAction::Digit(2),
            CalcAction::Operator(Operator::Add),
            CalcAction::Digit(3),
            CalcAction::Operator(Operator::Multiply),
        ]);
        assert_eq!(state.display(), "5");
        assert_eq!(state.previous_value, 5.0);
        assert_eq!(state.pending_operator, Some(Operator::Multiply));

        let state = reduce(&state, CalcAction::Digit(4)).unwrap();
        let state = evaluate(&state).unwrap();
        assert_eq!(state.display(), "20");
    }

    #[test]
    fn test_equals_without_operator_is_noop() {
        let state = typed("42");
        assert_eq!(evaluate(&state).unwrap(), state);
    }

    #[test]
    fn test_equals_without_right_operand_is_noop() {
        let state = run(&[CalcAction::Digit(5), CalcAction::Operator(Operator::Add)]);
        assert_eq!(evaluate(&state).unwrap(), state);
    }

    #[test]
    fn test_equals_sets_result_flags() {
        let state = run(&[
            CalcAction::Digit(2),
            CalcAction::Operator(Operator::Add),
            CalcAction::Digit(3),
            CalcAction::Equals,
        ]);
        assert_eq!(state.display(), "5");
        assert_eq!(state.previous_value, 5.0);
        assert!(state.pending_operator.is_none());
        assert!(state.awaiting_new_entry);
        assert!(state.last_action_was_result);
    }

    #[test]
    fn test_division_by_zero_keeps_state() {
        let state = run(&[
            CalcAction::Digit(5),
            CalcAction::Operator(Operator::Divide),
            CalcAction::Digit(0),
        ]);

        let err = evaluate(&state).unwrap_err();
        assert_eq!(err, CalcError::DivisionByZero);
        assert_eq!(state.display(), "0");
        assert_eq!(state.previous_value, 5.0);
        assert_eq!(state.pending_operator, Some(Operator::Divide));

        // The session path keeps the exact same state
        let kept = reduce(&state, CalcAction::Equals).unwrap_or_else(|_| state.clone());
        assert_eq!(kept, state);
        assert_eq!(kept.expression(), "5 ÷");
    }

    #[test]
    fn test_failed_chain_keeps_state() {
        let state = run(&[
            CalcAction::Digit(5),
            CalcAction::Operator(Operator::Divide),
            CalcAction::Digit(0),
        ]);

        let err = set_operator(&state, Operator::Add).unwrap_err();
        assert_eq!(err, CalcError::DivisionByZero);
    }

    #[test]
    fn test_overflow_is_rejected() {
        let mut state = CalculatorState::new();
        state.current_text = "10".to_string();
        state.awaiting_new_entry = false;
        state.previous_value = f64::MAX;
        state.pending_operator = Some(Operator::Multiply);

        assert_eq!(evaluate(&state).unwrap_err(), CalcError::Overflow);
    }

    #[test]
    fn test_operator_after_result_is_ignored() {
        let state = run(&[
            CalcAction::Digit(2),
            CalcAction::Operator(Operator::Add),
            CalcAction::Digit(3),
            CalcAction::Equals,
            CalcAction::Operator(Operator::Add),
        ]);
        assert_eq!(state.display(), "5");
        assert!(state.pending_operator.is_none());
        assert_eq!(state.expression(), "");

        let state = run(&[
            CalcAction::Digit(2),
            CalcAction::Operator(Operator::Add),
            CalcAction::Digit(3),
            CalcAction::Equals,
            CalcAction::Operator(Operator::Add),
            CalcAction::Digit(4),
            CalcAction::Equals,
        ]);
        assert_eq!(state.display(), "4");
    }

    #[test]
    fn test_digit_after_result_starts_new_entry() {
        let state = run(&[
            CalcAction::Digit(2),
            CalcAction::Operator(Operator::Add),
            CalcAction::Digit(3),
            CalcAction::Equals,
            CalcAction::Digit(9),
        ]);
        assert_eq!(state.display(), "9");
        assert!(!state.last_action_was_result);
    }

    #[test]
    fn test_clear_entry_preserves_pending_operation() {
        let state = run(&[
            CalcAction::Digit(5),
            CalcAction::Operator(Operator::Subtract),
            CalcAction::Digit(9),
            CalcAction::ClearEntry,
        ]);
        assert_eq!(state.display(), "0");
        assert!(state.awaiting_new_entry);
        assert_eq!(state.pending_operator, Some(Operator::Subtract));
        assert_eq!(state.previous_value, 5.0);

        let state = run(&[
            CalcAction::Digit(5),
            CalcAction::Operator(Operator::Subtract),
            CalcAction::Digit(9),
            CalcAction::ClearEntry,
            CalcAction::Digit(2),
            CalcAction::Equals,
        ]);
        assert_eq!(state.display(), "3");
    }

    #[test]
    fn test_clear_all_resets_everything() {
        let state = run(&[
            CalcAction::Digit(5),
            CalcAction::Operator(Operator::Subtract),
            CalcAction::Digit(9),
            CalcAction::ClearAll,
        ]);
        assert_eq!(state, CalculatorState::default());
    }

    #[test]
    fn test_backspace() {
        let state = typed("123");
        let state = backspace(&state);
        assert_eq!(state.display(), "12");
        assert!(!state.awaiting_new_entry);

        let state = backspace(&backspace(&backspace(&state)));
        assert_eq!(state.display(), "0");
        assert!(state.awaiting_new_entry);
    }

    #[test]
    fn test_backspace_removes_decimal_point() {
        let state = typed("4.");
        let state = backspace(&state);
        assert_eq!(state.display(), "4");
    }

    #[test]
    fn test_backspace_never_leaves_bare_sign() {
        let mut state = CalculatorState::new();
        state.current_text = "-5".to_string();
        state.awaiting_new_entry = false;

        let state = backspace(&state);
        assert_eq!(state.display(), "0");
        assert!(state.awaiting_new_entry);
    }

    #[test]
    fn test_unary_replaces_entry() {
        let state = typed("16");
        let state = apply_unary(&state, UnaryFunction::SquareRoot).unwrap();
        assert_eq!(state.display(), "4");
        assert!(state.awaiting_new_entry);
        assert!(state.last_action_was_result);
    }

    #[test]
    fn test_unary_errors_keep_state() {
        let state = typed("0");
        assert_eq!(
            apply_unary(&state, UnaryFunction::Inverse).unwrap_err(),
            CalcError::InverseOfZero
        );

        let mut negative = CalculatorState::new();
        negative.current_text = "-9".to_string();
        assert_eq!(
            apply_unary(&negative, UnaryFunction::SquareRoot).unwrap_err(),
            CalcError::NegativeSquareRoot
        );
    }

    #[test]
    fn test_equals_after_unary_is_noop() {
        let state = run(&[
            CalcAction::Digit(5),
            CalcAction::Operator(Operator::Add),
            CalcAction::Digit(9),
            CalcAction::Unary(UnaryFunction::SquareRoot),
        ]);
        assert_eq!(state.display(), "3");
        assert!(state.last_action_was_result);

        let next = evaluate(&state).unwrap();
        assert_eq!(next, state);
    }

    #[test]
    fn test_operator_after_unary_substitutes() {
        let state = run(&[
            CalcAction::Digit(5),
            CalcAction::Operator(Operator::Add),
            CalcAction::Digit(9),
            CalcAction::Unary(UnaryFunction::SquareRoot),
            CalcAction::Operator(Operator::Multiply),
        ]);
        assert_eq!(state.display(), "3");
        assert_eq!(state.previous_value, 5.0);
        assert_eq!(state.expression(), "5 ×");
    }

    #[test]
    fn test_digit_after_unary_starts_new_entry() {
        let state = run(&[
            CalcAction::Digit(9),
            CalcAction::Unary(UnaryFunction::Square),
            CalcAction::Digit(7),
        ]);
        assert_eq!(state.display(), "7");
        assert!(!state.last_action_was_result);
    }

    #[test]
    fn test_unparsable_entry_is_reported() {
        let mut state = CalculatorState::new();
        state.current_text = "1.2.3".to_string();
        state.awaiting_new_entry = false;

        let err = apply_unary(&state, UnaryFunction::Square).unwrap_err();
        assert!(err.is_warning());
    }
}
