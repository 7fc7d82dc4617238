//! Pure state transition for the calculator.
//!
//! `apply` interprets one action against the current snapshot and returns
//! the next one. Arithmetic and domain failures never escape: they are
//! captured into the `error` field together with the sentinel display, and
//! the next valid action clears them.

use tracing::debug;

use crate::action::{Action, Function, HistoryOp, Operator};
use crate::error::{CalcError, ERROR_DISPLAY};
use crate::evaluator;
use crate::format::{format_result, shortest};
use crate::state::{CalculationEntry, CalculatorMode, CalculatorState};

/// Apply one action to the state, producing the next snapshot.
pub fn apply(state: &CalculatorState, action: &Action) -> CalculatorState {
    match action {
        Action::NumberInput { digit } => input_digit(state, *digit),
        Action::DecimalInput => input_decimal(state),
        Action::OperatorInput { operator } => input_operator(state, *operator),
        Action::FunctionCall { function, value } => call_function(state, *function, *value),
        Action::EqualsPressed => press_equals(state),
        Action::ClearAll => clear_all(state),
        Action::ClearEntry => CalculatorState {
            display: "0".to_string(),
            error: None,
            ..state.clone()
        },
        Action::Backspace => backspace(state),
        Action::ModeChange {
            mode,
            preserve_state,
        } => change_mode(state, *mode, *preserve_state),
        Action::HistoryAction { action } => history_action(state, *action),
        Action::SetPreferences(update) => CalculatorState {
            preferences: state.preferences.merged(update),
            error: None,
            ..state.clone()
        },
    }
}

/// Complete the pending operation with an already-computed result, record a
/// history entry, and clear the equation.
///
/// This is the equals transition with the arithmetic factored out, for
/// callers that resolve the pending operation externally (remote evaluation
/// with local fallback). Without a pending equation it is a no-op.
pub fn resolve_equals(state: &CalculatorState, result: f64) -> CalculatorState {
    let Some((operand, operator)) = state.pending_operation() else {
        return state.clone();
    };
    let second = state.display_value();
    let formatted = format_result(result, state.preferences.precision);
    let calculation = format!(
        "{} {} {} = {}",
        shortest(operand),
        operator.symbol(),
        shortest(second),
        formatted
    );

    let mut next = CalculatorState {
        display: formatted.clone(),
        equation: String::new(),
        waiting_for_new_value: true,
        error: None,
        ..state.clone()
    };
    next.history
        .push(CalculationEntry::new(calculation, formatted, state.mode));
    next
}

/// Complete the pending operation with an already-computed result and stash
/// the next operator in its place.
///
/// The chained-operator transition with the arithmetic factored out, for the
/// same external-resolution callers as [`resolve_equals`].
pub fn resolve_operator(
    state: &CalculatorState,
    result: f64,
    next_operator: Operator,
) -> CalculatorState {
    CalculatorState {
        display: format_result(result, state.preferences.precision),
        equation: format!("{} {} ", shortest(result), next_operator.symbol()),
        waiting_for_new_value: true,
        error: None,
        ..state.clone()
    }
}

fn input_digit(state: &CalculatorState, digit: char) -> CalculatorState {
    if !digit.is_ascii_digit() {
        // Outside the closed action contract; leave the state untouched.
        return state.clone();
    }
    if state.waiting_for_new_value || state.has_error() {
        return CalculatorState {
            display: digit.to_string(),
            waiting_for_new_value: false,
            error: None,
            ..state.clone()
        };
    }
    let display = if state.display == "0" {
        digit.to_string()
    } else {
        format!("{}{}", state.display, digit)
    };
    CalculatorState {
        display,
        error: None,
        ..state.clone()
    }
}

fn input_decimal(state: &CalculatorState) -> CalculatorState {
    if state.waiting_for_new_value || state.has_error() {
        return CalculatorState {
            display: "0.".to_string(),
            waiting_for_new_value: false,
            error: None,
            ..state.clone()
        };
    }
    if state.display.contains('.') {
        return state.clone();
    }
    CalculatorState {
        display: format!("{}.", state.display),
        error: None,
        ..state.clone()
    }
}

fn input_operator(state: &CalculatorState, operator: Operator) -> CalculatorState {
    let input_value = state.display_value();
    match state.pending_operation() {
        None => CalculatorState {
            equation: format!("{} {} ", shortest(input_value), operator.symbol()),
            waiting_for_new_value: true,
            error: None,
            ..state.clone()
        },
        Some((operand, pending)) => {
            match evaluator::evaluate(operand, input_value, pending) {
                Ok(result) => resolve_operator(state, result, operator),
                // Failed evaluations do not restash; the equation stays as it was.
                Err(error) => fail(state, error),
            }
        }
    }
}

fn call_function(state: &CalculatorState, function: Function, value: f64) -> CalculatorState {
    match evaluator::evaluate_function(function, value) {
        Ok(result) => {
            let formatted = format_result(result, state.preferences.precision);
            let calculation = format!("{}({}) = {}", function.name(), shortest(value), formatted);
            let mut next = CalculatorState {
                display: formatted.clone(),
                waiting_for_new_value: true,
                error: None,
                ..state.clone()
            };
            next.history
                .push(CalculationEntry::new(calculation, formatted, state.mode));
            next
        }
        Err(error) => fail(state, error),
    }
}

fn press_equals(state: &CalculatorState) -> CalculatorState {
    let Some((operand, operator)) = state.pending_operation() else {
        return state.clone();
    };
    match evaluator::evaluate(operand, state.display_value(), operator) {
        Ok(result) => resolve_equals(state, result),
        Err(error) => fail(state, error),
    }
}

fn clear_all(state: &CalculatorState) -> CalculatorState {
    CalculatorState {
        display: "0".to_string(),
        equation: String::new(),
        waiting_for_new_value: false,
        error: None,
        ..state.clone()
    }
}

fn backspace(state: &CalculatorState) -> CalculatorState {
    if state.has_error() {
        return CalculatorState {
            display: "0".to_string(),
            error: None,
            ..state.clone()
        };
    }
    let mut display = state.display.clone();
    display.pop();
    // A bare "-" or empty buffer is not a number; floor at "0".
    if display.is_empty() || display.parse::<f64>().is_err() {
        display = "0".to_string();
    }
    CalculatorState {
        display,
        error: None,
        ..state.clone()
    }
}

fn change_mode(
    state: &CalculatorState,
    mode: CalculatorMode,
    preserve_state: bool,
) -> CalculatorState {
    if preserve_state {
        return CalculatorState {
            mode,
            error: None,
            ..state.clone()
        };
    }
    CalculatorState::with_mode(mode, state.preferences.clone())
}

fn history_action(state: &CalculatorState, op: HistoryOp) -> CalculatorState {
    match op {
        HistoryOp::Clear => {
            let mut next = state.clone();
            next.history.clear();
            next.error = None;
            next
        }
        // TODO: undo/redo need a snapshot stack; accepted as no-ops until then.
        HistoryOp::Undo | HistoryOp::Redo => state.clone(),
    }
}

fn fail(state: &CalculatorState, error: CalcError) -> CalculatorState {
    debug!(error = %error, "calculation failed");
    CalculatorState {
        display: ERROR_DISPLAY.to_string(),
        error: Some(error),
        ..state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Function;
    use crate::state::PreferencesUpdate;

    fn run(actions: &[Action]) -> CalculatorState {
        actions
            .iter()
            .fold(CalculatorState::initial(), |state, action| {
                apply(&state, action)
            })
    }

    fn digit(d: char) -> Action {
        Action::NumberInput { digit: d }
    }

    fn op(operator: Operator) -> Action {
        Action::OperatorInput { operator }
    }

    #[test]
    fn test_digit_entry() {
        let state = run(&[digit('1'), digit('2'), digit('3')]);
        assert_eq!(state.display, "123");
    }

    #[test]
    fn test_leading_zero_is_replaced() {
        let state = run(&[digit('0'), digit('7')]);
        assert_eq!(state.display, "7");
    }

    #[test]
    fn test_decimal_entry() {
        let state = run(&[digit('3'), Action::DecimalInput, digit('1'), digit('4')]);
        assert_eq!(state.display, "3.14");
    }

    #[test]
    fn test_second_decimal_is_ignored() {
        let state = run(&[
            digit('1'),
            Action::DecimalInput,
            digit('5'),
            Action::DecimalInput,
            digit('5'),
        ]);
        assert_eq!(state.display, "1.55");
    }

    #[test]
    fn test_decimal_on_fresh_operand() {
        let state = run(&[digit('2'), op(Operator::Add), Action::DecimalInput, digit('5')]);
        assert_eq!(state.display, "0.5");
        assert_eq!(state.equation, "2 + ");
    }

    #[test]
    fn test_basic_addition_end_to_end() {
        let state = run(&[digit('2'), op(Operator::Add), digit('3'), Action::EqualsPressed]);
        assert_eq!(state.display, "5");
        assert_eq!(state.equation, "");
        assert!(state.waiting_for_new_value);
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.history()[0].calculation, "2 + 3 = 5");
        assert_eq!(state.history()[0].result, "5");
        assert_eq!(state.history()[0].mode, CalculatorMode::Scientific);
    }

    #[test]
    fn test_left_to_right_chaining_no_precedence() {
        // 2 + 3 * 4 evaluates as (2 + 3) * 4 = 20, not 2 + 12.
        let state = run(&[
            digit('2'),
            op(Operator::Add),
            digit('3'),
            op(Operator::Multiply),
            digit('4'),
            Action::EqualsPressed,
        ]);
        assert_eq!(state.display, "20");
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.history()[0].calculation, "5 * 4 = 20");
    }

    #[test]
    fn test_operator_stashes_equation() {
        let state = run(&[digit('9'), op(Operator::Divide)]);
        assert_eq!(state.equation, "9 / ");
        assert_eq!(state.display, "9");
        assert!(state.waiting_for_new_value);
    }

    #[test]
    fn test_equals_without_pending_is_noop() {
        let before = run(&[digit('4'), digit('2')]);
        let after = apply(&before, &Action::EqualsPressed);
        assert_eq!(before, after);
    }

    #[test]
    fn test_division_by_zero_sets_error_keeps_equation() {
        let state = run(&[digit('5'), op(Operator::Divide), digit('0'), Action::EqualsPressed]);
        assert_eq!(state.display, ERROR_DISPLAY);
        assert_eq!(state.error, Some(CalcError::DivisionByZero));
        // Not restashed: the pending equation is untouched.
        assert_eq!(state.equation, "5 / ");
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_chained_operator_failure_does_not_restash() {
        let state = run(&[
            digit('5'),
            op(Operator::Divide),
            digit('0'),
            op(Operator::Add),
        ]);
        assert_eq!(state.display, ERROR_DISPLAY);
        assert_eq!(state.error, Some(CalcError::DivisionByZero));
        assert_eq!(state.equation, "5 / ");
    }

    #[test]
    fn test_error_clears_on_next_digit() {
        let failed = run(&[digit('5'), op(Operator::Divide), digit('0'), Action::EqualsPressed]);
        let recovered = apply(&failed, &digit('7'));
        assert_eq!(recovered.display, "7");
        assert!(recovered.error.is_none());
    }

    #[test]
    fn test_backspace_clears_error() {
        let failed = run(&[digit('5'), op(Operator::Divide), digit('0'), Action::EqualsPressed]);
        let recovered = apply(&failed, &Action::Backspace);
        assert_eq!(recovered.display, "0");
        assert!(recovered.error.is_none());
    }

    #[test]
    fn test_function_call_records_history() {
        let state = apply(
            &CalculatorState::initial(),
            &Action::FunctionCall {
                function: Function::Sqrt,
                value: 9.0,
            },
        );
        assert_eq!(state.display, "3");
        assert!(state.waiting_for_new_value);
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.history()[0].calculation, "sqrt(9) = 3");
    }

    #[test]
    fn test_sin_of_90_degrees_is_one() {
        let state = apply(
            &CalculatorState::initial(),
            &Action::FunctionCall {
                function: Function::Sin,
                value: 90.0,
            },
        );
        assert_eq!(state.display, "1");
    }

    #[test]
    fn test_sqrt_domain_error_appends_no_history() {
        let state = apply(
            &CalculatorState::initial(),
            &Action::FunctionCall {
                function: Function::Sqrt,
                value: -1.0,
            },
        );
        assert_eq!(state.display, ERROR_DISPLAY);
        assert!(matches!(state.error, Some(CalcError::Domain(_))));
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_clear_all_is_idempotent() {
        let dirty = run(&[digit('8'), op(Operator::Add), digit('1')]);
        let once = apply(&dirty, &Action::ClearAll);
        let twice = apply(&once, &Action::ClearAll);
        assert_eq!(once, twice);
        assert_eq!(once.display, "0");
        assert_eq!(once.equation, "");
        assert!(!once.waiting_for_new_value);
        assert!(once.error.is_none());
        // Mode and preferences survive a clear.
        assert_eq!(once.mode, dirty.mode);
        assert_eq!(once.preferences, dirty.preferences);
    }

    #[test]
    fn test_clear_entry_keeps_equation() {
        let state = run(&[digit('6'), op(Operator::Multiply), digit('7'), Action::ClearEntry]);
        assert_eq!(state.display, "0");
        assert_eq!(state.equation, "6 * ");
    }

    #[test]
    fn test_backspace_floors_at_zero() {
        let mut state = run(&[digit('5')]);
        for _ in 0..3 {
            state = apply(&state, &Action::Backspace);
            assert!(!state.display.is_empty());
        }
        assert_eq!(state.display, "0");
    }

    #[test]
    fn test_backspace_never_leaves_bare_minus() {
        let negative = run(&[
            digit('1'),
            op(Operator::Subtract),
            digit('3'),
            Action::EqualsPressed,
        ]);
        assert_eq!(negative.display, "-2");
        let state = apply(&negative, &Action::Backspace);
        assert_eq!(state.display, "0");
    }

    #[test]
    fn test_determinism() {
        let state = run(&[digit('2'), op(Operator::Add), digit('3')]);
        let a = apply(&state, &Action::EqualsPressed);
        let b = apply(&state, &Action::EqualsPressed);
        // Identical except for history entry id/timestamp metadata.
        assert_eq!(a.display, b.display);
        assert_eq!(a.equation, b.equation);
        assert_eq!(a.waiting_for_new_value, b.waiting_for_new_value);
        assert_eq!(a.error, b.error);
        assert_eq!(a.history().len(), b.history().len());
        assert_eq!(a.history()[0].calculation, b.history()[0].calculation);
    }

    #[test]
    fn test_malformed_digit_is_rejected() {
        let before = run(&[digit('4')]);
        let after = apply(&before, &digit('x'));
        assert_eq!(before, after);
    }

    #[test]
    fn test_mode_change_preserving_state() {
        let before = run(&[digit('7'), op(Operator::Add)]);
        let after = apply(
            &before,
            &Action::ModeChange {
                mode: CalculatorMode::Basic,
                preserve_state: true,
            },
        );
        assert_eq!(after.mode, CalculatorMode::Basic);
        assert_eq!(after.display, "7");
        assert_eq!(after.equation, "7 + ");
    }

    #[test]
    fn test_mode_change_resetting_state() {
        let before = run(&[
            digit('2'),
            op(Operator::Add),
            digit('3'),
            Action::EqualsPressed,
            Action::SetPreferences(PreferencesUpdate {
                precision: Some(6),
                ..Default::default()
            }),
        ]);
        let after = apply(
            &before,
            &Action::ModeChange {
                mode: CalculatorMode::Basic,
                preserve_state: false,
            },
        );
        assert_eq!(after.mode, CalculatorMode::Basic);
        assert_eq!(after.display, "0");
        assert!(after.history().is_empty());
        // Preferences survive the reset.
        assert_eq!(after.preferences.precision, 6);
    }

    #[test]
    fn test_history_clear() {
        let before = run(&[digit('2'), op(Operator::Add), digit('3'), Action::EqualsPressed]);
        assert_eq!(before.history().len(), 1);
        let after = apply(
            &before,
            &Action::HistoryAction {
                action: HistoryOp::Clear,
            },
        );
        assert!(after.history().is_empty());
        assert_eq!(after.display, before.display);
    }

    #[test]
    fn test_undo_redo_are_noops() {
        let before = run(&[digit('2'), op(Operator::Add), digit('3'), Action::EqualsPressed]);
        for op in [HistoryOp::Undo, HistoryOp::Redo] {
            let after = apply(&before, &Action::HistoryAction { action: op });
            assert_eq!(before, after);
        }
    }

    #[test]
    fn test_history_appends_newest_last() {
        let state = run(&[
            digit('1'),
            op(Operator::Add),
            digit('1'),
            Action::EqualsPressed,
            op(Operator::Add),
            digit('2'),
            Action::EqualsPressed,
        ]);
        assert_eq!(state.history().len(), 2);
        assert_eq!(state.history()[0].calculation, "1 + 1 = 2");
        assert_eq!(state.history()[1].calculation, "2 + 2 = 4");
    }

    #[test]
    fn test_precision_preference_affects_formatting() {
        let state = run(&[
            Action::SetPreferences(PreferencesUpdate {
                precision: Some(3),
                ..Default::default()
            }),
            digit('1'),
            digit('0'),
            op(Operator::Divide),
            digit('3'),
            Action::EqualsPressed,
        ]);
        assert_eq!(state.display, "3.33");
    }

    #[test]
    fn test_result_feeds_next_calculation() {
        // After equals, the result is the left operand of the next operator.
        let state = run(&[
            digit('2'),
            op(Operator::Add),
            digit('3'),
            Action::EqualsPressed,
            op(Operator::Multiply),
            digit('2'),
            Action::EqualsPressed,
        ]);
        assert_eq!(state.display, "10");
        assert_eq!(state.history().len(), 2);
    }
}
