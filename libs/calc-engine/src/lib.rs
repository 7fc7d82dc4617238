//! calc-engine - Calculator state engine
//!
//! Interprets a sequence of discrete user actions into a consistent display
//! state: digit and decimal entry, left-to-right two-operand arithmetic,
//! scientific functions, precision formatting, and an append-only history of
//! past calculations.
//!
//! # Design
//!
//! - **Pure reducer**: [`apply`] is a total function from `(state, action)`
//!   to the next state. It never panics; arithmetic and domain failures are
//!   captured into the state's `error` field with the `"Error"` sentinel
//!   display.
//! - **Immutable snapshots**: every action produces a new
//!   [`CalculatorState`]; nothing is mutated in place.
//! - **External resolution**: [`resolve_equals`] and [`resolve_operator`]
//!   let a fallback-capable caller feed in a result computed elsewhere
//!   (e.g. by a remote evaluation service) without the engine ever seeing
//!   the remote path.
//!
//! # Actions
//!
//! | Action | Effect |
//! |--------|--------|
//! | `NUMBER_INPUT` | append a digit, or start a fresh operand |
//! | `DECIMAL_INPUT` | add the decimal point (at most one) |
//! | `OPERATOR_INPUT` | stash `operand op`, or chain-evaluate left to right |
//! | `FUNCTION_CALL` | unary scientific function, recorded in history |
//! | `EQUALS_PRESSED` | evaluate the pending operation, recorded in history |
//! | `CLEAR_ALL` / `CLEAR_ENTRY` | reset everything / the entry buffer only |
//! | `BACKSPACE` | drop the last character, flooring at `"0"` |
//! | `MODE_CHANGE` | switch mode, optionally resetting state |
//! | `HISTORY_ACTION` | clear history (undo/redo accepted, not implemented) |
//! | `SET_PREFERENCES` | merge a partial preference update |
//!
//! # Example
//!
//! ```rust
//! use calc_engine::{apply, Action, CalculatorState, Operator};
//!
//! let state = CalculatorState::initial();
//! let state = apply(&state, &Action::NumberInput { digit: '2' });
//! let state = apply(&state, &Action::OperatorInput { operator: Operator::Add });
//! let state = apply(&state, &Action::NumberInput { digit: '3' });
//! let state = apply(&state, &Action::EqualsPressed);
//!
//! assert_eq!(state.display, "5");
//! assert_eq!(state.history().len(), 1);
//! assert_eq!(state.history()[0].calculation, "2 + 3 = 5");
//! ```

pub mod action;
pub mod error;
pub mod evaluator;
pub mod format;
pub mod reducer;
pub mod state;

// Re-exports for convenience
pub use action::{Action, Function, HistoryOp, Operator};
pub use error::{CalcError, Result, ERROR_DISPLAY};
pub use evaluator::{evaluate, evaluate_function};
pub use format::format_result;
pub use reducer::{apply, resolve_equals, resolve_operator};
pub use state::{
    CalculationEntry, CalculatorMode, CalculatorState, PreferencesUpdate, Theme, UserPreferences,
};
