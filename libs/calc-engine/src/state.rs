//! Calculator state snapshot and history records.
//!
//! The state is an immutable value: every action produces a new snapshot
//! from the previous one, so callers can hold on to old snapshots freely.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::action::Operator;
use crate::error::CalcError;

/// Calculator mode. Selects which function set the surface exposes; it does
/// not change arithmetic semantics. `Programmer` is carried but has no
/// behavior of its own yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculatorMode {
    Basic,
    #[default]
    Scientific,
    Programmer,
}

/// Display theme preference. Only carried through; rendering is the
/// caller's concern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    Auto,
}

/// User preferences. Only `precision` affects the engine (output formatting).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub default_mode: CalculatorMode,
    pub theme: Theme,
    pub precision: u32,
    pub sound_enabled: bool,
    pub keyboard_shortcuts: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            default_mode: CalculatorMode::Scientific,
            theme: Theme::Auto,
            precision: 10,
            sound_enabled: false,
            keyboard_shortcuts: true,
        }
    }
}

/// Partial preference update merged by `SET_PREFERENCES`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_mode: Option<CalculatorMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyboard_shortcuts: Option<bool>,
}

impl UserPreferences {
    /// Merge a partial update, keeping existing values for absent fields.
    pub fn merged(&self, update: &PreferencesUpdate) -> Self {
        Self {
            default_mode: update.default_mode.unwrap_or(self.default_mode),
            theme: update.theme.unwrap_or(self.theme),
            precision: update.precision.unwrap_or(self.precision),
            sound_enabled: update.sound_enabled.unwrap_or(self.sound_enabled),
            keyboard_shortcuts: update
                .keyboard_shortcuts
                .unwrap_or(self.keyboard_shortcuts),
        }
    }
}

/// One recorded calculation. Immutable once created; only the engine
/// creates these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationEntry {
    /// Unique id, never reused.
    pub id: Uuid,
    /// Human-readable expression, e.g. `2 + 3 = 5` or `sqrt(9) = 3`.
    pub calculation: String,
    /// Formatted result string.
    pub result: String,
    /// Creation instant.
    pub timestamp: DateTime<Utc>,
    /// Mode that was active when the entry was recorded.
    pub mode: CalculatorMode,
}

impl CalculationEntry {
    pub(crate) fn new(calculation: String, result: String, mode: CalculatorMode) -> Self {
        Self {
            id: Uuid::new_v4(),
            calculation,
            result,
            timestamp: Utc::now(),
            mode,
        }
    }
}

/// The calculator state. Replaced, never mutated in place, on every action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Current entry buffer. Always a valid decimal number or the error
    /// sentinel; never empty.
    pub display: String,
    /// Pending left operand and operator as `"<number> <op> "`, or empty
    /// when no operation is stashed.
    pub equation: String,
    /// When set, the next digit starts a fresh operand instead of appending.
    pub waiting_for_new_value: bool,
    /// Past calculations, append-only, newest last. Truncated views
    /// ("keep last N") are a presentation concern.
    pub(crate) history: Vec<CalculationEntry>,
    pub mode: CalculatorMode,
    pub preferences: UserPreferences,
    /// Cause of the last failed action; cleared by the next successful one.
    pub error: Option<CalcError>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::initial()
    }
}

impl CalculatorState {
    /// Initial state: display `"0"`, no pending equation, empty history.
    pub fn initial() -> Self {
        Self::with_mode(CalculatorMode::default(), UserPreferences::default())
    }

    pub(crate) fn with_mode(mode: CalculatorMode, preferences: UserPreferences) -> Self {
        Self {
            display: "0".to_string(),
            equation: String::new(),
            waiting_for_new_value: false,
            history: Vec::new(),
            mode,
            preferences,
            error: None,
        }
    }

    /// Current entry buffer parsed as a number. The error sentinel and
    /// anything else unparsable count as 0.
    pub fn display_value(&self) -> f64 {
        self.display.parse().unwrap_or(0.0)
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Ordered, read-only view of past calculations, newest last.
    pub fn history(&self) -> &[CalculationEntry] {
        &self.history
    }

    /// Pending left operand and operator, if an operation is stashed.
    pub fn pending_operation(&self) -> Option<(f64, Operator)> {
        let mut parts = self.equation.split_whitespace();
        let operand: f64 = parts.next()?.parse().ok()?;
        let operator = Operator::from_symbol(parts.next()?).ok()?;
        Some((operand, operator))
    }
}
